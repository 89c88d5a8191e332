//! One wrapper per suite tool.
//!
//! Each wrapper prepares the tool's input files in the working directory,
//! runs it through [`FdistSuite`], and parses the rigid line-based numeric
//! text it leaves behind. File names and token positions are fixed by the
//! suite and are not configurable.

use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::errors::{CtlError, Result};
use crate::params::SimParams;
use crate::suite::FdistSuite;

/// Number of random seed integers `fdist2` expects in `INTFILE`.
const INTFILE_SEEDS: usize = 98;

/// Fixed-name files exchanged with `fdist2`.
const FDIST_STDIN: &str = "input.fd";
const FDIST_STDOUT: &str = "output.fd";
const FDIST_PARAMS: &str = "fdist_params2.dat";
const FDIST_INTFILE: &str = "INTFILE";

/// Fixed-name files exchanged with `cplot` and `pv`.
const SIMULATED_DIST: &str = "out.dat";
const CPLOT_OUT: &str = "out.cpl";

/// What `datacal` reports about an empirical data set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatacalSummary {
    /// Observed average Fst.
    pub fst: f64,
    /// Expected total sample size.
    pub sample_size: u32,
}

/// Driver for the fdist suite of external binaries.
#[derive(Debug, Clone, Default)]
pub struct FdistController {
    suite: FdistSuite,
}

impl FdistController {
    /// Controller resolving the binaries through `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller for a suite installed in `dir`.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            suite: FdistSuite::in_dir(dir),
        }
    }

    /// Run `datacal` on the data set already present in `data_dir` and
    /// report its observed Fst and expected sample size.
    pub fn run_datacal(&self, data_dir: &Path) -> Result<DatacalSummary> {
        let stdin_file = temp_in(data_dir)?;
        let stdout_file = temp_in(data_dir)?;
        fs::write(stdin_file.path(), "a\n")?;

        self.suite
            .run_redirected("datacal", data_dir, stdin_file.path(), stdout_file.path())?;

        let report = fs::read_to_string(stdout_file.path())?;
        parse_datacal_report(&report)
    }

    /// Run one `fdist2` simulation and return its observed average Fst.
    ///
    /// Writes the three fixed-name input files (`input.fd`,
    /// `fdist_params2.dat`, `INTFILE`), blocks until the simulator exits
    /// (full-size runs can take a long time), then scrapes `output.fd`
    /// and removes the transient stdin/stdout files.
    pub fn run_fdist(&self, params: &SimParams, data_dir: &Path) -> Result<f64> {
        let stdin_path = data_dir.join(FDIST_STDIN);
        let stdout_path = data_dir.join(FDIST_STDOUT);

        fs::write(&stdin_path, "y\n\n")?;
        fs::write(data_dir.join(FDIST_PARAMS), params.render_params_file())?;
        write_intfile(&data_dir.join(FDIST_INTFILE))?;

        self.suite
            .run_redirected("fdist2", data_dir, &stdin_path, &stdout_path)?;

        let report = fs::read_to_string(&stdout_path)?;
        let fst = parse_average_fst(&report);

        fs::remove_file(&stdin_path)?;
        fs::remove_file(&stdout_path)?;

        fst.ok_or(CtlError::MissingOutput {
            tool: "fdist2",
            what: "`average Fst` line",
        })
    }

    /// Run `cplot` against the simulated distribution in `out.dat` and
    /// return the confidence-interval rows it writes to `out.cpl`.
    ///
    /// Each row is the space-separated floats of one `out.cpl` line. If any
    /// line fails to parse the whole result is discarded and an empty Vec
    /// is returned.
    pub fn run_cplot(&self, ci: f64, data_dir: &Path) -> Result<Vec<Vec<f64>>> {
        let stdin_file = temp_in(data_dir)?;
        let stdout_file = temp_in(data_dir)?;
        fs::write(stdin_file.path(), format!("{SIMULATED_DIST} {CPLOT_OUT}\n{ci}\n"))?;

        self.suite
            .run_redirected("cplot", data_dir, stdin_file.path(), stdout_file.path())?;

        let table = fs::read_to_string(data_dir.join(CPLOT_OUT))?;
        Ok(parse_cplot_rows(&table))
    }

    /// Run `pv` to compute per-locus p-values against the simulated
    /// distribution in `out.dat`. The table lands in `out_file` inside
    /// `data_dir`; the returned path points at it.
    pub fn run_pv(&self, out_file: &str, data_dir: &Path) -> Result<PathBuf> {
        let stdin_file = temp_in(data_dir)?;
        let stdout_file = temp_in(data_dir)?;
        fs::write(
            stdin_file.path(),
            format!("data_fst_outfile {out_file} {SIMULATED_DIST}\n"),
        )?;

        self.suite
            .run_redirected("pv", data_dir, stdin_file.path(), stdout_file.path())?;

        Ok(data_dir.join(out_file))
    }
}

/// Transient stdin/stdout file inside the working directory, removed when
/// the handle drops.
fn temp_in(data_dir: &Path) -> Result<NamedTempFile> {
    Ok(NamedTempFile::new_in(data_dir)?)
}

/// Write the `INTFILE` random-seed file: 98 integers, one per line,
/// followed by a literal `8`.
fn write_intfile(path: &Path) -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut contents = String::new();
    for _ in 0..INTFILE_SEEDS {
        let seed: i32 = rng.gen();
        contents.push_str(&seed.to_string());
        contents.push('\n');
    }
    contents.push_str("8\n");
    fs::write(path, contents)?;
    Ok(())
}

/// Parse the two header lines of a `datacal` report: the 5th token of the
/// first line is the observed Fst, the 10th token of the second line the
/// expected sample size.
fn parse_datacal_report(report: &str) -> Result<DatacalSummary> {
    let mut lines = report.lines();

    let fst_line = lines.next().unwrap_or("");
    let fst = fst_line
        .split_whitespace()
        .nth(4)
        .and_then(|tok| tok.parse::<f64>().ok())
        .ok_or_else(|| CtlError::Parse {
            tool: "datacal",
            what: format!("Fst line: '{}'", fst_line.trim_end()),
        })?;

    let sample_line = lines.next().unwrap_or("");
    let sample_size = sample_line
        .split_whitespace()
        .nth(9)
        .and_then(|tok| tok.parse::<u32>().ok())
        .ok_or_else(|| CtlError::Parse {
            tool: "datacal",
            what: format!("sample-size line: '{}'", sample_line.trim_end()),
        })?;

    Ok(DatacalSummary { fst, sample_size })
}

/// Final token of the last `average Fst` line in an `fdist2` report, if any.
fn parse_average_fst(report: &str) -> Option<f64> {
    report
        .lines()
        .filter(|line| line.starts_with("average Fst"))
        .last()
        .and_then(|line| line.split_whitespace().last())
        .and_then(|tok| tok.parse::<f64>().ok())
}

/// Parse an `out.cpl` confidence-interval table. A single bad line voids
/// the whole table.
fn parse_cplot_rows(table: &str) -> Vec<Vec<f64>> {
    let mut rows = Vec::new();
    for line in table.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let row: Option<Vec<f64>> = line
            .split_whitespace()
            .map(|tok| tok.parse::<f64>().ok())
            .collect();
        match row {
            Some(row) => rows.push(row),
            None => return Vec::new(),
        }
    }
    rows
}
