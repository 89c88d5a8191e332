mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fdist_ctl::FdistController;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use args::{ForceFstArgs, SimArgs};
use commands::{cplot, datacal, fdist, force_fst, pv};

/// fdistctl: a driver for the fdist2 population-genetics suite
///
/// Wraps the external `datacal`, `fdist2`, `cplot` and `pv` binaries:
/// writes their fixed-name input files, runs them in a working directory,
/// and parses their text reports. All runs are synchronous and the
/// working directory must not be shared between concurrent invocations.
#[derive(Parser, Debug)]
#[command(name = "fdistctl")]
#[command(author, version, about = "Drives the fdist2 Fst-simulation suite", long_about = None)]
struct Cli {
    /// Directory holding the fdist binaries
    ///
    /// If not given, the binaries are resolved through PATH.
    #[arg(long, global = true)]
    fdist_dir: Option<PathBuf>,

    /// Working directory for the suite's fixed-name input/output files
    #[arg(short = 'd', long, global = true, default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize an empirical data set (observed Fst, sample size).
    Datacal,

    /// Run one Fst simulation.
    ///
    /// A full-size run can take a long time.
    Fdist(SimArgs),

    /// Calibrate the simulator against a target Fst.
    ///
    /// Bisects over the requested Fst, probing with cheap runs, until the
    /// observed average Fst converges on the target; then does one
    /// full-size run.
    ForceFst(ForceFstArgs),

    /// Compute confidence-interval lines from a simulated distribution.
    Cplot {
        /// Confidence-interval level
        #[arg(short, long, default_value_t = defaults::CI)]
        ci: f64,

        /// Write the rows as CSV to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute per-locus p-values from a simulated distribution.
    Pv {
        /// Output file for the p-value table
        #[arg(short, long, default_value = defaults::PV_OUT_FILE)]
        out_file: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fdist_ctl=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let ctl = match &cli.fdist_dir {
        Some(dir) => FdistController::with_dir(dir),
        None => FdistController::new(),
    };

    match &cli.command {
        Commands::Datacal => datacal::run(&ctl, &cli.data_dir)?,
        Commands::Fdist(args) => fdist::run(&ctl, args, &cli.data_dir)?,
        Commands::ForceFst(args) => force_fst::run(&ctl, args, &cli.data_dir)?,
        Commands::Cplot { ci, output } => {
            cplot::run(&ctl, *ci, output.as_ref(), &cli.data_dir)?
        }
        Commands::Pv { out_file } => pv::run(&ctl, out_file, &cli.data_dir)?,
    }

    Ok(())
}
