//! Locating and invoking the suite binaries.
//!
//! Every tool in the suite follows the same calling convention: it is run
//! inside a working directory holding its fixed-name input files, reads a
//! small command file on stdin, and writes its report to stdout. Invocation
//! is fully synchronous; each call blocks until the tool exits. There is no
//! timeout and no cancellation, and concurrent runs sharing a working
//! directory would clobber each other's fixed-name files.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{info, warn};

use crate::errors::{CtlError, Result};

#[cfg(windows)]
const EXE_SUFFIX: &str = ".exe";
#[cfg(not(windows))]
const EXE_SUFFIX: &str = "";

/// The installed fdist suite: where its binaries live.
#[derive(Debug, Clone, Default)]
pub struct FdistSuite {
    dir: Option<PathBuf>,
}

impl FdistSuite {
    /// Suite resolved through `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Suite installed in a specific directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Path used to launch a tool: the bare name when no installation
    /// directory was given, otherwise the name joined onto it. Windows
    /// builds of the suite carry an `.exe` suffix.
    pub fn tool_path(&self, tool: &str) -> PathBuf {
        let name = format!("{tool}{EXE_SUFFIX}");
        match &self.dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    /// Run a tool to completion with stdin and stdout redirected to files.
    ///
    /// Spawn failures are hard errors. A nonzero exit status is only
    /// logged: the suite's tools are not reliable about exit codes, so
    /// whether a run worked is decided by parsing what it wrote.
    pub fn run_redirected(
        &self,
        tool: &str,
        data_dir: &Path,
        stdin_file: &Path,
        stdout_file: &Path,
    ) -> Result<()> {
        let input = File::open(stdin_file)?;
        let output = File::create(stdout_file)?;

        info!(tool, data_dir = %data_dir.display(), "running suite tool");

        let status = Command::new(self.tool_path(tool))
            .current_dir(data_dir)
            .stdin(Stdio::from(input))
            .stdout(Stdio::from(output))
            .status()
            .map_err(|source| CtlError::Spawn {
                tool: tool.to_string(),
                source,
            })?;

        if !status.success() {
            warn!(tool, %status, "suite tool exited with nonzero status");
        }

        Ok(())
    }
}
