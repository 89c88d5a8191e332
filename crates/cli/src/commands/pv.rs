use anyhow::{Context, Result};
use fdist_ctl::FdistController;
use std::path::Path;

pub fn run(ctl: &FdistController, out_file: &str, data_dir: &Path) -> Result<()> {
    println!("🔎 fdistctl - Per-locus P-values (pv)");
    println!("============================================\n");

    let table = ctl.run_pv(out_file, data_dir).context("pv run failed")?;
    println!("✓ P-value table written to {}", table.display());
    Ok(())
}
