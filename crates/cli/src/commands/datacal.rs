use anyhow::{Context, Result};
use fdist_ctl::FdistController;
use std::path::Path;

pub fn run(ctl: &FdistController, data_dir: &Path) -> Result<()> {
    println!("🧮 fdistctl - Empirical Data Summary (datacal)");
    println!("============================================\n");

    let summary = ctl
        .run_datacal(data_dir)
        .context("datacal run failed")?;

    println!("✓ Observed Fst: {}", summary.fst);
    println!("✓ Expected sample size: {}", summary.sample_size);
    Ok(())
}
