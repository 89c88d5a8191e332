use anyhow::{Context, Result};
use fdist_ctl::FdistController;
use std::fs;
use std::path::{Path, PathBuf};

use crate::printing::print_cplot_rows;

pub fn run(
    ctl: &FdistController,
    ci: f64,
    output: Option<&PathBuf>,
    data_dir: &Path,
) -> Result<()> {
    println!("📈 fdistctl - Confidence Intervals (cplot, CI {ci})");
    println!("============================================\n");

    let rows = ctl.run_cplot(ci, data_dir).context("cplot run failed")?;
    if rows.is_empty() {
        println!("⚠️  cplot produced no usable interval table (empty or unparsable out.cpl).");
        return Ok(());
    }

    match output {
        Some(path) => {
            let mut csv = String::new();
            for row in &rows {
                let cells: Vec<String> = row.iter().map(f64::to_string).collect();
                csv.push_str(&cells.join(","));
                csv.push('\n');
            }
            fs::write(path, csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Wrote {} interval rows to {}", rows.len(), path.display());
        }
        None => print_cplot_rows(&rows),
    }
    Ok(())
}
