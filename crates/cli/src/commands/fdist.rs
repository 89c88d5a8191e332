use anyhow::{Context, Result};
use fdist_ctl::FdistController;
use std::path::Path;

use crate::args::SimArgs;
use crate::printing::print_sim_params;

pub fn run(ctl: &FdistController, args: &SimArgs, data_dir: &Path) -> Result<()> {
    println!("🧬 fdistctl - Fst Simulation (fdist2)");
    println!("============================================");

    let params = args.to_params();
    print_sim_params(&params);

    println!("\nRunning {} simulations (this can take a while)...", params.num_sims);
    let fst = ctl
        .run_fdist(&params, data_dir)
        .context("fdist2 run failed")?;

    println!("✓ Observed average Fst: {fst}");
    Ok(())
}
