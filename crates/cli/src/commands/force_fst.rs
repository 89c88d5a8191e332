use anyhow::{Context, Result};
use fdist_ctl::calibrate::{force_fst, FstSimulator};
use fdist_ctl::{FdistController, SimParams};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use crate::args::ForceFstArgs;
use crate::printing::print_sim_params;

/// Simulator wrapper that reports each calibration probe on a spinner.
struct ProbeProgress<'a> {
    inner: &'a FdistController,
    bar: &'a ProgressBar,
}

impl FstSimulator for ProbeProgress<'_> {
    fn simulate(
        &self,
        params: &SimParams,
        num_sims: u32,
        data_dir: &Path,
    ) -> fdist_ctl::errors::Result<f64> {
        self.bar
            .set_message(format!("probing Fst {:.4} ({num_sims} sims)", params.fst));
        let observed = self.inner.simulate(params, num_sims, data_dir)?;
        self.bar.inc(1);
        Ok(observed)
    }
}

pub fn run(ctl: &FdistController, args: &ForceFstArgs, data_dir: &Path) -> Result<()> {
    println!("🎯 fdistctl - Fst Calibration (bisection over fdist2)");
    println!("============================================");

    let params = args.sim.to_params();
    print_sim_params(&params);
    println!("  • Probe Simulations: {} [--try-runs]", args.try_runs);
    println!("  • Tolerance: {} [--limit]", args.limit);
    println!();

    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] probe #{pos} {msg}")
            .expect("static spinner template"),
    );
    bar.enable_steady_tick(Duration::from_millis(120));

    let sim = ProbeProgress { inner: ctl, bar: &bar };
    let observed = force_fst(&sim, &params, data_dir, args.try_runs, args.limit)
        .context("calibration search failed")?;

    bar.finish_and_clear();
    println!("✓ Converged. Observed average Fst: {observed}");
    if (observed - params.fst).abs() >= args.limit {
        println!(
            "⚠️  Final observation is {:.4} away from the target; the bracket collapsed \
             before the tolerance was met.",
            (observed - params.fst).abs()
        );
    }
    Ok(())
}
