//! Calibration of the simulator's requested-Fst input.
//!
//! `fdist2` takes a *requested* Fst but the *observed* average Fst of the
//! simulated loci lands elsewhere. [`force_fst`] searches for the requested
//! value whose observed average converges on a target, by bisection over
//! the candidate-Fst bracket, probing with cheap low-fidelity runs and
//! finishing with one full-size run.
//!
//! Convergence relies on the simulator's observed average being monotonic
//! in the requested input. That is assumed, not verified: a non-monotonic
//! simulator could make the search oscillate or settle on a wrong answer
//! without any error being raised.

use std::path::Path;
use tracing::debug;

use crate::controller::FdistController;
use crate::errors::Result;
use crate::params::SimParams;

/// Default number of simulations per low-fidelity calibration probe.
pub const DEFAULT_TRY_RUNS: u32 = 5_000;
/// Default convergence tolerance on the observed Fst.
pub const DEFAULT_LIMIT: f64 = 0.001;

/// Seam between the search loop and the external simulator, so the loop is
/// testable without the binaries installed.
pub trait FstSimulator {
    /// Run `num_sims` simulations at the requested Fst in `params` and
    /// return the observed average Fst.
    fn simulate(&self, params: &SimParams, num_sims: u32, data_dir: &Path) -> Result<f64>;
}

impl FstSimulator for FdistController {
    fn simulate(&self, params: &SimParams, num_sims: u32, data_dir: &Path) -> Result<f64> {
        self.run_fdist(&params.with_num_sims(num_sims), data_dir)
    }
}

/// Bisect over the requested Fst until the simulator's observed average is
/// within `limit` of `params.fst`, then do one full-size run at
/// `params.num_sims` and return its observed Fst.
///
/// The bracket starts at `[0, 1]` and narrows on every probe. When it
/// collapses below `limit` on either side no candidate can do better, and
/// the full-size run happens at the best candidate found so far.
pub fn force_fst<S: FstSimulator>(
    sim: &S,
    params: &SimParams,
    data_dir: &Path,
    try_runs: u32,
    limit: f64,
) -> Result<f64> {
    let target = params.fst;
    let mut max_run_fst = 1.0;
    let mut min_run_fst = 0.0;
    let mut current = target;

    loop {
        let probe = params.with_fst(current);
        let observed = sim.simulate(&probe, try_runs, data_dir)?;
        debug!(candidate = current, observed, target, "calibration probe");

        if (observed - target).abs() < limit {
            return sim.simulate(&probe, params.num_sims, data_dir);
        }

        if observed > target {
            max_run_fst = current;
            if current < min_run_fst + limit {
                // Bracket collapsed against the lower bound.
                debug!(lower = min_run_fst, "no candidate can do better");
                return sim.simulate(&probe, params.num_sims, data_dir);
            }
            current = (min_run_fst + current) / 2.0;
        } else {
            min_run_fst = current;
            if current > max_run_fst - limit {
                // Bracket collapsed against the upper bound.
                debug!(upper = max_run_fst, "no candidate can do better");
                return sim.simulate(&probe, params.num_sims, data_dir);
            }
            current = (max_run_fst + current) / 2.0;
        }
    }
}
