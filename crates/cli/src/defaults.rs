//! Shared default values for the CLI.
//! These mirror the suite's conventional run sizes.

/// Simulations per full-size run.
pub const NUM_SIMS: u32 = 20_000;

/// Simulations per low-fidelity calibration probe.
pub const TRY_RUNS: u32 = 5_000;

/// Convergence tolerance for the calibration search.
pub const LIMIT: f64 = 0.001;

/// Confidence-interval level for cplot.
pub const CI: f64 = 0.95;

/// Where pv leaves its p-value table.
pub const PV_OUT_FILE: &str = "probs.dat";
