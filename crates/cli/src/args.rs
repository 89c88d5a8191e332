use clap::Args;
use fdist_ctl::{MutationModel, SimParams};

use crate::defaults;

/// Parameters shared by every subcommand that runs the simulator.
#[derive(Args, Debug)]
pub struct SimArgs {
    /// Number of populations in the simulated metapopulation
    #[arg(short = 'p', long)]
    pub npops: u32,

    /// Number of populations sampled
    #[arg(short = 's', long)]
    pub nsamples: u32,

    /// Target (expected) Fst
    ///
    /// Values outside (0, 0.9) are clamped to [0.001, 0.899] before the
    /// simulator sees them.
    #[arg(short = 'f', long)]
    pub fst: f64,

    /// Sample size per population
    #[arg(short = 'z', long)]
    pub sample_size: u32,

    /// Mutation model (infinite-alleles or stepwise)
    #[arg(short = 'm', long, default_value = "infinite-alleles")]
    pub mutation: MutationModel,

    /// Number of simulations for the full-size run
    #[arg(short = 'n', long, default_value_t = defaults::NUM_SIMS)]
    pub num_sims: u32,
}

impl SimArgs {
    pub fn to_params(&self) -> SimParams {
        SimParams::new(self.npops, self.nsamples, self.fst, self.sample_size)
            .with_mutation(self.mutation)
            .with_num_sims(self.num_sims)
    }
}

/// Extra knobs for the calibration search.
#[derive(Args, Debug)]
pub struct ForceFstArgs {
    #[command(flatten)]
    pub sim: SimArgs,

    /// Simulations per low-fidelity calibration probe
    #[arg(long, default_value_t = defaults::TRY_RUNS)]
    pub try_runs: u32,

    /// Convergence tolerance on the observed Fst
    #[arg(long, default_value_t = defaults::LIMIT)]
    pub limit: f64,
}
