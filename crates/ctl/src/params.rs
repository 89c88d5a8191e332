//! Simulation parameters for a single `fdist2` run.
//!
//! `fdist2` reads its configuration from a fixed-name, fixed-order text file
//! (`fdist_params2.dat`, one value per line). This module owns that wire
//! format and the parameter bounds the suite tolerates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest requested Fst ever passed to `fdist2`; zero makes it run forever.
pub const FST_FLOOR: f64 = 0.001;
/// Highest requested Fst ever passed to `fdist2`.
pub const FST_CEIL: f64 = 0.899;

/// Default number of simulations for a full-size run.
pub const DEFAULT_NUM_SIMS: u32 = 20_000;

/// Mutation model used by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MutationModel {
    /// Infinite-alleles model (the suite's default).
    #[default]
    InfiniteAlleles,
    /// Stepwise mutation model.
    Stepwise,
}

impl MutationModel {
    /// Numeric flag as written into `fdist_params2.dat`.
    pub fn flag(&self) -> u8 {
        match self {
            MutationModel::InfiniteAlleles => 0,
            MutationModel::Stepwise => 1,
        }
    }
}

impl fmt::Display for MutationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationModel::InfiniteAlleles => write!(f, "infinite-alleles"),
            MutationModel::Stepwise => write!(f, "stepwise"),
        }
    }
}

impl FromStr for MutationModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "infinite-alleles" | "infinite" | "ia" | "0" => Ok(MutationModel::InfiniteAlleles),
            "stepwise" | "smm" | "1" => Ok(MutationModel::Stepwise),
            other => Err(format!(
                "unknown mutation model '{other}' (expected 'infinite-alleles' or 'stepwise')"
            )),
        }
    }
}

/// Parameters for one `fdist2` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    /// Number of populations in the simulated metapopulation.
    pub npops: u32,
    /// Number of populations actually sampled.
    pub nsamples: u32,
    /// Requested (expected) Fst.
    pub fst: f64,
    /// Sample size per population.
    pub sample_size: u32,
    /// Mutation model flag.
    pub mutation: MutationModel,
    /// Number of simulated loci for a full-size run.
    pub num_sims: u32,
}

impl SimParams {
    /// Create parameters with the default mutation model and run size.
    pub fn new(npops: u32, nsamples: u32, fst: f64, sample_size: u32) -> Self {
        Self {
            npops,
            nsamples,
            fst,
            sample_size,
            mutation: MutationModel::default(),
            num_sims: DEFAULT_NUM_SIMS,
        }
    }

    /// Same parameters with a different mutation model.
    pub fn with_mutation(mut self, mutation: MutationModel) -> Self {
        self.mutation = mutation;
        self
    }

    /// Same parameters with a different full-run simulation count.
    pub fn with_num_sims(mut self, num_sims: u32) -> Self {
        self.num_sims = num_sims;
        self
    }

    /// Same parameters with a different requested Fst.
    ///
    /// Used by the calibration loop, which holds raw (unclamped) candidate
    /// values; clamping happens only when the wire file is rendered.
    pub fn with_fst(mut self, fst: f64) -> Self {
        self.fst = fst;
        self
    }

    /// Requested Fst clamped to the range the suite tolerates.
    pub fn clamped_fst(&self) -> f64 {
        self.fst.clamp(FST_FLOOR, FST_CEIL)
    }

    /// Render the `fdist_params2.dat` wire format: one value per line, in
    /// the fixed order npops, nsamples, fst, sample_size, mutation flag,
    /// num_sims.
    pub fn render_params_file(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}\n{}\n{}\n",
            self.npops,
            self.nsamples,
            self.clamped_fst(),
            self.sample_size,
            self.mutation.flag(),
            self.num_sims
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_model_flags() {
        assert_eq!(MutationModel::InfiniteAlleles.flag(), 0);
        assert_eq!(MutationModel::Stepwise.flag(), 1);
    }

    #[test]
    fn test_mutation_model_from_str() {
        assert_eq!(
            "stepwise".parse::<MutationModel>().unwrap(),
            MutationModel::Stepwise
        );
        assert_eq!(
            "infinite-alleles".parse::<MutationModel>().unwrap(),
            MutationModel::InfiniteAlleles
        );
        assert_eq!(
            "0".parse::<MutationModel>().unwrap(),
            MutationModel::InfiniteAlleles
        );
        assert!("jukes-cantor".parse::<MutationModel>().is_err());
    }

    #[test]
    fn test_fst_clamping() {
        let low = SimParams::new(10, 5, -0.2, 30);
        assert_eq!(low.clamped_fst(), FST_FLOOR);

        let high = SimParams::new(10, 5, 0.95, 30);
        assert_eq!(high.clamped_fst(), FST_CEIL);

        let exact = SimParams::new(10, 5, 0.9, 30);
        assert_eq!(exact.clamped_fst(), FST_CEIL);

        let ok = SimParams::new(10, 5, 0.1, 30);
        assert_eq!(ok.clamped_fst(), 0.1);
    }

    #[test]
    fn test_render_params_file() {
        let params = SimParams::new(100, 15, 0.05, 25)
            .with_mutation(MutationModel::Stepwise)
            .with_num_sims(40_000);
        assert_eq!(
            params.render_params_file(),
            "100\n15\n0.05\n25\n1\n40000\n"
        );
    }

    #[test]
    fn test_render_clamps_out_of_range_fst() {
        let params = SimParams::new(100, 15, 1.5, 25);
        let rendered = params.render_params_file();
        let fst_line = rendered.lines().nth(2).unwrap();
        assert_eq!(fst_line, "0.899");
    }
}
