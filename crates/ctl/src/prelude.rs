//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use fdist_ctl::prelude::*;
//!
//! let params = SimParams::new(100, 15, 0.05, 25).with_mutation(MutationModel::Stepwise);
//! assert_eq!(params.clamped_fst(), 0.05);
//! ```

pub use crate::calibrate::{force_fst, FstSimulator, DEFAULT_LIMIT, DEFAULT_TRY_RUNS};
pub use crate::controller::{DatacalSummary, FdistController};
pub use crate::errors::CtlError;
pub use crate::params::{MutationModel, SimParams, DEFAULT_NUM_SIMS};
pub use crate::suite::FdistSuite;
