//! # fdist-ctl
//!
//! Controller library for the `fdist2` population-genetics simulation suite.
//! The suite's four command-line tools (`datacal`, `fdist2`, `cplot`, `pv`)
//! are driven as opaque external programs: each run writes the fixed-name
//! input files the tool expects, invokes it with redirected stdin/stdout in
//! a caller-chosen working directory, and scrapes its text output.
//!
//! The one piece of real logic here is [`calibrate::force_fst`], a bisection
//! search over the requested-Fst input that drives the simulator's observed
//! average Fst to a target value.

pub mod calibrate;
pub mod controller;
pub mod errors;
pub mod params;
pub mod prelude;
pub mod suite;

pub use controller::{DatacalSummary, FdistController};
pub use errors::CtlError;
pub use params::{MutationModel, SimParams};
