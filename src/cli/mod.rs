//! Workflow orchestration behind the two binaries
//!
//! Argument parsing and process exit codes stay in `src/bin/`; these modules
//! return values so the workflows can be driven from tests.

pub mod check;
pub mod describe;

pub use check::{check, CheckOptions, CheckOutcome};
pub use describe::{prepare, Command, Describer, Settings};
