pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use error::{DescribeError, Result};

/// Version reported by `describe --version`
pub const DESCRIBE_VERSION: &str = "0.4";

/// Version reported by `version-check --version`
pub const VERSION_CHECK_VERSION: &str = "0.2";
