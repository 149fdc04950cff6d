//! Domain logic - pure parsing and classification, independent of git

pub mod classify;
pub mod describe;
pub mod remote;
pub mod strategy;

pub use classify::{classify, BuildType, VersionKind};
pub use describe::DescribeOutput;
pub use strategy::VersioningStrategy;
