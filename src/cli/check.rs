//! The `version-check` workflow

use crate::domain::{classify, VersionKind};
use crate::ui::Logger;

/// What to print for a valid version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckOptions {
    /// Print the category label (`--type`)
    pub show_type: bool,
    /// Print the CMake build type (`--build-type`)
    pub show_build_type: bool,
}

/// Result of checking one version string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub kind: Option<VersionKind>,
    /// Lines for stdout, in print order
    pub lines: Vec<String>,
}

impl CheckOutcome {
    pub fn is_valid(&self) -> bool {
        self.kind.is_some()
    }

    /// `0` for a valid version, `1` otherwise
    pub fn exit_code(&self) -> u8 {
        if self.is_valid() {
            0
        } else {
            1
        }
    }
}

/// Classify `version` and collect the requested output lines.
///
/// An invalid version produces no lines; only the exit code reports it.
pub fn check(version: &str, options: CheckOptions, log: &Logger) -> CheckOutcome {
    log.debug(format!("Checking version '{}'", version));
    let kind = classify(version);

    let mut lines = Vec::new();
    match kind {
        Some(kind) => {
            log.debug(format!("Version '{}' is {}", version, kind.label().to_lowercase()));
            if options.show_type {
                lines.push(kind.label().to_string());
            }
            if options.show_build_type {
                lines.push(kind.build_type().to_string());
            }
        }
        None => log.info(format!("Wrong version '{}'", version)),
    }

    CheckOutcome { kind, lines }
}
