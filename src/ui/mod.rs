//! Diagnostic output.
//!
//! - `formatter` - Pure formatting functions
//! - This module - [Logger], the logging configuration passed to each component

pub mod formatter;

pub use formatter::{display_error, LogLevel};

/// Logging configuration built once from the command-line flags.
///
/// Diagnostics go to stderr and only when debugging is enabled, so stdout
/// carries nothing but the tool's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Logger {
    pub debug: bool,
    pub color: bool,
}

impl Logger {
    pub fn new(debug: bool, color: bool) -> Self {
        Logger { debug, color }
    }

    /// Logger that never writes anything
    pub fn silent() -> Self {
        Logger::default()
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message.as_ref());
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message.as_ref());
    }

    /// Print an error regardless of the debug setting.
    pub fn error(&self, message: impl AsRef<str>) {
        display_error(message.as_ref(), self.color);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if self.debug {
            eprintln!(
                "{}",
                formatter::format_log_line(level, self.color, &formatter::timestamp(), message)
            );
        }
    }
}
