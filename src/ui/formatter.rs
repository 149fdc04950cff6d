//! Pure formatting functions for diagnostic output.
//!
//! Everything here builds strings; the only I/O is [display_error], which
//! writes one line to stderr.

use console::Style;

/// Severity of a diagnostic line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Debug,
}

impl LogLevel {
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO: ",
            LogLevel::Debug => "DEBUG: ",
        }
    }

    fn style(&self) -> Style {
        let style = match self {
            LogLevel::Info => Style::new().green(),
            LogLevel::Debug => Style::new().cyan(),
        };
        style.for_stderr()
    }
}

/// Timestamp in the `YYYY/MM/DD HH:MM:SS` form used for log lines.
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y/%m/%d %H:%M:%S").to_string()
}

/// Format a log line as `<PREFIX><timestamp> <message>`.
///
/// With `color` off the prefix is plain text; with it on, styling still
/// honours console's terminal detection for stderr.
pub fn format_log_line(level: LogLevel, color: bool, timestamp: &str, message: &str) -> String {
    if color {
        format!(
            "{}{} {}",
            level.style().apply_to(level.prefix()),
            timestamp,
            message
        )
    } else {
        format!("{}{} {}", level.prefix(), timestamp, message)
    }
}

/// Format an error message, red when color is enabled.
pub fn format_error(message: &str, color: bool) -> String {
    if color {
        format!(
            "{} {}",
            Style::new().red().for_stderr().apply_to("ERROR:"),
            message
        )
    } else {
        format!("ERROR: {}", message)
    }
}

/// Print an error message to stderr.
pub fn display_error(message: &str, color: bool) {
    eprintln!("{}", format_error(message, color));
}
