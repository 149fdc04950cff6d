use thiserror::Error;

/// Unified error type for describe and version-check operations
#[derive(Error, Debug)]
pub enum DescribeError {
    #[error("Git command `{command}` failed: {stderr}")]
    Git { command: String, stderr: String },

    #[error("No command provided. Usage: describe module|project|version|release|full")]
    MissingCommand,

    #[error("Unknown command '{0}'. Usage: describe module|project|version|release|full")]
    UnknownCommand(String),

    #[error("Unknown versioning strategy '{0}', expected tag, abbrev or rank")]
    UnknownStrategy(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DescribeError>;

impl DescribeError {
    /// Create a git error from the command line that was run and its stderr
    pub fn git(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        DescribeError::Git {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DescribeError::Config(msg.into())
    }

    /// Create an unknown command error
    pub fn unknown_command(name: impl Into<String>) -> Self {
        DescribeError::UnknownCommand(name.into())
    }

    /// Create an unknown strategy error
    pub fn unknown_strategy(name: impl Into<String>) -> Self {
        DescribeError::UnknownStrategy(name.into())
    }
}
