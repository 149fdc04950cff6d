use std::process::Command;

use crate::error::{DescribeError, Result};
use crate::git::{DescribeQuery, GitCommand};

/// Runs queries against the system `git` binary.
pub struct SystemGit {
    program: String,
}

impl SystemGit {
    /// Uses `git` from `PATH` in the current working directory.
    pub fn new() -> Self {
        SystemGit {
            program: "git".to_string(),
        }
    }

    /// Uses a different executable in place of `git`.
    pub fn with_program(program: impl Into<String>) -> Self {
        SystemGit {
            program: program.into(),
        }
    }

    fn run(&self, args: &[String]) -> Result<String> {
        let output = Command::new(&self.program).args(args).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DescribeError::git(
                format!("{} {}", self.program, args.join(" ")),
                stderr.trim(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCommand for SystemGit {
    fn remote_listing(&self) -> Result<String> {
        self.run(&["remote".to_string(), "-v".to_string()])
    }

    fn describe(&self, query: &DescribeQuery, tag_match: &str) -> Result<String> {
        self.run(&query.to_args(tag_match))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_io_error() {
        let git = SystemGit::with_program("git-describe-no-such-program");
        let err = git.remote_listing().unwrap_err();
        assert!(matches!(err, DescribeError::Io(_)));
    }

    #[test]
    fn test_describe_missing_program_is_error() {
        let git = SystemGit::with_program("git-describe-no-such-program");
        assert!(git
            .describe(&DescribeQuery::tag(), crate::git::DEFAULT_TAG_MATCH)
            .is_err());
    }
}
