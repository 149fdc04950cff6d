use crate::error::{DescribeError, Result};
use crate::git::{DescribeQuery, GitCommand};
use std::collections::HashMap;

/// Mock git for testing without a repository or git binary.
///
/// Queries without canned output fail the way git does outside a repository.
pub struct MockGit {
    remotes: Option<String>,
    describes: HashMap<DescribeQuery, String>,
}

impl MockGit {
    /// Create a mock where every query fails
    pub fn new() -> Self {
        MockGit {
            remotes: None,
            describes: HashMap::new(),
        }
    }

    /// Set the output of `git remote -v`
    pub fn with_remotes(mut self, output: impl Into<String>) -> Self {
        self.remotes = Some(output.into());
        self
    }

    /// Set the output of a describe query
    pub fn with_describe(mut self, query: DescribeQuery, output: impl Into<String>) -> Self {
        self.describes.insert(query, output.into());
        self
    }
}

impl Default for MockGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCommand for MockGit {
    fn remote_listing(&self) -> Result<String> {
        self.remotes
            .clone()
            .ok_or_else(|| DescribeError::git("git remote -v", "fatal: not a git repository"))
    }

    fn describe(&self, query: &DescribeQuery, tag_match: &str) -> Result<String> {
        self.describes.get(query).cloned().ok_or_else(|| {
            DescribeError::git(
                format!("git {}", query.to_args(tag_match).join(" ")),
                "fatal: No names found, cannot describe anything.",
            )
        })
    }
}
