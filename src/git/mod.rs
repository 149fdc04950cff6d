//! Git subprocess abstraction layer
//!
//! Both tools only ever consume the textual output of two git queries: the
//! remote listing (`git remote -v`) and a tag describe of `HEAD`. The
//! [GitCommand] trait narrows git down to exactly those two queries so the
//! parsing logic can be exercised without a repository.
//!
//! - [system::SystemGit]: runs the real `git` binary as a subprocess
//! - [mock::MockGit]: returns canned output for tests
//!
//! ```rust
//! # use git_describe::git::{DescribeQuery, GitCommand, MockGit};
//! let git = MockGit::new().with_describe(DescribeQuery::release(), "v1.2.3-5-gab");
//! assert_eq!(git.describe(&DescribeQuery::release(), "v[0-9]*").unwrap(), "v1.2.3-5-gab");
//! ```

pub mod mock;
pub mod system;

pub use mock::MockGit;
pub use system::SystemGit;

use crate::error::Result;

/// Default glob handed to `git describe --match`
pub const DEFAULT_TAG_MATCH: &str = "v[0-9]*";

/// Parameters of a single `git describe` invocation.
///
/// The tag glob is not part of the query because it comes from configuration
/// and is the same for every query of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DescribeQuery {
    /// Value of `--abbrev=N`; `0` suppresses the distance and hash suffix
    pub abbrev: u8,
    /// Pass `--always` so an untagged history still yields a hash
    pub always: bool,
    /// Describe `HEAD` explicitly
    pub head: bool,
}

impl DescribeQuery {
    /// Query used for the release number: nearest tag with distance and short hash.
    pub fn release() -> Self {
        DescribeQuery {
            abbrev: 2,
            always: false,
            head: true,
        }
    }

    /// Query used by the `tag` strategy: nearest tag only.
    pub fn tag() -> Self {
        DescribeQuery {
            abbrev: 0,
            always: false,
            head: true,
        }
    }

    /// Query used by the `abbrev` strategy.
    pub fn abbrev() -> Self {
        DescribeQuery {
            abbrev: 2,
            always: true,
            head: false,
        }
    }

    /// Query used by the `rank` strategy.
    pub fn rank() -> Self {
        DescribeQuery {
            abbrev: 0,
            always: true,
            head: false,
        }
    }

    /// Build the git argument vector for this query.
    pub fn to_args(&self, tag_match: &str) -> Vec<String> {
        let mut args = vec![
            "describe".to_string(),
            "--match".to_string(),
            tag_match.to_string(),
            format!("--abbrev={}", self.abbrev),
        ];
        if self.always {
            args.push("--always".to_string());
        }
        args.push("--tags".to_string());
        if self.head {
            args.push("HEAD".to_string());
        }
        args
    }
}

/// The git queries the describe tool depends on.
///
/// Implementations return the raw stdout of the query. Any failure (git missing,
/// non-zero exit, not a repository) is an `Err`; callers decide how to degrade.
pub trait GitCommand {
    /// Raw output of `git remote -v`
    fn remote_listing(&self) -> Result<String>;

    /// Raw output of `git describe` for the given query and tag glob
    fn describe(&self, query: &DescribeQuery, tag_match: &str) -> Result<String>;
}
