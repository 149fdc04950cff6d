//! Versioning strategies for the `version` command.
//!
//! Each strategy issues its own describe query and post-processes the output
//! into a packaging version such as `1.2.3~beta`. Candidates are compared as
//! plain strings, not as semantic versions: `v1.10.0` sorts below `v1.9.0`.
//! Downstream packaging relies on that ordering, so it must stay lexical.

use std::fmt;
use std::str::FromStr;

use crate::error::{DescribeError, Result};
use crate::git::DescribeQuery;

/// How the project version is derived from tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersioningStrategy {
    /// Most recent tag, pre-release separator rewritten to `~`
    #[default]
    Tag,
    /// Tag plus distance and hash, rewritten like `tag`
    Abbrev,
    /// Most recent tag, verbatim
    Rank,
}

impl VersioningStrategy {
    pub const ALL: [VersioningStrategy; 3] = [
        VersioningStrategy::Tag,
        VersioningStrategy::Abbrev,
        VersioningStrategy::Rank,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VersioningStrategy::Tag => "tag",
            VersioningStrategy::Abbrev => "abbrev",
            VersioningStrategy::Rank => "rank",
        }
    }

    /// The describe query this strategy runs
    pub fn query(&self) -> DescribeQuery {
        match self {
            VersioningStrategy::Tag => DescribeQuery::tag(),
            VersioningStrategy::Abbrev => DescribeQuery::abbrev(),
            VersioningStrategy::Rank => DescribeQuery::rank(),
        }
    }

    /// Turn raw describe output into a version string.
    ///
    /// Returns `None` when the output holds no usable tag.
    pub fn resolve(&self, output: &str) -> Option<String> {
        match self {
            VersioningStrategy::Tag => {
                let tag = output.trim();
                if tag.is_empty() {
                    return None;
                }
                Some(tilde_separator(strip_v(tag)))
            }
            VersioningStrategy::Abbrev => greatest_tag_line(output, |line| {
                line.replacen("-g", "", 1).replacen('-', "~", 1)
            }),
            VersioningStrategy::Rank => greatest_tag_line(output, str::to_string),
        }
    }
}

impl FromStr for VersioningStrategy {
    type Err = DescribeError;

    fn from_str(s: &str) -> Result<Self> {
        VersioningStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| DescribeError::unknown_strategy(s))
    }
}

impl fmt::Display for VersioningStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn strip_v(s: &str) -> &str {
    s.strip_prefix('v').unwrap_or(s)
}

/// `1.2.3-beta` becomes `1.2.3~beta`; only the first `-` is rewritten.
fn tilde_separator(s: &str) -> String {
    s.replacen('-', "~", 1)
}

/// Rewrite every `v`-prefixed line, then keep the lexically greatest.
fn greatest_tag_line(output: &str, rewrite: impl Fn(&str) -> String) -> Option<String> {
    let mut versions: Vec<String> = output
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('v'))
        .map(rewrite)
        .collect();
    versions.sort();
    versions.pop().map(|latest| strip_v(&latest).to_string())
}
