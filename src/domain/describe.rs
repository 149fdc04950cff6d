//! Parsing of `git describe --tags` output.

use std::sync::LazyLock;

use regex::Regex;

static DESCRIBE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<tag>.+)-(?P<distance>[0-9]+)-g(?P<hash>[0-9a-f]+)$")
        .expect("describe pattern is valid")
});

/// One line of describe output: `<tag>[-<distance>-g<hash>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeOutput {
    pub tag: String,
    /// Commits between the tag and `HEAD`; absent when `HEAD` is the tag
    pub distance: Option<u32>,
    /// Abbreviated commit hash, without the `g` marker
    pub hash: Option<String>,
}

impl DescribeOutput {
    /// Parse the first line of describe output. Returns `None` for empty output.
    ///
    /// A tag that itself contains `-` (e.g. `v1.2.3-beta-4-g1f`) keeps its
    /// suffix; only the trailing `-<n>-g<hex>` is split off.
    pub fn parse(output: &str) -> Option<Self> {
        let line = output.lines().next()?.trim();
        if line.is_empty() {
            return None;
        }

        if let Some(caps) = DESCRIBE_SUFFIX.captures(line) {
            if let Ok(distance) = caps["distance"].parse::<u32>() {
                return Some(DescribeOutput {
                    tag: caps["tag"].to_string(),
                    distance: Some(distance),
                    hash: Some(caps["hash"].to_string()),
                });
            }
        }

        Some(DescribeOutput {
            tag: line.to_string(),
            distance: None,
            hash: None,
        })
    }

    /// Release number: the commit distance, or `0` when `HEAD` is tagged.
    pub fn release_number(&self) -> String {
        self.distance.unwrap_or(0).to_string()
    }
}
