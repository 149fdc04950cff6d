//! Version string classification.
//!
//! A version is `[v]MAJOR.MINOR.PATCH` optionally followed by one suffix that
//! decides its kind. The rules are tried in [VersionKind::PRECEDENCE] order and
//! the first match wins; post-release and intermediate suffixes share the same
//! trailing qualifier grammar, so the order is part of the contract.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

const RELEASE_RULE: &str = r"^v?[0-9]+\.[0-9]+\.[0-9]+$";
const PRERELEASE_RULE: &str =
    r"^v?[0-9]+\.[0-9]+\.[0-9]+[-~](alpha|beta|rc|pre)(\.[0-9]+|_[a-zA-Z]+(\.[0-9]+)*)*$";
const POSTRELEASE_RULE: &str =
    r"^v?[0-9]+\.[0-9]+\.[0-9]+\.(fix|next|post)(\.[0-9]+|_[a-zA-Z]+(\.[0-9]+)*)*$";
const INTERMEDIATE_RULE: &str =
    r"^v?[0-9]+\.[0-9]+\.[0-9]+_[a-zA-Z]+(\.[0-9]+|_[a-zA-Z]+(\.[0-9]+)*)*$";

static RELEASE: LazyLock<Regex> = LazyLock::new(|| compile(RELEASE_RULE));
static PRERELEASE: LazyLock<Regex> = LazyLock::new(|| compile(PRERELEASE_RULE));
static POSTRELEASE: LazyLock<Regex> = LazyLock::new(|| compile(POSTRELEASE_RULE));
static INTERMEDIATE: LazyLock<Regex> = LazyLock::new(|| compile(INTERMEDIATE_RULE));

fn compile(rule: &str) -> Regex {
    Regex::new(rule).expect("version rule is a valid regex")
}

/// Category of a valid version string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionKind {
    /// `1.2.3`
    Release,
    /// `1.2.3-beta.1`, `1.2.3~rc`
    PreRelease,
    /// `1.2.3.fix.2`
    PostRelease,
    /// `1.2.3_patched.1`
    Intermediate,
}

/// CMake build type implied by a version kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    Release,
    Debug,
}

impl VersionKind {
    /// Order in which the rules are tried
    pub const PRECEDENCE: [VersionKind; 4] = [
        VersionKind::Release,
        VersionKind::PreRelease,
        VersionKind::PostRelease,
        VersionKind::Intermediate,
    ];

    /// Rule name used in the rule listing
    pub fn name(&self) -> &'static str {
        match self {
            VersionKind::Release => "release",
            VersionKind::PreRelease => "prerelease",
            VersionKind::PostRelease => "postrelease",
            VersionKind::Intermediate => "intermediate",
        }
    }

    /// Human-readable label printed by `--type`
    pub fn label(&self) -> &'static str {
        match self {
            VersionKind::Release => "Release",
            VersionKind::PreRelease => "Pre release",
            VersionKind::PostRelease => "Post release",
            VersionKind::Intermediate => "Intermediate release",
        }
    }

    pub fn build_type(&self) -> BuildType {
        match self {
            VersionKind::Release => BuildType::Release,
            _ => BuildType::Debug,
        }
    }

    /// Source text of the rule
    pub fn rule(&self) -> &'static str {
        match self {
            VersionKind::Release => RELEASE_RULE,
            VersionKind::PreRelease => PRERELEASE_RULE,
            VersionKind::PostRelease => POSTRELEASE_RULE,
            VersionKind::Intermediate => INTERMEDIATE_RULE,
        }
    }

    pub fn matches(&self, version: &str) -> bool {
        let regex: &Regex = match self {
            VersionKind::Release => &*RELEASE,
            VersionKind::PreRelease => &*PRERELEASE,
            VersionKind::PostRelease => &*POSTRELEASE,
            VersionKind::Intermediate => &*INTERMEDIATE,
        };
        regex.is_match(version)
    }
}

impl fmt::Display for VersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildType::Release => f.write_str("Release"),
            BuildType::Debug => f.write_str("Debug"),
        }
    }
}

/// Classify a version string; `None` when no rule matches.
pub fn classify(version: &str) -> Option<VersionKind> {
    VersionKind::PRECEDENCE
        .into_iter()
        .find(|kind| kind.matches(version))
}

/// The rule listing printed by `version-check --rules`.
pub fn rules_listing() -> String {
    let mut listing = String::from("version rules in precedence order:\n");
    for kind in VersionKind::PRECEDENCE {
        let name = format!("{}:", kind.name());
        listing.push_str(&format!("    {:<14}{}\n", name, kind.rule()));
    }
    listing
}
