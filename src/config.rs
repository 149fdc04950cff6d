use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DescribeError, Result};
use crate::git::DEFAULT_TAG_MATCH;

/// File name searched in the current directory
pub const LOCAL_CONFIG_FILE: &str = ".describe.toml";

/// File name searched in the user configuration directory
pub const USER_CONFIG_FILE: &str = "describe.toml";

/// Persistent defaults for the describe tool.
///
/// Command-line flags take precedence over every field here.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Versioning strategy name: `tag`, `abbrev` or `rank`
    #[serde(default)]
    pub strategy: Option<String>,

    /// Use the commit distance as release number
    #[serde(default)]
    pub release: bool,

    /// Glob passed to `git describe --match`
    #[serde(default = "default_tag_match")]
    pub tag_match: String,
}

fn default_tag_match() -> String {
    DEFAULT_TAG_MATCH.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            strategy: None,
            release: false,
            tag_match: default_tag_match(),
        }
    }
}

/// Path of the configuration file that would be loaded, if any.
///
/// Checked in order:
/// 1. Custom path provided as parameter
/// 2. `.describe.toml` in current directory
/// 3. `describe.toml` in the user config directory
pub fn config_path(custom: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = custom {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// A file that exists but cannot be read or parsed is an error; a missing
/// custom path is an error too.
pub fn load_config(custom: Option<&str>) -> Result<Config> {
    match config_path(custom) {
        Some(path) => parse_config_file(&path),
        None => Ok(Config::default()),
    }
}

fn parse_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        DescribeError::config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    toml::from_str(&content).map_err(|e| {
        DescribeError::config(format!("Failed to parse {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.strategy, None);
        assert!(!config.release);
        assert_eq!(config.tag_match, "v[0-9]*");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("release = true\n").unwrap();
        assert!(config.release);
        assert_eq!(config.tag_match, DEFAULT_TAG_MATCH);
    }

    #[test]
    fn test_custom_path_wins() {
        assert_eq!(
            config_path(Some("/tmp/custom.toml")),
            Some(PathBuf::from("/tmp/custom.toml"))
        );
    }

    #[test]
    fn test_missing_custom_file_is_error() {
        let err = load_config(Some("/nonexistent/describe.toml")).unwrap_err();
        assert!(matches!(err, DescribeError::Config(_)));
        assert!(err.to_string().contains("/nonexistent/describe.toml"));
    }
}
