//! The `describe` workflow
//!
//! Turns a command name plus settings into the single string the tool prints.
//! Nothing here exits the process; git failures degrade to empty output and
//! configuration mistakes come back as errors for the binary to report.

use std::fmt;
use std::str::FromStr;

use crate::config::Config;
use crate::domain::describe::DescribeOutput;
use crate::domain::remote;
use crate::domain::VersioningStrategy;
use crate::error::{DescribeError, Result};
use crate::git::{DescribeQuery, GitCommand};
use crate::ui::Logger;

/// Environment variable that overrides the project and module name
pub const PROJECT_NAME_VAR: &str = "PROJECT_NAME";

/// What the describe tool prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Project,
    Module,
    Version,
    Release,
    Full,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Project,
        Command::Module,
        Command::Version,
        Command::Release,
        Command::Full,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::Project => "project",
            Command::Module => "module",
            Command::Version => "version",
            Command::Release => "release",
            Command::Full => "full",
        }
    }

    /// `full` is printed without a trailing newline
    pub fn ends_with_newline(&self) -> bool {
        !matches!(self, Command::Full)
    }
}

impl FromStr for Command {
    type Err = DescribeError;

    fn from_str(s: &str) -> Result<Self> {
        Command::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| DescribeError::unknown_command(s))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Value of `PROJECT_NAME`, when set and non-empty
    pub project_name: Option<String>,
    /// Use the commit distance as release number
    pub release: bool,
    pub strategy: VersioningStrategy,
    /// Glob passed to `git describe --match`
    pub tag_match: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from_config(&Config::default())
    }
}

impl Settings {
    fn from_config(config: &Config) -> Self {
        Settings {
            project_name: None,
            release: config.release,
            strategy: VersioningStrategy::default(),
            tag_match: config.tag_match.clone(),
        }
    }

    /// Layer command-line flags and the environment override over the config.
    ///
    /// The strategy name, whether it comes from the flag or the file, must be
    /// one of `tag`, `abbrev` or `rank`.
    pub fn resolve(
        config: &Config,
        release_flag: bool,
        strategy_flag: Option<&str>,
        project_name: Option<String>,
    ) -> Result<Self> {
        let mut settings = Settings::from_config(config);
        settings.release |= release_flag;
        if let Some(name) = strategy_flag.or(config.strategy.as_deref()) {
            settings.strategy = name.parse()?;
        }
        settings.project_name = project_name.filter(|name| !name.is_empty());
        Ok(settings)
    }
}

/// Read `PROJECT_NAME` from the process environment.
pub fn project_name_from_env() -> Option<String> {
    std::env::var(PROJECT_NAME_VAR)
        .ok()
        .filter(|name| !name.is_empty())
}

/// Validate the invocation before anything is queried or printed.
///
/// Checked in order: a command was given, the configuration loads, the
/// strategy is known, the command is known. `load_config` is only called
/// once a command is present.
pub fn prepare(
    command: Option<&str>,
    load_config: impl FnOnce() -> Result<Config>,
    release_flag: bool,
    strategy_flag: Option<&str>,
    project_name: Option<String>,
) -> Result<(Command, Settings)> {
    let command = command.ok_or(DescribeError::MissingCommand)?;
    let config = load_config()?;
    let settings = Settings::resolve(&config, release_flag, strategy_flag, project_name)?;
    let command: Command = command.parse()?;
    Ok((command, settings))
}

/// Answers describe commands from git output.
pub struct Describer<'a, G: GitCommand> {
    git: &'a G,
    settings: Settings,
    log: Logger,
}

impl<'a, G: GitCommand> Describer<'a, G> {
    pub fn new(git: &'a G, settings: Settings, log: Logger) -> Self {
        Describer { git, settings, log }
    }

    /// Output of the given command
    pub fn run(&self, command: Command) -> String {
        self.log.info(format!("Executing '{}' command", command));
        match command {
            Command::Project => self.project(),
            Command::Module => self.module(),
            Command::Version => self.version(),
            Command::Release => self.release(),
            Command::Full => self.full(),
        }
    }

    /// Project name, e.g. `org-repo`; empty when it cannot be determined
    pub fn project(&self) -> String {
        if let Some(name) = &self.settings.project_name {
            self.log
                .info(format!("Using {} from environment: {}", PROJECT_NAME_VAR, name));
            return name.clone();
        }
        self.log.info(format!(
            "{} not set, extracting project from git remote",
            PROJECT_NAME_VAR
        ));
        let Some(listing) = self.remote_listing() else {
            return String::new();
        };
        match remote::project_name(&listing) {
            Some(name) => {
                self.log.info(format!("Extracted project name: {}", name));
                name
            }
            None => {
                self.log.info("Could not extract project name from git remote");
                String::new()
            }
        }
    }

    /// Module name, e.g. `repo`; empty when it cannot be determined
    pub fn module(&self) -> String {
        if let Some(name) = &self.settings.project_name {
            self.log.info(format!(
                "Using {} from environment for module: {}",
                PROJECT_NAME_VAR, name
            ));
            return name.clone();
        }
        self.log.info(format!(
            "{} not set, extracting module from git remote",
            PROJECT_NAME_VAR
        ));
        let Some(listing) = self.remote_listing() else {
            return String::new();
        };
        match remote::module_name(&listing) {
            Some(name) => {
                self.log.info(format!("Extracted module name: {}", name));
                name
            }
            None => {
                self.log.info("Could not extract module name from git remote");
                String::new()
            }
        }
    }

    /// Project version according to the configured strategy
    pub fn version(&self) -> String {
        let strategy = self.settings.strategy;
        self.log
            .info(format!("Determining version with strategy: {}", strategy));
        let Some(output) = self.describe(strategy.query()) else {
            return String::new();
        };
        match strategy.resolve(&output) {
            Some(version) => {
                self.log
                    .info(format!("Extracted version ({}): {}", strategy, version));
                version
            }
            None => {
                self.log
                    .info(format!("No version found for {} strategy", strategy));
                String::new()
            }
        }
    }

    /// Release number: commit distance when release tracking is on, `1` otherwise
    pub fn release(&self) -> String {
        if !self.settings.release {
            self.log
                .info("Release number not using commit, defaulting to 1");
            return "1".to_string();
        }
        self.log.info("Using commit number as release number");
        let Some(output) = self.describe(DescribeQuery::release()) else {
            return String::new();
        };
        let Some(parsed) = DescribeOutput::parse(&output) else {
            self.log.info("No release number found, returning default: 0");
            return "0".to_string();
        };
        self.log.debug(format!(
            "Nearest tag {} at commit {}",
            parsed.tag,
            parsed.hash.as_deref().unwrap_or("HEAD")
        ));
        let release = parsed.release_number();
        self.log.info(format!("Extracted release number: {}", release));
        release
    }

    /// `<project>-<version>-<release>`
    pub fn full(&self) -> String {
        format!("{}-{}-{}", self.project(), self.version(), self.release())
    }

    fn remote_listing(&self) -> Option<String> {
        match self.git.remote_listing() {
            Ok(listing) => {
                self.log.debug(format!("Git remote output: {}", listing.trim_end()));
                Some(listing)
            }
            Err(e) => {
                self.log.info(format!("Failed to get git remote: {}", e));
                None
            }
        }
    }

    fn describe(&self, query: DescribeQuery) -> Option<String> {
        match self.git.describe(&query, &self.settings.tag_match) {
            Ok(output) => {
                self.log
                    .debug(format!("Git describe output: {}", output.trim_end()));
                Some(output)
            }
            Err(e) => {
                self.log.info(format!("Failed to get git describe: {}", e));
                None
            }
        }
    }
}
