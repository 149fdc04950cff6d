// tests/describe_test.rs
use git_describe::cli::describe::{Command, Describer, Settings};
use git_describe::domain::VersioningStrategy;
use git_describe::git::{DescribeQuery, MockGit};
use git_describe::ui::Logger;

const HTTPS_REMOTES: &str = "origin\thttps://github.com/acme/widget.git (fetch)\n\
                             origin\thttps://github.com/acme/widget.git (push)\n";

const SSH_REMOTES: &str = "origin\tgit@github.com:acme/widget.git (fetch)\n\
                           origin\tgit@github.com:acme/widget.git (push)\n";

fn settings_with(strategy: VersioningStrategy, release: bool) -> Settings {
    Settings {
        strategy,
        release,
        ..Settings::default()
    }
}

#[test]
fn test_project_from_https_remote() {
    let git = MockGit::new().with_remotes(HTTPS_REMOTES);
    let describer = Describer::new(&git, Settings::default(), Logger::silent());
    assert_eq!(describer.run(Command::Project), "acme-widget");
}

#[test]
fn test_module_from_ssh_remote() {
    let git = MockGit::new().with_remotes(SSH_REMOTES);
    let describer = Describer::new(&git, Settings::default(), Logger::silent());
    assert_eq!(describer.run(Command::Module), "widget");
}

#[test]
fn test_project_without_remotes_is_empty() {
    let git = MockGit::new();
    let describer = Describer::new(&git, Settings::default(), Logger::silent());
    assert_eq!(describer.run(Command::Project), "");
    assert_eq!(describer.run(Command::Module), "");
}

#[test]
fn test_project_name_override_skips_git() {
    // No remotes configured: the override must not need them.
    let git = MockGit::new();
    let settings = Settings {
        project_name: Some("foo".to_string()),
        ..Settings::default()
    };
    let describer = Describer::new(&git, settings, Logger::silent());
    assert_eq!(describer.run(Command::Project), "foo");
    assert_eq!(describer.run(Command::Module), "foo");
}

#[test]
fn test_version_tag_strategy() {
    let git = MockGit::new().with_describe(DescribeQuery::tag(), "v1.2.3-beta\n");
    let describer = Describer::new(
        &git,
        settings_with(VersioningStrategy::Tag, false),
        Logger::silent(),
    );
    assert_eq!(describer.run(Command::Version), "1.2.3~beta");
}

#[test]
fn test_version_abbrev_strategy() {
    let git = MockGit::new().with_describe(DescribeQuery::abbrev(), "v0.4.0-17-g3c\n");
    let describer = Describer::new(
        &git,
        settings_with(VersioningStrategy::Abbrev, false),
        Logger::silent(),
    );
    assert_eq!(describer.run(Command::Version), "0.4.0~173c");
}

#[test]
fn test_version_rank_strategy() {
    let git = MockGit::new().with_describe(DescribeQuery::rank(), "v0.4.0-rc\n");
    let describer = Describer::new(
        &git,
        settings_with(VersioningStrategy::Rank, false),
        Logger::silent(),
    );
    assert_eq!(describer.run(Command::Version), "0.4.0-rc");
}

#[test]
fn test_version_git_failure_is_empty() {
    let git = MockGit::new();
    let describer = Describer::new(&git, Settings::default(), Logger::silent());
    assert_eq!(describer.run(Command::Version), "");
}

#[test]
fn test_release_number_from_distance() {
    let git = MockGit::new().with_describe(DescribeQuery::release(), "v1.2.3-5-gabc123\n");
    let describer = Describer::new(
        &git,
        settings_with(VersioningStrategy::Tag, true),
        Logger::silent(),
    );
    assert_eq!(describer.run(Command::Release), "5");
}

#[test]
fn test_release_number_on_tagged_commit() {
    let git = MockGit::new().with_describe(DescribeQuery::release(), "v1.2.3\n");
    let describer = Describer::new(
        &git,
        settings_with(VersioningStrategy::Tag, true),
        Logger::silent(),
    );
    assert_eq!(describer.run(Command::Release), "0");
}

#[test]
fn test_full_identifier() {
    let git = MockGit::new()
        .with_remotes(HTTPS_REMOTES)
        .with_describe(DescribeQuery::tag(), "v2.0.0-rc\n")
        .with_describe(DescribeQuery::release(), "v2.0.0-rc-3-g9f\n");
    let describer = Describer::new(
        &git,
        settings_with(VersioningStrategy::Tag, true),
        Logger::silent(),
    );
    assert_eq!(describer.run(Command::Full), "acme-widget-2.0.0~rc-3");
}

#[test]
fn test_full_without_release_tracking() {
    let git = MockGit::new()
        .with_remotes(SSH_REMOTES)
        .with_describe(DescribeQuery::tag(), "v1.0.0\n");
    let describer = Describer::new(&git, Settings::default(), Logger::silent());
    assert_eq!(describer.run(Command::Full), "acme-widget-1.0.0-1");
}

#[test]
fn test_repeated_runs_are_identical() {
    let git = MockGit::new()
        .with_remotes(SSH_REMOTES)
        .with_describe(DescribeQuery::tag(), "v1.0.0\n");
    let describer = Describer::new(&git, Settings::default(), Logger::silent());
    for command in Command::ALL {
        assert_eq!(describer.run(command), describer.run(command));
    }
}

#[test]
fn test_debug_logging_does_not_change_output() {
    let git = MockGit::new().with_remotes(HTTPS_REMOTES);
    let quiet = Describer::new(&git, Settings::default(), Logger::silent());
    let noisy = Describer::new(&git, Settings::default(), Logger::new(true, false));
    assert_eq!(quiet.project(), noisy.project());
}
