use std::process::ExitCode;

use clap::Parser;

use git_describe::cli::{check, CheckOptions};
use git_describe::domain::classify::rules_listing;
use git_describe::ui::Logger;
use git_describe::VERSION_CHECK_VERSION;

#[derive(clap::Parser)]
#[command(
    name = "version-check",
    about = "Check that a version is set correctly according to project rules"
)]
struct Args {
    #[arg(short = 'V', long, help = "Print version number")]
    version: bool,

    #[arg(
        short,
        long,
        help = "Print regexp rules for checking versions and exit"
    )]
    rules: bool,

    #[arg(short, long, help = "Debug output")]
    debug: bool,

    #[arg(
        short = 't',
        long = "type",
        help = "Output version type: release, prerelease, postrelease, intermediate"
    )]
    show_type: bool,

    #[arg(
        short,
        long,
        help = "Output build type for cmake: Release for release version, Debug for other"
    )]
    build_type: bool,

    #[arg(long, help = "No color output")]
    no_color: bool,

    #[arg(value_name = "VERSION", help = "Version string to check")]
    versions: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let log = Logger::new(args.debug, !args.no_color);
    log.debug(format!(
        "Flags - debug: {}, no_color: {}, version: {}, rules: {}, type: {}, build_type: {}",
        args.debug, args.no_color, args.version, args.rules, args.show_type, args.build_type
    ));

    if args.version {
        println!("{}", VERSION_CHECK_VERSION);
        return ExitCode::SUCCESS;
    }

    if args.rules {
        print!("{}", rules_listing());
        return ExitCode::SUCCESS;
    }

    let Some(version) = args.versions.first() else {
        log.info("No version argument provided");
        return ExitCode::FAILURE;
    };

    let options = CheckOptions {
        show_type: args.show_type,
        show_build_type: args.build_type,
    };
    let outcome = check(version, options, &log);
    for line in &outcome.lines {
        println!("{}", line);
    }
    ExitCode::from(outcome.exit_code())
}
