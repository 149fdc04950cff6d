use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use git_describe::cli::describe::{prepare, project_name_from_env, Describer};
use git_describe::config;
use git_describe::git::SystemGit;
use git_describe::ui::Logger;
use git_describe::DESCRIBE_VERSION;

const COMMANDS_HELP: &str = "\
Commands:
  project  print project name
  module   print module name
  version  print project version
  release  print project release
  full     print full project name-version-release";

#[derive(clap::Parser)]
#[command(
    name = "describe",
    about = "Describe project version and release from git describe",
    after_help = COMMANDS_HELP
)]
struct Args {
    #[arg(short = 'V', long, help = "Print version number")]
    version: bool,

    #[arg(short, long, help = "Debug output")]
    debug: bool,

    #[arg(long, help = "No color output")]
    no_color: bool,

    #[arg(
        short,
        long,
        help = "Use commit number as release number, default is no and release is 1"
    )]
    release: bool,

    #[arg(
        short,
        long,
        value_name = "STRATEGY",
        help = "Versioning strategy type: tag, abbrev, rank; default is tag"
    )]
    strategy: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(value_name = "COMMAND", help = "project|module|version|release|full")]
    command: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let log = Logger::new(args.debug, !args.no_color);

    if args.version {
        println!("{}", DESCRIBE_VERSION);
        return ExitCode::SUCCESS;
    }

    match run(&args, log) {
        Ok(()) => {
            log.info("Command execution completed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log.error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, log: Logger) -> Result<()> {
    log.info(format!("Starting describe tool with args: {:?}", args.command));
    log.debug(format!(
        "Flags - debug: {}, no_color: {}, release: {}, strategy: {:?}, config: {:?}",
        args.debug, args.no_color, args.release, args.strategy, args.config
    ));

    let (command, settings) = prepare(
        args.command.first().map(String::as_str),
        || config::load_config(args.config.as_deref()),
        args.release,
        args.strategy.as_deref(),
        project_name_from_env(),
    )?;
    log.info(format!("Versioning strategy set to: {}", settings.strategy));

    let git = SystemGit::new();
    let output = Describer::new(&git, settings, log).run(command);

    let mut stdout = io::stdout().lock();
    if command.ends_with_newline() {
        writeln!(stdout, "{}", output)?;
    } else {
        write!(stdout, "{}", output)?;
    }
    stdout.flush()?;
    Ok(())
}
