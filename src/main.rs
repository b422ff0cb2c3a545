//! msstyle CLI entry point

use clap::Parser;
use msstyle::cli::check::CheckOptions;
use msstyle::cli::{Command, args::Cli};
use std::io::IsTerminal;
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "MSSTYLE_LOG";

fn main() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let exit_code = match cli.command {
        Command::Check {
            paths,
            format,
            locale,
        } => msstyle::cli::check::run_check(&CheckOptions {
            paths: &paths,
            format,
            locale: &locale,
            config,
            color: cli.color,
        }),
        Command::List { format } => msstyle::cli::list::run_list(format, config, cli.color),
    };

    process::exit(exit_code);
}
