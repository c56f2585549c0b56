//! CLI tool that removes non-phpdoc comments from PHP files in place.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use phpdoc_strip::{Config, LocalFs, StdConsole};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File or directory whose PHP sources should be trimmed
    src: PathBuf,

    /// Only list the files that would be trimmed
    #[arg(long)]
    list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::new(cli.src).list(cli.list);
    let mut console = StdConsole::stdio();

    match phpdoc_strip::run(&config, &mut console, &LocalFs) {
        Ok(outcome) => {
            debug!(?outcome, "finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
