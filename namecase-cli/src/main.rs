//! `namecase` binary entry point

use clap::Parser;
use namecase_cli::commands::Commands;
use std::process::ExitCode;

/// Convert identifiers between naming conventions
#[derive(Debug, Parser)]
#[command(name = "namecase", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
