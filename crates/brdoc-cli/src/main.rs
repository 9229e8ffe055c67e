//! # brdoc CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brdoc_cli::check::{run_check, CheckArgs};
use brdoc_cli::validate::{run_validate, ValidateArgs};
use brdoc_cli::EXIT_ERROR;

/// Brazilian document validation.
///
/// Checks CPF and CNPJ numbers (normalization, modulo-11 check digits,
/// configurable leniency) and validates JSON objects against YAML schemas.
#[derive(Parser, Debug)]
#[command(name = "brdoc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check CPF or CNPJ numbers.
    Check(CheckArgs),

    /// Validate JSON objects against a YAML document schema.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => run_check(&args),
        Commands::Validate(args) => run_validate(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
