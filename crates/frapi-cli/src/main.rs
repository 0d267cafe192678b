//! # frapi CLI entry point
//!
//! Parses command-line arguments, loads the optional config file, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use frapi_cli::config::CliConfig;
use frapi_cli::generate::{run_generate, GenerateArgs};
use frapi_cli::params::{run_params, ParamsArgs};
use frapi_cli::types::{run_types, TypesArgs};
use frapi_cli::validate::{run_validate, ValidateArgs};

/// frapi — runtime schemas, validation, and typed fetch clients.
#[derive(Parser, Debug)]
#[command(name = "frapi", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a value document against a schema document.
    Validate(ValidateArgs),

    /// Print the TypeScript type of a schema document.
    Types(TypesArgs),

    /// Generate a fetch client module from an endpoint manifest.
    Generate(GenerateArgs),

    /// List the argument names of a path template.
    Params(ParamsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag when set.
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "frapi CLI starting");

    let result = CliConfig::load(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Validate(args) => run_validate(args, &config),
        Commands::Types(args) => run_types(args),
        Commands::Generate(args) => run_generate(args, &config),
        Commands::Params(args) => run_params(args),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
