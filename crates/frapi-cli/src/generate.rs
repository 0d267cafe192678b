//! # Generate Subcommand
//!
//! Reads an endpoint manifest (a list of endpoint descriptors) and writes
//! a fetch client module for it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use frapi_schema::{generate_client, ClientFlavor, EndpointDescriptor};

use crate::config::CliConfig;

/// Arguments for the `frapi generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Endpoint manifest (JSON or YAML).
    #[arg(long)]
    pub manifest: PathBuf,

    /// Client flavor: `typed` (TypeScript) or `untyped` (JavaScript).
    #[arg(long)]
    pub flavor: Option<ClientFlavor>,

    /// Output file. Defaults to stdout.
    #[arg(long, short)]
    pub out: Option<PathBuf>,
}

/// Execute the generate subcommand.
pub fn run_generate(args: &GenerateArgs, config: &CliConfig) -> Result<u8> {
    let endpoints: Vec<EndpointDescriptor> = crate::load(&args.manifest, "manifest")?;
    let flavor = args.flavor.or(config.flavor).unwrap_or_default();
    let out = args.out.as_ref().or(config.output.as_ref());

    tracing::info!(endpoints = endpoints.len(), %flavor, "generating client");

    let module = generate_client(&endpoints, flavor).with_context(|| {
        format!(
            "failed to generate client from manifest: {}",
            args.manifest.display()
        )
    })?;
    crate::emit(&module, out.map(PathBuf::as_path))?;
    Ok(0)
}
