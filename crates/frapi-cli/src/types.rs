//! # Types Subcommand
//!
//! Prints the TypeScript type expression a schema document projects to.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use frapi_schema::{project, Schema};

/// Arguments for the `frapi types` subcommand.
#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Schema document (JSON or YAML).
    #[arg(long)]
    pub schema: PathBuf,
}

pub fn run_types(args: &TypesArgs) -> Result<u8> {
    let schema: Schema = crate::load(&args.schema, "schema")?;
    println!("{}", project(&schema));
    Ok(0)
}
