//! # Params Subcommand
//!
//! Prints the argument names a path template produces, one per line, in
//! the order a generated client function takes them.

use anyhow::{Context, Result};
use clap::Args;

use frapi_schema::PathTemplate;

/// Arguments for the `frapi params` subcommand.
#[derive(Args, Debug)]
pub struct ParamsArgs {
    /// Path template, e.g. `/users/:id/files/*`.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,
}

pub fn run_params(args: &ParamsArgs) -> Result<u8> {
    let names = parameter_names(&args.template)?;
    for name in &names {
        println!("{name}");
    }
    Ok(0)
}

fn parameter_names(template: &str) -> Result<Vec<String>> {
    let template = PathTemplate::parse(template)
        .with_context(|| format!("invalid path template: {template}"))?;
    Ok(template.parameter_names())
}
