//! # Validate Subcommand
//!
//! Checks a value document against a schema document and prints `OK` or
//! the validation message.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use frapi_schema::{validate, Schema, ValidateOptions, ValidationError};

use crate::config::CliConfig;

/// Arguments for the `frapi validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Schema document (JSON or YAML).
    #[arg(long)]
    pub schema: PathBuf,

    /// Value document to check (JSON or YAML).
    #[arg(long)]
    pub value: PathBuf,

    /// Accept object fields the schema does not declare.
    #[arg(long)]
    pub lenient: bool,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when the value conforms, 1 when it does not.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let schema: Schema = crate::load(&args.schema, "schema")?;
    let value: Value = crate::load(&args.value, "value")?;
    let options = config.validate_options(args.lenient);

    match check(&schema, &value, options) {
        Ok(()) => {
            println!("OK");
            Ok(0)
        }
        Err(e) => {
            tracing::info!(kind = %e.kind(), path = %e.path_string(), "value rejected");
            println!("{e}");
            Ok(1)
        }
    }
}

fn check(schema: &Schema, value: &Value, options: ValidateOptions) -> Result<(), ValidationError> {
    validate(schema, value, options).map(|_| ())
}
