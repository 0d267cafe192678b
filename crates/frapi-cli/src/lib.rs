//! # frapi-cli — CLI Tool for frapi
//!
//! Provides the `frapi` command-line interface over `frapi-schema`.
//!
//! ## Subcommands
//!
//! - `frapi validate` — Check a value document against a schema document.
//! - `frapi types` — Print the TypeScript type a schema projects to.
//! - `frapi generate` — Generate a fetch client module from an endpoint manifest.
//! - `frapi params` — List the argument names a path template produces.
//!
//! ```bash
//! frapi validate --schema user.schema.yaml --value user.json
//! frapi generate --manifest endpoints.yaml --flavor typed --out client.ts
//! frapi params '/users/:id/files/*'
//! ```
//!
//! Schemas, values, and manifests may be JSON or YAML, chosen by file
//! extension. Every handler returns an exit code: 0 on success, 1 when the
//! input was checked and rejected, and an error for operational failures.

pub mod config;
pub mod generate;
pub mod params;
pub mod types;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Load a JSON or YAML document, naming the file and its role on failure.
pub fn load<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    frapi_core::load_document(path)
        .with_context(|| format!("failed to load {what}: {}", path.display()))
}

/// Write `content` to `out`, or to stdout when no path is given.
pub fn emit(content: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = content.len(), "wrote output");
        }
        None => print!("{content}"),
    }
    Ok(())
}
