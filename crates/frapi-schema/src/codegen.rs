//! # Client Code Generation
//!
//! Assembles the declarations of a set of endpoints into one JavaScript or
//! TypeScript module. The typed flavor annotates every argument and return
//! value with the projection of the endpoint's schemas, so the client
//! cannot drift from the validation applied at the server boundary.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use frapi_core::is_binding_name;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::endpoint::EndpointDescriptor;
use crate::template::TemplateError;

/// First line of every generated module.
pub const GENERATED_HEADER: &str = "// Generated by frapi. Do not edit by hand.\n";

/// Output language of the generated client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientFlavor {
    /// Plain JavaScript.
    #[default]
    Untyped,
    /// TypeScript with projected argument and return types.
    Typed,
}

impl ClientFlavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Untyped => "untyped",
            Self::Typed => "typed",
        }
    }
}

impl fmt::Display for ClientFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientFlavor {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "untyped" => Ok(Self::Untyped),
            "typed" => Ok(Self::Typed),
            other => Err(CodegenError::UnknownFlavor(other.to_string())),
        }
    }
}

/// Client generation failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// The endpoint name is not an identifier, is a reserved word, or
    /// shadows a global the generated body calls.
    #[error("endpoint name {0:?} is not a valid identifier")]
    InvalidName(String),

    /// An argument name is not an identifier, is a reserved word, repeats,
    /// or shadows a global the generated body calls.
    #[error("endpoint {name}: {param:?} cannot be used as an argument name")]
    InvalidParam { name: String, param: String },

    /// Two endpoints would generate the same function.
    #[error("duplicate endpoint name {0:?}")]
    DuplicateName(String),

    #[error("endpoint {name}: {source}")]
    Template {
        name: String,
        #[source]
        source: TemplateError,
    },

    #[error("unknown client flavor {0:?} (expected \"typed\" or \"untyped\")")]
    UnknownFlavor(String),
}

/// Globals referenced by generated function bodies.
const BODY_GLOBALS: &[&str] = &["fetch", "JSON", "URLSearchParams"];

/// Generate a client module with one `export async function` per endpoint,
/// in input order.
///
/// # Errors
///
/// Fails on the first endpoint whose name is not an identifier, repeats an
/// earlier name, has an argument that cannot be bound, or whose path
/// template does not parse.
pub fn generate_client(
    endpoints: &[EndpointDescriptor],
    flavor: ClientFlavor,
) -> Result<String, CodegenError> {
    let mut seen = BTreeSet::new();
    let mut module = String::from(GENERATED_HEADER);

    for endpoint in endpoints {
        if !is_binding_name(&endpoint.name) || BODY_GLOBALS.contains(&endpoint.name.as_str()) {
            return Err(CodegenError::InvalidName(endpoint.name.clone()));
        }
        if !seen.insert(endpoint.name.as_str()) {
            return Err(CodegenError::DuplicateName(endpoint.name.clone()));
        }
        check_arguments(endpoint)?;
        let declaration =
            endpoint
                .declaration(flavor)
                .map_err(|source| CodegenError::Template {
                    name: endpoint.name.clone(),
                    source,
                })?;
        module.push('\n');
        module.push_str(&declaration);
    }

    tracing::debug!(endpoints = endpoints.len(), %flavor, "generated client module");
    Ok(module)
}

fn check_arguments(endpoint: &EndpointDescriptor) -> Result<(), CodegenError> {
    let names = endpoint
        .argument_names()
        .map_err(|source| CodegenError::Template {
            name: endpoint.name.clone(),
            source,
        })?;
    let mut bound = BTreeSet::new();
    for param in &names {
        if !is_binding_name(param)
            || BODY_GLOBALS.contains(&param.as_str())
            || !bound.insert(param.as_str())
        {
            return Err(CodegenError::InvalidParam {
                name: endpoint.name.clone(),
                param: param.clone(),
            });
        }
    }
    Ok(())
}
