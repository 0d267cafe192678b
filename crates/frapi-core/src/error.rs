//! # Error Types
//!
//! Top-level error for frapi. Component errors (validation, path
//! templates, code generation) live next to the code that raises them in
//! `frapi-schema`; this type covers the cross-cutting failures.

use thiserror::Error;

/// Top-level error type for frapi.
#[derive(Error, Debug)]
pub enum FrapiError {
    /// A method name outside the supported verb set.
    #[error("unknown http method: {0:?}")]
    UnknownMethod(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FrapiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
