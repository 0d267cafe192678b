//! # HTTP Methods
//!
//! The fixed verb set an endpoint descriptor may declare. Every `match` on
//! `HttpMethod` is exhaustive, so adding a verb forces each consumer
//! (payload defaults, code generation) to handle it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FrapiError;

/// HTTP verbs supported by endpoint descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Trace,
    Connect,
}

impl HttpMethod {
    /// Returns all supported methods in canonical order.
    pub fn all_methods() -> &'static [HttpMethod] {
        &[
            Self::Get,
            Self::Post,
            Self::Put,
            Self::Patch,
            Self::Delete,
            Self::Head,
            Self::Options,
            Self::Trace,
            Self::Connect,
        ]
    }

    /// Lowercase identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
            Self::Head => "head",
            Self::Options => "options",
            Self::Trace => "trace",
            Self::Connect => "connect",
        }
    }

    /// Uppercase token as sent on the wire.
    ///
    /// `fetch` only normalizes the case of a few verbs (`patch` is sent
    /// verbatim), so generated code always uses this form.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
            Self::Connect => "CONNECT",
        }
    }

    /// Whether requests with this method carry a payload by default.
    pub fn has_payload(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = FrapiError;

    /// Parse a method from its lowercase identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            "put" => Ok(Self::Put),
            "patch" => Ok(Self::Patch),
            "delete" => Ok(Self::Delete),
            "head" => Ok(Self::Head),
            "options" => Ok(Self::Options),
            "trace" => Ok(Self::Trace),
            "connect" => Ok(Self::Connect),
            other => Err(FrapiError::UnknownMethod(other.to_string())),
        }
    }
}
