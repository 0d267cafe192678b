//! # Boundary Checks
//!
//! Validates the payloads crossing an HTTP boundary against an endpoint's
//! declared schemas, independent of any HTTP framework. A request is
//! checked body first, then query; a failure maps to a client error. A
//! response that fails its schema is a server error.
//!
//! Only [`Payload::Typed`] slots are validated. Untyped and absent slots
//! accept anything.

use serde_json::Value;
use thiserror::Error;

use crate::endpoint::{EndpointDescriptor, Payload};
use crate::validate::{validate, ValidateOptions, ValidationError};

/// A payload at the boundary did not match its declared schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    #[error("Error while validating request payload. {0}")]
    RequestBody(ValidationError),

    #[error("Error while validating request query. {0}")]
    RequestQuery(ValidationError),

    #[error("Error while validating response payload. {0}")]
    Response(ValidationError),
}

impl BoundaryError {
    /// HTTP status to report: 400 for request errors, 500 for responses.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::RequestBody(_) | Self::RequestQuery(_) => 400,
            Self::Response(_) => 500,
        }
    }

    pub fn validation_error(&self) -> &ValidationError {
        match self {
            Self::RequestBody(e) | Self::RequestQuery(e) | Self::Response(e) => e,
        }
    }
}

/// Check an incoming request's body and query.
pub fn check_request(
    endpoint: &EndpointDescriptor,
    body: &Value,
    query: &Value,
    options: ValidateOptions,
) -> Result<(), BoundaryError> {
    if let Some(schema) = endpoint.body.as_ref().and_then(Payload::schema) {
        validate(schema, body, options).map_err(|e| {
            tracing::debug!(endpoint = %endpoint.name, part = "body", error = %e, "request rejected");
            BoundaryError::RequestBody(e)
        })?;
    }
    if let Some(schema) = endpoint.query.as_ref().and_then(Payload::schema) {
        validate(schema, query, options).map_err(|e| {
            tracing::debug!(endpoint = %endpoint.name, part = "query", error = %e, "request rejected");
            BoundaryError::RequestQuery(e)
        })?;
    }
    Ok(())
}

/// Check an outgoing response payload.
pub fn check_response(
    endpoint: &EndpointDescriptor,
    payload: &Value,
    options: ValidateOptions,
) -> Result<(), BoundaryError> {
    if let Some(schema) = endpoint.response.as_ref().and_then(Payload::schema) {
        validate(schema, payload, options).map_err(|e| {
            tracing::debug!(endpoint = %endpoint.name, part = "response", error = %e, "response rejected");
            BoundaryError::Response(e)
        })?;
    }
    Ok(())
}
