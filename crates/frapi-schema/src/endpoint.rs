//! # Endpoint Descriptors
//!
//! An endpoint pairs an HTTP method and path template with the schemas of
//! its request body, query, and response. Each of the three payload slots
//! is either absent, declared without a schema ([`Payload::Untyped`]), or
//! declared with one ([`Payload::Typed`]).
//!
//! Descriptors are the input of client code generation and of the
//! request/response boundary checks.
//!
//! ## Manifest Encoding
//!
//! ```yaml
//! - name: createUser
//!   method: post
//!   path: /users
//!   body: { shape: [{ name: name, schema: { primitive: string } }] }
//!   response: true
//! ```
//!
//! A payload slot is `true` for an untyped declaration, `false` (or
//! omitted) for none, or a schema. An omitted `body` defaults to an
//! untyped body for methods that carry a payload.

use frapi_core::HttpMethod;
use serde::{Deserialize, Serialize};

use crate::codegen::ClientFlavor;
use crate::project::project;
use crate::schema::Schema;
use crate::template::{PathTemplate, TemplateError};

/// A declared payload slot.
#[derive(Debug, Clone)]
pub enum Payload {
    /// Declared, but any value is accepted.
    Untyped,
    Typed(Schema),
}

impl Payload {
    pub fn schema(&self) -> Option<&Schema> {
        match self {
            Self::Untyped => None,
            Self::Typed(schema) => Some(schema),
        }
    }
}

/// HTTP endpoint with optional payload schemas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "EndpointRepr", into = "EndpointRepr")]
pub struct EndpointDescriptor {
    /// Name of the generated client function.
    pub name: String,
    pub method: HttpMethod,
    /// Path template, e.g. `/users/:id`.
    pub path: String,
    pub body: Option<Payload>,
    pub query: Option<Payload>,
    pub response: Option<Payload>,
}

impl EndpointDescriptor {
    /// A descriptor with no query or response and the method's default
    /// body: untyped for post, put, and patch, none otherwise.
    pub fn new(name: impl Into<String>, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            path: path.into(),
            body: default_body(method),
            query: None,
            response: None,
        }
    }

    pub fn body(mut self, schema: impl Into<Schema>) -> Self {
        self.body = Some(Payload::Typed(schema.into()));
        self
    }

    pub fn untyped_body(mut self) -> Self {
        self.body = Some(Payload::Untyped);
        self
    }

    pub fn no_body(mut self) -> Self {
        self.body = None;
        self
    }

    pub fn query(mut self, schema: impl Into<Schema>) -> Self {
        self.query = Some(Payload::Typed(schema.into()));
        self
    }

    pub fn untyped_query(mut self) -> Self {
        self.query = Some(Payload::Untyped);
        self
    }

    pub fn response(mut self, schema: impl Into<Schema>) -> Self {
        self.response = Some(Payload::Typed(schema.into()));
        self
    }

    pub fn untyped_response(mut self) -> Self {
        self.response = Some(Payload::Untyped);
        self
    }

    pub fn template(&self) -> Result<PathTemplate, TemplateError> {
        PathTemplate::parse(&self.path)
    }

    /// Names of the generated function's arguments, in order: path
    /// parameters, then `query` and `body` when declared.
    pub fn argument_names(&self) -> Result<Vec<String>, TemplateError> {
        let mut names = self.template()?.parameter_names();
        if self.query.is_some() {
            names.push("query".to_string());
        }
        if self.body.is_some() {
            names.push("body".to_string());
        }
        Ok(names)
    }

    /// Render the `export async function` declaration calling this
    /// endpoint with `fetch`. Names are emitted as given;
    /// [`generate_client`](crate::codegen::generate_client) checks them.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] when the path template does not parse.
    pub fn declaration(&self, flavor: ClientFlavor) -> Result<String, TemplateError> {
        let template = self.template()?;
        let typed = flavor == ClientFlavor::Typed;

        let mut params: Vec<String> = template
            .parameter_names()
            .into_iter()
            .map(|name| if typed { format!("{name}: string") } else { name })
            .collect();
        if let Some(query) = &self.query {
            params.push(argument("query", query, "Record<string, string>", typed));
        }
        if let Some(body) = &self.body {
            params.push(argument("body", body, "any", typed));
        }

        let mut url = template.interpolated_path();
        if self.query.is_some() {
            url.push_str("?${new URLSearchParams(query)}");
        }

        let mut init = format!(
            "{{ method: '{}', headers: {{ 'Content-Type': 'application/json' }}",
            self.method.as_wire_str()
        );
        if self.body.is_some() {
            init.push_str(", body: JSON.stringify(body)");
        }
        init.push_str(" }");

        let call = format!("fetch(`{url}`, {init})");
        let (returns, body) = match &self.response {
            None => (String::new(), format!("  return {call};\n")),
            Some(response) => {
                let returns = if typed {
                    let projected = response.schema().map_or_else(|| "any".to_string(), project);
                    format!(": Promise<{projected}>")
                } else {
                    String::new()
                };
                (
                    returns,
                    format!("  return {call}.then((response) => response.json());\n"),
                )
            }
        };

        tracing::trace!(endpoint = %self.name, method = %self.method, "rendered client declaration");
        Ok(format!(
            "export async function {}({}){} {{\n{}}}\n",
            self.name,
            params.join(", "),
            returns,
            body
        ))
    }
}

fn default_body(method: HttpMethod) -> Option<Payload> {
    method.has_payload().then_some(Payload::Untyped)
}

fn argument(name: &str, payload: &Payload, untyped: &str, typed: bool) -> String {
    if !typed {
        return name.to_string();
    }
    match payload {
        Payload::Untyped => format!("{name}: {untyped}"),
        Payload::Typed(schema) => format!("{name}: {}", project(schema)),
    }
}

/// Wire form of a payload slot: a flag or a schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum PayloadRepr {
    Flag(bool),
    Schema(Schema),
}

impl PayloadRepr {
    fn into_payload(self) -> Option<Payload> {
        match self {
            Self::Flag(true) => Some(Payload::Untyped),
            Self::Flag(false) => None,
            Self::Schema(schema) => Some(Payload::Typed(schema)),
        }
    }

    fn from_payload(payload: Option<Payload>) -> Self {
        match payload {
            None => Self::Flag(false),
            Some(Payload::Untyped) => Self::Flag(true),
            Some(Payload::Typed(schema)) => Self::Schema(schema),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct EndpointRepr {
    name: String,
    method: HttpMethod,
    path: String,
    #[serde(default)]
    body: Option<PayloadRepr>,
    #[serde(default)]
    query: Option<PayloadRepr>,
    #[serde(default)]
    response: Option<PayloadRepr>,
}

impl From<EndpointRepr> for EndpointDescriptor {
    fn from(repr: EndpointRepr) -> Self {
        let body = match repr.body {
            Some(body) => body.into_payload(),
            None => default_body(repr.method),
        };
        Self {
            name: repr.name,
            method: repr.method,
            path: repr.path,
            body,
            query: repr.query.and_then(PayloadRepr::into_payload),
            response: repr.response.and_then(PayloadRepr::into_payload),
        }
    }
}

impl From<EndpointDescriptor> for EndpointRepr {
    fn from(endpoint: EndpointDescriptor) -> Self {
        Self {
            name: endpoint.name,
            method: endpoint.method,
            path: endpoint.path,
            body: Some(PayloadRepr::from_payload(endpoint.body)),
            query: Some(PayloadRepr::from_payload(endpoint.query)),
            response: Some(PayloadRepr::from_payload(endpoint.response)),
        }
    }
}
