//! # frapi-schema — Runtime Schemas, Validation & Client Projection
//!
//! A schema here is a runtime value: a tree of [`Schema`] nodes built once
//! and then used both to check payloads and to describe them as types.
//!
//! ## Validation (`validate`)
//!
//! [`validate`](validate::validate) walks a value alongside its schema and
//! either returns the value unchanged or a single [`ValidationError`]
//! addressed by path, e.g. `Field items[2]. Expected to be a string but got: 3`.
//!
//! ## Projection (`project`, `endpoint`, `codegen`)
//!
//! [`project`](project::project) renders a schema as a TypeScript type.
//! [`EndpointDescriptor::declaration`] turns an endpoint into a `fetch`
//! client function, and [`generate_client`] assembles a module of them.
//!
//! ## Boundary Checks (`boundary`)
//!
//! [`check_request`] and [`check_response`] apply an endpoint's schemas to
//! the payloads crossing an HTTP boundary.
//!
//! ## Crate Policy
//!
//! - Depends only on `frapi-core` internally.
//! - Validation is a trust boundary: values are never coerced or stripped.
//! - Schemas are `Send + Sync`; every operation is synchronous and pure.

pub mod boundary;
pub mod codegen;
pub mod endpoint;
pub mod path;
pub mod project;
pub mod schema;
pub mod template;
pub mod validate;

pub use boundary::{check_request, check_response, BoundaryError};
pub use codegen::{generate_client, ClientFlavor, CodegenError, GENERATED_HEADER};
pub use endpoint::{EndpointDescriptor, Payload};
pub use path::{format_path, DisplayPath, PathSegment};
pub use project::project;
pub use schema::{Field, IntoVerdict, Literal, Predicate, Primitive, Schema, Shape, Verdict};
pub use template::{parse_template, PathTemplate, TemplateError, TemplatePart};
pub use validate::{validate, ValidateOptions, ValidationError, ValidationErrorKind};
