//! # frapi-core — Foundational Types for frapi
//!
//! Leaf crate of the workspace. Defines the primitives every other frapi
//! crate shares: the top-level error type, JSON/YAML document loading, the
//! fixed set of HTTP verbs an endpoint may declare, and the identifier
//! rules used when a field name has to be rendered either in an error path
//! or in a generated type.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `frapi-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod ident;
pub mod method;

pub use document::{load_document, parse_document, read_document, DocumentFormat};
pub use error::FrapiError;
pub use ident::{
    is_binding_name, is_reserved_word, is_simple_key, quote_key, render_key, META_PREFIX,
    RESERVED_WORDS,
};
pub use method::HttpMethod;
