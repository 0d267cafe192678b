//! # Schema Algebra
//!
//! The vocabulary a caller describes data shapes with. A [`Schema`] is an
//! explicit sum type with one variant per structure kind; validation and
//! projection dispatch on it with exhaustive `match`es, so a plain shape can
//! never be mistaken for an array or union node.
//!
//! Construction never fails. Malformed trees (an empty union, an
//! intersection over a scalar) are reported when they are validated.
//!
//! ## Serialization
//!
//! Schemas serialize in an externally tagged, snake_case encoding so that
//! endpoint manifests can carry them:
//!
//! ```json
//! { "shape": [
//!     { "name": "id", "optional": true, "schema": { "primitive": "number" } },
//!     { "name": "tags", "schema": { "array_of": { "primitive": "string" } } }
//! ] }
//! ```
//!
//! Predicates of refined schemas are code and are never serialized.

use std::fmt;
use std::sync::Arc;

use frapi_core::META_PREFIX;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Runtime kinds a primitive schema can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    String,
    Number,
    Boolean,
    Null,
}

impl Primitive {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }

    /// Whether `value` has this runtime kind.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Null => value.is_null(),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An exact scalar a value must equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    String(String),
    Number(Number),
}

impl Literal {
    /// `"string"` or `"number"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
        }
    }

    /// Exact equality: no coercion between strings and numbers, no case
    /// folding, no numeric tolerance.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::String(expected), Value::String(actual)) => expected == actual,
            (Self::Number(expected), Value::Number(actual)) => numbers_equal(expected, actual),
            _ => false,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::String(s) => Value::String(s.clone()),
            Self::Number(n) => Value::Number(n.clone()),
        }
    }
}

/// Numeric equality across serde_json's integer and float storage, so that
/// `41` and `41.0` are the same number.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

impl Literal {
    /// Numeric literal from a float. `None` for NaN and infinities, which
    /// have no JSON representation.
    pub fn from_f64(n: f64) -> Option<Self> {
        Number::from_f64(n).map(Self::Number)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for Literal {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<Number> for Literal {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

/// One declared field of a [`Shape`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
    pub schema: Schema,
}

impl Field {
    /// Declared names starting with the meta prefix are ignored by
    /// validation and projection.
    pub fn is_meta(&self) -> bool {
        self.name.starts_with(META_PREFIX)
    }
}

/// An object-like schema: a fixed set of named fields.
///
/// Names are unique. Declaring a name twice replaces the earlier field in
/// place, keeping its position. Declaration order is kept for projection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Field>", into = "Vec<Field>")]
pub struct Shape {
    fields: Vec<Field>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a required field.
    pub fn field(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.insert(Field {
            name: name.into(),
            optional: false,
            schema: schema.into(),
        });
        self
    }

    /// Declare an optional field.
    pub fn optional(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.insert(Field {
            name: name.into(),
            optional: true,
            schema: schema.into(),
        });
        self
    }

    pub fn insert(&mut self, field: Field) {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// All fields in declaration order, meta fields included.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Fields that take part in validation and projection.
    pub fn declared(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_meta())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<Field>> for Shape {
    fn from(fields: Vec<Field>) -> Self {
        let mut shape = Shape::new();
        for field in fields {
            shape.insert(field);
        }
        shape
    }
}

impl From<Shape> for Vec<Field> {
    fn from(shape: Shape) -> Self {
        shape.fields
    }
}

/// Outcome of a refinement predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
    /// The predicate failed with its own message.
    Error(String),
}

/// Conversion from a predicate's return value into a [`Verdict`].
///
/// Only an explicit `false` rejects. `true`, `()` and `None` all accept;
/// an `Err` is reported with its message.
pub trait IntoVerdict {
    fn into_verdict(self) -> Verdict;
}

impl IntoVerdict for Verdict {
    fn into_verdict(self) -> Verdict {
        self
    }
}

impl IntoVerdict for bool {
    fn into_verdict(self) -> Verdict {
        if self {
            Verdict::Accept
        } else {
            Verdict::Reject
        }
    }
}

impl IntoVerdict for () {
    fn into_verdict(self) -> Verdict {
        Verdict::Accept
    }
}

impl IntoVerdict for Option<bool> {
    fn into_verdict(self) -> Verdict {
        match self {
            Some(false) => Verdict::Reject,
            Some(true) | None => Verdict::Accept,
        }
    }
}

impl<T: IntoVerdict, E: fmt::Display> IntoVerdict for Result<T, E> {
    fn into_verdict(self) -> Verdict {
        match self {
            Ok(inner) => inner.into_verdict(),
            Err(e) => Verdict::Error(e.to_string()),
        }
    }
}

/// A pure post-validation check owned by a refined schema.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&Value) -> Verdict + Send + Sync>);

impl Predicate {
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: IntoVerdict,
    {
        Self(Arc::new(move |value| f(value).into_verdict()))
    }

    pub fn check(&self, value: &Value) -> Verdict {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// A node of the schema algebra.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schema {
    Primitive(Primitive),
    Literal(Literal),
    Shape(Shape),
    ArrayOf(Box<Schema>),
    MapOf(Box<Schema>),
    /// Ordered alternatives; the first that accepts wins.
    AnyOf(Vec<Schema>),
    /// Shape-like members that must all accept.
    AllOf(Vec<Schema>),
    Refined {
        base: Box<Schema>,
        #[serde(skip)]
        predicate: Option<Predicate>,
    },
}

impl Schema {
    pub fn string() -> Self {
        Self::Primitive(Primitive::String)
    }

    pub fn number() -> Self {
        Self::Primitive(Primitive::Number)
    }

    pub fn boolean() -> Self {
        Self::Primitive(Primitive::Boolean)
    }

    pub fn null() -> Self {
        Self::Primitive(Primitive::Null)
    }

    pub fn literal(value: impl Into<Literal>) -> Self {
        Self::Literal(value.into())
    }

    pub fn shape(shape: Shape) -> Self {
        Self::Shape(shape)
    }

    pub fn array_of(inner: impl Into<Schema>) -> Self {
        Self::ArrayOf(Box::new(inner.into()))
    }

    pub fn map_of(inner: impl Into<Schema>) -> Self {
        Self::MapOf(Box::new(inner.into()))
    }

    pub fn any_of(variants: impl IntoIterator<Item = Schema>) -> Self {
        Self::AnyOf(variants.into_iter().collect())
    }

    pub fn all_of(variants: impl IntoIterator<Item = Schema>) -> Self {
        Self::AllOf(variants.into_iter().collect())
    }

    /// A refined node without a predicate; it behaves like `base`.
    pub fn refined(base: impl Into<Schema>) -> Self {
        Self::Refined {
            base: Box::new(base.into()),
            predicate: None,
        }
    }

    /// A refined node that runs `predicate` once `base` has accepted.
    ///
    /// ```
    /// use frapi_schema::Schema;
    ///
    /// let non_empty = Schema::refine(Schema::string(), |v| {
    ///     v.as_str().is_some_and(|s| !s.is_empty())
    /// });
    /// assert!(non_empty.validate(&serde_json::json!("ok")).is_ok());
    /// assert!(non_empty.validate(&serde_json::json!("")).is_err());
    /// ```
    pub fn refine<F, R>(base: impl Into<Schema>, predicate: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: IntoVerdict,
    {
        Self::Refined {
            base: Box::new(base.into()),
            predicate: Some(Predicate::new(predicate)),
        }
    }

    /// Field names declared by a shape-like node: a shape, a refined shape,
    /// every member of an intersection, or any variant of a union. Names
    /// are listed once, in first-declared order. Empty for anything else.
    pub fn declared_fields(&self) -> Vec<&str> {
        match self {
            Self::Shape(shape) => shape.declared().map(|f| f.name.as_str()).collect(),
            Self::Refined { base, .. } => base.declared_fields(),
            Self::AllOf(members) | Self::AnyOf(members) => {
                let mut names: Vec<&str> = Vec::new();
                for name in members.iter().flat_map(Schema::declared_fields) {
                    if !names.contains(&name) {
                        names.push(name);
                    }
                }
                names
            }
            Self::Primitive(_) | Self::Literal(_) | Self::ArrayOf(_) | Self::MapOf(_) => Vec::new(),
        }
    }
}

impl From<Shape> for Schema {
    fn from(shape: Shape) -> Self {
        Self::Shape(shape)
    }
}

impl From<Primitive> for Schema {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}

impl From<Literal> for Schema {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}
