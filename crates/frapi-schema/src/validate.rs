//! # Schema Validation
//!
//! Recursive validation of runtime values against a [`Schema`].
//!
//! ## Trust Boundary
//!
//! Validation is the gate between untrusted payloads and typed handling.
//! A value is either accepted unchanged (the validator never coerces,
//! fills defaults, or strips fields) or rejected with a single
//! [`ValidationError`] that names the exact location of the problem and
//! renders the offending value as a JSON literal.
//!
//! ## Strictness
//!
//! Under strict validation (the default) an object may only carry the
//! fields its shape declares. Fields starting with `$` are rejected in
//! every mode. Intersections validate each member leniently and then apply
//! strictness once, against the union of all members' fields.
//!
//! ## Unions
//!
//! Union members are tried in order and the first one that accepts wins.
//! When none accepts, the individual member failures are discarded and a
//! single "one of union types" error is reported.

use std::collections::BTreeSet;

use frapi_core::META_PREFIX;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::path::{format_path, DisplayPath, Frame, PathSegment};
use crate::project::project;
use crate::schema::{Primitive, Schema, Shape, Verdict};

/// Options for a validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateOptions {
    /// Reject object fields the schema does not declare.
    pub strict: bool,
}

impl ValidateOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self::strict()
    }
}

/// What went wrong, independent of where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// A scalar had the wrong kind or did not equal the expected literal.
    ShapeMismatch,
    /// Expected an array, map or object and got something else.
    StructureMismatch,
    /// A required field was absent.
    MissingField,
    /// An undeclared field under strict validation, or a `$` field.
    UnexpectedField,
    /// No union member accepted the value.
    UnionExhausted,
    /// A refinement predicate returned `false`.
    CustomValidationFailed,
    /// A refinement predicate failed with its own error.
    CustomValidationError,
    /// The schema itself is malformed.
    SchemaAuthoring,
}

impl ValidationErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShapeMismatch => "shape_mismatch",
            Self::StructureMismatch => "structure_mismatch",
            Self::MissingField => "missing_field",
            Self::UnexpectedField => "unexpected_field",
            Self::UnionExhausted => "union_exhausted",
            Self::CustomValidationFailed => "custom_validation_failed",
            Self::CustomValidationError => "custom_validation_error",
            Self::SchemaAuthoring => "schema_authoring",
        }
    }
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value did not conform to its schema.
///
/// The message is `Field <path>. <reason>` when the failure is below the
/// root, or just `<reason>` at the root.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    kind: ValidationErrorKind,
    path: Vec<PathSegment>,
    reason: String,
    message: String,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, path: Vec<PathSegment>, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        let message = if path.is_empty() {
            reason.clone()
        } else {
            format!("Field {}. {}", DisplayPath(&path), reason)
        };
        Self {
            kind,
            path,
            reason,
            message,
        }
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// The path rendered as in the message, empty at the root.
    pub fn path_string(&self) -> String {
        format_path(&self.path)
    }

    /// The failure description without the path prefix.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Reclassify a type failure on an absent value as a missing field.
    fn into_missing(mut self) -> Self {
        if matches!(
            self.kind,
            ValidationErrorKind::ShapeMismatch
                | ValidationErrorKind::StructureMismatch
                | ValidationErrorKind::UnionExhausted
        ) {
            self.kind = ValidationErrorKind::MissingField;
        }
        self
    }
}

/// Validate `value` against `schema`.
///
/// Returns the value itself on success; validation never transforms data.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered in a depth-first walk
/// of the schema.
pub fn validate<'v>(
    schema: &Schema,
    value: &'v Value,
    options: ValidateOptions,
) -> Result<&'v Value, ValidationError> {
    check(schema, Some(value), options.strict, &Frame::Root)?;
    Ok(value)
}

impl Schema {
    /// Validate with the default (strict) options.
    pub fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, ValidationError> {
        validate(self, value, ValidateOptions::default())
    }

    pub fn validate_with<'v>(
        &self,
        value: &'v Value,
        options: ValidateOptions,
    ) -> Result<&'v Value, ValidationError> {
        validate(self, value, options)
    }
}

/// JSON rendering of the value under test; `undefined` when absent.
fn repr(found: Option<&Value>) -> String {
    match found {
        Some(value) => value.to_string(),
        None => "undefined".to_string(),
    }
}

fn fail(kind: ValidationErrorKind, path: &Frame<'_>, reason: String) -> ValidationError {
    ValidationError::new(kind, path.segments(), reason)
}

/// `found` is `None` when a declared field is absent from its object.
fn check(
    schema: &Schema,
    found: Option<&Value>,
    strict: bool,
    path: &Frame<'_>,
) -> Result<(), ValidationError> {
    match schema {
        Schema::Primitive(kind) => match found {
            Some(value) if kind.matches(value) => Ok(()),
            _ => {
                let reason = match kind {
                    Primitive::Null => format!("Expected to be null but got: {}", repr(found)),
                    _ => format!("Expected to be a {kind} but got: {}", repr(found)),
                };
                Err(fail(ValidationErrorKind::ShapeMismatch, path, reason))
            }
        },

        Schema::Literal(literal) => match found {
            Some(value) if literal.matches(value) => Ok(()),
            _ => Err(fail(
                ValidationErrorKind::ShapeMismatch,
                path,
                format!(
                    "Expected {} {} but got: {}",
                    literal.kind(),
                    literal.to_value(),
                    repr(found)
                ),
            )),
        },

        Schema::ArrayOf(inner) => {
            let Some(Value::Array(items)) = found else {
                return Err(fail(
                    ValidationErrorKind::StructureMismatch,
                    path,
                    format!("Expected to be an array but got: {}", repr(found)),
                ));
            };
            for (index, item) in items.iter().enumerate() {
                check(inner, Some(item), strict, &path.index(index))?;
            }
            Ok(())
        }

        Schema::MapOf(inner) => {
            let Some(Value::Object(entries)) = found else {
                return Err(fail(
                    ValidationErrorKind::StructureMismatch,
                    path,
                    format!("Expected to be an object but got: {}", repr(found)),
                ));
            };
            for (key, item) in entries {
                check(inner, Some(item), strict, &path.field(key))?;
            }
            Ok(())
        }

        Schema::AnyOf(variants) => {
            if variants.is_empty() {
                return Err(fail(
                    ValidationErrorKind::SchemaAuthoring,
                    path,
                    "Expected union to declare at least one variant".to_string(),
                ));
            }
            // Individual member failures are not reported.
            let matched = variants
                .iter()
                .any(|variant| check(variant, found, strict, path).is_ok());
            if matched {
                Ok(())
            } else {
                Err(fail(
                    ValidationErrorKind::UnionExhausted,
                    path,
                    format!("Expected to be an one of union types but got: {}", repr(found)),
                ))
            }
        }

        Schema::AllOf(members) => check_intersection(members, found, strict, path),

        Schema::Refined { base, predicate } => {
            check(base, found, strict, path)?;
            let (Some(predicate), Some(value)) = (predicate, found) else {
                return Ok(());
            };
            match predicate.check(value) {
                Verdict::Accept => Ok(()),
                Verdict::Reject => Err(fail(
                    ValidationErrorKind::CustomValidationFailed,
                    path,
                    format!("Custom validation failed for value: {value}"),
                )),
                Verdict::Error(message) => Err(fail(
                    ValidationErrorKind::CustomValidationError,
                    path,
                    message,
                )),
            }
        }

        Schema::Shape(shape) => check_shape(shape, found, strict, path),
    }
}

fn check_shape(
    shape: &Shape,
    found: Option<&Value>,
    strict: bool,
    path: &Frame<'_>,
) -> Result<(), ValidationError> {
    let Some(Value::Object(object)) = found else {
        return Err(fail(
            ValidationErrorKind::StructureMismatch,
            path,
            format!("Expected to be an object: {}", repr(found)),
        ));
    };

    for field in shape.declared() {
        let child = path.field(&field.name);
        match object.get(&field.name) {
            Some(value) => check(&field.schema, Some(value), strict, &child)?,
            None if field.optional => {}
            None => {
                if let Err(e) = check(&field.schema, None, strict, &child) {
                    return Err(e.into_missing());
                }
            }
        }
    }

    if strict {
        let allowed: BTreeSet<&str> = shape.declared().map(|f| f.name.as_str()).collect();
        check_fields(object, Some(&allowed), path)
    } else {
        check_fields(object, None, path)
    }
}

fn check_intersection(
    members: &[Schema],
    found: Option<&Value>,
    strict: bool,
    path: &Frame<'_>,
) -> Result<(), ValidationError> {
    if members.is_empty() {
        return Err(fail(
            ValidationErrorKind::SchemaAuthoring,
            path,
            "Expected intersection to declare at least one variant".to_string(),
        ));
    }
    if let Some(scalar) = members
        .iter()
        .find(|m| matches!(m, Schema::Primitive(_) | Schema::Literal(_)))
    {
        return Err(fail(
            ValidationErrorKind::SchemaAuthoring,
            path,
            format!(
                "Expected intersection member to be an object type but got: {}",
                project(scalar)
            ),
        ));
    }

    for member in members {
        check(member, found, false, path)?;
    }

    if strict {
        if let Some(Value::Object(object)) = found {
            let allowed: BTreeSet<&str> = members.iter().flat_map(Schema::declared_fields).collect();
            check_fields(object, Some(&allowed), path)?;
        }
    }
    Ok(())
}

/// Reject `$` fields always, and fields outside `allowed` when given.
fn check_fields(
    object: &Map<String, Value>,
    allowed: Option<&BTreeSet<&str>>,
    path: &Frame<'_>,
) -> Result<(), ValidationError> {
    for key in object.keys() {
        if key.starts_with(META_PREFIX) {
            return Err(fail(
                ValidationErrorKind::UnexpectedField,
                path,
                format!(
                    "Fields starting with {META_PREFIX} are forbidden: {}",
                    Value::String(key.clone())
                ),
            ));
        }
        if let Some(allowed) = allowed {
            if !allowed.contains(key.as_str()) {
                return Err(fail(
                    ValidationErrorKind::UnexpectedField,
                    path,
                    format!("Unexpected object property: {}", Value::String(key.clone())),
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Shape;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn err(schema: &Schema, value: Value) -> ValidationError {
        schema.validate(&value).unwrap_err()
    }

    #[test]
    fn test_primitives() {
        assert!(Schema::string().validate(&json!("test-string")).is_ok());
        assert!(Schema::number().validate(&json!(100)).is_ok());
        assert!(Schema::boolean().validate(&json!(true)).is_ok());
        assert!(Schema::null().validate(&json!(null)).is_ok());

        assert!(Schema::number().validate(&json!("test-string")).is_err());
        assert!(Schema::boolean().validate(&json!("test-string")).is_err());
        assert!(Schema::null().validate(&json!("test-string")).is_err());
    }

    #[test]
    fn test_primitive_message() {
        let e = err(&Schema::string(), json!(12));
        assert_eq!(e.kind(), ValidationErrorKind::ShapeMismatch);
        assert_eq!(e.message(), "Expected to be a string but got: 12");
        assert!(e.path().is_empty());

        let e = err(&Schema::null(), json!("x"));
        assert_eq!(e.message(), r#"Expected to be null but got: "x""#);
    }

    #[test]
    fn test_literals() {
        assert!(Schema::literal("test").validate(&json!("test")).is_ok());
        assert!(Schema::literal(41).validate(&json!(41)).is_ok());

        let e = err(&Schema::literal("test"), json!("another-string"));
        assert_eq!(e.message(), r#"Expected string "test" but got: "another-string""#);
        let e = err(&Schema::literal("test"), json!(12));
        assert_eq!(e.message(), r#"Expected string "test" but got: 12"#);
        let e = err(&Schema::literal(41), json!("41"));
        assert_eq!(e.message(), r#"Expected number 41 but got: "41""#);
    }

    #[test]
    fn test_object() {
        let schema = Schema::shape(Shape::new().field("id", Schema::number()));
        assert!(schema.validate(&json!({ "id": 100 })).is_ok());
        assert!(schema.validate(&json!({ "id": "100" })).is_err());

        let e = err(&schema, json!(100));
        assert_eq!(e.kind(), ValidationErrorKind::StructureMismatch);
        assert_eq!(e.message(), "Expected to be an object: 100");

        let e = err(&schema, json!([]));
        assert_eq!(e.kind(), ValidationErrorKind::StructureMismatch);
    }

    #[test]
    fn test_missing_field() {
        let schema = Schema::shape(Shape::new().field("id", Schema::string()));
        let e = err(&schema, json!({}));
        assert_eq!(e.kind(), ValidationErrorKind::MissingField);
        assert_eq!(e.message(), "Field id. Expected to be a string but got: undefined");
    }

    #[test]
    fn test_null_is_not_absent() {
        let schema = Schema::shape(Shape::new().optional("id", Schema::string()));
        let e = err(&schema, json!({ "id": null }));
        assert_eq!(e.kind(), ValidationErrorKind::ShapeMismatch);
        assert_eq!(e.message(), "Field id. Expected to be a string but got: null");
    }

    #[test]
    fn test_strict_rejects_extra_field() {
        let schema = Schema::shape(Shape::new().field("id", Schema::number()));
        let e = err(&schema, json!({ "id": 100, "name": "Test" }));
        assert_eq!(e.kind(), ValidationErrorKind::UnexpectedField);
        assert_eq!(e.message(), r#"Unexpected object property: "name""#);
    }

    #[test]
    fn test_lenient_accepts_extra_field() {
        let schema = Schema::shape(Shape::new().field("id", Schema::number()));
        let value = json!({ "id": 100, "name": "Test" });
        assert!(schema.validate_with(&value, ValidateOptions::lenient()).is_ok());
    }

    #[test]
    fn test_nested_object() {
        let schema = Schema::shape(
            Shape::new().field("user", Shape::new().field("name", Schema::string())),
        );
        assert!(schema.validate(&json!({ "user": { "name": "Test" } })).is_ok());
        let e = err(&schema, json!({ "user": { "name": 100 } }));
        assert_eq!(e.message(), "Field user.name. Expected to be a string but got: 100");
    }

    #[test]
    fn test_meta_declarations_are_skipped() {
        let schema = Schema::shape(
            Shape::new()
                .field("id", Schema::number())
                .field("$test", Schema::literal("Test")),
        );
        assert!(schema.validate(&json!({ "id": 100 })).is_ok());
    }

    #[test]
    fn test_meta_fields_rejected_in_every_mode() {
        let with_meta = Schema::shape(
            Shape::new()
                .field("id", Schema::number())
                .field("$test", Schema::literal("Test")),
        );
        let plain = Schema::shape(Shape::new().field("id", Schema::number()));
        let value = json!({ "id": 100, "$test": 12 });

        let e = err(&with_meta, value.clone());
        assert_eq!(e.kind(), ValidationErrorKind::UnexpectedField);
        assert_eq!(e.message(), r#"Fields starting with $ are forbidden: "$test""#);
        assert!(plain.validate(&value).is_err());
        assert!(plain.validate_with(&value, ValidateOptions::lenient()).is_err());
    }

    #[test]
    fn test_array_of() {
        let schema = Schema::array_of(Schema::string());
        assert!(schema.validate(&json!(["Test1", "Test2", "Test3"])).is_ok());
        let e = err(&schema, json!(["Test1", "Test2", "Test3", 100]));
        assert_eq!(e.message(), "Field [3]. Expected to be a string but got: 100");

        let e = err(&schema, json!({ "0": "a" }));
        assert_eq!(e.kind(), ValidationErrorKind::StructureMismatch);
        assert_eq!(e.message(), r#"Expected to be an array but got: {"0":"a"}"#);
    }

    #[test]
    fn test_array_of_objects() {
        let schema = Schema::array_of(Shape::new().field("name", Schema::string()));
        assert!(schema.validate(&json!([{ "name": "1" }, { "name": "2" }])).is_ok());
        let e = err(&schema, json!([{ "name": "1" }, { "name": 2 }]));
        assert_eq!(e.path_string(), "[1].name");
    }

    #[test]
    fn test_array_index_path() {
        let schema = Schema::shape(Shape::new().field("items", Schema::array_of(Schema::string())));
        let e = err(&schema, json!({ "items": ["One", "Two", 3] }));
        assert_eq!(e.message(), "Field items[2]. Expected to be a string but got: 3");
        assert_eq!(e.path(), &[PathSegment::from("items"), PathSegment::Index(2)]);
    }

    #[test]
    fn test_map_of() {
        let schema = Schema::map_of(Schema::string());
        assert!(schema.validate(&json!({ "a": "test", "b": "test2" })).is_ok());
        assert!(schema.validate(&json!({ "a": "test", "b": 100 })).is_err());

        let e = err(&schema, json!(["a"]));
        assert_eq!(e.kind(), ValidationErrorKind::StructureMismatch);
        assert_eq!(e.message(), r#"Expected to be an object but got: ["a"]"#);
    }

    #[test]
    fn test_map_of_objects() {
        let schema = Schema::map_of(Shape::new().field("name", Schema::string()));
        assert!(schema
            .validate(&json!({ "a": { "name": "test" }, "b": { "name": "test2" } }))
            .is_ok());
        assert!(schema
            .validate(&json!({ "a": { "name": "test" }, "b": { "name": 1 } }))
            .is_err());
    }

    #[test]
    fn test_map_key_path_quoting() {
        let schema = Schema::shape(Shape::new().field("items", Schema::map_of(Schema::string())));
        let e = err(&schema, json!({ "items": { "one": "one", "two": "two", "item-3": 3 } }));
        assert_eq!(
            e.message(),
            r#"Field items["item-3"]. Expected to be a string but got: 3"#
        );
    }

    #[test]
    fn test_union() {
        let schema = Schema::any_of([Schema::string(), Schema::number()]);
        assert!(schema.validate(&json!("test")).is_ok());
        assert!(schema.validate(&json!(100)).is_ok());

        let e = err(&schema, json!(true));
        assert_eq!(e.kind(), ValidationErrorKind::UnionExhausted);
        assert_eq!(e.message(), "Expected to be an one of union types but got: true");
    }

    #[test]
    fn test_map_of_union() {
        let schema = Schema::map_of(Schema::any_of([
            Shape::new().field("name", Schema::string()).into(),
            Schema::boolean(),
        ]));
        let value = json!({ "a": { "name": "test" }, "b": { "name": "test2" }, "c": false });
        assert!(schema.validate(&value).is_ok());
    }

    #[test]
    fn test_union_short_circuits_on_first_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let second = Schema::refine(Schema::string(), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });
        let schema = Schema::any_of([Schema::string(), second]);
        assert!(schema.validate(&json!("x")).is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_intersection() {
        let schema = Schema::all_of([
            Shape::new().field("age", Schema::number()).into(),
            Shape::new().field("surname", Schema::string()).into(),
        ]);
        assert!(schema.validate(&json!({ "age": 18, "surname": "Test" })).is_ok());

        let e = err(&schema, json!({ "age": 18, "name": "AA", "surname": "Test" }));
        assert_eq!(e.kind(), ValidationErrorKind::UnexpectedField);
        assert_eq!(e.message(), r#"Unexpected object property: "name""#);

        let lenient = json!({ "age": 18, "name": "AA", "surname": "Test" });
        assert!(schema.validate_with(&lenient, ValidateOptions::lenient()).is_ok());
    }

    #[test]
    fn test_intersection_with_union_member_allows_variant_fields() {
        let schema = Schema::all_of([
            Shape::new().field("a", Schema::number()).into(),
            Schema::any_of([
                Shape::new().field("b", Schema::number()).into(),
                Shape::new().field("c", Schema::number()).into(),
            ]),
        ]);
        assert!(schema.validate(&json!({ "a": 1, "b": 2 })).is_ok());
        assert!(schema.validate(&json!({ "a": 1, "c": 3 })).is_ok());

        let e = err(&schema, json!({ "a": 1, "b": 2, "d": 4 }));
        assert_eq!(e.kind(), ValidationErrorKind::UnexpectedField);
        assert_eq!(e.message(), r#"Unexpected object property: "d""#);

        let e = err(&schema, json!({ "a": 1 }));
        assert_eq!(e.kind(), ValidationErrorKind::UnionExhausted);
    }

    #[test]
    fn test_intersection_missing_property() {
        let schema = Schema::all_of([
            Shape::new().field("age", Schema::number()).into(),
            Shape::new()
                .field("name", Schema::string())
                .field("surname", Schema::string())
                .into(),
        ]);
        let e = err(&schema, json!({ "age": 18, "surname": "Test" }));
        assert_eq!(e.kind(), ValidationErrorKind::MissingField);
        assert_eq!(e.path_string(), "name");
    }

    #[test]
    fn test_intersection_authoring_errors() {
        let empty = Schema::all_of([]);
        assert_eq!(err(&empty, json!({})).kind(), ValidationErrorKind::SchemaAuthoring);

        let scalar = Schema::all_of([Shape::new().into(), Schema::string()]);
        let e = err(&scalar, json!({}));
        assert_eq!(e.kind(), ValidationErrorKind::SchemaAuthoring);
        assert_eq!(
            e.message(),
            "Expected intersection member to be an object type but got: string"
        );

        let empty_union = Schema::any_of([]);
        assert_eq!(err(&empty_union, json!(1)).kind(), ValidationErrorKind::SchemaAuthoring);
    }

    #[test]
    fn test_optional_fields() {
        let schema = Schema::shape(Shape::new().optional("id", Schema::string()));
        assert!(schema.validate(&json!({ "id": "test" })).is_ok());
        assert!(schema.validate(&json!({})).is_ok());
        let e = err(&schema, json!({ "id": 12 }));
        assert_eq!(e.message(), "Field id. Expected to be a string but got: 12");
    }

    #[test]
    fn test_refined_calls_predicate_with_value() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let log = seen.clone();
        let non_empty = Schema::refine(Schema::string(), move |v| {
            log.lock().unwrap().push(v.clone());
            v.as_str().is_some_and(|s| !s.is_empty())
        });
        assert!(non_empty.validate(&json!("Test")).is_ok());
        assert_eq!(*seen.lock().unwrap(), vec![json!("Test")]);
    }

    #[test]
    fn test_refined_base_checked_before_predicate() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let non_empty = Schema::refine(Schema::string(), move |v| {
            counter.fetch_add(1, Ordering::SeqCst);
            v.as_str().is_some_and(|s| !s.is_empty())
        });
        let e = err(&non_empty, json!(10));
        assert_eq!(e.kind(), ValidationErrorKind::ShapeMismatch);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_refined_false_rejects() {
        let non_empty = Schema::refine(Schema::string(), |v| v.as_str().is_some_and(|s| !s.is_empty()));
        let e = err(&non_empty, json!(""));
        assert_eq!(e.kind(), ValidationErrorKind::CustomValidationFailed);
        assert_eq!(e.message(), r#"Custom validation failed for value: """#);
    }

    #[test]
    fn test_refined_unit_and_none_accept() {
        let unit = Schema::refine(Schema::number(), |_| ());
        assert!(unit.validate(&json!(1)).is_ok());
        let none = Schema::refine(Schema::number(), |_| None::<bool>);
        assert!(none.validate(&json!(1)).is_ok());
        let refined = Schema::refined(Schema::number());
        assert!(refined.validate(&json!(1)).is_ok());
    }

    #[test]
    fn test_refined_error_message_at_path() {
        let schema = Schema::shape(Shape::new().field(
            "sampleField",
            Schema::refine(Schema::number(), |_| Err::<bool, _>("Test error")),
        ));
        let e = err(&schema, json!({ "sampleField": 120 }));
        assert_eq!(e.kind(), ValidationErrorKind::CustomValidationError);
        assert_eq!(e.reason(), "Test error");
        assert_eq!(e.message(), "Field sampleField. Test error");
    }

    #[test]
    fn test_returns_input_reference() {
        let schema = Schema::shape(
            Shape::new()
                .optional("id", Schema::number())
                .field("name", Schema::string())
                .field("items", Schema::array_of(Schema::string())),
        );
        let value = json!({ "id": 20, "name": "test", "items": ["one", "two"] });
        let accepted = schema.validate(&value).unwrap();
        assert!(std::ptr::eq(accepted, &value));
        assert_eq!(accepted, &value);
    }

    #[test]
    fn test_error_display_is_message() {
        let e = ValidationError::new(
            ValidationErrorKind::ShapeMismatch,
            vec!["a".into(), PathSegment::Index(1)],
            "boom",
        );
        assert_eq!(e.to_string(), "Field a[1]. boom");
        assert_eq!(e.to_string(), e.message());
    }
}
