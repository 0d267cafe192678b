//! # Type Projection
//!
//! Renders a [`Schema`] as a TypeScript type expression, so that client
//! bindings are derived from the same schema that validates the boundary.
//! Dispatch mirrors validation: every variant has exactly one rendering,
//! and refinement predicates have no type-level form.

use frapi_core::render_key;

use crate::schema::{Schema, Shape};

/// Type expression for `schema`.
///
/// An empty union or intersection renders as `never`.
pub fn project(schema: &Schema) -> String {
    match schema {
        Schema::Primitive(primitive) => primitive.as_str().to_string(),
        Schema::Literal(literal) => literal.to_value().to_string(),
        Schema::ArrayOf(inner) => {
            let element = project(inner);
            if is_compound(inner, true) {
                format!("({element})[]")
            } else {
                format!("{element}[]")
            }
        }
        Schema::MapOf(inner) => format!("Record<string, {}>", project(inner)),
        Schema::AnyOf(variants) => join(variants, " | ", false),
        Schema::AllOf(members) => join(members, " & ", true),
        Schema::Refined { base, .. } => project(base),
        Schema::Shape(shape) => project_shape(shape),
    }
}

impl Schema {
    /// Shorthand for [`project`].
    pub fn type_expression(&self) -> String {
        project(self)
    }
}

fn join(members: &[Schema], separator: &str, in_intersection: bool) -> String {
    if members.is_empty() {
        return "never".to_string();
    }
    members
        .iter()
        .map(|member| {
            let rendered = project(member);
            if in_intersection && is_compound(member, false) {
                format!("({rendered})")
            } else {
                rendered
            }
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Whether `schema` renders as an operator expression that has to be
/// parenthesized as an operand. Unions always do; intersections only
/// under the array suffix.
fn is_compound(schema: &Schema, include_intersections: bool) -> bool {
    match schema {
        Schema::Refined { base, .. } => is_compound(base, include_intersections),
        Schema::AnyOf(variants) => variants.len() > 1,
        Schema::AllOf(members) => include_intersections && members.len() > 1,
        Schema::Primitive(_)
        | Schema::Literal(_)
        | Schema::Shape(_)
        | Schema::ArrayOf(_)
        | Schema::MapOf(_) => false,
    }
}

fn project_shape(shape: &Shape) -> String {
    let properties: Vec<String> = shape
        .declared()
        .map(|field| {
            format!(
                "{}{}: {}",
                render_key(&field.name),
                if field.optional { "?" } else { "" },
                project(&field.schema)
            )
        })
        .collect();
    if properties.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", properties.join("; "))
    }
}
