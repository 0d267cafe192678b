//! # Path Templates
//!
//! Parses route templates such as `/users/:id/files/*` into tagged parts.
//! The parameter names found here become the leading arguments of
//! generated client functions, and the parts are re-assembled into the
//! interpolated request path (`/users/${id}/files/${wildcard}`).
//!
//! Supported syntax: literal text, `/` separators, `:name` parameters
//! (`[A-Za-z0-9_]+`), `*` wildcards, and `\x` escapes, which are kept
//! verbatim as the two characters `\` and `x`. The quantifiers `+` and `?`
//! are rejected.

use std::str::FromStr;

use thiserror::Error;

/// One tagged piece of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    Text(String),
    Separator,
    Param(String),
    Wildcard,
}

/// A path template could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `:` not followed by a parameter name.
    #[error("empty param name at position {position} in path template {template:?}")]
    EmptyParamName { template: String, position: usize },

    /// `+` or `?` appeared in the template.
    #[error("{quantifier} is not supported (position {position} in path template {template:?})")]
    UnsupportedQuantifier {
        template: String,
        quantifier: char,
        position: usize,
    },
}

/// Split `template` into tagged parts.
///
/// # Errors
///
/// Returns [`TemplateError::EmptyParamName`] for a `:` without a name and
/// [`TemplateError::UnsupportedQuantifier`] for `+` or `?`.
pub fn parse_template(template: &str) -> Result<Vec<TemplatePart>, TemplateError> {
    let mut parts = Vec::new();
    let mut text = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '\\' => {
                text.push('\\');
                if let Some((_, escaped)) = chars.next() {
                    text.push(escaped);
                }
            }
            '/' => {
                flush_text(&mut parts, &mut text);
                parts.push(TemplatePart::Separator);
            }
            ':' => {
                flush_text(&mut parts, &mut text);
                let mut name = String::new();
                while let Some(&(_, next)) = chars.peek() {
                    if !(next.is_ascii_alphanumeric() || next == '_') {
                        break;
                    }
                    name.push(next);
                    chars.next();
                }
                if name.is_empty() {
                    return Err(TemplateError::EmptyParamName {
                        template: template.to_string(),
                        position,
                    });
                }
                parts.push(TemplatePart::Param(name));
            }
            '*' => {
                flush_text(&mut parts, &mut text);
                parts.push(TemplatePart::Wildcard);
            }
            '+' | '?' => {
                return Err(TemplateError::UnsupportedQuantifier {
                    template: template.to_string(),
                    quantifier: c,
                    position,
                });
            }
            other => text.push(other),
        }
    }

    flush_text(&mut parts, &mut text);
    Ok(parts)
}

fn flush_text(parts: &mut Vec<TemplatePart>, text: &mut String) {
    if !text.is_empty() {
        parts.push(TemplatePart::Text(std::mem::take(text)));
    }
}

/// A parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    parts: Vec<TemplatePart>,
}

impl PathTemplate {
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            parts: parse_template(template)?,
        })
    }

    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    /// Argument names in template order. Wildcards are named `wildcard`,
    /// `wildcard2`, `wildcard3`, …
    pub fn parameter_names(&self) -> Vec<String> {
        self.named_parts()
            .into_iter()
            .filter_map(|(_, name)| name)
            .collect()
    }

    /// The template as the body of a JavaScript template literal, with
    /// each parameter replaced by `${name}`.
    pub fn interpolated_path(&self) -> String {
        let mut out = String::new();
        for (part, name) in self.named_parts() {
            match (part, name) {
                (_, Some(name)) => {
                    out.push_str("${");
                    out.push_str(&name);
                    out.push('}');
                }
                (TemplatePart::Text(text), None) => out.push_str(&escape_template_literal(text)),
                (TemplatePart::Separator, None) => out.push('/'),
                (TemplatePart::Param(_) | TemplatePart::Wildcard, None) => {}
            }
        }
        out
    }

    /// Pairs every part with its argument name, if it is a parameter.
    fn named_parts(&self) -> Vec<(&TemplatePart, Option<String>)> {
        let mut wildcard_index = 1;
        self.parts
            .iter()
            .map(|part| {
                let name = match part {
                    TemplatePart::Param(name) => Some(name.clone()),
                    TemplatePart::Wildcard => {
                        let name = if wildcard_index == 1 {
                            "wildcard".to_string()
                        } else {
                            format!("wildcard{wildcard_index}")
                        };
                        wildcard_index += 1;
                        Some(name)
                    }
                    TemplatePart::Text(_) | TemplatePart::Separator => None,
                };
                (part, name)
            })
            .collect()
    }
}

impl FromStr for PathTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Escape characters that are special inside a JavaScript template literal.
fn escape_template_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '`' | '$') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
