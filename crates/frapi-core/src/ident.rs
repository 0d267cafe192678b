//! # Identifier Keys
//!
//! Field names show up in two rendered forms: error paths
//! (`user.address["zip-code"]`) and projected object types
//! (`{ "zip-code": string }`). Both use the same rule for deciding whether
//! a key can appear bare or has to be quoted, so it lives here.
//!
//! Generated client code adds a third use: endpoint and parameter names
//! become JavaScript bindings, which must also avoid reserved words.

/// Prefix reserved for meta keys. Values may never carry fields that start
/// with it, and declared fields that start with it are ignored.
pub const META_PREFIX: char = '$';

/// Returns true if `key` is identifier-shaped: `[A-Za-z_$][A-Za-z0-9_$]*`.
pub fn is_simple_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Words that cannot name a binding in strict-mode (module) JavaScript.
pub const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue",
    "debugger", "default", "delete", "do", "else", "enum", "eval", "export", "extends",
    "false", "finally", "for", "function", "if", "implements", "import", "in",
    "instanceof", "interface", "let", "new", "null", "package", "private", "protected",
    "public", "return", "static", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with", "yield",
];

pub fn is_reserved_word(key: &str) -> bool {
    RESERVED_WORDS.contains(&key)
}

/// Returns true if `key` can name a function or parameter in generated code.
pub fn is_binding_name(key: &str) -> bool {
    is_simple_key(key) && !is_reserved_word(key)
}

/// Wrap `key` in double quotes, escaping embedded double quotes.
pub fn quote_key(key: &str) -> String {
    format!("\"{}\"", key.replace('"', "\\\""))
}

/// Render `key` bare when it is identifier-shaped, quoted otherwise.
pub fn render_key(key: &str) -> String {
    if is_simple_key(key) {
        key.to_string()
    } else {
        quote_key(key)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Identifier-shaped keys are always rendered bare.
        #[test]
        fn identifiers_render_bare(key in "[A-Za-z_$][A-Za-z0-9_$]{0,12}") {
            prop_assert_eq!(render_key(&key), key);
        }

        /// Quoted keys round-trip through a JSON string parse when they
        /// contain no backslashes or control characters.
        #[test]
        fn quoted_keys_parse_as_json(key in "[a-z \"\\-]{0,12}") {
            let quoted = quote_key(&key);
            let parsed: String = serde_json::from_str(&quoted).unwrap();
            prop_assert_eq!(parsed, key);
        }
    }
}
