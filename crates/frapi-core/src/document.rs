//! # Documents
//!
//! Schemas, manifests, and payloads are read from JSON or YAML files. The
//! format follows the file extension: `.yaml` and `.yml` are YAML,
//! everything else is JSON. Both parse into a [`serde_json::Value`] so
//! downstream code handles a single data model.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FrapiError;

/// Text encoding of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parse `text` into a JSON value.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<Value, FrapiError> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(text)?),
        DocumentFormat::Yaml => {
            serde_yaml::from_str(text).map_err(|e| FrapiError::Serialization(e.to_string()))
        }
    }
}

/// Read and parse the document at `path`.
pub fn read_document(path: &Path) -> Result<Value, FrapiError> {
    let text = std::fs::read_to_string(path)?;
    parse_document(&text, DocumentFormat::from_path(path))
}

/// Read the document at `path` and deserialize it into `T`.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, FrapiError> {
    Ok(serde_json::from_value(read_document(path)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.yml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("schema")), DocumentFormat::Json);
    }

    #[test]
    fn test_yaml_and_json_agree() {
        let yaml = parse_document("name: test\nitems: [1, 2]\n", DocumentFormat::Yaml).unwrap();
        let json = parse_document(r#"{"name":"test","items":[1,2]}"#, DocumentFormat::Json).unwrap();
        assert_eq!(yaml, json);
        assert_eq!(yaml, json!({"name": "test", "items": [1, 2]}));
    }

    #[test]
    fn test_parse_errors_are_serialization_errors() {
        assert!(matches!(
            parse_document("{", DocumentFormat::Json),
            Err(FrapiError::Serialization(_))
        ));
        assert!(matches!(
            parse_document("a: [", DocumentFormat::Yaml),
            Err(FrapiError::Serialization(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_document(Path::new("/nonexistent/frapi/doc.json")).unwrap_err();
        assert!(matches!(err, FrapiError::Io(_)));
    }
}
