//! # CLI Configuration
//!
//! Optional YAML file passed with the global `--config` flag. Every key is
//! optional; command-line flags take precedence over the file, and the file
//! over built-in defaults.
//!
//! ```yaml
//! strict: false
//! flavor: typed
//! output: generated/client.ts
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use frapi_schema::{ClientFlavor, ValidateOptions};
use serde::Deserialize;

/// Settings read from the `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Reject undeclared object fields when validating.
    pub strict: Option<bool>,
    /// Client flavor for `generate`.
    pub flavor: Option<ClientFlavor>,
    /// Output file for `generate`.
    pub output: Option<PathBuf>,
}

impl CliConfig {
    /// Load the file at `path`, or the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config YAML: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Validation options, with `lenient` from the command line winning.
    pub fn validate_options(&self, lenient: bool) -> ValidateOptions {
        if lenient {
            ValidateOptions::lenient()
        } else {
            ValidateOptions {
                strict: self.strict.unwrap_or(true),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_gives_defaults() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.validate_options(false).strict);
    }

    #[test]
    fn test_load_yaml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frapi.yaml");
        std::fs::write(&path, "strict: false\nflavor: typed\noutput: out/client.ts\n").unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.strict, Some(false));
        assert_eq!(config.flavor, Some(ClientFlavor::Typed));
        assert_eq!(config.output, Some(PathBuf::from("out/client.ts")));
        assert!(!config.validate_options(false).strict);
    }

    #[test]
    fn test_lenient_flag_overrides_file() {
        let config = CliConfig {
            strict: Some(true),
            ..CliConfig::default()
        };
        assert!(!config.validate_options(true).strict);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frapi.yaml");
        std::fs::write(&path, "\n").unwrap();
        assert_eq!(CliConfig::load(Some(&path)).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frapi.yaml");
        std::fs::write(&path, "strictness: true\n").unwrap();
        let err = CliConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config YAML"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(Some(&dir.path().join("absent.yaml"))).unwrap_err();
        assert!(err.to_string().starts_with("failed to read config file"));
    }
}
