//! Configuration for response envelopes
//!
//! Controls how bodies are normalized before decoding. Loadable from YAML
//! so that a client can ship it alongside its other settings.

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Normalization settings shared by every envelope a client creates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeConfig {
    /// Remove nil-marked elements before decoding
    #[serde(default = "default_strip_nil")]
    pub strip_nil_elements: bool,

    /// Attribute local name that marks an element as nil (`nil="true"`)
    #[serde(default = "default_nil_attribute")]
    pub nil_attribute: String,

    /// Upper bound on the decompressed body size
    #[serde(default)]
    pub max_body_bytes: Option<usize>,
}

fn default_strip_nil() -> bool {
    true
}

fn default_nil_attribute() -> String {
    "nil".to_string()
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            strip_nil_elements: default_strip_nil(),
            nil_attribute: default_nil_attribute(),
            max_body_bytes: None,
        }
    }
}

impl EnvelopeConfig {
    /// Create a new config builder
    pub fn builder() -> EnvelopeConfigBuilder {
        EnvelopeConfigBuilder::default()
    }

    /// Parse a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("Failed to parse YAML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }

    /// Check that the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.nil_attribute.trim().is_empty() {
            return Err(Error::config("nil_attribute must not be empty"));
        }
        if self.max_body_bytes == Some(0) {
            return Err(Error::config("max_body_bytes must be greater than zero"));
        }
        Ok(())
    }
}

/// Builder for envelope config
#[derive(Default)]
pub struct EnvelopeConfigBuilder {
    config: EnvelopeConfig,
}

impl EnvelopeConfigBuilder {
    /// Enable or disable nil stripping
    pub fn strip_nil_elements(mut self, enabled: bool) -> Self {
        self.config.strip_nil_elements = enabled;
        self
    }

    /// Set the nil marker attribute name
    pub fn nil_attribute(mut self, name: impl Into<String>) -> Self {
        self.config.nil_attribute = name.into();
        self
    }

    /// Cap the decompressed body size
    pub fn max_body_bytes(mut self, limit: usize) -> Self {
        self.config.max_body_bytes = Some(limit);
        self
    }

    /// Build the config
    pub fn build(self) -> EnvelopeConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = EnvelopeConfig::default();
        assert!(config.strip_nil_elements);
        assert_eq!(config.nil_attribute, "nil");
        assert!(config.max_body_bytes.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = EnvelopeConfig::builder()
            .strip_nil_elements(false)
            .nil_attribute("null")
            .max_body_bytes(1024)
            .build();

        assert!(!config.strip_nil_elements);
        assert_eq!(config.nil_attribute, "null");
        assert_eq!(config.max_body_bytes, Some(1024));
    }

    #[test]
    fn test_config_from_yaml_defaults() {
        let config = EnvelopeConfig::from_yaml_str("max_body_bytes: 4096\n").unwrap();
        assert!(config.strip_nil_elements);
        assert_eq!(config.nil_attribute, "nil");
        assert_eq!(config.max_body_bytes, Some(4096));
    }

    #[test]
    fn test_config_from_yaml_invalid() {
        let err = EnvelopeConfig::from_yaml_str("strip_nil_elements: maybe\n").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("Failed to parse YAML"));

        let err = EnvelopeConfig::from_yaml_str("nil_attribute: \"\"\n").unwrap_err();
        assert!(err.to_string().contains("nil_attribute"));

        let err = EnvelopeConfig::from_yaml_str("max_body_bytes: 0\n").unwrap_err();
        assert!(err.to_string().contains("max_body_bytes"));
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "strip_nil_elements: false").unwrap();
        writeln!(file, "nil_attribute: absent").unwrap();

        let config = EnvelopeConfig::from_file(file.path()).unwrap();
        assert!(!config.strip_nil_elements);
        assert_eq!(config.nil_attribute, "absent");
    }

    #[test]
    fn test_config_from_missing_file() {
        let err = EnvelopeConfig::from_file("/nonexistent/envelope.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
