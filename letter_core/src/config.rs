//! Engine configuration, loadable from a TOML file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use letter_model::Language;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cache::DEFAULT_TTL_SECS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Engine parameters. Every field has a default, so a partial (or empty)
/// TOML document is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fallback target when a requested language has no variant.
    pub default_language: Language,

    /// Node the graph is entered at.
    pub root_node: String,

    /// Shared time-to-live for every cache entry, in seconds.
    pub cache_ttl_secs: u64,

    /// Sheet holding the content graph rows.
    pub questions_sheet: String,

    /// Sheet holding supplement ("letter") rows.
    pub supplement_sheet: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            root_node: "home".to_string(),
            cache_ttl_secs: DEFAULT_TTL_SECS,
            questions_sheet: "Questions".to_string(),
            supplement_sheet: "Letter_Content".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// The cache time-to-live as a duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();

        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.root_node, "home");
        assert_eq!(config.cache_ttl_secs, 300);
        assert_eq!(config.questions_sheet, "Questions");
        assert_eq!(config.supplement_sheet, "Letter_Content");
    }

    #[test]
    fn test_empty_document_is_all_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = EngineConfig::from_toml_str(
            r#"
            default_language = "fa"
            cache_ttl_secs = 60
            "#,
        )
        .unwrap();

        assert_eq!(config.default_language, Language::Fa);
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
        assert_eq!(config.root_node, "home");
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        assert!(matches!(
            EngineConfig::from_toml_str("cache_ttl_secs = \"soon\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
