///
/// # Runtime Configuration
///
/// Settings for the runtime a compiled program starts with. They are read
/// from the `[runtime]` table of a TOML document; every field is optional.
///
/// ## Example
///
/// ```toml
/// [runtime]
/// log_level = "debug"
/// log_ansi = false
/// preload_keywords = ["ok", "error", "pending"]
/// ```
///
/// `preload_keywords` are interned during `init`, so the first use of a
/// common tag in generated code does not pay for registration.
///

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::errors::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub log_level: String,
    pub log_ansi: bool,
    pub preload_keywords: Vec<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_ansi: false,
            preload_keywords: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    runtime: RuntimeConfig,
}

impl RuntimeConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, RuntimeError> {
        let document: ConfigDocument = toml::from_str(source)?;
        document.runtime.level()?;
        Ok(document.runtime)
    }

    pub fn level(&self) -> Result<Level, RuntimeError> {
        Level::from_str(self.log_level.trim()).map_err(|_| RuntimeError::InvalidLogLevel {
            value: self.log_level.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = RuntimeConfig::from_toml_str(
            r#"
[runtime]
log_level = "debug"
log_ansi = true
preload_keywords = ["ok", "error"]
"#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.log_ansi);
        assert_eq!(config.preload_keywords, vec!["ok", "error"]);
        assert_eq!(config.level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_missing_table_uses_defaults() {
        let config = RuntimeConfig::from_toml_str("").unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.level().unwrap(), Level::WARN);
    }

    #[test]
    fn test_partial_table_uses_defaults() {
        let config = RuntimeConfig::from_toml_str("[runtime]\nlog_level = \"info\"\n").unwrap();
        assert_eq!(config.log_level, "info");
        assert!(config.preload_keywords.is_empty());
    }

    #[test]
    fn test_invalid_level_rejected() {
        let err = RuntimeConfig::from_toml_str("[runtime]\nlog_level = \"loud\"\n").unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidLogLevel { ref value } if value == "loud"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = RuntimeConfig::from_toml_str("[runtime\n").unwrap_err();
        assert!(matches!(err, RuntimeError::Toml(_)));
    }
}
