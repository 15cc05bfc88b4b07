//! Catalog configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no file
//! at all) gives a working sequential-id catalog seeded with the house menu.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {field}: {reason}")]
    Invalid { field: String, reason: String },
}

/// How new menu items get their ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// "1", "2", "3", ...
    #[default]
    Sequential,
    /// Random v4 UUIDs
    Uuid,
}

fn default_true() -> bool {
    true
}

fn default_currency_symbol() -> String {
    "R".to_string()
}

fn default_filter_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// tracing filter directive; RUST_LOG overrides it when set
    #[serde(default = "default_filter_level")]
    pub filter_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter_level: default_filter_level(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Start with the house menu instead of an empty catalog
    #[serde(default = "default_true")]
    pub seed_default_menu: bool,

    /// Prefix for rendered prices
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default)]
    pub log: LogConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            seed_default_menu: true,
            currency_symbol: default_currency_symbol(),
            log: LogConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Read, parse and validate a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "currency_symbol".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.log.filter_level.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "log.filter_level".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
        assert!(config.seed_default_menu);
        assert_eq!(config.currency_symbol, "R");
        assert_eq!(config.log.filter_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = CatalogConfig::from_toml("").unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_deserialize_all_fields() {
        let toml = r#"
            id_strategy = "uuid"
            seed_default_menu = false
            currency_symbol = "$"

            [log]
            filter_level = "menu_core=debug"
        "#;

        let config = CatalogConfig::from_toml(toml).unwrap();
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
        assert!(!config.seed_default_menu);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.log.filter_level, "menu_core=debug");
    }

    #[test]
    fn test_unknown_id_strategy_rejected() {
        let result = CatalogConfig::from_toml(r#"id_strategy = "timestamp""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation() {
        let mut config = CatalogConfig::default();

        config.currency_symbol = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { ref field, .. }) if field == "currency_symbol"
        ));

        config.currency_symbol = "R".to_string();
        config.log.filter_level = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CatalogConfig {
            id_strategy: IdStrategy::Uuid,
            ..CatalogConfig::default()
        };

        let toml_str = config.to_toml().unwrap();
        assert!(toml_str.contains("id_strategy = \"uuid\""));
        assert_eq!(CatalogConfig::from_toml(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed_default_menu = false").unwrap();

        let config = CatalogConfig::from_file(file.path()).unwrap();
        assert!(!config.seed_default_menu);
    }

    #[test]
    fn test_from_missing_file() {
        let result = CatalogConfig::from_file("/definitely/not/here/menu.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_from_file_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "currency_symbol = \"\"").unwrap();

        let result = CatalogConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }
}
