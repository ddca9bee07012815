//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every invocation can live in
//! a config file:
//!
//! ```toml
//! # pqpstat.toml
//! [database]
//! busy_timeout_ms = 10000
//!
//! [output]
//! json = false
//! bar_width = 60
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use pqpstat::db::DatabaseConfig;

/// Root configuration structure for pqpstat.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseSection,

    /// Output formatting settings.
    #[serde(default)]
    pub output: OutputSection,
}

/// Configuration of the SQLite connection.
#[derive(Debug, Default, Deserialize)]
pub struct DatabaseSection {
    /// Milliseconds to wait on a locked database.
    pub busy_timeout_ms: Option<u64>,
}

/// Configuration of printed results.
#[derive(Debug, Default, Deserialize)]
pub struct OutputSection {
    /// Print JSON by default.
    pub json: Option<bool>,

    /// Maximum bar length of text histograms.
    pub bar_width: Option<usize>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Connection settings, falling back to the library defaults.
    pub fn database_config(&self) -> DatabaseConfig {
        let defaults = DatabaseConfig::default();
        DatabaseConfig {
            busy_timeout: self
                .database
                .busy_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.busy_timeout),
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [database]
            busy_timeout_ms = 10000

            [output]
            json = true
            bar_width = 60
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.database.busy_timeout_ms, Some(10_000));
        assert_eq!(config.output.json, Some(true));
        assert_eq!(config.output.bar_width, Some(60));
        assert_eq!(
            config.database_config().busy_timeout,
            Duration::from_secs(10)
        );
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [output]
            bar_width = 20
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.output.bar_width, Some(20));
        assert_eq!(config.output.json, None);
        assert_eq!(config.database.busy_timeout_ms, None);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.output.json, None);
        assert!(!config.database_config().read_only);
        assert_eq!(
            config.database_config().busy_timeout,
            DatabaseConfig::default().busy_timeout
        );
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_str("[output]\nbar_width = \"wide\"").is_err());
    }
}
