//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::download::months::parse_date;
use crate::error::{Error, Result};

/// Default API gateway.
pub const DEFAULT_API_BASE: &str = "https://mbdgw.brighthorizons.com";

/// Environment variable names for the account settings.
pub mod env_keys {
    pub const JWT: &str = "JWT";
    pub const COOKIE: &str = "COOKIE";
    pub const DEPENDENT_ID: &str = "DEPENDENT_ID";
    pub const JOIN_DATE: &str = "JOIN_DATE";
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Session credentials and the child whose media is fetched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Bearer token sent in the Authorization header.
    #[serde(default)]
    pub jwt: String,

    /// Session cookie string, sent verbatim.
    #[serde(default)]
    pub cookie: String,

    /// Dependent (child) identifier used in listing requests.
    #[serde(default)]
    pub dependent_id: String,

    /// First day the child attended, `YYYY-MM-DD`.
    #[serde(default)]
    pub join_date: String,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Root directory for month folders.
    #[serde(default)]
    pub output_directory: Option<PathBuf>,

    /// API gateway base URL.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Extra attempts for a failed request. Zero disables retrying.
    #[serde(default)]
    pub retries: u32,

    /// Base delay between attempts, in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Whether to show download progress.
    #[serde(default = "default_true")]
    pub show_downloads: bool,

    /// Whether to keep a `.manifest.json` of downloaded attachments per month.
    #[serde(default)]
    pub write_manifest: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            output_directory: None,
            api_base: default_api_base(),
            retries: 0,
            retry_delay_ms: default_retry_delay_ms(),
            show_downloads: true,
            write_manifest: false,
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the TOML file if it exists, otherwise start from defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No configuration file at {}", path.display());
            Ok(Self::default())
        }
    }

    /// Get the effective output directory.
    pub fn output_directory(&self) -> PathBuf {
        self.options.output_directory.clone().unwrap_or_else(|| {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("output")
        })
    }

    /// Parse the configured join date.
    pub fn join_date(&self) -> Result<NaiveDate> {
        parse_date(&self.account.join_date).map_err(|e| Error::ConfigValidation {
            field: env_keys::JOIN_DATE.to_string(),
            message: format!("expected YYYY-MM-DD ({})", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
            [account]
            jwt = "token"
            cookie = "session=abc"
            dependent_id = "child-1"
            join_date = "2024-01-15"

            [options]
            output_directory = "/data/daycare"
            retries = 2
            write_manifest = true
            "#,
        )
        .unwrap();

        assert_eq!(config.account.dependent_id, "child-1");
        assert_eq!(config.output_directory(), PathBuf::from("/data/daycare"));
        assert_eq!(config.options.retries, 2);
        assert_eq!(config.options.retry_delay_ms, 1000);
        assert_eq!(config.options.api_base, DEFAULT_API_BASE);
        assert!(config.options.show_downloads);
        assert!(config.options.write_manifest);
    }

    #[test]
    fn test_defaults_disable_retries() {
        let config = Config::default();
        assert_eq!(config.options.retries, 0);
        assert!(!config.options.write_manifest);
        assert!(config.output_directory().ends_with("output"));
    }

    #[test]
    fn test_join_date_rejects_garbage() {
        let mut config = Config::default();
        config.account.join_date = "15/01/2024".into();
        assert!(config.join_date().is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert!(config.account.jwt.is_empty());
        assert!(Config::load(&dir.path().join("absent.toml")).is_err());
    }
}
