//! Layered configuration for the bookstore client.
//!
//! Sources, lowest precedence first: `.env`, `config/bookstore.toml` (or
//! `$BOOKSTORE_CONFIG_DIR/bookstore.toml`), then `BOOKSTORE_*` variables with
//! `__` separating nested keys, e.g. `BOOKSTORE_API__BASE_URL`.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bookstore_core::DEFAULT_BASE_URL;
use serde::Deserialize;

const CONFIG_DIR_ENV: &str = "BOOKSTORE_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "bookstore.toml";
const ENV_PREFIX: &str = "BOOKSTORE";

/// Client configuration loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub log: LogSettings,
}

impl Settings {
    /// Load `.env`, then `config/bookstore.toml`, then `BOOKSTORE_*` variables
    /// (`BOOKSTORE_API__BASE_URL`, `BOOKSTORE_LOG__LEVEL`, ...).
    pub fn load() -> Result<Self, config::ConfigError> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let config_dir = env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));
        Self::load_from(&config_dir)
    }

    pub fn load_from(config_dir: &Path) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(config_dir.join(CONFIG_FILE)).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "ApiSettings::default_base_url")]
    pub base_url: String,
    /// Unset means requests never time out.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    /// Report server messages for failed book listings.
    #[serde(default)]
    pub surface_list_errors: bool,
}

impl ApiSettings {
    fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_ms: None,
            surface_list_errors: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    #[serde(default = "LogSettings::default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl LogSettings {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
