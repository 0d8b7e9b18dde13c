//! Service configuration.
//!
//! Settings come from an optional TOML file merged with environment
//! overrides (loaded via `.env` when present), with defaults for
//! everything so the service runs unconfigured against a local API.
//!
//! Precedence: environment > config file > defaults.
//!
//! - `AQMON_CONFIG`: path of the TOML file (default `aqmon.toml`)
//! - `AQMON_API_URL`: base URL of the AQI service
//! - `AQMON_TIMEOUT_SECS`: per-request timeout in seconds

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the AQI service, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Per-request timeout. There is deliberately no batch-level
    /// timeout: this bound is what guarantees every batch completes.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServiceConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Loads configuration from the conventional sources: `.env`, then
    /// the TOML file named by `AQMON_CONFIG` (if it exists), then
    /// per-setting environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let path = std::env::var("AQMON_CONFIG").unwrap_or_else(|_| "aqmon.toml".to_string());
        let mut config = Self::from_file_or_default(Path::new(&path))?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parses the TOML file at `path`, falling back to defaults when
    /// the file does not exist. A file that exists but cannot be read
    /// or parsed is an error, not a silent default.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(ServiceConfig::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(ConfigError::Parse)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(url) = std::env::var("AQMON_API_URL") {
            self.api_base_url = url;
        }
        if let Ok(raw) = std::env::var("AQMON_TIMEOUT_SECS") {
            self.request_timeout_secs = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "AQMON_TIMEOUT_SECS".to_string(),
                value: raw,
            })?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
