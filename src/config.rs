//! Session configuration.
//!
//! ```yaml
//! premium: true
//! catalog: ./socks.yaml
//! log: product_page=debug
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::parse::parse_yaml;

/// Environment variable consulted for the log filter when none is configured.
pub const LOG_ENV: &str = "PRODUCT_PAGE_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Premium membership: shipping is free.
    pub premium: bool,
    /// Catalog document to load; the built-in catalog when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    /// `tracing-subscriber` filter directive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
}

impl Config {
    pub fn from_yaml(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Ok(Config::default());
        }
        parse_yaml(input).map_err(ConfigError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml(&text)?;
        tracing::debug!(message = "config.loaded", path = %path.display(), premium = config.premium);
        Ok(config)
    }

    /// Log filter: configured value, then `PRODUCT_PAGE_LOG`, then `warn`.
    pub fn log_filter(&self) -> String {
        self.log
            .clone()
            .or_else(|| std::env::var(LOG_ENV).ok())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }
}
