//! Application configuration.
//!
//! Values come from (lowest to highest precedence) built-in defaults, the
//! process environment (a `.env` file is honored), and explicit overrides
//! passed in by the binaries from their command line.

use std::env;
use std::path::PathBuf;

use crate::error::{PortfolioError, PortfolioResult};

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_API_URL: &str = "PORTFOLIO_API_URL";
pub const ENV_DATA_DIR: &str = "PORTFOLIO_DATA_DIR";
pub const ENV_LOG: &str = "PORTFOLIO_LOG";

/// Runtime configuration shared by the desktop app and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the admin backend, without trailing slash
    pub api_base_url: String,
    /// Directory holding `session.redb`
    pub data_dir: PathBuf,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            data_dir: default_data_dir(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> PortfolioResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PortfolioResult<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config.api_base_url = normalize_base_url(&url)?;
        }
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(filter) = lookup(ENV_LOG) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(
        mut self,
        api_url: Option<&str>,
        data_dir: Option<PathBuf>,
    ) -> PortfolioResult<Self> {
        if let Some(url) = api_url {
            self.api_base_url = normalize_base_url(url)?;
        }
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        Ok(self)
    }

    /// Path of the session database inside the data directory.
    pub fn session_db_path(&self) -> PathBuf {
        self.data_dir.join("session.redb")
    }
}

/// Default data directory (`<platform data dir>/portfolio`).
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio")
}

/// Trim whitespace and trailing slashes; require an http(s) scheme.
pub fn normalize_base_url(raw: &str) -> PortfolioResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let rest = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"));

    match rest {
        Some(host) if !host.is_empty() => Ok(trimmed.to_string()),
        _ => Err(PortfolioError::Config(format!(
            "API URL must start with http:// or https://: {:?}",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.log_filter, "info");
        assert!(config.data_dir.ends_with("portfolio"));
        assert!(config.session_db_path().ends_with("portfolio/session.redb"));
    }

    #[test]
    fn test_env_values_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "https://api.example.com/"),
            (ENV_DATA_DIR, "/tmp/pf"),
            (ENV_LOG, "debug"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/pf"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_overrides_beat_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[(ENV_API_URL, "http://env:1")]))
            .unwrap()
            .with_overrides(Some("http://cli:2"), Some(PathBuf::from("/data")))
            .unwrap();

        assert_eq!(config.api_base_url, "http://cli:2");
        assert_eq!(config.data_dir, PathBuf::from("/data"));
    }

    #[test]
    fn test_invalid_urls_rejected() {
        assert!(normalize_base_url("localhost:5000").is_err());
        assert!(normalize_base_url("http://").is_err());
        assert!(normalize_base_url("ftp://host").is_err());
        assert_eq!(
            normalize_base_url("  http://127.0.0.1:8080//  ").unwrap(),
            "http://127.0.0.1:8080"
        );
    }
}
