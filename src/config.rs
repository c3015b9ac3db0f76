//! Application configuration module
//!
//! Resolves the backend base URL from, in order of precedence: an explicit
//! builder value, the `DAYMARK_API_URL` environment variable, a TOML config
//! file in the platform config directory, and finally the built-in default.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000/api";

/// Backend connection configuration.
#[derive(Debug, Clone)]
pub struct Config {
    server_url: String,
}

/// On-disk configuration file shape (`daymark/config.toml`)
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    server_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let server_url = std::env::var("DAYMARK_API_URL")
            .ok()
            .or_else(|| ConfigFile::load().server_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        Self {
            server_url: normalize(&server_url),
        }
    }
}

impl Config {
    /// Create a new configuration from the environment, config file, or defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new ConfigBuilder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Get the configured server URL (no trailing slash)
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }
}

/// Builder for Config
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    server_url: Option<String>,
}

impl ConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        let server_url = self
            .server_url
            .ok_or(ConfigError::MissingValue("server_url"))?;
        if !server_url.starts_with("http://") && !server_url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(server_url));
        }
        Ok(Config {
            server_url: normalize(&server_url),
        })
    }
}

impl ConfigFile {
    /// Read the config file from the platform config directory, if present.
    /// A missing or unreadable file is not an error; an unparsable one is
    /// logged and ignored.
    fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        let Ok(raw) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str(&raw) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring malformed config file");
                Self::default()
            }
        }
    }

    fn path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("daymark");
        path.push("config.toml");
        Some(path)
    }
}

/// Strip a trailing slash so `api_url` never produces `//auth/login`.
fn normalize(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_new_uses_default_url() {
        std::env::remove_var("DAYMARK_API_URL");
        let config = Config::new();
        assert_eq!(config.server_url(), "http://127.0.0.1:3000/api");
    }

    #[test]
    #[serial]
    fn test_config_env_override() {
        std::env::set_var("DAYMARK_API_URL", "https://api.example.com");
        let config = Config::new();
        assert_eq!(config.server_url(), "https://api.example.com");
        std::env::remove_var("DAYMARK_API_URL");
    }

    #[test]
    fn test_builder_sets_url() {
        let config = Config::builder()
            .server_url("https://api.example.com")
            .build()
            .unwrap();
        assert_eq!(config.server_url(), "https://api.example.com");
    }

    #[test]
    fn test_builder_strips_trailing_slash() {
        let config = Config::builder()
            .server_url("https://api.example.com/")
            .build()
            .unwrap();
        assert_eq!(config.api_url("/auth/login"), "https://api.example.com/auth/login");
    }

    #[test]
    fn test_builder_rejects_missing_url() {
        let err = Config::builder().build().unwrap_err();
        assert!(matches!(err, ConfigError::MissingValue("server_url")));
    }

    #[test]
    fn test_builder_rejects_bad_scheme() {
        let err = Config::builder().server_url("ftp://nope").build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }

    #[test]
    #[serial]
    fn test_api_url() {
        std::env::remove_var("DAYMARK_API_URL");
        let config = Config::new();
        let url = config.api_url("/auth/login");
        assert_eq!(url, "http://127.0.0.1:3000/api/auth/login");
    }
}
