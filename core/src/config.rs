//! Client configuration loaded from environment variables.

use serde::Deserialize;
use thiserror::Error;

/// Default public endpoint.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Configuration read from `POSTS_*` environment variables.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the posts service (`POSTS_BASE_URL`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Log filter directive (`POSTS_LOG`), e.g. `info` or `posts_core=debug`.
    #[serde(default = "default_log")]
    pub log: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment error: {0}")]
    Env(#[from] envy::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_log() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            log: default_log(),
        }
    }
}

impl Config {
    /// Load from the environment, reading `.env` first if present.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Like `load`, without validation, so overrides can be applied first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Replace the base URL when an override is given.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self
    }

    /// Build from an explicit variable list, without touching the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed("POSTS_").from_iter(vars)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("POSTS_BASE_URL is empty".to_string()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "POSTS_BASE_URL must be http(s): {}",
                self.base_url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_vars(vars(&[("UNRELATED", "x")])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn prefixed_vars_override_defaults() {
        let config = Config::from_vars(vars(&[
            ("POSTS_BASE_URL", "http://127.0.0.1:3000"),
            ("POSTS_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.log, "debug");
    }

    #[test]
    fn override_applies_before_validation() {
        let config = Config::from_vars(vars(&[("POSTS_BASE_URL", "not a url")]))
            .unwrap()
            .with_base_url(Some("http://127.0.0.1:3000".to_string()));
        assert_eq!(config.base_url, "http://127.0.0.1:3000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_override_keeps_env_value() {
        let config = Config::from_vars(vars(&[("POSTS_BASE_URL", "not a url")]))
            .unwrap()
            .with_base_url(None);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_base_url() {
        let config = Config {
            base_url: " ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_scheme() {
        let config = Config {
            base_url: "ftp://example.com".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
