//! Bot configuration
//!
//! Secrets come from the environment; endpoints and the poll interval are
//! fixed defaults that tests may override.

use hwbot_client::{DEFAULT_STATUSES_ENDPOINT, DEFAULT_TELEGRAM_API};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Review API OAuth token
pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
/// Telegram bot token
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
/// Destination chat identifier
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Fixed delay between two polls
pub const POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Configuration could not be assembled from the environment
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required variables are unset or blank
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Bot configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the review API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: String,

    /// Review API statuses endpoint
    pub statuses_endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// How often to poll the review API
    pub poll_interval: Duration,
}

impl Config {
    /// Creates a new configuration with default endpoints and interval
    pub fn new(
        practicum_token: impl Into<String>,
        telegram_token: impl Into<String>,
        telegram_chat_id: impl Into<String>,
    ) -> Self {
        Self {
            practicum_token: practicum_token.into(),
            telegram_token: telegram_token.into(),
            telegram_chat_id: telegram_chat_id.into(),
            statuses_endpoint: DEFAULT_STATUSES_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API.to_string(),
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables (all required):
    /// - PRACTICUM_TOKEN
    /// - TELEGRAM_TOKEN
    /// - TELEGRAM_CHAT_ID
    ///
    /// Every missing variable is reported, not just the first.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Creates configuration from an arbitrary variable source
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let mut require = |name: &'static str| {
            let value = lookup(name).filter(|v| !v.trim().is_empty());
            if value.is_none() {
                missing.push(name);
            }
            value.unwrap_or_default()
        };

        let practicum_token = require(PRACTICUM_TOKEN_VAR);
        let telegram_token = require(TELEGRAM_TOKEN_VAR);
        let telegram_chat_id = require(TELEGRAM_CHAT_ID_VAR);

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        Ok(Self::new(practicum_token, telegram_token, telegram_chat_id))
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.practicum_token.is_empty() {
            anyhow::bail!("practicum_token cannot be empty");
        }

        if self.telegram_token.is_empty() {
            anyhow::bail!("telegram_token cannot be empty");
        }

        if self.telegram_chat_id.is_empty() {
            anyhow::bail!("telegram_chat_id cannot be empty");
        }

        for url in [&self.statuses_endpoint, &self.telegram_api_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", url);
            }
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("statuses_endpoint", &self.statuses_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("poll_interval", &self.poll_interval)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::new("p", "t", "42");
        assert_eq!(config.poll_interval, Duration::from_secs(600));
        assert_eq!(config.statuses_endpoint, DEFAULT_STATUSES_ENDPOINT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(lookup_in(&[
            (PRACTICUM_TOKEN_VAR, "p"),
            (TELEGRAM_TOKEN_VAR, "t"),
            (TELEGRAM_CHAT_ID_VAR, "42"),
        ]))
        .unwrap();

        assert_eq!(config.practicum_token, "p");
        assert_eq!(config.telegram_token, "t");
        assert_eq!(config.telegram_chat_id, "42");
    }

    #[test]
    fn test_every_missing_variable_is_reported() {
        let err = Config::from_lookup(lookup_in(&[(TELEGRAM_TOKEN_VAR, "t")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing(vec![PRACTICUM_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR])
        );
        assert_eq!(
            err.to_string(),
            "missing required environment variables: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let err = Config::from_lookup(lookup_in(&[
            (PRACTICUM_TOKEN_VAR, "p"),
            (TELEGRAM_TOKEN_VAR, "   "),
            (TELEGRAM_CHAT_ID_VAR, "42"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing(vec![TELEGRAM_TOKEN_VAR]));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::new("p", "t", "42");

        config.statuses_endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
        config.statuses_endpoint = DEFAULT_STATUSES_ENDPOINT.to_string();

        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());
        config.poll_interval = POLL_INTERVAL;

        config.telegram_chat_id = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = Config::new("practicum-secret", "telegram-secret", "42");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("practicum-secret"));
        assert!(!debug.contains("telegram-secret"));
    }
}
