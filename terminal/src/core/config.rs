//! # Terminal Configuration
//!
//! Environment-driven configuration, resolved once at startup.
//!
//! | Variable                 | Required | Default | Purpose                      |
//! |--------------------------|----------|---------|------------------------------|
//! | `ELDEN_API_URL`          | yes      | -       | Base URL of the game data API |
//! | `ELDEN_API_TIMEOUT_SECS` | no       | `10`    | Per-request HTTP timeout     |
//!
//! A missing `ELDEN_API_URL` is a fatal startup error. Pointing the terminal
//! at a guessed address would only surface later as confusing request
//! failures, so the process exits with a clear message instead.

use crate::core::error::{AppError, Result};
use std::time::Duration;

/// Default per-request timeout when `ELDEN_API_TIMEOUT_SECS` is unset.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Resolved terminal configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend, without the `/api/v1` prefix.
    pub api_url: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Fails fast if `ELDEN_API_URL` is missing or `ELDEN_API_TIMEOUT_SECS`
    /// does not parse as a positive integer.
    pub fn from_env() -> Result<Self> {
        let config = Self::from_vars(
            std::env::var("ELDEN_API_URL").ok(),
            std::env::var("ELDEN_API_TIMEOUT_SECS").ok(),
        )?;

        tracing::info!(
            api_url = %config.api_url,
            timeout_secs = config.timeout.as_secs(),
            "Configuration loaded"
        );

        Ok(config)
    }

    fn from_vars(api_url: Option<String>, timeout: Option<String>) -> Result<Self> {
        let api_url = api_url
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                AppError::Config(
                    "ELDEN_API_URL is not set (example: http://127.0.0.1:8000)".to_string(),
                )
            })?;

        let timeout_secs = match timeout {
            Some(raw) => raw.parse::<u64>().ok().filter(|secs| *secs > 0).ok_or_else(|| {
                AppError::Config(format!(
                    "ELDEN_API_TIMEOUT_SECS must be a positive integer, got '{raw}'"
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Configuration pointing at an explicit base URL with the default timeout.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_url_is_fatal() {
        let err = Config::from_vars(None, None).unwrap_err();
        assert!(err.to_string().contains("ELDEN_API_URL"));
    }

    #[test]
    fn timeout_defaults_to_ten_seconds() {
        let config = Config::from_vars(Some("http://127.0.0.1:8000".to_string()), None).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn trailing_slash_is_stripped_from_api_url() {
        let config = Config::from_vars(Some("http://127.0.0.1:8000/".to_string()), None).unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn malformed_timeout_is_rejected() {
        let err = Config::from_vars(
            Some("http://127.0.0.1:8000".to_string()),
            Some("soon".to_string()),
        )
        .unwrap_err();
        assert!(err.to_string().contains("ELDEN_API_TIMEOUT_SECS"));

        let err = Config::from_vars(
            Some("http://127.0.0.1:8000".to_string()),
            Some("0".to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
