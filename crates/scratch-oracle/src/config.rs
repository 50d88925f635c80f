//! Version oracle client configuration.
//!
//! Defaults point to the production endpoint. Override via environment
//! variables or explicit construction for staging/testing.

use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::retry::{RetryPolicy, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_BASE_MS};

/// Default version endpoint.
pub const DEFAULT_ORACLE_URL: &str = "https://api.o2.sk/version";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the HTTP version oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleConfig {
    /// Full URL of the version endpoint. The card code is appended as the
    /// `code` query parameter.
    pub url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Backoff for lookups that got no answer.
    pub retry: RetryPolicy,
}

impl OracleConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SCRATCH_ORACLE_URL` (default: `https://api.o2.sk/version`)
    /// - `SCRATCH_ORACLE_TIMEOUT_SECS` (default: 30)
    /// - `SCRATCH_ORACLE_MAX_RETRIES` (default: 3)
    /// - `SCRATCH_ORACLE_RETRY_BASE_MS` (default: 200)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_url("SCRATCH_ORACLE_URL", DEFAULT_ORACLE_URL)?,
            timeout_secs: env_number("SCRATCH_ORACLE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            retry: RetryPolicy {
                max_retries: env_number("SCRATCH_ORACLE_MAX_RETRIES", DEFAULT_MAX_RETRIES)?,
                base_delay: Duration::from_millis(env_number(
                    "SCRATCH_ORACLE_RETRY_BASE_MS",
                    DEFAULT_RETRY_BASE_MS,
                )?),
            },
        })
    }

    /// Create a configuration pointing to a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the localhost URL cannot be parsed
    /// (should not occur for valid port numbers, but avoids `expect()`).
    pub fn local_mock(port: u16) -> Result<Self, ConfigError> {
        let raw = format!("http://127.0.0.1:{port}/version");
        let url = Url::parse(&raw)
            .map_err(|e| ConfigError::InvalidUrl("localhost".to_string(), e.to_string()))?;
        Ok(Self {
            url,
            timeout_secs: 5,
            retry: RetryPolicy::none(),
        })
    }

    /// Parse an explicit URL, keeping the default timeout.
    pub fn with_url(raw: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(raw)
            .map_err(|e| ConfigError::InvalidUrl(raw.to_string(), e.to_string()))?;
        Ok(Self {
            url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            retry: RetryPolicy::default(),
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

fn env_number<T: FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber(var.to_string(), raw)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid number for {0}: {1:?}")]
    InvalidNumber(String, String),
}
