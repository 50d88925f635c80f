//! Version oracle error types.

/// Errors from version oracle calls.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The oracle returned a non-2xx status.
    #[error("version oracle {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
    /// The oracle could not be reached for a reason outside HTTP.
    #[error("version oracle unavailable: {0}")]
    Unavailable(String),
}
