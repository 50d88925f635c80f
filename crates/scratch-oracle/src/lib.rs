//! # scratch-oracle: Version Oracle
//!
//! The only network-shaped boundary of the scratch card demo. Activation asks
//! an oracle for the version associated with a card code and approves the
//! card only if that version is above the activation threshold.
//!
//! ## Implementations
//!
//! - [`HttpVersionOracle`]: typed reqwest client for the remote version
//!   endpoint (`GET {url}?code=...` returning `{"android": <int>}`).
//! - [`StaticVersionOracle`]: answers every code with one fixed version.
//!   Used for offline demos.
//!
//! Test doubles implement the same [`VersionOracle`] trait.
//!
//! ## Retry Policy
//!
//! Retries belong to the collaborator, not to the activation workflow. The
//! HTTP oracle retries requests that got no answer on the [`RetryPolicy`]
//! carried by [`OracleConfig`]; HTTP error statuses and malformed bodies are
//! returned immediately.

pub mod config;
pub mod error;
pub mod fixed;
pub mod http;
pub mod retry;

pub use config::{ConfigError, OracleConfig};
pub use error::OracleError;
pub use fixed::{StaticVersionOracle, DEFAULT_STATIC_VERSION};
pub use http::HttpVersionOracle;
pub use retry::RetryPolicy;

use std::future::Future;
use std::sync::Arc;

use scratch_core::{CardCode, Version};

/// Capability to look up the version associated with a card code.
///
/// The returned future is `Send` and the oracle is `'static`, so activation
/// can run the call on a long-lived application scope.
pub trait VersionOracle: Send + Sync + 'static {
    /// Fetch the version for `code`, or fail with a transport-level error.
    fn get_version(
        &self,
        code: &CardCode,
    ) -> impl Future<Output = Result<Version, OracleError>> + Send;
}

impl<O: VersionOracle> VersionOracle for Arc<O> {
    fn get_version(
        &self,
        code: &CardCode,
    ) -> impl Future<Output = Result<Version, OracleError>> + Send {
        (**self).get_version(code)
    }
}
