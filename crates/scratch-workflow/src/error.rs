//! # Activation Errors
//!
//! Every failed activation leaves the card in `Scratched(code)` and returns
//! one of these. Rejection and transport failure are distinct kinds so the
//! presentation can explain a too-old version differently from an outage.

use scratch_core::{CardCode, Version};
use scratch_oracle::OracleError;
use thiserror::Error;

use crate::scope::ScopeError;

/// Outcome of a failed activation attempt.
#[derive(Error, Debug)]
pub enum ActivationError {
    /// The oracle answered, but the version is at or below the threshold.
    #[error("version {observed} is not greater than {threshold}")]
    RejectedVersion {
        /// The code the activation was attempted with.
        code: CardCode,
        /// Version the oracle reported.
        observed: Version,
        /// Threshold the version had to exceed.
        threshold: Version,
    },

    /// The oracle call itself could not complete.
    #[error("version check failed: {0}")]
    Transport(#[source] OracleError),

    /// The application scope shut down before the activation resolved.
    #[error("activation interrupted: {0}")]
    Interrupted(#[from] ScopeError),
}

impl ActivationError {
    /// Whether the oracle answered with a version that was too old.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::RejectedVersion { .. })
    }

    /// Whether the oracle could not be reached.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scratch_core::ACTIVATION_THRESHOLD;
    use std::error::Error as _;

    #[test]
    fn rejection_message_names_both_versions() {
        let err = ActivationError::RejectedVersion {
            code: CardCode::new("OLD123").unwrap(),
            observed: Version(200_000),
            threshold: ACTIVATION_THRESHOLD,
        };
        assert_eq!(err.to_string(), "version 200000 is not greater than 277028");
        assert!(err.is_rejection());
        assert!(!err.is_transport());
    }

    #[test]
    fn transport_keeps_the_original_cause() {
        let err = ActivationError::Transport(OracleError::Unavailable("Network error".into()));
        assert!(err.is_transport());
        let source = err.source().map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("version oracle unavailable: Network error")
        );
    }

    #[test]
    fn scope_errors_convert_into_interrupted() {
        let err: ActivationError = ScopeError::Cancelled.into();
        assert!(matches!(err, ActivationError::Interrupted(ScopeError::Cancelled)));
    }
}
