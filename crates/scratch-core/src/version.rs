//! # Oracle Version
//!
//! The integer the version oracle reports for a card code, and the fixed
//! threshold an activation must strictly exceed.

use serde::{Deserialize, Serialize};

/// Version reported by the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(pub i64);

/// Activation succeeds only for versions strictly above this value.
pub const ACTIVATION_THRESHOLD: Version = Version(277_028);

impl Version {
    /// Whether this version is strictly greater than `threshold`.
    ///
    /// Equality does not pass: the boundary is exclusive.
    pub fn exceeds(self, threshold: Version) -> bool {
        self > threshold
    }
}

impl From<i64> for Version {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_value() {
        assert_eq!(ACTIVATION_THRESHOLD, Version(277_028));
    }

    #[test]
    fn boundary_is_exclusive() {
        assert!(!Version(277_028).exceeds(ACTIVATION_THRESHOLD));
        assert!(Version(277_029).exceeds(ACTIVATION_THRESHOLD));
        assert!(!Version(100_000).exceeds(ACTIVATION_THRESHOLD));
        assert!(Version(1_230_000).exceeds(ACTIVATION_THRESHOLD));
    }

    #[test]
    fn serializes_transparently() {
        assert_eq!(serde_json::to_string(&Version(300_000)).unwrap(), "300000");
        let parsed: Version = serde_json::from_str("277029").unwrap();
        assert_eq!(parsed, Version(277_029));
    }
}
