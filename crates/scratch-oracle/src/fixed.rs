//! Static version oracle for offline demos.
//!
//! Answers every card code with the same version and never touches the
//! network. The default answer is comfortably above the activation
//! threshold, so a demo activation succeeds.

use scratch_core::{CardCode, Version};

use crate::error::OracleError;
use crate::VersionOracle;

/// Version the static oracle reports unless told otherwise.
pub const DEFAULT_STATIC_VERSION: Version = Version(1_230_000);

/// Oracle that always reports one fixed version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticVersionOracle {
    version: Version,
}

impl StaticVersionOracle {
    /// Create an oracle that answers with `version`.
    pub fn new(version: Version) -> Self {
        Self { version }
    }

    /// The version this oracle reports.
    pub fn version(&self) -> Version {
        self.version
    }
}

impl Default for StaticVersionOracle {
    fn default() -> Self {
        Self::new(DEFAULT_STATIC_VERSION)
    }
}

impl VersionOracle for StaticVersionOracle {
    async fn get_version(&self, code: &CardCode) -> Result<Version, OracleError> {
        tracing::debug!(code = %code, version = self.version.0, "static version oracle answered");
        Ok(self.version)
    }
}
