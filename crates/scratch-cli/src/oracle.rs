//! Oracle selected at startup.

use scratch_core::{CardCode, Version};
use scratch_oracle::{HttpVersionOracle, OracleError, StaticVersionOracle, VersionOracle};

/// Either oracle the binary can run with.
#[derive(Debug)]
pub enum CliOracle {
    /// Remote version endpoint.
    Http(HttpVersionOracle),
    /// Fixed answer, no network.
    Static(StaticVersionOracle),
}

impl VersionOracle for CliOracle {
    async fn get_version(&self, code: &CardCode) -> Result<Version, OracleError> {
        match self {
            Self::Http(oracle) => oracle.get_version(code).await,
            Self::Static(oracle) => oracle.get_version(code).await,
        }
    }
}

impl std::fmt::Display for CliOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(oracle) => write!(f, "http ({})", oracle.url()),
            Self::Static(oracle) => write!(f, "static (version {})", oracle.version()),
        }
    }
}
