//! Command-line flags.
//!
//! Flags override the environment; anything left unset falls back to
//! `OracleConfig::from_env` and `WorkflowConfig::from_env`.

use std::time::Duration;

use clap::Parser;
use scratch_core::Version;
use scratch_oracle::{HttpVersionOracle, OracleConfig, OracleError, StaticVersionOracle};
use scratch_workflow::WorkflowConfig;
use url::Url;

use crate::oracle::CliOracle;

/// Scratch card demo.
///
/// Reveal a card, then activate it against the version oracle. Commands are
/// read from stdin one per line; type `help` to list them.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "scratch", version, about, long_about = None)]
pub struct Cli {
    /// Version endpoint to query during activation.
    #[arg(long, value_name = "URL")]
    pub oracle_url: Option<String>,

    /// Request timeout for the version endpoint, in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Answer every version lookup with this value instead of calling the
    /// network.
    #[arg(long, value_name = "N", conflicts_with_all = ["oracle_url", "timeout_secs"])]
    pub static_version: Option<i64>,

    /// How long a reveal stays in the loading state, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub reveal_delay_ms: Option<u64>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Resolve the HTTP oracle configuration.
    pub fn oracle_config(&self) -> Result<OracleConfig, OracleError> {
        let mut config = OracleConfig::from_env()?;
        if let Some(raw) = &self.oracle_url {
            config.url = Url::parse(raw).map_err(|e| {
                scratch_oracle::ConfigError::InvalidUrl(raw.clone(), e.to_string())
            })?;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
        Ok(config)
    }

    /// Build the oracle the flags ask for.
    pub fn build_oracle(&self) -> Result<CliOracle, OracleError> {
        match self.static_version {
            Some(version) => Ok(CliOracle::Static(StaticVersionOracle::new(Version(version)))),
            None => Ok(CliOracle::Http(HttpVersionOracle::new(self.oracle_config()?)?)),
        }
    }

    /// Resolve the workflow tunables.
    pub fn workflow_config(&self) -> Result<WorkflowConfig, scratch_workflow::ConfigError> {
        let mut config = WorkflowConfig::from_env()?;
        if let Some(ms) = self.reveal_delay_ms {
            config.reveal_delay = Duration::from_millis(ms);
        }
        Ok(config)
    }
}
