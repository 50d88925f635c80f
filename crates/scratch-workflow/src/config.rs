//! Workflow configuration.

use std::time::Duration;

/// Default simulated reveal latency in milliseconds.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 2000;

/// Tunables for [`ActivationWorkflow`](crate::ActivationWorkflow).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowConfig {
    /// How long a reveal stays in `Loading` before the code is minted.
    pub reveal_delay: Duration,
}

impl WorkflowConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SCRATCH_REVEAL_DELAY_MS` (default: 2000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let reveal_delay_ms = match std::env::var("SCRATCH_REVEAL_DELAY_MS") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                var: "SCRATCH_REVEAL_DELAY_MS".to_string(),
                value: raw,
            })?,
            Err(_) => DEFAULT_REVEAL_DELAY_MS,
        };
        Ok(Self {
            reveal_delay: Duration::from_millis(reveal_delay_ms),
        })
    }
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid number for {var}: {value:?}")]
    InvalidNumber { var: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reveal_delay_is_two_seconds() {
        assert_eq!(WorkflowConfig::default().reveal_delay, Duration::from_secs(2));
    }

    #[test]
    fn from_env_reads_and_validates_delay() {
        std::env::set_var("SCRATCH_REVEAL_DELAY_MS", "150");
        let parsed = WorkflowConfig::from_env();
        std::env::set_var("SCRATCH_REVEAL_DELAY_MS", "later");
        let invalid = WorkflowConfig::from_env();
        std::env::remove_var("SCRATCH_REVEAL_DELAY_MS");
        let fallback = WorkflowConfig::from_env();

        assert_eq!(parsed.unwrap().reveal_delay, Duration::from_millis(150));
        assert!(matches!(invalid, Err(ConfigError::InvalidNumber { .. })));
        assert_eq!(fallback.unwrap(), WorkflowConfig::default());
    }
}
