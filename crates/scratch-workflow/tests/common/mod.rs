//! Oracle doubles shared by the workflow integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use scratch_core::{CardCode, Version};
use scratch_oracle::{OracleError, VersionOracle};
use tokio::sync::Notify;

/// Oracle that answers from a fixed script and records every code it saw.
#[derive(Clone)]
pub struct ScriptedOracle {
    answer: Result<i64, String>,
    calls: Arc<Mutex<Vec<CardCode>>>,
}

impl ScriptedOracle {
    pub fn version(version: i64) -> Self {
        Self {
            answer: Ok(version),
            calls: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            answer: Err(message.to_string()),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<CardCode> {
        self.calls.lock().clone()
    }
}

impl VersionOracle for ScriptedOracle {
    async fn get_version(&self, code: &CardCode) -> Result<Version, OracleError> {
        self.calls.lock().push(code.clone());
        match &self.answer {
            Ok(version) => Ok(Version(*version)),
            Err(message) => Err(OracleError::Unavailable(message.clone())),
        }
    }
}

/// Oracle that holds every call until the test opens the gate.
#[derive(Clone)]
pub struct GatedOracle {
    version: i64,
    gate: Arc<Notify>,
    entered: Arc<Notify>,
}

impl GatedOracle {
    pub fn new(version: i64) -> Self {
        Self {
            version,
            gate: Arc::new(Notify::new()),
            entered: Arc::new(Notify::new()),
        }
    }

    /// Wait until a call is parked at the gate.
    pub async fn wait_entered(&self) {
        self.entered.notified().await;
    }

    /// Let one parked call through.
    pub fn open(&self) {
        self.gate.notify_one();
    }
}

impl VersionOracle for GatedOracle {
    async fn get_version(&self, _code: &CardCode) -> Result<Version, OracleError> {
        self.entered.notify_one();
        self.gate.notified().await;
        Ok(Version(self.version))
    }
}

pub fn code(raw: &str) -> CardCode {
    CardCode::new(raw).unwrap()
}
