//! # Activation Workflow
//!
//! Drives the card through reveal and activation. Each operation publishes
//! `Loading` before its method returns and leaves the store in a settled
//! state when it finishes:
//!
//! | Operation | Outcome | Final state |
//! |-----------|---------|-------------|
//! | reveal | delay elapsed | `Scratched(new code)` |
//! | activate | version > threshold | `Activated(code)` |
//! | activate | version <= threshold | `Scratched(code)` + `RejectedVersion` |
//! | activate | oracle failure | `Scratched(code)` + `Transport` |
//!
//! Both operations are spawned on the [`ApplicationScope`] before the method
//! returns. The returned futures only observe the result.

use std::future::Future;
use std::sync::Arc;

use scratch_core::{CardCode, CardState, CodeGenerator, UuidCodeGenerator, ACTIVATION_THRESHOLD};
use scratch_oracle::VersionOracle;
use scratch_state::CardStateStore;

use crate::config::WorkflowConfig;
use crate::error::ActivationError;
use crate::scope::{ApplicationScope, ScopedTask};

/// Metric counting completed reveals.
const REVEALS_TOTAL: &str = "scratch_reveals_total";
/// Metric counting finished activations, labelled by outcome.
const ACTIVATIONS_TOTAL: &str = "scratch_activations_total";

/// Reveal and activation over a shared card store.
///
/// Cloning is cheap and every clone drives the same store on the same scope.
pub struct ActivationWorkflow<O> {
    store: CardStateStore,
    oracle: Arc<O>,
    scope: ApplicationScope,
    codes: Arc<dyn CodeGenerator>,
    config: WorkflowConfig,
}

impl<O> Clone for ActivationWorkflow<O> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            oracle: Arc::clone(&self.oracle),
            scope: self.scope.clone(),
            codes: Arc::clone(&self.codes),
            config: self.config.clone(),
        }
    }
}

impl<O: VersionOracle> ActivationWorkflow<O> {
    /// Create a workflow with UUID codes and the default reveal delay.
    pub fn new(store: CardStateStore, oracle: O, scope: ApplicationScope) -> Self {
        Self {
            store,
            oracle: Arc::new(oracle),
            scope,
            codes: Arc::new(UuidCodeGenerator),
            config: WorkflowConfig::default(),
        }
    }

    /// Replace the source of revealed codes.
    pub fn with_code_generator(mut self, codes: impl CodeGenerator + 'static) -> Self {
        self.codes = Arc::new(codes);
        self
    }

    /// Replace the tunables.
    pub fn with_config(mut self, config: WorkflowConfig) -> Self {
        self.config = config;
        self
    }

    /// The store this workflow writes to.
    pub fn store(&self) -> &CardStateStore {
        &self.store
    }

    /// The scope this workflow runs on.
    pub fn scope(&self) -> &ApplicationScope {
        &self.scope
    }

    /// Scratch the card.
    ///
    /// Publishes `Loading` before returning, waits for the reveal delay, then
    /// publishes `Scratched` with a freshly generated code and resolves to
    /// that code. The current state is not checked; callers gate on it, and
    /// a second call sees `Loading` as soon as the first one returns.
    pub fn reveal(&self) -> ScopedTask<CardCode> {
        let store = self.store.clone();
        let codes = Arc::clone(&self.codes);
        let delay = self.config.reveal_delay;

        self.enter_loading();
        self.scope.spawn(async move {
            tokio::time::sleep(delay).await;

            let code = codes.generate();
            metrics::counter!(REVEALS_TOTAL).increment(1);
            tracing::info!(code = %code, "card revealed");
            store.set(CardState::Scratched(code.clone()));
            code
        })
    }

    /// Activate the card revealed with `code`.
    ///
    /// Publishes `Loading` before returning, asks the oracle for the version
    /// of `code` and settles on `Activated(code)` if the version exceeds the
    /// threshold. On rejection or oracle failure the card returns to
    /// `Scratched(code)` and the error is returned.
    pub fn activate(
        &self,
        code: CardCode,
    ) -> impl Future<Output = Result<(), ActivationError>> + Send + 'static {
        let store = self.store.clone();
        let oracle = Arc::clone(&self.oracle);
        self.enter_loading();
        let task = self
            .scope
            .spawn(async move { run_activation(&store, &*oracle, code).await });

        async move { task.await? }
    }

    /// A closed scope spawns nothing, so the card is left as it was.
    fn enter_loading(&self) {
        if !self.scope.is_closed() {
            self.store.set(CardState::Loading);
        }
    }
}

async fn run_activation<O: VersionOracle>(
    store: &CardStateStore,
    oracle: &O,
    code: CardCode,
) -> Result<(), ActivationError> {
    let version = match oracle.get_version(&code).await {
        Ok(version) => version,
        Err(e) => {
            tracing::error!(code = %code, error = %e, "version check failed");
            metrics::counter!(ACTIVATIONS_TOTAL, "outcome" => "transport_failure").increment(1);
            store.set(CardState::Scratched(code));
            return Err(ActivationError::Transport(e));
        }
    };

    if version.exceeds(ACTIVATION_THRESHOLD) {
        tracing::info!(code = %code, version = version.0, "card activated");
        metrics::counter!(ACTIVATIONS_TOTAL, "outcome" => "activated").increment(1);
        store.set(CardState::Activated(code));
        Ok(())
    } else {
        tracing::warn!(
            code = %code,
            version = version.0,
            threshold = ACTIVATION_THRESHOLD.0,
            "activation rejected"
        );
        metrics::counter!(ACTIVATIONS_TOTAL, "outcome" => "rejected").increment(1);
        store.set(CardState::Scratched(code.clone()));
        Err(ActivationError::RejectedVersion {
            code,
            observed: version,
            threshold: ACTIVATION_THRESHOLD,
        })
    }
}

impl<O> std::fmt::Debug for ActivationWorkflow<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivationWorkflow")
            .field("store", &self.store)
            .field("scope", &self.scope)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scratch_core::Version;
    use scratch_oracle::StaticVersionOracle;
    use std::time::Duration;

    fn workflow(version: i64) -> ActivationWorkflow<StaticVersionOracle> {
        ActivationWorkflow::new(
            CardStateStore::new(),
            StaticVersionOracle::new(Version(version)),
            ApplicationScope::current().unwrap(),
        )
        .with_config(WorkflowConfig {
            reveal_delay: Duration::from_millis(10),
        })
    }

    #[tokio::test(start_paused = true)]
    async fn reveal_passes_through_loading() {
        let wf = workflow(300_000);
        let mut states = wf.store().stream();
        let code = wf.reveal().await.unwrap();

        assert_eq!(
            states.drain(),
            vec![
                CardState::Unscratched,
                CardState::Loading,
                CardState::Scratched(code),
            ]
        );
    }

    #[tokio::test]
    async fn loading_is_published_before_the_call_returns() {
        let wf = workflow(300_000);

        let reveal = wf.reveal();
        assert_eq!(wf.store().current(), CardState::Loading);
        let code = reveal.await.unwrap();

        let activation = wf.activate(code.clone());
        assert_eq!(wf.store().current(), CardState::Loading);
        activation.await.unwrap();
        assert_eq!(wf.store().current(), CardState::Activated(code));
    }

    #[tokio::test]
    async fn activation_threshold_is_strict() {
        let wf = workflow(ACTIVATION_THRESHOLD.0);
        let code = CardCode::new("EDGE").unwrap();
        let err = wf.activate(code.clone()).await.unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(wf.store().current(), CardState::Scratched(code));
    }

    #[tokio::test]
    async fn clones_share_the_store() {
        let wf = workflow(300_000);
        let other = wf.clone();
        let code = CardCode::new("SHARED").unwrap();
        other.activate(code.clone()).await.unwrap();
        assert_eq!(wf.store().current(), CardState::Activated(code));
    }
}
