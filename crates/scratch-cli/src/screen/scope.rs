//! Per-screen task scope.
//!
//! Presenters run their follow-up work here, such as turning an activation
//! result into a toast. Dropping the scope aborts every task it holds. State
//! transitions themselves never run here; they run on the workflow's
//! `ApplicationScope` and outlive the screen.

use std::future::Future;

use tokio::task::JoinSet;

/// Cancellable task set owned by one screen.
#[derive(Debug, Default)]
pub struct ScreenScope {
    tasks: JoinSet<()>,
}

impl ScreenScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn follow-up work tied to this screen's lifetime.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(&mut self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.spawn(future);
    }

    /// Number of tasks not yet reaped.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Wait for every task spawned so far to finish.
    pub async fn settle(&mut self) {
        while let Some(result) = self.tasks.join_next().await {
            if let Err(e) = result {
                if e.is_panic() {
                    tracing::error!(error = %e, "screen task panicked");
                }
            }
        }
    }
}
