//! # Application Scope
//!
//! The long-lived execution context the workflow runs on. Work spawned here
//! starts immediately and keeps running when the handle to its result is
//! dropped. The only cancellation boundary is [`ApplicationScope::shutdown`],
//! which stands in for process shutdown.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use parking_lot::Mutex;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::{AbortHandle, JoinHandle};

/// Errors from running work on an [`ApplicationScope`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// No tokio runtime was available to bind the scope to.
    #[error("no tokio runtime is running")]
    NoRuntime,
    /// The scope was shut down before the work was spawned.
    #[error("application scope is shut down")]
    Closed,
    /// The work was aborted by scope shutdown.
    #[error("task cancelled by application scope shutdown")]
    Cancelled,
    /// The work panicked.
    #[error("task panicked: {0}")]
    Panicked(String),
}

/// Long-lived, non-cancellable execution context.
///
/// Cloning is cheap; all clones share one task registry.
#[derive(Clone)]
pub struct ApplicationScope {
    inner: Arc<Inner>,
}

struct Inner {
    handle: Handle,
    tasks: Mutex<Registry>,
}

struct Registry {
    closed: bool,
    in_flight: Vec<AbortHandle>,
}

impl ApplicationScope {
    /// Bind to the tokio runtime the caller is running on.
    pub fn current() -> Result<Self, ScopeError> {
        Handle::try_current()
            .map(Self::from_handle)
            .map_err(|_| ScopeError::NoRuntime)
    }

    /// Bind to an explicit runtime.
    pub fn from_handle(handle: Handle) -> Self {
        Self {
            inner: Arc::new(Inner {
                handle,
                tasks: Mutex::new(Registry {
                    closed: false,
                    in_flight: Vec::new(),
                }),
            }),
        }
    }

    /// Start `future` on the runtime now.
    ///
    /// The returned [`ScopedTask`] resolves to the future's output. Dropping
    /// it detaches the work instead of cancelling it. After
    /// [`shutdown`](Self::shutdown) nothing is spawned and the task resolves
    /// to [`ScopeError::Closed`].
    pub fn spawn<F>(&self, future: F) -> ScopedTask<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let mut tasks = self.inner.tasks.lock();
        if tasks.closed {
            tracing::warn!("spawn refused: application scope is shut down");
            return ScopedTask { handle: None };
        }
        tasks.in_flight.retain(|task| !task.is_finished());
        let handle = self.inner.handle.spawn(future);
        tasks.in_flight.push(handle.abort_handle());
        ScopedTask {
            handle: Some(handle),
        }
    }

    /// Abort everything still in flight and refuse further work.
    pub fn shutdown(&self) {
        let mut tasks = self.inner.tasks.lock();
        tasks.closed = true;
        let mut aborted = 0usize;
        for task in tasks.in_flight.drain(..) {
            if !task.is_finished() {
                task.abort();
                aborted += 1;
            }
        }
        tracing::info!(aborted, "application scope shut down");
    }

    /// Whether [`shutdown`](Self::shutdown) has been called.
    pub fn is_closed(&self) -> bool {
        self.inner.tasks.lock().closed
    }

    /// Number of spawned tasks that have not finished yet.
    pub fn in_flight(&self) -> usize {
        self.inner
            .tasks
            .lock()
            .in_flight
            .iter()
            .filter(|task| !task.is_finished())
            .count()
    }
}

impl std::fmt::Debug for ApplicationScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tasks = self.inner.tasks.lock();
        f.debug_struct("ApplicationScope")
            .field("closed", &tasks.closed)
            .field("tracked", &tasks.in_flight.len())
            .finish()
    }
}

// ─── ScopedTask ──────────────────────────────────────────────────────

/// Handle to work running on an [`ApplicationScope`].
///
/// Awaiting it yields the work's output. Dropping it does not cancel the work.
#[derive(Debug)]
pub struct ScopedTask<T> {
    handle: Option<JoinHandle<T>>,
}

impl<T> Future for ScopedTask<T> {
    type Output = Result<T, ScopeError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let Some(handle) = self.get_mut().handle.as_mut() else {
            return Poll::Ready(Err(ScopeError::Closed));
        };
        match Pin::new(handle).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(output)) => Poll::Ready(Ok(output)),
            Poll::Ready(Err(e)) if e.is_cancelled() => Poll::Ready(Err(ScopeError::Cancelled)),
            Poll::Ready(Err(e)) => {
                tracing::error!(error = %e, "application scope task panicked");
                Poll::Ready(Err(ScopeError::Panicked(e.to_string())))
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
