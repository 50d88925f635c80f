//! # Card State Store
//!
//! A single `CardState` cell plus an ordered list of observers, both behind
//! one `parking_lot::Mutex`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use scratch_core::CardState;

use crate::observer::CardStateObserver;
use crate::stream::CardStateStream;

/// Single source of truth for the card lifecycle state.
///
/// Cloning is cheap; all clones share one cell.
#[derive(Clone)]
pub struct CardStateStore {
    inner: Arc<Inner>,
}

struct Inner {
    cell: Mutex<Cell>,
    next_id: AtomicU64,
}

struct Cell {
    state: CardState,
    observers: Vec<(u64, Arc<dyn CardStateObserver>)>,
}

impl CardStateStore {
    /// Create a store holding `Unscratched`.
    pub fn new() -> Self {
        Self::with_state(CardState::Unscratched)
    }

    /// Create a store holding an explicit initial state.
    pub fn with_state(state: CardState) -> Self {
        Self {
            inner: Arc::new(Inner {
                cell: Mutex::new(Cell {
                    state,
                    observers: Vec::new(),
                }),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// The latest value.
    pub fn current(&self) -> CardState {
        self.inner.cell.lock().state.clone()
    }

    /// Replace the state and notify every observer in subscription order.
    pub fn set(&self, next: CardState) {
        let mut cell = self.inner.cell.lock();
        let previous = std::mem::replace(&mut cell.state, next);
        tracing::debug!(from = %previous, to = %cell.state, "card state transition");
        for (_, observer) in &cell.observers {
            observer.on_change(&cell.state);
        }
    }

    /// Register an observer. It is called immediately with the current value,
    /// then on every subsequent `set`, until the returned guard is dropped.
    pub fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: CardStateObserver + 'static,
    {
        let observer: Arc<dyn CardStateObserver> = Arc::new(observer);
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);

        let mut cell = self.inner.cell.lock();
        observer.on_change(&cell.state);
        cell.observers.push((id, observer));

        Subscription {
            store: Arc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Subscribe through an unbounded channel for async consumers.
    pub fn stream(&self) -> CardStateStream {
        CardStateStream::attach(self)
    }

    /// Number of live observers, streams included.
    pub fn observer_count(&self) -> usize {
        self.inner.cell.lock().observers.len()
    }
}

impl Default for CardStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CardStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cell = self.inner.cell.lock();
        f.debug_struct("CardStateStore")
            .field("state", &cell.state)
            .field("observers", &cell.observers.len())
            .finish()
    }
}

// ─── Subscription ────────────────────────────────────────────────────

/// Guard for a registered observer. Dropping it unsubscribes.
///
/// Holds only a weak reference, so an outstanding subscription does not keep
/// the store alive.
#[derive(Debug)]
#[must_use = "dropping a Subscription immediately unsubscribes the observer"]
pub struct Subscription {
    store: Weak<Inner>,
    id: Option<u64>,
}

impl Subscription {
    /// Remove the observer now. No notification is delivered after this
    /// returns.
    pub fn unsubscribe(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(inner) = self.store.upgrade() {
            inner.cell.lock().observers.retain(|(oid, _)| *oid != id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
