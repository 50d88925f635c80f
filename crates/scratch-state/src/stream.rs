//! # Async State Stream
//!
//! Bridges the synchronous observer list to async consumers through an
//! unbounded tokio channel, so a lagging consumer never loses a transition.

use scratch_core::CardState;
use tokio::sync::mpsc;

use crate::observer::CardStateObserver;
use crate::store::{CardStateStore, Subscription};

struct ChannelObserver {
    tx: mpsc::UnboundedSender<CardState>,
}

impl CardStateObserver for ChannelObserver {
    fn on_change(&self, state: &CardState) {
        // The receiver half lives in the stream that owns our subscription,
        // so a send can only fail while that stream is being dropped.
        let _ = self.tx.send(state.clone());
    }
}

/// Async view of the store: the current value first, then every transition.
///
/// Dropping the stream unsubscribes.
#[derive(Debug)]
pub struct CardStateStream {
    rx: mpsc::UnboundedReceiver<CardState>,
    _subscription: Subscription,
}

impl CardStateStream {
    pub(crate) fn attach(store: &CardStateStore) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let subscription = store.subscribe(ChannelObserver { tx });
        Self {
            rx,
            _subscription: subscription,
        }
    }

    /// Wait for the next value. Returns `None` once the store is gone.
    pub async fn recv(&mut self) -> Option<CardState> {
        self.rx.recv().await
    }

    /// Take the next value if one is already queued.
    pub fn try_recv(&mut self) -> Option<CardState> {
        self.rx.try_recv().ok()
    }

    /// Drain every value currently queued, in order.
    pub fn drain(&mut self) -> Vec<CardState> {
        let mut drained = Vec::new();
        while let Some(state) = self.try_recv() {
            drained.push(state);
        }
        drained
    }

    /// Wait until a value satisfying `predicate` arrives, and return it.
    /// Values that do not match are consumed.
    pub async fn wait_for<P>(&mut self, mut predicate: P) -> Option<CardState>
    where
        P: FnMut(&CardState) -> bool,
    {
        while let Some(state) = self.recv().await {
            if predicate(&state) {
                return Some(state);
            }
        }
        None
    }
}
