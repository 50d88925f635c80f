//! Observer capability for [`CardStateStore`](crate::CardStateStore).

use scratch_core::CardState;

/// Receives every card state transition.
///
/// `on_change` runs synchronously while the store holds its notify lock.
/// It must not call back into the store, and it should return quickly.
pub trait CardStateObserver: Send + Sync {
    /// Called with the new state after each transition, and once with the
    /// current state at subscription time.
    fn on_change(&self, state: &CardState);
}

impl<F> CardStateObserver for F
where
    F: Fn(&CardState) + Send + Sync,
{
    fn on_change(&self, state: &CardState) {
        self(state)
    }
}
