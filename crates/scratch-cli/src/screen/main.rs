//! Main screen: shows the card and nothing else.

use scratch_core::CardState;
use scratch_state::CardStateStore;

use crate::render;

/// Presenter for the main screen. It has no actions.
#[derive(Debug, Clone)]
pub struct MainScreen {
    store: CardStateStore,
}

impl MainScreen {
    /// Create the presenter over `store`.
    pub fn new(store: CardStateStore) -> Self {
        Self { store }
    }

    /// The card as the store holds it now.
    pub fn card(&self) -> CardState {
        self.store.current()
    }

    /// One-line rendering of the card.
    pub fn render(&self) -> String {
        render::card(&self.card())
    }
}
