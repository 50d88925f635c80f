//! Scratch screen: reveals the card code.

use scratch_core::CardState;
use scratch_oracle::VersionOracle;
use scratch_workflow::ActivationWorkflow;
use tokio::sync::mpsc::UnboundedSender;

use super::{ScreenEvent, ScreenScope};

/// Toast for scratching a card that already shows its code.
pub const ALREADY_SCRATCHED: &str = "Card is already scratched";
/// Toast for scratching an activated card.
pub const ALREADY_ACTIVATED: &str = "Card is already activated";
/// Toast while another operation is running, or when the reveal was cut
/// short by shutdown.
pub const SCRATCH_FAILED: &str = "Could not scratch the card. Please try again later.";

/// User actions on the scratch screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScratchAction {
    /// Reveal the code of an unscratched card.
    Scratch,
}

/// Presenter for the scratch screen.
///
/// Only an `Unscratched` card is revealed; every other state answers with a
/// toast.
#[derive(Debug)]
pub struct ScratchScreen<O> {
    workflow: ActivationWorkflow<O>,
    events: UnboundedSender<ScreenEvent>,
    scope: ScreenScope,
}

impl<O: VersionOracle> ScratchScreen<O> {
    /// Create the presenter with an empty [`ScreenScope`].
    pub fn new(workflow: ActivationWorkflow<O>, events: UnboundedSender<ScreenEvent>) -> Self {
        Self {
            workflow,
            events,
            scope: ScreenScope::new(),
        }
    }

    /// The card as the store holds it now.
    pub fn card(&self) -> CardState {
        self.workflow.store().current()
    }

    /// Handle a user action.
    pub fn on_action(&mut self, action: ScratchAction) {
        match action {
            ScratchAction::Scratch => self.scratch(),
        }
    }

    /// Follow-up work still attached to this screen.
    pub fn scope_mut(&mut self) -> &mut ScreenScope {
        &mut self.scope
    }

    fn scratch(&mut self) {
        match self.card() {
            CardState::Unscratched => {
                let reveal = self.workflow.reveal();
                let events = self.events.clone();
                self.scope.spawn(async move {
                    match reveal.await {
                        Ok(code) => tracing::debug!(code = %code, "reveal finished"),
                        Err(e) => {
                            tracing::warn!(error = %e, "reveal did not finish");
                            toast(&events, SCRATCH_FAILED);
                        }
                    }
                });
            }
            CardState::Scratched(_) => toast(&self.events, ALREADY_SCRATCHED),
            CardState::Activated(_) => toast(&self.events, ALREADY_ACTIVATED),
            CardState::Loading => toast(&self.events, SCRATCH_FAILED),
        }
    }
}

fn toast(events: &UnboundedSender<ScreenEvent>, message: &str) {
    // The renderer may already be gone during shutdown.
    let _ = events.send(ScreenEvent::Toast(message.to_string()));
}
