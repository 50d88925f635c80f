//! # Activation Screen
//!
//! Activates a scratched card and explains failures. A rejected version opens
//! the "version too old" dialog, which stays up until dismissed; any other
//! failure is a toast.
//!
//! The activation runs on the workflow's application scope. Only the reaction
//! to its result runs on this screen's [`ScreenScope`], so leaving the screen
//! mid-activation loses the toast but never the state transition.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use scratch_core::CardState;
use scratch_oracle::VersionOracle;
use scratch_workflow::ActivationWorkflow;
use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

use super::{ScreenEvent, ScreenScope};

/// Toast for activating an activated card.
pub const ALREADY_ACTIVATED: &str = "Card is already activated";
/// Toast for activating a card that has no code yet, or is busy.
pub const NOT_SCRATCHED: &str = "You need to scratch the card first";
/// Toast when the version check could not be made.
pub const ACTIVATION_FAILED: &str = "Could not activate the card. Please try again later.";

/// User actions on the activation screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationAction {
    /// Activate a scratched card.
    Activate,
    /// Close the "version too old" dialog.
    DismissErrorDialog,
}

/// What the activation screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivationView {
    /// The card as the store holds it now.
    pub card: CardState,
    /// Whether the "version too old" dialog is up.
    pub show_error_dialog: bool,
}

/// Presenter for the activation screen.
#[derive(Debug)]
pub struct ActivationScreen<O> {
    workflow: ActivationWorkflow<O>,
    events: UnboundedSender<ScreenEvent>,
    scope: ScreenScope,
    error_dialog: Arc<AtomicBool>,
}

impl<O: VersionOracle> ActivationScreen<O> {
    /// Create the presenter with the dialog closed.
    pub fn new(workflow: ActivationWorkflow<O>, events: UnboundedSender<ScreenEvent>) -> Self {
        Self {
            workflow,
            events,
            scope: ScreenScope::new(),
            error_dialog: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Snapshot of what the screen shows.
    pub fn view(&self) -> ActivationView {
        ActivationView {
            card: self.workflow.store().current(),
            show_error_dialog: self.error_dialog.load(Ordering::SeqCst),
        }
    }

    /// Handle a user action.
    pub fn on_action(&mut self, action: ActivationAction) {
        match action {
            ActivationAction::Activate => self.activate(),
            ActivationAction::DismissErrorDialog => {
                self.error_dialog.store(false, Ordering::SeqCst);
            }
        }
    }

    /// Follow-up work still attached to this screen.
    pub fn scope_mut(&mut self) -> &mut ScreenScope {
        &mut self.scope
    }

    fn activate(&mut self) {
        match self.workflow.store().current() {
            CardState::Scratched(code) => {
                let pending = self.workflow.activate(code);
                let events = self.events.clone();
                let dialog = Arc::clone(&self.error_dialog);
                self.scope.spawn(async move {
                    match pending.await {
                        Ok(()) => {}
                        Err(e) if e.is_rejection() => {
                            dialog.store(true, Ordering::SeqCst);
                            let _ = events.send(ScreenEvent::ErrorDialogOpened);
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "activation failed");
                            let _ = events.send(ScreenEvent::Toast(ACTIVATION_FAILED.to_string()));
                        }
                    }
                });
            }
            CardState::Activated(_) => {
                let _ = self
                    .events
                    .send(ScreenEvent::Toast(ALREADY_ACTIVATED.to_string()));
            }
            CardState::Unscratched | CardState::Loading => {
                let _ = self.events.send(ScreenEvent::Toast(NOT_SCRATCHED.to_string()));
            }
        }
    }
}
