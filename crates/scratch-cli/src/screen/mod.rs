//! # Screens
//!
//! Presenters for the three screens. Each reads the card from the shared
//! store, decides whether a user action is allowed in the current state, and
//! reports to the user through [`ScreenEvent`]s.
//!
//! | Screen | Actions |
//! |--------|---------|
//! | [`MainScreen`] | none |
//! | [`ScratchScreen`] | [`ScratchAction::Scratch`] |
//! | [`ActivationScreen`] | [`ActivationAction::Activate`], [`ActivationAction::DismissErrorDialog`] |

pub mod activation;
pub mod main;
pub mod scope;
pub mod scratch;

pub use activation::{ActivationAction, ActivationScreen, ActivationView};
pub use main::MainScreen;
pub use scope::ScreenScope;
pub use scratch::{ScratchAction, ScratchScreen};

use std::str::FromStr;

use scratch_oracle::VersionOracle;
use scratch_workflow::ActivationWorkflow;
use tokio::sync::mpsc::UnboundedSender;

/// One-off notification raised by a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Short message for the user.
    Toast(String),
    /// The activation screen opened its "version too old" dialog.
    ErrorDialogOpened,
}

/// Screen identifiers accepted by `open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Main,
    Scratch,
    Activation,
}

impl FromStr for ScreenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Self::Main),
            "scratch" => Ok(Self::Scratch),
            "activation" => Ok(Self::Activation),
            other => Err(other.to_string()),
        }
    }
}

impl std::fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Main => f.write_str("main"),
            Self::Scratch => f.write_str("scratch"),
            Self::Activation => f.write_str("activation"),
        }
    }
}

/// The screen currently in front.
#[derive(Debug)]
pub enum Screen<O> {
    Main(MainScreen),
    Scratch(ScratchScreen<O>),
    Activation(ActivationScreen<O>),
}

impl<O: VersionOracle> Screen<O> {
    /// Build the presenter for `kind`.
    pub fn open(
        kind: ScreenKind,
        workflow: &ActivationWorkflow<O>,
        events: &UnboundedSender<ScreenEvent>,
    ) -> Self {
        match kind {
            ScreenKind::Main => Self::Main(MainScreen::new(workflow.store().clone())),
            ScreenKind::Scratch => Self::Scratch(ScratchScreen::new(workflow.clone(), events.clone())),
            ScreenKind::Activation => {
                Self::Activation(ActivationScreen::new(workflow.clone(), events.clone()))
            }
        }
    }

    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::Main(_) => ScreenKind::Main,
            Self::Scratch(_) => ScreenKind::Scratch,
            Self::Activation(_) => ScreenKind::Activation,
        }
    }
}
