//! # scratch-cli: Terminal Front End
//!
//! A line-oriented stand-in for the three screens of the scratch card app.
//! Each screen is a presenter over the shared [`CardStateStore`] that gates
//! user actions on the current card state and reports problems as toasts.
//!
//! ## Modules
//!
//! - [`args`]: command-line flags and how they resolve into configuration.
//! - [`oracle`]: runtime choice between the HTTP and the static oracle.
//! - [`screen`]: the presenters and their per-screen task scope.
//! - [`repl`]: command parsing and the interactive session.
//! - [`render`]: text rendering of card states and screen events.
//!
//! [`CardStateStore`]: scratch_state::CardStateStore

pub mod args;
pub mod oracle;
pub mod render;
pub mod repl;
pub mod screen;
