//! # scratch-workflow: Reveal and Activation
//!
//! Orchestrates the two user-triggered operations on the card and decides
//! the next state from each outcome.
//!
//! ## State Machine
//!
//! ```text
//! Unscratched --reveal--> Loading --(after delay)--> Scratched(code)
//! Scratched(code) --activate--> Loading --(v > threshold)--> Activated(code)
//! Scratched(code) --activate--> Loading --(v <= threshold)--> Scratched(code)
//! Scratched(code) --activate--> Loading --(oracle failure)--> Scratched(code)
//! ```
//!
//! ## Scopes
//!
//! Both operations run on an [`ApplicationScope`], which outlives every
//! screen. They are spawned before the calling method returns, so dropping
//! the returned future, or the task awaiting it, never cancels a reveal or
//! an activation. Only [`ApplicationScope::shutdown`] does.
//!
//! ## Crate Policy
//!
//! - Every failure is a typed [`ActivationError`]; nothing panics.
//! - The workflow trusts the caller's code and does not re-validate it
//!   against the store.

pub mod config;
pub mod error;
pub mod scope;
pub mod workflow;

pub use config::{ConfigError, WorkflowConfig};
pub use error::ActivationError;
pub use scope::{ApplicationScope, ScopeError, ScopedTask};
pub use workflow::ActivationWorkflow;
