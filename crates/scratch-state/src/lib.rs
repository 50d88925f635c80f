//! # scratch-state: Card State Store
//!
//! Holds the one `CardState` the application has and broadcasts every
//! change to its observers.
//!
//! ## Semantics
//!
//! - **Most-recent-value.** A new observer immediately receives the current
//!   value, never historical ones.
//! - **No coalescing.** Every `set` reaches every observer, in the order the
//!   values were set. Replace-and-notify happens under one lock, so this
//!   holds even when `set` is called from several threads.
//! - **Scoped subscriptions.** `subscribe` and `stream` return guards; dropping
//!   the guard removes the observer.
//!
//! The store is an explicit handle passed to every consumer. There is no
//! process-wide global.

pub mod observer;
pub mod store;
pub mod stream;

pub use observer::CardStateObserver;
pub use store::{CardStateStore, Subscription};
pub use stream::CardStateStream;
