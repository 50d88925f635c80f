//! # Error Types
//!
//! Validation errors for the core value types. The core validates exactly
//! one thing: a card code is never empty.

use thiserror::Error;

/// Top-level error type for `scratch-core`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A card code was constructed from an empty (or all-whitespace) string.
    #[error("card code must not be empty")]
    EmptyCode,
}
