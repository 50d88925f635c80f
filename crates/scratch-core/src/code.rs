//! # Card Code
//!
//! The opaque token minted when a card is revealed and presented again when
//! the card is activated. The core never interprets its contents; it only
//! guarantees the token is non-empty.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Opaque, non-empty card code.
///
/// Deserialization goes through [`CardCode::new`], so a code read from JSON
/// upholds the same invariant as one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardCode(pub(crate) String);

impl CardCode {
    /// Create a card code, rejecting empty and all-whitespace tokens.
    pub fn new(code: impl Into<String>) -> Result<Self, CoreError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(CoreError::EmptyCode);
        }
        Ok(Self(code))
    }

    /// Access the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the code and return the raw token.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for CardCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CardCode {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CardCode> for String {
    fn from(code: CardCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CardCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
