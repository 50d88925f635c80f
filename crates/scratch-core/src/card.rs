//! # Card Lifecycle State
//!
//! The single piece of state the whole demo revolves around.
//!
//! ## States
//!
//! ```text
//! Unscratched ──▶ Loading ──▶ Scratched(code) ──▶ Loading ──▶ Activated(code)
//!                                   ▲                │          (terminal)
//!                                   └────────────────┘
//!                              (rejected or transport failure)
//! ```
//!
//! Every entry into `Loading` resolves to exactly one of the other states.
//! Transitions fully replace the previous value; nothing is merged.

use serde::{Deserialize, Serialize};

use crate::code::CardCode;

/// The lifecycle state of the card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardState {
    /// A transition is in flight.
    Loading,
    /// The card has not been revealed yet.
    #[default]
    Unscratched,
    /// The card has been revealed and carries its code.
    Scratched(CardCode),
    /// The card has been activated with the code it was revealed with (terminal).
    Activated(CardCode),
}

impl CardState {
    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Activated(_))
    }

    /// Whether a transition is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The code carried by `Scratched` and `Activated`, if any.
    pub fn code(&self) -> Option<&CardCode> {
        match self {
            Self::Scratched(code) | Self::Activated(code) => Some(code),
            Self::Loading | Self::Unscratched => None,
        }
    }
}

impl std::fmt::Display for CardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Loading => "LOADING",
            Self::Unscratched => "UNSCRATCHED",
            Self::Scratched(_) => "SCRATCHED",
            Self::Activated(_) => "ACTIVATED",
        };
        f.write_str(s)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CardCode {
        CardCode::new(s).unwrap()
    }

    #[test]
    fn default_is_unscratched() {
        assert_eq!(CardState::default(), CardState::Unscratched);
    }

    #[test]
    fn only_activated_is_terminal() {
        assert!(!CardState::Loading.is_terminal());
        assert!(!CardState::Unscratched.is_terminal());
        assert!(!CardState::Scratched(code("a")).is_terminal());
        assert!(CardState::Activated(code("a")).is_terminal());
    }

    #[test]
    fn code_accessor() {
        assert_eq!(CardState::Loading.code(), None);
        assert_eq!(CardState::Unscratched.code(), None);
        assert_eq!(CardState::Scratched(code("x")).code(), Some(&code("x")));
        assert_eq!(CardState::Activated(code("y")).code(), Some(&code("y")));
    }

    #[test]
    fn display() {
        assert_eq!(CardState::Loading.to_string(), "LOADING");
        assert_eq!(CardState::Unscratched.to_string(), "UNSCRATCHED");
        assert_eq!(CardState::Scratched(code("a")).to_string(), "SCRATCHED");
        assert_eq!(CardState::Activated(code("a")).to_string(), "ACTIVATED");
    }

    #[test]
    fn serialization_shape() {
        let json = serde_json::to_value(CardState::Scratched(code("TEST-CODE"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "state": "SCRATCHED", "code": "TEST-CODE" })
        );

        let json = serde_json::to_value(CardState::Unscratched).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "UNSCRATCHED" }));

        let parsed: CardState =
            serde_json::from_value(serde_json::json!({ "state": "ACTIVATED", "code": "c" }))
                .unwrap();
        assert_eq!(parsed, CardState::Activated(code("c")));
    }
}
