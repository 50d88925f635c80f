//! # Code Generation
//!
//! Reveal mints its code through [`CodeGenerator`] so tests can pin the
//! token while production draws a fresh random one per reveal.

use uuid::Uuid;

use crate::code::CardCode;

/// Source of fresh card codes.
///
/// Implementations must return a new, unpredictable token on every call.
/// The trait is object-safe so the workflow can hold it as
/// `Arc<dyn CodeGenerator>`.
pub trait CodeGenerator: Send + Sync {
    /// Mint a fresh card code.
    fn generate(&self) -> CardCode;
}

impl<F> CodeGenerator for F
where
    F: Fn() -> CardCode + Send + Sync,
{
    fn generate(&self) -> CardCode {
        self()
    }
}

/// Default generator: a random UUID v4 rendered in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidCodeGenerator;

impl CodeGenerator for UuidCodeGenerator {
    fn generate(&self) -> CardCode {
        // A hyphenated UUID is 36 characters and never empty.
        CardCode(Uuid::new_v4().to_string())
    }
}
