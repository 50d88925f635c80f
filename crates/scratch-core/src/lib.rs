//! # scratch-core: Foundational Types for the Scratch Card
//!
//! This crate is the leaf of the workspace DAG. It defines the value types
//! every other crate speaks in: the card code, the card lifecycle state, the
//! oracle-reported version, and the code generation capability.
//!
//! ## Key Design Principles
//!
//! 1. **Newtypes for domain primitives.** A `CardCode` is never a bare
//!    `String`, and its constructor rejects the empty token. A `Version` is
//!    never a bare integer.
//!
//! 2. **One closed `CardState` enum.** Four variants, exhaustive `match`
//!    everywhere. The code travels inside the variant that owns it, so an
//!    `Activated` card cannot exist without its code.
//!
//! 3. **Injectable code generation.** Reveal mints its code through the
//!    `CodeGenerator` trait. The default draws a random UUID v4.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `scratch-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod card;
pub mod code;
pub mod error;
pub mod generator;
pub mod version;

// Re-export primary types for ergonomic imports.
pub use card::CardState;
pub use code::CardCode;
pub use error::CoreError;
pub use generator::{CodeGenerator, UuidCodeGenerator};
pub use version::{Version, ACTIVATION_THRESHOLD};
