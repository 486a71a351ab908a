//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the client & contract test
//! suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common value objects
//! - `builders`: Builder patterns for test aggregate construction
//! - `assertions`: Custom assertion helpers for domain types

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
