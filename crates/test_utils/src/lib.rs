//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! eligibility engine test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built applicants for the canonical scenarios
//! - `builders`: Builder for applicants with sensible defaults
//! - `assertions`: Custom assertion helpers for eligibility results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
