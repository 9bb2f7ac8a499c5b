//! Test Utilities Crate
//!
//! Shared fixtures and helpers for the installed currency test suite. The
//! crate's `tests/` directory holds the cross-crate regression tests.
//!
//! # Modules
//!
//! - `fixtures`: Reference currencies and matching database rows
//! - `builders`: Builder for currencies with test defaults
//! - `database`: PostgreSQL test container management
//! - `assertions`: Assertions comparing currency data
//! - `generators`: Property-based currency generators

pub mod assertions;
pub mod builders;
pub mod database;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use database::*;
pub use fixtures::*;
pub use generators::*;
