//! Test utilities
//!
//! In-memory repository implementations and test fixtures for unit testing.
//!
//! The in-memory repositories implement the same port traits as the
//! PostgreSQL adapters, so services are tested against the real contract
//! rather than against call expectations.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
