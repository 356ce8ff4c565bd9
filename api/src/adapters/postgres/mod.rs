//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod drone_repo;
pub mod medication_repo;
pub mod schema;

#[cfg(test)]
mod integration_tests;

pub use drone_repo::PostgresDroneRepository;
pub use medication_repo::PostgresMedicationRepository;
pub use schema::ensure_schema;
