//! Domain ports (traits)
//!
//! Port traits define the entity store the domain service requires.
//! Adapters provide concrete implementations of these traits.

pub mod repositories;

pub use repositories::{DroneRepository, MedicationRepository};
