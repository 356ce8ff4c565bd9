//! Domain entities
//!
//! Pure domain models for the drone fleet.
//! These are separate from the SeaORM table models in the `entity` module.

pub mod drone;
pub mod id;
pub mod medication;

pub use drone::{Drone, DroneDetails, DroneId, DroneModel, DroneState, NewDrone};
pub use medication::{Medication, MedicationId, NewMedication};
