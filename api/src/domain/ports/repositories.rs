//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL) and by the
//! in-memory doubles in `test_utils`. They carry no business rules: ids are
//! assigned by the caller and every invariant is checked by the service.

use async_trait::async_trait;

use crate::domain::entities::{Drone, DroneId, DroneState, Medication, MedicationId};
use crate::error::DomainError;

/// Repository for Drone entities
#[async_trait]
pub trait DroneRepository: Send + Sync {
    /// Persist a new drone and return it as stored
    async fn add(&self, drone: &Drone) -> Result<Drone, DomainError>;

    /// Delete a drone
    async fn remove(&self, drone: &Drone) -> Result<(), DomainError>;

    /// List drones, optionally only those in `state`
    async fn list(&self, state: Option<DroneState>) -> Result<Vec<Drone>, DomainError>;

    /// Find a drone by ID
    async fn get(&self, id: &DroneId) -> Result<Option<Drone>, DomainError>;
}

/// Repository for Medication entities
#[async_trait]
pub trait MedicationRepository: Send + Sync {
    /// Persist a new medication and return it as stored
    async fn add(&self, medication: &Medication) -> Result<Medication, DomainError>;

    /// Delete a medication
    async fn remove(&self, medication: &Medication) -> Result<(), DomainError>;

    /// List medications, optionally only those loaded on `drone_id`
    async fn list(&self, drone_id: Option<&DroneId>) -> Result<Vec<Medication>, DomainError>;

    /// Find a medication by ID
    async fn get(&self, id: &MedicationId) -> Result<Option<Medication>, DomainError>;
}
