//! Drone service
//!
//! Owns the fleet rules: a drone only loads what fits under its weight limit,
//! refuses loads while its battery is below the configured minimum, and can
//! only be deleted once it is empty.
//!
//! Loading and deleting a drone are check-then-act sequences against the
//! store. Both run under a per-drone async lock so that two concurrent loads
//! cannot both pass the weight check, and a load cannot slip in between a
//! deletion's emptiness check and its delete.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::app::loading_policy::LoadingPolicy;
use crate::domain::entities::{
    Drone, DroneDetails, DroneId, DroneState, Medication, MedicationId, NewDrone, NewMedication,
};
use crate::domain::ports::{DroneRepository, MedicationRepository};
use crate::error::{DomainError, LoadRejection};

/// Per-drone serializing locks
///
/// Entries only live while some caller holds or waits on them.
#[derive(Default)]
struct DroneLocks {
    locks: Mutex<HashMap<DroneId, Arc<tokio::sync::Mutex<()>>>>,
}

impl DroneLocks {
    /// Register interest in `id`'s lock; the entry is dropped with the last
    /// registration, including when the caller is cancelled mid-wait
    fn entry(&self, id: DroneId) -> DroneLockEntry<'_> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        let mutex = locks.entry(id).or_default().clone();
        DroneLockEntry {
            locks: self,
            id,
            mutex,
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

struct DroneLockEntry<'a> {
    locks: &'a DroneLocks,
    id: DroneId,
    mutex: Arc<tokio::sync::Mutex<()>>,
}

impl DroneLockEntry<'_> {
    async fn lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.mutex.lock().await
    }
}

impl Drop for DroneLockEntry<'_> {
    fn drop(&mut self) {
        let mut locks = self
            .locks
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // Give up our reference under the map lock so concurrent drops agree
        // on who is last
        drop(std::mem::take(&mut self.mutex));
        if locks
            .get(&self.id)
            .is_some_and(|mutex| Arc::strong_count(mutex) == 1)
        {
            locks.remove(&self.id);
        }
    }
}

/// Service for managing drones and the medications loaded on them
pub struct DroneService<DR, MR>
where
    DR: DroneRepository,
    MR: MedicationRepository,
{
    drones: Arc<DR>,
    medications: Arc<MR>,
    policy: LoadingPolicy,
    locks: DroneLocks,
}

impl<DR, MR> DroneService<DR, MR>
where
    DR: DroneRepository,
    MR: MedicationRepository,
{
    pub fn new(drones: Arc<DR>, medications: Arc<MR>, policy: LoadingPolicy) -> Self {
        Self {
            drones,
            medications,
            policy,
            locks: DroneLocks::default(),
        }
    }

    /// Register a new drone
    pub async fn add_drone(&self, input: NewDrone) -> Result<Drone, DomainError> {
        input.validate()?;

        let drone = self.drones.add(&Drone::create(input)).await?;
        tracing::info!(drone_id = %drone.id, serial_number = %drone.serial_number, "Drone registered");

        Ok(drone)
    }

    /// Delete an empty drone
    pub async fn remove_drone(&self, drone_id: &DroneId) -> Result<(), DomainError> {
        let entry = self.locks.entry(*drone_id);
        let _guard = entry.lock().await;
        self.remove_drone_locked(drone_id).await
    }

    async fn remove_drone_locked(&self, drone_id: &DroneId) -> Result<(), DomainError> {
        let drone = self.find_drone(drone_id).await?;

        let loaded = self.medications.list(Some(drone_id)).await?;
        if !loaded.is_empty() {
            return Err(DomainError::DroneCantBeDeleted {
                drone_id: *drone_id,
                medications: loaded.len(),
            });
        }

        self.drones.remove(&drone).await?;
        tracing::info!(drone_id = %drone_id, "Drone removed");

        Ok(())
    }

    /// List drones, optionally filtered by state
    pub async fn list_drones(&self, state: Option<DroneState>) -> Result<Vec<Drone>, DomainError> {
        self.drones.list(state).await
    }

    /// Get a drone with everything loaded on it
    pub async fn get_drone(&self, drone_id: &DroneId) -> Result<DroneDetails, DomainError> {
        let drone = self.find_drone(drone_id).await?;
        let medications = self.medications.list(Some(drone_id)).await?;

        Ok(DroneDetails { drone, medications })
    }

    /// List the medications loaded on a drone
    pub async fn list_medications(
        &self,
        drone_id: &DroneId,
    ) -> Result<Vec<Medication>, DomainError> {
        self.find_drone(drone_id).await?;
        self.medications.list(Some(drone_id)).await
    }

    /// Load a medication onto a drone
    ///
    /// Checks, in order:
    /// 1. The medication fields are valid
    /// 2. The drone exists
    /// 3. The drone's battery meets the loading minimum (when gating is on)
    /// 4. The medication fits under the drone's weight limit (equal is fine)
    pub async fn add_medication(
        &self,
        drone_id: &DroneId,
        input: NewMedication,
    ) -> Result<Medication, DomainError> {
        input.validate()?;

        let entry = self.locks.entry(*drone_id);
        let _guard = entry.lock().await;
        self.add_medication_locked(drone_id, input).await
    }

    async fn add_medication_locked(
        &self,
        drone_id: &DroneId,
        input: NewMedication,
    ) -> Result<Medication, DomainError> {
        let drone = self.find_drone(drone_id).await?;

        if let Some(minimum) = self.policy.battery_shortfall(drone.battery_capacity) {
            return Err(DomainError::DroneCantLoadMedications(
                LoadRejection::LowBattery {
                    drone_id: drone.id,
                    battery_capacity: drone.battery_capacity,
                    minimum,
                },
            ));
        }

        let current_weight: i64 = self
            .medications
            .list(Some(drone_id))
            .await?
            .iter()
            .map(|m| i64::from(m.weight))
            .sum();

        if !drone.can_carry(current_weight, i64::from(input.weight)) {
            return Err(DomainError::DroneCantLoadMedications(
                LoadRejection::Overweight {
                    drone_id: drone.id,
                    current_weight,
                    requested_weight: input.weight,
                    weight_limit: drone.weight_limit,
                },
            ));
        }

        let medication = self
            .medications
            .add(&Medication::create(drone.id, input))
            .await?;

        tracing::info!(
            drone_id = %drone.id,
            medication_id = %medication.id,
            weight = medication.weight,
            loaded = current_weight + i64::from(medication.weight),
            weight_limit = drone.weight_limit,
            "Medication loaded"
        );

        Ok(medication)
    }

    /// Unload a medication from a drone
    ///
    /// A medication that exists but belongs to another drone is reported as
    /// not found.
    pub async fn remove_medication(
        &self,
        drone_id: &DroneId,
        medication_id: &MedicationId,
    ) -> Result<(), DomainError> {
        let medication = self
            .medications
            .get(medication_id)
            .await?
            .filter(|m| m.drone_id == *drone_id)
            .ok_or(DomainError::MedicationNotFound {
                drone_id: *drone_id,
                medication_id: *medication_id,
            })?;

        self.medications.remove(&medication).await?;
        tracing::info!(drone_id = %drone_id, medication_id = %medication_id, "Medication unloaded");

        Ok(())
    }

    async fn find_drone(&self, drone_id: &DroneId) -> Result<Drone, DomainError> {
        self.drones
            .get(drone_id)
            .await?
            .ok_or(DomainError::DroneNotFound(*drone_id))
    }
}
