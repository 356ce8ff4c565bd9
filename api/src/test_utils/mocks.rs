//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and list it back in insertion order.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::domain::entities::{Drone, DroneId, DroneState, Medication, MedicationId};
use crate::domain::ports::{DroneRepository, MedicationRepository};
use crate::error::DomainError;

/// Delay injected by `with_latency` to widen check-then-act windows
const MOCK_LATENCY: Duration = Duration::from_millis(2);

fn mock_failure() -> DomainError {
    DomainError::Database("Mock failure".to_string())
}

async fn simulate_latency(latency: Option<Duration>) {
    if let Some(latency) = latency {
        tokio::time::sleep(latency).await;
    }
}

// ============================================================================
// In-Memory Drone Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryDroneRepository {
    drones: Arc<RwLock<HashMap<DroneId, (u64, Drone)>>>,
    sequence: AtomicU64,
    should_fail: bool,
}

impl InMemoryDroneRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call returns a database error
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a drone for testing
    pub fn with_drone(self, drone: Drone) -> Self {
        {
            let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
            let mut drones = self.drones.write().unwrap();
            drones.insert(drone.id, (seq, drone));
        }
        self
    }
}

#[async_trait]
impl DroneRepository for InMemoryDroneRepository {
    async fn add(&self, drone: &Drone) -> Result<Drone, DomainError> {
        if self.should_fail {
            return Err(mock_failure());
        }

        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
        let mut drones = self.drones.write().unwrap();
        drones.insert(drone.id, (seq, drone.clone()));
        Ok(drone.clone())
    }

    async fn remove(&self, drone: &Drone) -> Result<(), DomainError> {
        if self.should_fail {
            return Err(mock_failure());
        }

        let mut drones = self.drones.write().unwrap();
        drones.remove(&drone.id);
        Ok(())
    }

    async fn list(&self, state: Option<DroneState>) -> Result<Vec<Drone>, DomainError> {
        if self.should_fail {
            return Err(mock_failure());
        }

        let drones = self.drones.read().unwrap();
        let mut listed: Vec<_> = drones
            .values()
            .filter(|(_, d)| state.map_or(true, |s| d.state == s))
            .cloned()
            .collect();
        listed.sort_by_key(|(seq, _)| *seq);
        Ok(listed.into_iter().map(|(_, d)| d).collect())
    }

    async fn get(&self, id: &DroneId) -> Result<Option<Drone>, DomainError> {
        if self.should_fail {
            return Err(mock_failure());
        }

        let drones = self.drones.read().unwrap();
        Ok(drones.get(id).map(|(_, d)| d.clone()))
    }
}

// ============================================================================
// In-Memory Medication Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryMedicationRepository {
    medications: Arc<RwLock<HashMap<MedicationId, (u64, Medication)>>>,
    sequence: AtomicU64,
    should_fail: bool,
    latency: Option<Duration>,
}

impl InMemoryMedicationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call returns a database error
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a medication for testing
    pub fn with_medication(self, medication: Medication) -> Self {
        {
            let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
            let mut medications = self.medications.write().unwrap();
            medications.insert(medication.id, (seq, medication));
        }
        self
    }

    /// Sleep briefly before every call
    pub fn with_latency(mut self) -> Self {
        self.latency = Some(MOCK_LATENCY);
        self
    }
}

#[async_trait]
impl MedicationRepository for InMemoryMedicationRepository {
    async fn add(&self, medication: &Medication) -> Result<Medication, DomainError> {
        simulate_latency(self.latency).await;
        if self.should_fail {
            return Err(mock_failure());
        }

        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
        let mut medications = self.medications.write().unwrap();
        medications.insert(medication.id, (seq, medication.clone()));
        Ok(medication.clone())
    }

    async fn remove(&self, medication: &Medication) -> Result<(), DomainError> {
        simulate_latency(self.latency).await;
        if self.should_fail {
            return Err(mock_failure());
        }

        let mut medications = self.medications.write().unwrap();
        medications.remove(&medication.id);
        Ok(())
    }

    async fn list(&self, drone_id: Option<&DroneId>) -> Result<Vec<Medication>, DomainError> {
        simulate_latency(self.latency).await;
        if self.should_fail {
            return Err(mock_failure());
        }

        let medications = self.medications.read().unwrap();
        let mut listed: Vec<_> = medications
            .values()
            .filter(|(_, m)| drone_id.map_or(true, |id| m.drone_id == *id))
            .cloned()
            .collect();
        listed.sort_by_key(|(seq, _)| *seq);
        Ok(listed.into_iter().map(|(_, m)| m).collect())
    }

    async fn get(&self, id: &MedicationId) -> Result<Option<Medication>, DomainError> {
        simulate_latency(self.latency).await;
        if self.should_fail {
            return Err(mock_failure());
        }

        let medications = self.medications.read().unwrap();
        Ok(medications.get(id).map(|(_, m)| m.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_drone, test_medication};

    #[tokio::test]
    async fn drone_list_keeps_insertion_order() {
        let repo = InMemoryDroneRepository::new();
        let drones: Vec<_> = (1..=5).map(|i| test_drone(i * 10)).collect();
        for drone in &drones {
            repo.add(drone).await.unwrap();
        }

        let listed = repo.list(None).await.unwrap();

        assert_eq!(listed, drones);
    }

    #[tokio::test]
    async fn medication_list_filters_by_drone() {
        let a = DroneId::new();
        let b = DroneId::new();
        let repo = InMemoryMedicationRepository::new()
            .with_medication(test_medication(a, 1))
            .with_medication(test_medication(b, 2))
            .with_medication(test_medication(a, 3));

        let listed = repo.list(Some(&a)).await.unwrap();

        assert_eq!(listed.iter().map(|m| m.weight).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(repo.list(None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn remove_then_get_is_absent() {
        let repo = InMemoryDroneRepository::new();
        let drone = repo.add(&test_drone(10)).await.unwrap();

        repo.remove(&drone).await.unwrap();

        assert!(repo.get(&drone.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn failing_repository_errors() {
        let repo = InMemoryMedicationRepository::failing();

        assert!(matches!(
            repo.list(None).await,
            Err(DomainError::Database(_))
        ));
    }
}
