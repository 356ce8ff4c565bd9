//! Fleet seed
//!
//! Registers a small demo fleet through the drone service so the seeded data
//! passes the same rules as any other request.

use crate::app::DroneService;
use crate::domain::entities::{DroneModel, DroneState, NewDrone, NewMedication};
use crate::domain::ports::{DroneRepository, MedicationRepository};
use crate::error::DomainError;

fn seed_drones() -> Vec<NewDrone> {
    vec![
        NewDrone {
            serial_number: "123456789".to_string(),
            model: DroneModel::Middleweight,
            weight_limit: 100,
            battery_capacity: 100.0,
            state: DroneState::Idle,
        },
        NewDrone {
            serial_number: "987654321".to_string(),
            model: DroneModel::Lightweight,
            weight_limit: 400,
            battery_capacity: 50.0,
            state: DroneState::Idle,
        },
    ]
}

fn seed_medications() -> Vec<NewMedication> {
    vec![
        NewMedication {
            name: "Aspirin".to_string(),
            weight: 10,
            code: "A".to_string(),
            image: "https://www.aspirin.com/images/aspirin-logo.png".to_string(),
        },
        NewMedication {
            name: "Advil".to_string(),
            weight: 20,
            code: "B".to_string(),
            image: "https://www.advil.com/images/advil-logo.png".to_string(),
        },
    ]
}

/// Seed the fleet if the store holds no drones yet
///
/// Returns whether anything was written.
pub async fn seed_fleet<DR, MR>(service: &DroneService<DR, MR>) -> Result<bool, DomainError>
where
    DR: DroneRepository,
    MR: MedicationRepository,
{
    if !service.list_drones(None).await?.is_empty() {
        tracing::info!("Fleet already present, skipping seed");
        return Ok(false);
    }

    for (drone, medication) in seed_drones().into_iter().zip(seed_medications()) {
        let drone = service.add_drone(drone).await?;
        service.add_medication(&drone.id, medication).await?;
    }

    tracing::info!("Seeded demo fleet");
    Ok(true)
}
