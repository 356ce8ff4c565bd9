//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::domain::entities::{
    Drone, DroneId, DroneModel, DroneState, Medication, MedicationId, NewDrone, NewMedication,
};

/// Drone creation input with a full battery
pub fn test_new_drone(weight_limit: i32) -> NewDrone {
    NewDrone {
        serial_number: "SN-TEST-0001".to_string(),
        model: DroneModel::Middleweight,
        weight_limit,
        battery_capacity: 100.0,
        state: DroneState::Idle,
    }
}

/// A stored drone with a full battery
pub fn test_drone(weight_limit: i32) -> Drone {
    Drone {
        id: DroneId::new(),
        serial_number: format!("SN-{}", weight_limit),
        model: DroneModel::Middleweight,
        weight_limit,
        battery_capacity: 100.0,
        state: DroneState::Idle,
    }
}

/// Medication creation input of the given weight
pub fn test_new_medication(weight: i32) -> NewMedication {
    NewMedication {
        name: format!("Paracetamol-{}", weight),
        weight,
        code: "PCM_500".to_string(),
        image: "https://images.example.com/paracetamol.png".to_string(),
    }
}

/// A stored medication loaded on `drone_id`
pub fn test_medication(drone_id: DroneId, weight: i32) -> Medication {
    Medication {
        id: MedicationId::new(),
        name: format!("Ibuprofen-{}", weight),
        weight,
        code: "IBU_200".to_string(),
        image: "https://images.example.com/ibuprofen.png".to_string(),
        drone_id,
    }
}
