//! Drone domain entity
//!
//! A delivery drone and the limits that decide what it can carry.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::id;
use super::medication::Medication;
use crate::error::DomainError;

/// Maximum length of a drone serial number
pub const SERIAL_NUMBER_MAX_LEN: usize = 100;

/// Accepted weight limits, in grams
pub const WEIGHT_LIMIT_RANGE: RangeInclusive<i32> = 1..=500;

/// Accepted battery capacities, in percent
pub const BATTERY_CAPACITY_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Unique identifier for a drone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DroneId(pub Uuid);

impl DroneId {
    pub fn new() -> Self {
        Self(id::generate())
    }
}

impl Default for DroneId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for DroneId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DroneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Drone weight class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DroneModel {
    Lightweight,
    Middleweight,
    Cruiserweight,
    Heavyweight,
}

impl std::fmt::Display for DroneModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DroneModel::Lightweight => write!(f, "Lightweight"),
            DroneModel::Middleweight => write!(f, "Middleweight"),
            DroneModel::Cruiserweight => write!(f, "Cruiserweight"),
            DroneModel::Heavyweight => write!(f, "Heavyweight"),
        }
    }
}

impl std::str::FromStr for DroneModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lightweight" => Ok(DroneModel::Lightweight),
            "middleweight" => Ok(DroneModel::Middleweight),
            "cruiserweight" => Ok(DroneModel::Cruiserweight),
            "heavyweight" => Ok(DroneModel::Heavyweight),
            _ => Err(format!("Unknown drone model: {}", s)),
        }
    }
}

/// Operational state of a drone
///
/// Informational only: the service stores whatever the caller supplies and
/// does not enforce transitions between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DroneState {
    Idle,
    Loading,
    Loaded,
    Delivering,
    Delivered,
    Returning,
}

impl std::fmt::Display for DroneState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DroneState::Idle => write!(f, "IDLE"),
            DroneState::Loading => write!(f, "LOADING"),
            DroneState::Loaded => write!(f, "LOADED"),
            DroneState::Delivering => write!(f, "DELIVERING"),
            DroneState::Delivered => write!(f, "DELIVERED"),
            DroneState::Returning => write!(f, "RETURNING"),
        }
    }
}

impl std::str::FromStr for DroneState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IDLE" => Ok(DroneState::Idle),
            "LOADING" => Ok(DroneState::Loading),
            "LOADED" => Ok(DroneState::Loaded),
            "DELIVERING" => Ok(DroneState::Delivering),
            "DELIVERED" => Ok(DroneState::Delivered),
            "RETURNING" => Ok(DroneState::Returning),
            _ => Err(format!("Unknown drone state: {}", s)),
        }
    }
}

/// A drone in the fleet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drone {
    pub id: DroneId,
    pub serial_number: String,
    pub model: DroneModel,
    /// Maximum combined medication weight, in grams
    pub weight_limit: i32,
    /// Battery charge, in percent
    pub battery_capacity: f64,
    pub state: DroneState,
}

impl Drone {
    /// Build a drone from creation input, assigning a fresh id
    pub fn create(input: NewDrone) -> Self {
        Self {
            id: DroneId::new(),
            serial_number: input.serial_number,
            model: input.model,
            weight_limit: input.weight_limit,
            battery_capacity: input.battery_capacity,
            state: input.state,
        }
    }

    /// Whether `requested` more grams fit on top of `current` already loaded
    pub fn can_carry(&self, current: i64, requested: i64) -> bool {
        current + requested <= i64::from(self.weight_limit)
    }
}

/// Data needed to register a new drone
#[derive(Debug, Clone, PartialEq)]
pub struct NewDrone {
    pub serial_number: String,
    pub model: DroneModel,
    pub weight_limit: i32,
    pub battery_capacity: f64,
    pub state: DroneState,
}

impl NewDrone {
    /// Check field constraints
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.serial_number.chars().count() > SERIAL_NUMBER_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "serial_number must be at most {} characters",
                SERIAL_NUMBER_MAX_LEN
            )));
        }
        if !WEIGHT_LIMIT_RANGE.contains(&self.weight_limit) {
            return Err(DomainError::Validation(format!(
                "weight_limit must be between {} and {}, got {}",
                WEIGHT_LIMIT_RANGE.start(),
                WEIGHT_LIMIT_RANGE.end(),
                self.weight_limit
            )));
        }
        // NaN fails `contains`
        if !BATTERY_CAPACITY_RANGE.contains(&self.battery_capacity) {
            return Err(DomainError::Validation(format!(
                "battery_capacity must be between {} and {}, got {}",
                BATTERY_CAPACITY_RANGE.start(),
                BATTERY_CAPACITY_RANGE.end(),
                self.battery_capacity
            )));
        }
        Ok(())
    }
}

/// A drone together with everything currently loaded on it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroneDetails {
    pub drone: Drone,
    pub medications: Vec<Medication>,
}

impl DroneDetails {
    /// Combined weight of the loaded medications, in grams
    pub fn loaded_weight(&self) -> i64 {
        self.medications.iter().map(|m| i64::from(m.weight)).sum()
    }
}
