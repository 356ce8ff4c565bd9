//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and the entity store ports.

pub mod battery_audit;
pub mod drone_service;
pub mod loading_policy;
pub mod seed;

pub use battery_audit::BatteryAudit;
pub use drone_service::DroneService;
pub use loading_policy::{
    LoadingPolicy, DEFAULT_MIN_BATTERY_CAPACITY_FOR_LOADING, MIN_BATTERY_CAPACITY_RANGE,
};
pub use seed::seed_fleet;
