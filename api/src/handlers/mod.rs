//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod drones;
pub mod medications;

pub use drones::{create_drone, delete_drone, get_drone, list_drones};
pub use medications::{create_medication, delete_medication, list_medications};
