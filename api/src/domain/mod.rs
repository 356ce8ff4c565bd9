//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Drones, medications and the rules on their fields
//! - `ports`: Trait definitions for the entity store

pub mod entities;
pub mod ports;
