//! SeaORM table models
//!
//! Row-level mirrors of the `drones` and `medications` tables. Domain types
//! live in `domain::entities`; conversions are in the postgres adapters.

pub mod drones;
pub mod medications;
