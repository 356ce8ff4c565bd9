//! Loading policy
//!
//! Battery gating rules applied before a drone accepts a medication.

use std::ops::RangeInclusive;

/// Minimum battery charge (percent) required to load, unless configured otherwise
pub const DEFAULT_MIN_BATTERY_CAPACITY_FOR_LOADING: f64 = 25.0;

/// Accepted values for the configured minimum
pub const MIN_BATTERY_CAPACITY_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Policy consulted by the drone service when loading medications
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadingPolicy {
    /// `None` disables battery gating
    pub min_battery_capacity: Option<f64>,
}

impl LoadingPolicy {
    pub fn gated(min_battery_capacity: f64) -> Self {
        Self {
            min_battery_capacity: Some(min_battery_capacity),
        }
    }

    pub fn ungated() -> Self {
        Self {
            min_battery_capacity: None,
        }
    }

    /// Minimum the drone is short of, if its battery is too low to load
    pub fn battery_shortfall(&self, battery_capacity: f64) -> Option<f64> {
        self.min_battery_capacity
            .filter(|minimum| battery_capacity < *minimum)
    }
}

impl Default for LoadingPolicy {
    fn default() -> Self {
        Self::gated(DEFAULT_MIN_BATTERY_CAPACITY_FOR_LOADING)
    }
}
