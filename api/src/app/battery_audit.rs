//! Battery audit
//!
//! Periodically records the battery level of every drone in the fleet as
//! structured log events under the `drones::battery` target.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;

use crate::domain::entities::{DroneId, DroneState};
use crate::domain::ports::DroneRepository;
use crate::error::DomainError;

/// Battery level of one drone at audit time
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryReading {
    pub drone_id: DroneId,
    pub serial_number: String,
    pub battery_capacity: f64,
    pub state: DroneState,
    pub taken_at: DateTime<Utc>,
}

/// Logs battery levels of all drones
pub struct BatteryAudit<DR>
where
    DR: DroneRepository,
{
    drones: Arc<DR>,
}

impl<DR> BatteryAudit<DR>
where
    DR: DroneRepository + 'static,
{
    pub fn new(drones: Arc<DR>) -> Self {
        Self { drones }
    }

    /// Read and log the battery level of every drone once
    pub async fn run_once(&self) -> Result<Vec<BatteryReading>, DomainError> {
        let taken_at = Utc::now();
        let readings: Vec<BatteryReading> = self
            .drones
            .list(None)
            .await?
            .into_iter()
            .map(|drone| BatteryReading {
                drone_id: drone.id,
                serial_number: drone.serial_number,
                battery_capacity: drone.battery_capacity,
                state: drone.state,
                taken_at,
            })
            .collect();

        for reading in &readings {
            tracing::info!(
                target: "drones::battery",
                drone_id = %reading.drone_id,
                serial_number = %reading.serial_number,
                battery_capacity = reading.battery_capacity,
                state = %reading.state,
                "Battery level"
            );
        }

        Ok(readings)
    }

    /// Run the audit every `period` until the runtime shuts down
    pub fn spawn(self, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                match self.run_once().await {
                    Ok(readings) => {
                        tracing::debug!(drones = readings.len(), "Battery audit complete")
                    }
                    Err(e) => tracing::error!(error = %e, "Battery audit failed"),
                }
            }
        })
    }
}
