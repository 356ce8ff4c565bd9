//! Drone handlers
//!
//! Endpoints for registering, inspecting and retiring drones.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Drone, DroneDetails, DroneId, DroneModel, DroneState, NewDrone};
use crate::domain::ports::{DroneRepository, MedicationRepository};
use crate::error::{AppError, DomainError};
use crate::handlers::medications::MedicationResponse;
use crate::AppState;

/// Query parameters for listing drones
#[derive(Debug, Deserialize)]
pub struct ListDronesQuery {
    /// Drone state, case-insensitive (`IDLE`, `loading`, ...)
    pub state: Option<String>,
}

/// Request to register a new drone
#[derive(Debug, Deserialize)]
pub struct CreateDroneRequest {
    pub serial_number: String,
    pub model: DroneModel,
    pub weight_limit: i32,
    pub battery_capacity: f64,
    pub state: DroneState,
}

impl From<CreateDroneRequest> for NewDrone {
    fn from(request: CreateDroneRequest) -> Self {
        NewDrone {
            serial_number: request.serial_number,
            model: request.model,
            weight_limit: request.weight_limit,
            battery_capacity: request.battery_capacity,
            state: request.state,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DroneResponse {
    pub id: String,
    pub serial_number: String,
    pub model: DroneModel,
    pub weight_limit: i32,
    pub battery_capacity: f64,
    pub state: DroneState,
}

impl From<Drone> for DroneResponse {
    fn from(drone: Drone) -> Self {
        DroneResponse {
            id: drone.id.to_string(),
            serial_number: drone.serial_number,
            model: drone.model,
            weight_limit: drone.weight_limit,
            battery_capacity: drone.battery_capacity,
            state: drone.state,
        }
    }
}

/// A drone with its cargo
#[derive(Debug, Serialize)]
pub struct DroneDetailsResponse {
    #[serde(flatten)]
    pub drone: DroneResponse,
    /// Combined weight of `medications`, in grams
    pub loaded_weight: i64,
    pub medications: Vec<MedicationResponse>,
}

impl From<DroneDetails> for DroneDetailsResponse {
    fn from(details: DroneDetails) -> Self {
        let loaded_weight = details.loaded_weight();
        DroneDetailsResponse {
            drone: details.drone.into(),
            loaded_weight,
            medications: details.medications.into_iter().map(Into::into).collect(),
        }
    }
}

/// GET /drones
///
/// List drones, optionally filtered by `?state=`.
pub async fn list_drones<DR, MR>(
    State(state): State<AppState<DR, MR>>,
    Query(query): Query<ListDronesQuery>,
) -> Result<Json<Vec<DroneResponse>>, AppError>
where
    DR: DroneRepository + 'static,
    MR: MedicationRepository + 'static,
{
    let filter = query
        .state
        .as_deref()
        .map(str::parse::<DroneState>)
        .transpose()
        .map_err(DomainError::Validation)?;

    let drones = state.drone_service.list_drones(filter).await?;

    Ok(Json(drones.into_iter().map(Into::into).collect()))
}

/// POST /drones
///
/// Register a new drone.
pub async fn create_drone<DR, MR>(
    State(state): State<AppState<DR, MR>>,
    Json(request): Json<CreateDroneRequest>,
) -> Result<Json<DroneResponse>, AppError>
where
    DR: DroneRepository + 'static,
    MR: MedicationRepository + 'static,
{
    let drone = state.drone_service.add_drone(request.into()).await?;

    Ok(Json(drone.into()))
}

/// GET /drones/:drone_id
///
/// Get a drone together with its loaded medications.
pub async fn get_drone<DR, MR>(
    State(state): State<AppState<DR, MR>>,
    Path(drone_id): Path<Uuid>,
) -> Result<Json<DroneDetailsResponse>, AppError>
where
    DR: DroneRepository + 'static,
    MR: MedicationRepository + 'static,
{
    let details = state.drone_service.get_drone(&DroneId(drone_id)).await?;

    Ok(Json(details.into()))
}

/// DELETE /drones/:drone_id
///
/// Retire an empty drone.
pub async fn delete_drone<DR, MR>(
    State(state): State<AppState<DR, MR>>,
    Path(drone_id): Path<Uuid>,
) -> Result<(), AppError>
where
    DR: DroneRepository + 'static,
    MR: MedicationRepository + 'static,
{
    state.drone_service.remove_drone(&DroneId(drone_id)).await?;
    Ok(())
}
