//! Medication handlers
//!
//! Endpoints for loading medications onto a drone and unloading them.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{DroneId, Medication, MedicationId, NewMedication};
use crate::domain::ports::{DroneRepository, MedicationRepository};
use crate::error::AppError;
use crate::AppState;

/// Request to load a medication
#[derive(Debug, Deserialize)]
pub struct CreateMedicationRequest {
    pub name: String,
    /// Grams
    pub weight: i32,
    pub code: String,
    /// Picture of the package
    pub image: String,
}

impl From<CreateMedicationRequest> for NewMedication {
    fn from(request: CreateMedicationRequest) -> Self {
        NewMedication {
            name: request.name,
            weight: request.weight,
            code: request.code,
            image: request.image,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MedicationResponse {
    pub id: String,
    pub name: String,
    pub weight: i32,
    pub code: String,
    pub image: String,
    pub drone_id: String,
}

impl From<Medication> for MedicationResponse {
    fn from(medication: Medication) -> Self {
        MedicationResponse {
            id: medication.id.to_string(),
            name: medication.name,
            weight: medication.weight,
            code: medication.code,
            image: medication.image,
            drone_id: medication.drone_id.to_string(),
        }
    }
}

/// GET /drones/:drone_id/medications
pub async fn list_medications<DR, MR>(
    State(state): State<AppState<DR, MR>>,
    Path(drone_id): Path<Uuid>,
) -> Result<Json<Vec<MedicationResponse>>, AppError>
where
    DR: DroneRepository + 'static,
    MR: MedicationRepository + 'static,
{
    let medications = state
        .drone_service
        .list_medications(&DroneId(drone_id))
        .await?;

    Ok(Json(medications.into_iter().map(Into::into).collect()))
}

/// POST /drones/:drone_id/medications
///
/// Load a medication onto a drone. Rejected when the drone's battery is too
/// low or the medication would push it over its weight limit.
pub async fn create_medication<DR, MR>(
    State(state): State<AppState<DR, MR>>,
    Path(drone_id): Path<Uuid>,
    Json(request): Json<CreateMedicationRequest>,
) -> Result<Json<MedicationResponse>, AppError>
where
    DR: DroneRepository + 'static,
    MR: MedicationRepository + 'static,
{
    let medication = state
        .drone_service
        .add_medication(&DroneId(drone_id), request.into())
        .await?;

    Ok(Json(medication.into()))
}

/// DELETE /drones/:drone_id/medications/:medication_id
pub async fn delete_medication<DR, MR>(
    State(state): State<AppState<DR, MR>>,
    Path((drone_id, medication_id)): Path<(Uuid, Uuid)>,
) -> Result<(), AppError>
where
    DR: DroneRepository + 'static,
    MR: MedicationRepository + 'static,
{
    state
        .drone_service
        .remove_medication(&DroneId(drone_id), &MedicationId(medication_id))
        .await?;
    Ok(())
}
