//! Unified error types for the drones API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Business rule violations and store failures
//! - `LoadRejection`: Why a drone refused a medication
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::{DroneId, MedicationId};

/// Reason a drone refused to load a medication
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadRejection {
    #[error(
        "drone {drone_id} carries {current_weight}g, adding {requested_weight}g exceeds its {weight_limit}g limit"
    )]
    Overweight {
        drone_id: DroneId,
        current_weight: i64,
        requested_weight: i32,
        weight_limit: i32,
    },

    #[error("drone {drone_id} battery at {battery_capacity}%, loading requires at least {minimum}%")]
    LowBattery {
        drone_id: DroneId,
        battery_capacity: f64,
        minimum: f64,
    },
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Drone not found: {0}")]
    DroneNotFound(DroneId),

    #[error("Medication not found: {medication_id} on drone {drone_id}")]
    MedicationNotFound {
        drone_id: DroneId,
        medication_id: MedicationId,
    },

    #[error("Drone cannot be deleted: {drone_id} still carries {medications} medication(s)")]
    DroneCantBeDeleted { drone_id: DroneId, medications: usize },

    #[error("Drone cannot load medications: {0}")]
    DroneCantLoadMedications(LoadRejection),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Store failure, not a business rule
    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Stable machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::DroneNotFound(_) => "drone_not_found",
            DomainError::MedicationNotFound { .. } => "medication_not_found",
            DomainError::DroneCantBeDeleted { .. } => "drone_cant_be_deleted",
            DomainError::DroneCantLoadMedications(_) => "drone_cant_load_medications",
            DomainError::Validation(_) => "validation_error",
            DomainError::Database(_) => "internal_error",
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(DomainError::DroneNotFound(_))
            | AppError::Domain(DomainError::MedicationNotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Domain(DomainError::DroneCantBeDeleted { .. })
            | AppError::Domain(DomainError::DroneCantLoadMedications(_))
            | AppError::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Domain(DomainError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error, details) = match &self {
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                ("internal_error", None)
            }
            AppError::Domain(e) => (e.kind(), Some(e.to_string())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
