//! Medication domain entity
//!
//! A package loaded onto exactly one drone.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::drone::DroneId;
use super::id;
use crate::error::DomainError;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").expect("valid name pattern"));

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9_]*$").expect("valid code pattern"));

/// Unique identifier for a medication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MedicationId(pub Uuid);

impl MedicationId {
    pub fn new() -> Self {
        Self(id::generate())
    }
}

impl Default for MedicationId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for MedicationId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MedicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A medication package assigned to a drone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Medication {
    pub id: MedicationId,
    pub name: String,
    /// Weight in grams
    pub weight: i32,
    pub code: String,
    pub image: String,
    pub drone_id: DroneId,
}

impl Medication {
    /// Build a medication bound to `drone_id`, assigning a fresh id
    pub fn create(drone_id: DroneId, input: NewMedication) -> Self {
        Self {
            id: MedicationId::new(),
            name: input.name,
            weight: input.weight,
            code: input.code,
            image: input.image,
            drone_id,
        }
    }
}

/// Data needed to load a medication onto a drone
#[derive(Debug, Clone, PartialEq)]
pub struct NewMedication {
    pub name: String,
    pub weight: i32,
    pub code: String,
    pub image: String,
}

impl NewMedication {
    /// Check field constraints
    pub fn validate(&self) -> Result<(), DomainError> {
        if !NAME_PATTERN.is_match(&self.name) {
            return Err(DomainError::Validation(format!(
                "name may only contain letters, digits, '-' and '_': {:?}",
                self.name
            )));
        }
        if self.weight <= 0 {
            return Err(DomainError::Validation(format!(
                "weight must be greater than 0, got {}",
                self.weight
            )));
        }
        if !CODE_PATTERN.is_match(&self.code) {
            return Err(DomainError::Validation(format!(
                "code may only contain upper case letters, digits and '_': {:?}",
                self.code
            )));
        }
        validate_image_url(&self.image)
    }
}

fn validate_image_url(image: &str) -> Result<(), DomainError> {
    let url = Url::parse(image)
        .map_err(|e| DomainError::Validation(format!("image must be a URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(DomainError::Validation(format!(
            "image must be an http(s) URL with a host: {}",
            image
        )));
    }
    Ok(())
}
