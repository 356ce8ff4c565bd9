//! PostgreSQL adapter for MedicationRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::{DroneId, Medication, MedicationId};
use crate::domain::ports::MedicationRepository;
use crate::entity::medications;
use crate::error::DomainError;

/// PostgreSQL implementation of MedicationRepository
pub struct PostgresMedicationRepository {
    db: DatabaseConnection,
}

impl PostgresMedicationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MedicationRepository for PostgresMedicationRepository {
    async fn add(&self, medication: &Medication) -> Result<Medication, DomainError> {
        let model = medications::ActiveModel {
            id: Set(medication.id.0),
            name: Set(medication.name.clone()),
            weight: Set(medication.weight),
            code: Set(medication.code.clone()),
            image: Set(medication.image.clone()),
            drone_id: Set(medication.drone_id.0),
        };

        let result = model.insert(&self.db).await?;

        Ok(result.into())
    }

    async fn remove(&self, medication: &Medication) -> Result<(), DomainError> {
        medications::Entity::delete_by_id(medication.id.0)
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn list(&self, drone_id: Option<&DroneId>) -> Result<Vec<Medication>, DomainError> {
        let mut query = medications::Entity::find();
        if let Some(drone_id) = drone_id {
            query = query.filter(medications::Column::DroneId.eq(drone_id.0));
        }

        let results = query
            .order_by_asc(medications::Column::Id)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn get(&self, id: &MedicationId) -> Result<Option<Medication>, DomainError> {
        let result = medications::Entity::find_by_id(id.0).one(&self.db).await?;

        Ok(result.map(|m| m.into()))
    }
}

/// Convert SeaORM model to domain entity
impl From<medications::Model> for Medication {
    fn from(model: medications::Model) -> Self {
        Medication {
            id: MedicationId(model.id),
            name: model.name,
            weight: model.weight,
            code: model.code,
            image: model.image,
            drone_id: DroneId(model.drone_id),
        }
    }
}
