//! PostgreSQL adapter for DroneRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::{Drone, DroneId, DroneState};
use crate::domain::ports::DroneRepository;
use crate::entity::drones;
use crate::error::DomainError;

/// PostgreSQL implementation of DroneRepository
pub struct PostgresDroneRepository {
    db: DatabaseConnection,
}

impl PostgresDroneRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DroneRepository for PostgresDroneRepository {
    async fn add(&self, drone: &Drone) -> Result<Drone, DomainError> {
        let model = drones::ActiveModel {
            id: Set(drone.id.0),
            serial_number: Set(drone.serial_number.clone()),
            model: Set(drone.model.to_string()),
            weight_limit: Set(drone.weight_limit),
            battery_capacity: Set(drone.battery_capacity),
            state: Set(drone.state.to_string()),
        };

        let result = model.insert(&self.db).await?;

        result.try_into()
    }

    async fn remove(&self, drone: &Drone) -> Result<(), DomainError> {
        drones::Entity::delete_by_id(drone.id.0)
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn list(&self, state: Option<DroneState>) -> Result<Vec<Drone>, DomainError> {
        let mut query = drones::Entity::find();
        if let Some(state) = state {
            query = query.filter(drones::Column::State.eq(state.to_string()));
        }

        let results = query
            .order_by_asc(drones::Column::Id)
            .all(&self.db)
            .await?;

        results.into_iter().map(Drone::try_from).collect()
    }

    async fn get(&self, id: &DroneId) -> Result<Option<Drone>, DomainError> {
        let result = drones::Entity::find_by_id(id.0).one(&self.db).await?;

        result.map(Drone::try_from).transpose()
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<drones::Model> for Drone {
    type Error = DomainError;

    fn try_from(model: drones::Model) -> Result<Self, Self::Error> {
        Ok(Drone {
            id: DroneId(model.id),
            serial_number: model.serial_number,
            model: model.model.parse().map_err(DomainError::Database)?,
            weight_limit: model.weight_limit,
            battery_capacity: model.battery_capacity,
            state: model.state.parse().map_err(DomainError::Database)?,
        })
    }
}
