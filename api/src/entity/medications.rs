use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "medications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub weight: i32,
    #[sea_orm(indexed)]
    pub code: String,
    pub image: String,
    #[sea_orm(indexed)]
    pub drone_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::drones::Entity",
        from = "Column::DroneId",
        to = "super::drones::Column::Id",
        on_delete = "Restrict"
    )]
    Drone,
}

impl Related<super::drones::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Drone.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
