//! Schema bootstrap
//!
//! Creates the `drones` and `medications` tables, and the indexes declared on
//! their SeaORM models, when they do not exist yet.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::entity::{drones, medications};

/// Create missing tables and indexes; drones first so the foreign key resolves
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(db, drones::Entity).await?;
    create_table(db, medications::Entity).await?;

    tracing::info!("Database schema ready");
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(backend.build(&table)).await?;

    // `indexed` columns are not part of the table statement
    for mut index in schema.create_index_from_entity(entity) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }

    Ok(())
}
