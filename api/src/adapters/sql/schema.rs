//! Schema bootstrap
//!
//! Creates the `products` and `users` tables from the SeaORM models when they
//! do not exist yet. There is no migration history beyond this.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::entity::{products, users};

/// Make sure every table the API needs exists
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table_if_missing(db, products::Entity).await?;
    create_table_if_missing(db, users::Entity).await?;
    Ok(())
}

async fn create_table_if_missing<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    tracing::debug!(table = %entity.table_name(), "Table ensured");

    Ok(())
}
