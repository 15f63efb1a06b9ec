//! Throwaway SQL databases for adapter tests

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::adapters::ensure_schema;

/// Fresh in-memory SQLite database with the schema applied.
///
/// Pinned to a single pooled connection: every SQLite `:memory:` connection
/// is its own database.
pub async fn sqlite_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory SQLite database");

    ensure_schema(&db).await.expect("Failed to create schema");

    db
}
