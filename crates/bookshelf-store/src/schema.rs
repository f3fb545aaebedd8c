//! Schema definitions and migration utilities.
//!
//! The catalog schema is embedded at compile time and applied on connect
//! when `StoreConfig::run_migrations` is set.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded migration SQL for the catalog collections (001_catalog.sql).
pub const CATALOG_MIGRATION: &str = include_str!("../../../migrations/001_catalog.sql");

/// Collection tables created by [`CATALOG_MIGRATION`].
pub const COLLECTIONS: [&str; 3] = ["books", "authors", "publications"];

/// Run all pending migrations against the database.
///
/// This function is idempotent - it can be run multiple times safely.
/// Every statement uses `IF NOT EXISTS`.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    tracing::debug!("Running catalog migration (001_catalog.sql)...");
    sqlx::raw_sql(CATALOG_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::Migration(format!("Catalog migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if all three collection tables exist.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (i64,) = sqlx::query_as(
        r#"
        SELECT COUNT(*)::bigint
        FROM information_schema.tables
        WHERE table_schema = 'public'
        AND table_name = ANY($1)
        "#,
    )
    .bind(&COLLECTIONS[..])
    .fetch_one(pool)
    .await?;

    Ok(result.0 == COLLECTIONS.len() as i64)
}
