//! Persistence for portfolio projects.
//!
//! Two interchangeable [`stores::ProjectStore`] backends (hosted Postgres
//! and a local JSON file) behind the [`repositories::ProjectRepo`]
//! fallback orchestrator.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod stores;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL without connecting.
///
/// Connections are opened on first use, so an unreachable database does
/// not block startup; each failed acquire surfaces as a store error and
/// the repository falls back to the JSON store.
pub fn create_pool(database_url: &str, acquire_timeout: Duration) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(acquire_timeout)
        .connect_lazy(database_url)
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations (creates the `projects` table if absent).
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
