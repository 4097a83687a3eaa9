/**
 * Database Setup
 *
 * Builds the Postgres pool from [`AppConfig`] and applies the migrations
 * under `migrations/`. Unlike optional services, the store is required:
 * any failure here stops startup.
 */
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::shared::AppConfig;

/// Create the connection pool and confirm the database answers
///
/// # Errors
///
/// Returns the driver error if no connection can be established.
pub async fn load_database(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            e
        })?;

    let (server_time,): (chrono::DateTime<chrono::Utc>,) = sqlx::query_as("SELECT NOW()")
        .fetch_one(&pool)
        .await?;
    tracing::info!("Database connected (server time {})", server_time);

    Ok(pool)
}

/// Apply pending migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
