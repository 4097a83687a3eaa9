/**
 * Server Initialization
 *
 * Wires configuration, storage and services into an Axum router.
 *
 * # Initialization Process
 *
 * 1. Connect to Postgres and apply migrations
 * 2. Build the Postgres-backed user store and reservation ledger
 * 3. Build the credential service, session issuer and reservation engine
 * 4. Create the router
 *
 * [`build_state`] takes its storage and clock as trait objects so the
 * whole HTTP surface can run against in-memory stores in tests.
 */
use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::{AuthError, CredentialService, PgUserStore, SessionIssuer, UserStore};
use crate::backend::reservations::{
    Clock, PgReservationLedger, ReservationEngine, ReservationLedger, SlotPolicy, SystemClock,
};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, run_migrations};
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("database unavailable: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("credential service: {0}")]
    Auth(#[from] AuthError),
}

/// Assemble the application state from its parts
pub fn build_state(
    config: &AppConfig,
    users: Arc<dyn UserStore>,
    ledger: Arc<dyn ReservationLedger>,
    clock: Arc<dyn Clock>,
) -> Result<AppState, InitError> {
    let credentials = CredentialService::new(users, config.bcrypt_cost)?;
    let sessions = SessionIssuer::from_config(config);
    let engine = ReservationEngine::new(ledger, clock, SlotPolicy::from_config(config));

    Ok(AppState {
        engine: Arc::new(engine),
        credentials: Arc::new(credentials),
        sessions: Arc::new(sessions),
    })
}

/// Create the production application
///
/// # Errors
///
/// Fails when the database is unreachable or a migration does not apply.
pub async fn create_app(config: &AppConfig) -> Result<Router, InitError> {
    tracing::info!("Initializing Techspace backend server");

    let pool = load_database(config).await?;
    run_migrations(&pool).await?;

    let state = build_state(
        config,
        Arc::new(PgUserStore::new(pool.clone())),
        Arc::new(PgReservationLedger::new(pool)),
        Arc::new(SystemClock),
    )?;

    tracing::info!(
        "Bookable window {}h-{}h, token lifetime {:?}",
        config.opening_hour,
        config.closing_hour,
        config.token_ttl
    );

    Ok(create_router(state))
}
