/**
 * Application State
 *
 * `AppState` holds the three services handlers depend on. The `FromRef`
 * implementations let each handler extract only the service it uses.
 *
 * # Example
 *
 * ```rust,ignore
 * use std::sync::Arc;
 * use axum::extract::State;
 * use techspace::backend::reservations::ReservationEngine;
 *
 * async fn handler(State(engine): State<Arc<ReservationEngine>>) {
 *     let planning = engine.list_all().await;
 * }
 * ```
 */
use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::{CredentialService, SessionIssuer};
use crate::backend::reservations::ReservationEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Reservation validity and conflict rules
    pub engine: Arc<ReservationEngine>,
    /// Registration and login
    pub credentials: Arc<CredentialService>,
    /// Token issue and verification
    pub sessions: Arc<SessionIssuer>,
}

impl FromRef<AppState> for Arc<ReservationEngine> {
    fn from_ref(state: &AppState) -> Self {
        state.engine.clone()
    }
}

impl FromRef<AppState> for Arc<CredentialService> {
    fn from_ref(state: &AppState) -> Self {
        state.credentials.clone()
    }
}

impl FromRef<AppState> for Arc<SessionIssuer> {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}
