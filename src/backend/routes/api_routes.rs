/**
 * API Routes
 *
 * # Authentication
 * - `POST /api/auth/register` - Create an account
 * - `POST /api/auth/login` - Obtain a session token
 * - `GET /api/users/profile` - Current account (token required)
 *
 * # Planning
 * - `GET /api/planning` - Every reservation
 * - `GET /api/planning/week?date=YYYY-MM-DD` - One Monday..Friday window
 *
 * # Reservations (token required)
 * - `POST /api/reservations` - Book a slot
 * - `PUT /api/reservations/{id}` - Change the object
 * - `DELETE /api/reservations/{id}` - Cancel
 */
use axum::{
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::handlers::{login, profile, register};
use crate::backend::reservations::handlers::{
    cancel_reservation, create_reservation, list_planning, list_week, update_reservation,
};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Protected routes authenticate through the `AuthUser` extractor, so no
/// route layer is needed here.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/users/profile", get(profile))
        .route("/api/planning", get(list_planning))
        .route("/api/planning/week", get(list_week))
        .route("/api/reservations", post(create_reservation))
        .route(
            "/api/reservations/{id}",
            put(update_reservation).delete(cancel_reservation),
        )
}
