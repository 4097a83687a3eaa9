/**
 * Router Configuration
 *
 * Combines the API routes with the cross-cutting layers into a single
 * Axum router.
 *
 * # Layers
 *
 * - `CorsLayer::permissive()` - The browser client is served from another origin
 * - `TraceLayer` - One span per request
 *
 * Unknown paths answer 404 with the standard error body.
 */
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Services shared by every handler
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    router
        .fallback(|| async { BackendError::not_found("Route not found") })
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}
