/**
 * Register Handler
 *
 * POST /api/auth/register. Creates the account and returns it without a
 * token; the client logs in afterwards.
 */
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::credentials::CredentialService;
use crate::backend::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedJson;

/// Register handler
///
/// # Returns
///
/// `201 Created` with `{ "message", "user" }`
///
/// # Errors
///
/// * `400 Bad Request` - Missing field, bad email shape, weak password
/// * `409 Conflict` - Email already registered
pub async fn register(
    State(credentials): State<Arc<CredentialService>>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), BackendError> {
    let user = credentials.register(request.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered".to_string(),
            user: user.into(),
        }),
    ))
}
