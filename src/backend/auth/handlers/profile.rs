/**
 * Profile Handler
 *
 * GET /api/users/profile. Returns the stored account of the caller named by
 * the session token.
 */
use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::credentials::CredentialService;
use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Profile handler
///
/// # Errors
///
/// * `401 Unauthorized` - Missing or invalid token
/// * `404 Not Found` - Token is valid but the account no longer exists
pub async fn profile(
    State(credentials): State<Arc<CredentialService>>,
    AuthUser(identity): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = credentials.profile(identity.id).await?;
    Ok(Json(user.into()))
}
