/**
 * Login Handler
 *
 * POST /api/auth/login. Verifies the email/password pair and returns a
 * session token together with the public user view.
 *
 * Unknown email and wrong password both answer 401 with the same message.
 */
use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::credentials::CredentialService;
use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::backend::auth::sessions::SessionIssuer;
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedJson;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - Missing field, unknown email, or wrong password
/// * `500 Internal Server Error` - Hashing or signing failure
pub async fn login(
    State(credentials): State<Arc<CredentialService>>,
    State(sessions): State<Arc<SessionIssuer>>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    let identity = credentials
        .authenticate(request.email, request.password)
        .await?;
    let token = sessions.issue(&identity)?;

    tracing::info!("User logged in: {} ({})", identity.id, identity.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse {
            id: identity.id,
            nom: identity.nom,
            prenom: identity.prenom,
            email: identity.email,
            created_at: None,
        },
    }))
}
