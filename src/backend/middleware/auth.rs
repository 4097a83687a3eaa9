/**
 * Authentication Extractor
 *
 * Resolves the caller of a protected route from the
 * `Authorization: Bearer <token>` header. The token alone identifies the
 * caller; no user lookup is made.
 */
use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::auth::{AuthError, SessionIssuer};
use crate::backend::error::BackendError;
use crate::shared::Identity;

/// Axum extractor for the authenticated caller
///
/// Rejects with 401 when the header is missing, is not a bearer header,
/// or carries an invalid or expired token.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(AuthUser(identity): AuthUser) -> String {
///     identity.display_name()
/// }
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    Arc<SessionIssuer>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let sessions = Arc::<SessionIssuer>::from_ref(state);

        let header = match parts.headers.get(AUTHORIZATION) {
            Some(value) => Some(value.to_str().map_err(|_| AuthError::MalformedHeader)?),
            None => None,
        };

        let claims = sessions.verify_bearer(header)?;
        Ok(AuthUser(claims.identity()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use std::time::Duration;
    use uuid::Uuid;

    fn sessions() -> Arc<SessionIssuer> {
        Arc::new(SessionIssuer::new("middleware-test-secret", Duration::from_secs(3600)))
    }

    fn identity() -> Identity {
        Identity {
            id: Uuid::new_v4(),
            email: "claire.martin@example.com".to_string(),
            nom: "Martin".to_string(),
            prenom: "Claire".to_string(),
        }
    }

    async fn extract(
        state: &Arc<SessionIssuer>,
        header: Option<&str>,
    ) -> Result<AuthUser, BackendError> {
        let mut builder = Request::builder().uri("/api/users/profile");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        AuthUser::from_request_parts(&mut parts, state).await
    }

    #[tokio::test]
    async fn test_valid_bearer_token() {
        let state = sessions();
        let who = identity();
        let token = state.issue(&who).unwrap();

        let AuthUser(resolved) = extract(&state, Some(&format!("Bearer {token}")))
            .await
            .unwrap();
        assert_eq!(resolved, who);
    }

    #[tokio::test]
    async fn test_missing_header() {
        let err = extract(&sessions(), None).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_wrong_scheme() {
        let state = sessions();
        let token = state.issue(&identity()).unwrap();
        let err = extract(&state, Some(&format!("Basic {token}"))).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_garbage_token() {
        let err = extract(&sessions(), Some("Bearer not.a.token")).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
