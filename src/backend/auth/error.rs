/**
 * Authentication Errors
 *
 * Rejections produced while registering, authenticating, or verifying a
 * session token. Unknown email and wrong password collapse into the same
 * `InvalidCredentials` so callers cannot tell which one failed.
 */
use thiserror::Error;
use uuid::Uuid;

use crate::backend::error::StorageError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing required fields")]
    MissingFields,

    #[error("invalid email format")]
    InvalidEmail,

    #[error("password {0}")]
    WeakPassword(&'static str),

    #[error("email already in use")]
    EmailInUse,

    #[error("invalid credentials")]
    InvalidCredentials,

    /// No `Authorization` header
    #[error("missing authorization header")]
    MissingToken,

    /// Header present but not `Bearer <token>`
    #[error("malformed authorization header")]
    MalformedHeader,

    /// Bad signature, malformed token, wrong claims
    #[error("invalid token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("token expired")]
    ExpiredToken,

    #[error("user {0} not found")]
    UserNotFound(Uuid),

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
