/**
 * Backend Error Types
 *
 * This module defines the error taxonomy returned by every HTTP handler.
 * Domain rejections (`ReservationError`, `AuthError`) and shared input
 * errors are folded into it in `conversion.rs`.
 *
 * # Error Categories
 *
 * - `Validation` - Missing or malformed field (400)
 * - `Authentication` - Bad credentials or token (401)
 * - `Authorization` - Caller does not own the resource (403)
 * - `NotFound` - Resource does not exist (404)
 * - `Conflict` - Duplicate email or double-booked slot (409)
 * - `Storage` / `Internal` - Unexpected backend failure (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::error::storage::StorageError;
use crate::shared::SharedError;

/// Generic message returned to clients for 5xx failures
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use techspace::backend::error::BackendError;
///
/// let err = BackendError::conflict("Slot already taken");
/// assert_eq!(err.status_code().as_u16(), 409);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or malformed field
    #[error("Validation error: {message}")]
    Validation {
        /// Offending field, when one can be named
        field: Option<String>,
        /// Human-readable error message
        message: String,
    },

    /// Bad credentials, or a missing / invalid / expired token
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Caller is authenticated but may not act on the resource
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request collides with existing state
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Storage backend failure
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Any other server-side failure (hashing, signing...)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackendError {
    /// Create a validation error for a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        Self::Authorization(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            Self::Authorization(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message that may be shown to the client
    ///
    /// Storage and internal failures never expose their detail.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Authentication(message)
            | Self::Authorization(message)
            | Self::NotFound(message)
            | Self::Conflict(message) => message.clone(),
            Self::Storage(_) | Self::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { field, message } => Self::Validation {
                field: Some(field),
                message,
            },
        }
    }
}
