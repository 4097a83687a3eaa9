//! Shared Error Types
//!
//! This module defines error types that are shared between the backend and
//! any client consuming the booking API. They describe input that could not
//! be accepted before any domain rule was consulted.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field is malformed
//!
//! # Usage
//!
//! ```rust
//! use techspace::shared::error::SharedError;
//!
//! let error = SharedError::validation("date", "expected YYYY-MM-DD");
//! ```
use thiserror::Error;

/// Shared error types that can occur while reading client input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}
