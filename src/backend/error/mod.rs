//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - The `BackendError` taxonomy and its status mapping
//! - **`storage`** - `StorageError`, produced by every storage seam
//! - **`conversion`** - Domain rejections to `BackendError`, `IntoResponse`
//!
//! # Error Taxonomy
//!
//! | Kind | Status |
//! |---|---|
//! | Validation | 400 |
//! | Authentication | 401 |
//! | Authorization | 403 |
//! | NotFound | 404 |
//! | Conflict | 409 |
//! | Storage / Internal | 500 |
//!
//! Storage and internal failures are logged with full detail on the server
//! and rendered to the client with a generic message only.

/// Error type definitions
pub mod types;

/// Storage error type
pub mod storage;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
pub use storage::StorageError;
