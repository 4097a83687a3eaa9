//! Middleware Module
//!
//! Request-level concerns shared by handlers.
//!
//! - **`auth`** - `AuthUser` extractor for routes that require a session
//! - **`extract`** - `ValidatedJson` / `ValidatedPath`, rejecting through `BackendError`

pub mod auth;

pub mod extract;

pub use auth::AuthUser;
pub use extract::{ValidatedJson, ValidatedPath};
