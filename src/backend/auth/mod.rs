//! Authentication Module
//!
//! Account registration, credential checks and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── error.rs        - AuthError
//! ├── users.rs        - User model and UserStore
//! ├── credentials.rs  - Registration and password rules
//! ├── sessions.rs     - Token issue and verification
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Flow
//!
//! 1. **Register**: fields validated, password hashed, account stored
//! 2. **Login**: credentials verified, token returned
//! 3. **Profile**: token verified, account returned
//!
//! Tokens carry the caller's id, email, nom and prenom, so protected
//! routes never touch the user table to identify the caller.

pub mod error;

/// User data model and storage
pub mod users;

/// Registration and authentication rules
pub mod credentials;

/// Token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use credentials::{CredentialService, Registration};
pub use error::AuthError;
pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use sessions::{Claims, SessionIssuer};
pub use users::{NewUser, PgUserStore, User, UserStore};
