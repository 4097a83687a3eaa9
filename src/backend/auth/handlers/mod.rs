//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`** - POST /api/auth/login
//! - **`profile`** - GET /api/users/profile

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handler
pub mod profile;

pub use types::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse, UserResponse};

pub use login::login;
pub use profile::profile;
pub use register::register;
