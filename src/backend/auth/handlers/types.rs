/**
 * Authentication Handler Types
 *
 * Request and response bodies for register, login and profile. Request
 * fields are optional so a missing field produces a 400 with a message
 * rather than a JSON extraction rejection.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::credentials::Registration;
use crate::backend::auth::users::User;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    /// Plaintext, hashed before storage
    pub password: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(request: RegisterRequest) -> Self {
        Self {
            nom: request.nom,
            prenom: request.prenom,
            email: request.email,
            password: request.password,
        }
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Returned by login
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Signed session token
    pub token: String,
    pub user: UserResponse,
}

/// Returned by register
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Public view of an account
///
/// Never carries the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: Uuid,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nom: user.nom,
            prenom: user.prenom,
            email: user.email,
            created_at: Some(user.created_at),
        }
    }
}
