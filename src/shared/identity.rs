/**
 * Authenticated Identity
 *
 * The identity asserted by a session token: who the caller is, as embedded
 * in the token claims and threaded explicitly through every protected
 * operation. It never carries the password digest.
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated user identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User ID (UUID)
    pub id: Uuid,
    /// Email address
    pub email: String,
    /// Family name
    pub nom: String,
    /// Given name
    pub prenom: String,
}

impl Identity {
    /// Formatted full name stored alongside the user's reservations
    pub fn display_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom)
    }
}
