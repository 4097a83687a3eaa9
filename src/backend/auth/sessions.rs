/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user sessions.
 * A token embeds the user's identity (`id`, `email`, `nom`, `prenom`) and an
 * expiration; protected requests present it as `Authorization: Bearer <token>`.
 */

use std::fmt;
use std::time::Duration;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, get_current_timestamp, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::error::AuthError;
use crate::shared::{AppConfig, Identity};

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: Uuid,
    /// Email
    pub email: String,
    /// Family name
    pub nom: String,
    /// Given name
    pub prenom: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// Identity asserted by these claims
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            email: self.email.clone(),
            nom: self.nom.clone(),
            prenom: self.prenom.clone(),
        }
    }
}

/// Issues and verifies signed session tokens
pub struct SessionIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl fmt::Debug for SessionIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl SessionIssuer {
    /// Create an issuer signing with `secret` (HS256)
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
            ttl,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.jwt_secret, config.token_ttl)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a JWT token for an identity
    ///
    /// # Returns
    /// JWT token string expiring after the configured lifetime
    pub fn issue(&self, identity: &Identity) -> Result<String, AuthError> {
        let now = get_current_timestamp();
        let claims = Claims {
            id: identity.id,
            email: identity.email.clone(),
            nom: identity.nom.clone(),
            prenom: identity.prenom.clone(),
            exp: now.saturating_add(self.ttl.as_secs()),
            iat: now,
        };
        self.sign(&claims)
    }

    fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::default(), claims, &self.encoding).map_err(AuthError::Signing)
    }

    /// Verify and decode a JWT token
    ///
    /// Expiry is reported separately from every other failure.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken(err),
            })
    }

    /// Verify the value of an `Authorization` header
    ///
    /// # Errors
    /// * `MissingToken` - no header
    /// * `MalformedHeader` - not of the form `Bearer <token>`
    /// * `InvalidToken` / `ExpiredToken` - see [`SessionIssuer::verify`]
    pub fn verify_bearer(&self, header: Option<&str>) -> Result<Claims, AuthError> {
        let header = header.ok_or(AuthError::MissingToken)?;
        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MalformedHeader)?;
        self.verify(token)
    }
}
