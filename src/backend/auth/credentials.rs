/**
 * Credential Rules
 *
 * Registration and authentication on top of a [`UserStore`].
 *
 * # Registration
 *
 * 1. `nom`, `prenom`, `email` and `password` are all present
 * 2. Email has the `local@domain.tld` shape
 * 3. Password has at least 8 characters, a lowercase letter, an uppercase
 *    letter and a digit
 * 4. Email is not already registered
 * 5. Password is hashed with bcrypt; the plaintext is never stored
 *
 * # Authentication
 *
 * Unknown email and wrong password yield the same `InvalidCredentials`. An
 * unknown email still pays for one bcrypt verification so both paths take
 * comparable time.
 */
use std::sync::{Arc, LazyLock};

use regex::Regex;
use uuid::Uuid;

use crate::backend::auth::error::AuthError;
use crate::backend::auth::users::{NewUser, User, UserStore};
use crate::shared::Identity;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Check the simplified `local@domain.tld` shape
pub fn validate_email(email: &str) -> Result<(), AuthError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(AuthError::InvalidEmail)
    }
}

/// Check password strength
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword("must be at least 8 characters"));
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(AuthError::WeakPassword("must contain a lowercase letter"));
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(AuthError::WeakPassword("must contain an uppercase letter"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AuthError::WeakPassword("must contain a digit"));
    }
    Ok(())
}

/// Emails are compared case-insensitively
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn required(value: Option<String>) -> Result<String, AuthError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::MissingFields)
}

async fn hash_password(password: String, cost: u32) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))?
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

async fn verify_password(password: String, digest: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &digest))
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))?
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Account details submitted for registration
///
/// Fields stay optional so absence is judged by the registration rules.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Registration and login over a user store
pub struct CredentialService {
    users: Arc<dyn UserStore>,
    cost: u32,
    /// Verified against when the email is unknown
    decoy_digest: String,
}

impl CredentialService {
    /// Create the service; `cost` is the bcrypt work factor
    pub fn new(users: Arc<dyn UserStore>, cost: u32) -> Result<Self, AuthError> {
        let decoy_digest =
            bcrypt::hash("decoy-password", cost).map_err(|e| AuthError::Hashing(e.to_string()))?;
        Ok(Self {
            users,
            cost,
            decoy_digest,
        })
    }

    /// Register a new account
    ///
    /// # Errors
    ///
    /// * `MissingFields` - any of the four fields absent or blank
    /// * `InvalidEmail` / `WeakPassword` - format rules
    /// * `EmailInUse` - email already registered
    pub async fn register(&self, request: Registration) -> Result<User, AuthError> {
        let nom = required(request.nom)?;
        let prenom = required(request.prenom)?;
        let email = normalize_email(&required(request.email)?);
        // Passwords are taken verbatim, only emptiness counts as missing
        let password = request
            .password
            .filter(|p| !p.is_empty())
            .ok_or(AuthError::MissingFields)?;

        validate_email(&email)?;
        validate_password(&password)?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailInUse);
        }

        let password_hash = hash_password(password, self.cost).await?;

        let user = self
            .users
            .insert(NewUser {
                nom,
                prenom,
                email,
                password_hash,
            })
            .await
            .map_err(|err| {
                if err.is_unique_violation() {
                    AuthError::EmailInUse
                } else {
                    err.into()
                }
            })?;

        tracing::info!("User registered: {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Check an email/password pair
    pub async fn authenticate(
        &self,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<Identity, AuthError> {
        let (Some(email), Some(password)) = (email, password) else {
            return Err(AuthError::InvalidCredentials);
        };
        let email = normalize_email(&email);

        let Some(user) = self.users.find_by_email(&email).await? else {
            let _ = verify_password(password, self.decoy_digest.clone()).await;
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user.identity())
    }

    /// Look up the account behind an authenticated identity
    pub async fn profile(&self, id: Uuid) -> Result<User, AuthError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(AuthError::UserNotFound(id))
    }
}
