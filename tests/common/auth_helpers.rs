//! Authentication test helpers

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use techspace::backend::auth::SessionIssuer;
use techspace::shared::{AppConfig, Identity};

pub const TEST_SECRET: &str = "test-secret-do-not-use";

/// Password that satisfies every strength rule
pub const STRONG_PASSWORD: &str = "Motdepasse1";

/// Configuration for in-memory servers; bcrypt at its minimum cost
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .database_url("postgres://unused")
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("valid test config")
}

pub fn test_sessions() -> Arc<SessionIssuer> {
    Arc::new(SessionIssuer::new(TEST_SECRET, Duration::from_secs(3600)))
}

/// An identity that does not need to exist in any store
pub fn identity(prenom: &str, nom: &str) -> Identity {
    Identity {
        id: Uuid::new_v4(),
        email: format!("{}.{}@example.com", prenom, nom).to_lowercase(),
        nom: nom.to_string(),
        prenom: prenom.to_string(),
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
