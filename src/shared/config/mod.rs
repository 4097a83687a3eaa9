//! Application configuration module
//!
//! Provides the typed configuration consumed by the server: database
//! connection parameters, the session signing secret and lifetime, password
//! hashing cost, and the bookable opening hours.
//!
//! Values are read from the process environment (see [`AppConfig::from_env`])
//! or assembled programmatically with [`AppConfig::builder`].

use std::time::Duration;
use thiserror::Error;

/// Default pool size, small enough to act as admission control
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
/// Default bounded wait for a pooled connection
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
/// Default session token lifetime
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);
/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;
/// First bookable hour of the day
pub const DEFAULT_OPENING_HOUR: u32 = 8;
/// The establishment closes at 19h; no slot may run past it
pub const DEFAULT_CLOSING_HOUR: u32 = 19;
/// Default bcrypt cost (mirrors `bcrypt::DEFAULT_COST`)
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string
    pub database_url: String,
    /// HMAC secret used to sign session tokens
    pub jwt_secret: String,
    /// Lifetime of an issued session token
    pub token_ttl: Duration,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// How long a request may wait for a pooled connection
    pub acquire_timeout: Duration,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Listen port
    pub port: u16,
    /// First hour a slot may start at
    pub opening_hour: u32,
    /// Hour by which every slot must have ended
    pub closing_hour: u32,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    ///
    /// `DATABASE_URL` and `JWT_SECRET` are required; every other value
    /// falls back to its default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = AppConfig::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(hours) = parse_var::<u64, _>(&lookup, "TOKEN_TTL_HOURS")? {
            let secs = hours
                .checked_mul(60 * 60)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "TOKEN_TTL_HOURS",
                    value: hours.to_string(),
                })?;
            builder = builder.token_ttl(Duration::from_secs(secs));
        }
        if let Some(size) = parse_var::<u32, _>(&lookup, "DB_MAX_CONNECTIONS")? {
            builder = builder.max_connections(size);
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "DB_ACQUIRE_TIMEOUT_SECS")? {
            builder = builder.acquire_timeout(Duration::from_secs(secs));
        }
        if let Some(cost) = parse_var::<u32, _>(&lookup, "BCRYPT_COST")? {
            builder = builder.bcrypt_cost(cost);
        }
        if let Some(port) = parse_var::<u16, _>(&lookup, "SERVER_PORT")? {
            builder = builder.port(port);
        }
        let opening = parse_var::<u32, _>(&lookup, "OPENING_HOUR")?;
        let closing = parse_var::<u32, _>(&lookup, "CLOSING_HOUR")?;
        builder = builder.opening_hours(
            opening.unwrap_or(DEFAULT_OPENING_HOUR),
            closing.unwrap_or(DEFAULT_CLOSING_HOUR),
        );

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DB_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }
        if self.token_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_HOURS",
                value: "0".to_string(),
            });
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        // The last slot must end on the same day
        if self.opening_hour >= self.closing_hour || self.closing_hour > 23 {
            return Err(ConfigError::InvalidOpeningHours {
                opening: self.opening_hour,
                closing: self.closing_hour,
            });
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

/// Builder for AppConfig
#[derive(Debug)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl: Duration,
    max_connections: u32,
    acquire_timeout: Duration,
    bcrypt_cost: u32,
    port: u16,
    opening_hour: u32,
    closing_hour: u32,
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self {
            database_url: None,
            jwt_secret: None,
            token_ttl: DEFAULT_TOKEN_TTL,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            port: DEFAULT_PORT,
            opening_hour: DEFAULT_OPENING_HOUR,
            closing_hour: DEFAULT_CLOSING_HOUR,
        }
    }
}

impl AppConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn max_connections(mut self, size: u32) -> Self {
        self.max_connections = size;
        self
    }

    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the bookable window, `[opening, closing)` in whole hours
    pub fn opening_hours(mut self, opening: u32, closing: u32) -> Self {
        self.opening_hour = opening;
        self.closing_hour = closing;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            database_url: self
                .database_url
                .ok_or(ConfigError::MissingValue("DATABASE_URL"))?,
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            token_ttl: self.token_ttl,
            max_connections: self.max_connections,
            acquire_timeout: self.acquire_timeout,
            bcrypt_cost: self.bcrypt_cost,
            port: self.port,
            opening_hour: self.opening_hour,
            closing_hour: self.closing_hour,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("opening hour {opening} must be before closing hour {closing} (max 23)")]
    InvalidOpeningHours { opening: u32, closing: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/techspace"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.token_ttl, DEFAULT_TOKEN_TTL);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.port, 5000);
        assert_eq!(config.opening_hour, 8);
        assert_eq!(config.closing_hour, 19);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/techspace"),
            ("JWT_SECRET", "secret"),
            ("TOKEN_TTL_HOURS", "2"),
            ("DB_MAX_CONNECTIONS", "3"),
            ("CLOSING_HOUR", "20"),
        ]))
        .unwrap();

        assert_eq!(config.token_ttl, Duration::from_secs(7200));
        assert_eq!(config.max_connections, 3);
        assert_eq!(config.closing_hour, 20);
    }

    #[test]
    fn test_missing_secret() {
        let result = AppConfig::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "postgres://localhost/techspace",
        )]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingValue("JWT_SECRET"));
    }

    #[test]
    fn test_unparseable_number() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/techspace"),
            ("JWT_SECRET", "secret"),
            ("DB_MAX_CONNECTIONS", "ten"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "DB_MAX_CONNECTIONS", .. })
        ));
    }

    #[test]
    fn test_inverted_opening_hours() {
        let result = AppConfig::builder()
            .database_url("postgres://localhost/techspace")
            .jwt_secret("secret")
            .opening_hours(19, 8)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidOpeningHours { .. })));
    }

    #[test]
    fn test_closing_at_midnight_rejected() {
        let result = AppConfig::builder()
            .database_url("postgres://localhost/techspace")
            .jwt_secret("secret")
            .opening_hours(8, 24)
            .build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidOpeningHours { opening: 8, closing: 24 }
        );

        let latest = AppConfig::builder()
            .database_url("postgres://localhost/techspace")
            .jwt_secret("secret")
            .opening_hours(0, 23)
            .build();
        assert!(latest.is_ok());
    }

    #[test]
    fn test_token_ttl_overflow() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/techspace"),
            ("JWT_SECRET", "secret"),
            ("TOKEN_TTL_HOURS", "18446744073709551615"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "TOKEN_TTL_HOURS", .. })
        ));
    }
}
