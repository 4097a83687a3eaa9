//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the backend and the clients of the booking API. All types are designed
//! for serialization and transmission over HTTP.

/// Authenticated identity carried by session tokens
pub mod identity;

/// Reservation record and request payloads
pub mod reservation;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use identity::Identity;
pub use reservation::{
    CreateReservationRequest, MessageResponse, Reservation, UpdateReservationRequest, WeekQuery,
};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
