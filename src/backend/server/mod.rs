//! Server Module
//!
//! Startup and shared state for the Axum server.
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Postgres pool and migrations
//! - **`init`** - State assembly and app creation
//!
//! # Initialization Flow
//!
//! 1. Load `AppConfig` from the environment (done by the binary)
//! 2. Connect to Postgres, check connectivity, run migrations
//! 3. Build services and the router

/// Application state
pub mod state;

/// Database setup
pub mod config;

/// Server initialization
pub mod init;

pub use init::{build_state, create_app, InitError};
pub use state::AppState;
