//! Backend Module
//!
//! Server-side code for the Techspace room-booking API. Compiled only with
//! the `ssr` feature.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports
//! ├── server/         - Startup, state, database setup
//! ├── routes/         - Route configuration
//! ├── auth/           - Accounts, credentials, session tokens
//! ├── reservations/   - Booking rules, ledger, planning views
//! ├── middleware/     - AuthUser extractor
//! └── error/          - BackendError and HTTP mapping
//! ```
//!
//! # Storage
//!
//! Accounts and reservations live in Postgres. The engine and credential
//! service only see the `UserStore` and `ReservationLedger` traits; the
//! uniqueness of a (date, start) slot is enforced by the database so two
//! concurrent bookings of one slot cannot both succeed.

/// Server setup and state
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Request extractors
pub mod middleware;

/// Reservation rules and planning
pub mod reservations;

pub use error::BackendError;
pub use server::create_app;
