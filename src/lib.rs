//! Techspace - Room Booking Backend
//!
//! A shared room is booked in one-hour slots on weekdays. Members register,
//! log in to get a session token, then book, edit and cancel their own slots;
//! anyone can read the planning.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types, date and hour parsing, configuration
//! - **`backend`** - Axum server (only compiled with the `ssr` feature)
//!
//! # Feature Flags
//!
//! - **`ssr`** - Server code: Axum, Postgres, bcrypt, tokens. On by default.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
