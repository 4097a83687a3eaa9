//! Common test utilities and helpers
//!
//! - In-memory user store and reservation ledger
//! - Postgres fixture for `#[ignore]`d storage tests
//! - Session and identity helpers
//! - Assertion macros and date/time shorthands

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;
pub mod memory;

pub use assertions::*;
pub use auth_helpers::*;
pub use database::*;
pub use memory::*;
