//! Routes Module
//!
//! - **`router`** - Router assembly and layers
//! - **`api_routes`** - REST endpoints

/// Main router creation
pub mod router;

/// API route handlers
pub mod api_routes;

pub use router::create_router;
