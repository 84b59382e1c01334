//! HTTP server layer
//!
//! Axum server with:
//! - Expense CRUD routes and a health probe
//! - Request tracing
//! - Bounded graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, serve_until, AppState, ServerConfig};
