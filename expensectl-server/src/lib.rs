//! expensectl-server: expense records over REST/JSON
//!
//! Four operations (create, get, update, list) on a single PostgreSQL table.
//! Layers, leaves first:
//! - [`db`]: pool, schema bootstrap, and the [`db::ExpenseStore`] gateway
//! - [`service`]: validation and row mapping, free of HTTP types
//! - [`http`]: axum routes, extractors, and status mapping

pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod service;

pub use error::{Error, Result};
pub use service::{ExpenseService, ServiceError};
