//! Error types for expensectl-server startup and serving

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors outside the request path: connecting, bootstrapping the
/// schema, binding the listener.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid bind address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}
