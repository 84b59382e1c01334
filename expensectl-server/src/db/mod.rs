//! Database layer - connection pool, schema bootstrap, and the expense store
//!
//! The service only sees [`ExpenseStore`]; [`ExpenseRepo`] is the Postgres
//! implementation handed to it at startup.

pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::ExpenseRepo;
pub use schema::ensure_schema;
pub use store::{ExpenseStore, MockStore, StoreCall, StoreError};

pub use sqlx::PgPool;
