//! Persistence gateway trait and implementations
//!
//! Provides a trait for the four expense statements, with:
//! - Postgres implementation in [`crate::db::repos::expenses`]
//! - Recording mock implementation for testing

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::models::{ExpenseParams, ExpenseRow};

/// Error from the storage backend.
///
/// Display is the backend's own message; it is returned to HTTP callers as-is.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("{0}")]
    Backend(String),
}

/// Mechanical access to the expenses table (testable).
///
/// Implementations run exactly one statement per call and do no validation.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Insert a row and return the id the database assigned.
    async fn insert(&self, params: &ExpenseParams) -> Result<i32, StoreError>;

    /// Fetch the row with the given id. A missing row is an error.
    async fn fetch_one(&self, id: i32) -> Result<ExpenseRow, StoreError>;

    /// Fetch every row in storage order.
    async fn fetch_all(&self) -> Result<Vec<ExpenseRow>, StoreError>;

    /// Overwrite the row with the given id and return rows affected.
    async fn update(&self, id: i32, params: &ExpenseParams) -> Result<u64, StoreError>;
}

/// A call observed by [`MockStore`], with its bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Insert(ExpenseParams),
    FetchOne(i32),
    FetchAll,
    Update(ExpenseParams, i32),
}

/// Mock store for testing
///
/// Records every call, answers from a fixed set of rows, and can be told to
/// fail every call with a given message.
#[derive(Debug)]
pub struct MockStore {
    calls: Mutex<Vec<StoreCall>>,
    rows: Vec<ExpenseRow>,
    insert_id: i32,
    failure: Option<String>,
}

impl Default for MockStore {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            rows: Vec::new(),
            insert_id: 1,
            failure: None,
        }
    }
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows returned by fetches.
    pub fn with_rows(mut self, rows: Vec<ExpenseRow>) -> Self {
        self.rows = rows;
        self
    }

    /// Id reported for the next insert.
    pub fn with_insert_id(mut self, id: i32) -> Self {
        self.insert_id = id;
        self
    }

    /// Fail every call with `message`.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Calls observed so far, in order.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.lock_calls().clone()
    }

    fn lock_calls(&self) -> MutexGuard<'_, Vec<StoreCall>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, call: StoreCall) -> Result<(), StoreError> {
        self.lock_calls().push(call);
        match &self.failure {
            Some(message) => Err(StoreError::Backend(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ExpenseStore for MockStore {
    async fn insert(&self, params: &ExpenseParams) -> Result<i32, StoreError> {
        self.record(StoreCall::Insert(params.clone()))?;
        Ok(self.insert_id)
    }

    async fn fetch_one(&self, id: i32) -> Result<ExpenseRow, StoreError> {
        self.record(StoreCall::FetchOne(id))?;
        self.rows
            .iter()
            .find(|row| row.0 == id)
            .cloned()
            .ok_or_else(|| StoreError::Backend("no rows in result set".to_string()))
    }

    async fn fetch_all(&self) -> Result<Vec<ExpenseRow>, StoreError> {
        self.record(StoreCall::FetchAll)?;
        Ok(self.rows.clone())
    }

    async fn update(&self, id: i32, params: &ExpenseParams) -> Result<u64, StoreError> {
        self.record(StoreCall::Update(params.clone(), id))?;
        Ok(self.rows.iter().filter(|row| row.0 == id).count() as u64)
    }
}
