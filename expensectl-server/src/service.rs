//! Expense resource service
//!
//! Framework-free request handling: validate the payload, build the bound
//! parameter set, make exactly one store call, map the rows back. Validation
//! failures never reach the store.

use std::sync::Arc;

use crate::db::{ExpenseStore, StoreError};
use crate::models::{Expense, ExpenseParams, ExpensePayload, ValidationError};

/// Outcome of a failed service operation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("invalid expense: {0}")]
    Validation(#[from] ValidationError),

    /// Any store failure, including a missing row on lookup.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Expense service over an injected store.
#[derive(Clone)]
pub struct ExpenseService {
    store: Arc<dyn ExpenseStore>,
}

impl ExpenseService {
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }

    /// Validate and insert; the returned expense carries the stored id.
    pub async fn create(&self, payload: ExpensePayload) -> ServiceResult<Expense> {
        let params = ExpenseParams::try_from(payload)?;
        let id = self.store.insert(&params).await?;
        tracing::debug!(id, "expense created");
        Ok(Expense::from_params(id, params))
    }

    /// Look up one expense. A missing row is a storage error.
    pub async fn get(&self, id: i32) -> ServiceResult<Expense> {
        let row = self.store.fetch_one(id).await?;
        Ok(Expense::from_row(row))
    }

    /// Validate and overwrite, echoing the payload back with `id` attached.
    ///
    /// The response is not re-read from storage and an id that matches no row
    /// is not an error.
    pub async fn update(&self, id: i32, payload: ExpensePayload) -> ServiceResult<Expense> {
        let params = ExpenseParams::try_from(payload)?;
        let affected = self.store.update(id, &params).await?;
        if affected == 0 {
            tracing::debug!(id, "update matched no rows");
        }
        Ok(Expense::from_params(id, params))
    }

    /// Every expense, in storage order. An empty table is an empty list.
    pub async fn list(&self) -> ServiceResult<Vec<Expense>> {
        let rows = self.store.fetch_all().await?;
        Ok(rows.into_iter().map(Expense::from_row).collect())
    }
}
