//! Domain models with validation at construction
//!
//! Request payloads become [`ExpenseParams`] only through validation.
//! Invalid input returns ValidationError, not panic.

pub mod expense;
pub mod validation;

pub use expense::{Expense, ExpenseParams, ExpensePayload, ExpenseRow};
pub use validation::ValidationError;
