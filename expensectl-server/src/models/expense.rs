//! Expense record, request payload, and bound parameter set
//!
//! The payload is what the HTTP layer decodes; [`ExpenseParams`] is the
//! validated form that reaches storage; [`Expense`] is what goes back out.

use serde::{Deserialize, Serialize, Serializer};

use super::ValidationError;

/// Largest magnitude at which every integer is exactly representable as f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Raw expenses row in column order `(id, title, amount, note, tags)`.
pub type ExpenseRow = (i32, String, f64, String, Option<Vec<String>>);

/// A persisted expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i32,
    pub title: String,
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
    pub note: String,
    pub tags: Vec<String>,
}

impl Expense {
    /// Map a row positionally. A NULL tags column reads back as no tags.
    pub fn from_row((id, title, amount, note, tags): ExpenseRow) -> Self {
        Self {
            id,
            title,
            amount,
            note,
            tags: tags.unwrap_or_default(),
        }
    }

    /// Attach an id to a validated parameter set.
    pub fn from_params(id: i32, params: ExpenseParams) -> Self {
        Self {
            id,
            title: params.title,
            amount: params.amount,
            note: params.note,
            tags: params.tags,
        }
    }
}

/// Request body for create and update.
///
/// Every field falls back to its zero value so that an incomplete or
/// undecodable body is rejected by validation rather than by the decoder.
/// Any `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExpensePayload {
    pub title: String,
    pub amount: f64,
    pub note: String,
    pub tags: Option<Vec<String>>,
}

impl ExpensePayload {
    /// Decode a request body, falling back to an empty payload.
    pub fn from_json_lossy(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "expense body did not decode, using defaults");
            Self::default()
        })
    }
}

/// Validated parameter set, bound in the order `title, amount, note, tags`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseParams {
    pub title: String,
    pub amount: f64,
    pub note: String,
    pub tags: Vec<String>,
}

impl TryFrom<ExpensePayload> for ExpenseParams {
    type Error = ValidationError;

    /// # Rules
    /// - `title` and `note` must be non-empty
    /// - `amount` must be non-zero, so a zero-amount expense is unrepresentable
    /// - `tags` must be present; an empty array is accepted
    fn try_from(payload: ExpensePayload) -> Result<Self, Self::Error> {
        if payload.title.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        if payload.note.is_empty() {
            return Err(ValidationError::Empty { field: "note" });
        }
        if payload.amount == 0.0 {
            return Err(ValidationError::Zero { field: "amount" });
        }
        let tags = payload
            .tags
            .ok_or(ValidationError::Missing { field: "tags" })?;

        Ok(Self {
            title: payload.title,
            amount: payload.amount,
            note: payload.note,
            tags,
        })
    }
}

/// Whole amounts are written as JSON integers (`79`, not `79.0`).
fn serialize_amount<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if amount.is_finite() && amount.fract() == 0.0 && amount.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}
