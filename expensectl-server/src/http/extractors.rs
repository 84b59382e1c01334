//! Custom Axum extractors

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::ExpensePayload;

/// Expense body that never rejects.
///
/// Unreadable or malformed bodies decode to an empty payload so that the
/// caller sees the same 400 as for missing fields. Content-Type is ignored.
pub struct ExpenseBody(pub ExpensePayload);

impl<S> FromRequest<S> for ExpenseBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = match Bytes::from_request(req, state).await {
            Ok(body) => ExpensePayload::from_json_lossy(&body),
            Err(rejection) => {
                tracing::debug!(%rejection, "could not read expense body");
                ExpensePayload::default()
            }
        };
        Ok(Self(payload))
    }
}

/// Expense id from the `{id}` path segment.
///
/// A segment that is not an integer cannot address any row, so it is reported
/// the same way as a failed lookup.
pub struct ExpenseId(pub i32);

impl<S> FromRequestParts<S> for ExpenseId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Storage {
                message: e.body_text(),
            })?;

        let id = raw.parse::<i32>().map_err(|_| ApiError::Storage {
            message: format!("invalid input syntax for type integer: \"{}\"", raw),
        })?;

        Ok(Self(id))
    }
}
