//! Expense endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{ExpenseBody, ExpenseId};
use crate::http::server::AppState;
use crate::models::Expense;

/// POST /expenses - create an expense
async fn create_expense(
    State(state): State<Arc<AppState>>,
    ExpenseBody(payload): ExpenseBody,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let expense = state.service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// GET /expenses - list all expenses
async fn list_expenses(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Expense>>, ApiError> {
    let expenses = state.service.list().await?;
    Ok(Json(expenses))
}

/// GET /expenses/{id} - get a single expense
async fn get_expense(
    State(state): State<Arc<AppState>>,
    ExpenseId(id): ExpenseId,
) -> Result<Json<Expense>, ApiError> {
    let expense = state.service.get(id).await?;
    Ok(Json(expense))
}

/// PUT /expenses/{id} - replace every field of an expense
async fn update_expense(
    State(state): State<Arc<AppState>>,
    ExpenseId(id): ExpenseId,
    ExpenseBody(payload): ExpenseBody,
) -> Result<Json<Expense>, ApiError> {
    let expense = state.service.update(id, payload).await?;
    Ok(Json(expense))
}

/// Expense routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", get(get_expense).put(update_expense))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MockStore, StoreCall};
    use crate::models::ExpenseParams;
    use crate::service::ExpenseService;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    const SMOOTHIE: &str = r#"{"title":"strawberry smoothie","amount":79,"note":"night market promotion discount 10 bath","tags":["food","beverage"]}"#;
    const SMOOTHIE_WITH_ID: &str = r#"{"id":1,"title":"strawberry smoothie","amount":79,"note":"night market promotion discount 10 bath","tags":["food","beverage"]}"#;

    fn app(store: &Arc<MockStore>) -> Router {
        let state = AppState::new(ExpenseService::new(store.clone()));
        router().with_state(Arc::new(state))
    }

    async fn send(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_owned()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn smoothie_row() -> crate::models::ExpenseRow {
        (
            1,
            "strawberry smoothie".into(),
            79.0,
            "night market promotion discount 10 bath".into(),
            Some(vec!["food".into(), "beverage".into()]),
        )
    }

    #[tokio::test]
    async fn create_returns_201_with_assigned_id() {
        let store = Arc::new(MockStore::new().with_insert_id(1));
        let (status, body) = send(app(&store), "POST", "/expenses", SMOOTHIE).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, SMOOTHIE_WITH_ID);
    }

    #[tokio::test]
    async fn create_with_missing_fields_is_400() {
        let store = Arc::new(MockStore::new());
        let (status, body) = send(
            app(&store),
            "POST",
            "/expenses",
            r#"{"title":"strawberry smoothie","amount":79,"note":"x"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"message":"bad body request"}"#);
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_400_not_decode_error() {
        let store = Arc::new(MockStore::new());
        let (status, body) = send(app(&store), "POST", "/expenses", "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"message":"bad body request"}"#);
    }

    #[tokio::test]
    async fn create_storage_failure_is_500_with_message() {
        let store = Arc::new(MockStore::new().failing("pq: connection refused"));
        let (status, body) = send(app(&store), "POST", "/expenses", SMOOTHIE).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"message":"pq: connection refused"}"#);
    }

    #[tokio::test]
    async fn get_returns_stored_expense() {
        let store = Arc::new(MockStore::new().with_rows(vec![smoothie_row()]));
        let (status, body) = send(app(&store), "GET", "/expenses/1", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, SMOOTHIE_WITH_ID);
        assert_eq!(store.calls(), vec![StoreCall::FetchOne(1)]);
    }

    #[tokio::test]
    async fn get_missing_is_500() {
        let store = Arc::new(MockStore::new());
        let (status, body) = send(app(&store), "GET", "/expenses/2", "").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"message":"no rows in result set"}"#);
    }

    #[tokio::test]
    async fn get_non_numeric_id_is_500_without_store_call() {
        let store = Arc::new(MockStore::new());
        let (status, body) = send(app(&store), "GET", "/expenses/abc", "").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("invalid input syntax for type integer"));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn update_echoes_payload_with_route_id() {
        let store = Arc::new(MockStore::new().with_rows(vec![smoothie_row()]));
        let (status, body) = send(
            app(&store),
            "PUT",
            "/expenses/1",
            r#"{"title":"strawberry smoothie","amount":89,"note":"no discount","tags":["beverage"]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            r#"{"id":1,"title":"strawberry smoothie","amount":89,"note":"no discount","tags":["beverage"]}"#
        );
        assert_eq!(
            store.calls(),
            vec![StoreCall::Update(
                ExpenseParams {
                    title: "strawberry smoothie".into(),
                    amount: 89.0,
                    note: "no discount".into(),
                    tags: vec!["beverage".into()],
                },
                1,
            )]
        );
    }

    #[tokio::test]
    async fn update_with_zero_amount_is_400() {
        let store = Arc::new(MockStore::new());
        let (status, _) = send(
            app(&store),
            "PUT",
            "/expenses/1",
            r#"{"title":"t","amount":0,"note":"n","tags":[]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn list_empty_is_empty_array() {
        let store = Arc::new(MockStore::new());
        let (status, body) = send(app(&store), "GET", "/expenses", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn list_returns_all_rows() {
        let store = Arc::new(MockStore::new().with_rows(vec![smoothie_row()]));
        let (status, body) = send(app(&store), "GET", "/expenses", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, format!("[{}]", SMOOTHIE_WITH_ID));
    }
}
