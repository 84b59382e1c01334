//! Expense repository
//!
//! One parameterized statement per operation; tags bind as `TEXT[]`.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::store::{ExpenseStore, StoreError};
use crate::models::{ExpenseParams, ExpenseRow};

/// Postgres-backed expense store
#[derive(Debug, Clone)]
pub struct ExpenseRepo {
    pool: PgPool,
}

impl ExpenseRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpenseStore for ExpenseRepo {
    async fn insert(&self, params: &ExpenseParams) -> Result<i32, StoreError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO expenses (title, amount, note, tags)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&params.title)
        .bind(params.amount)
        .bind(&params.note)
        .bind(&params.tags[..])
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn fetch_one(&self, id: i32) -> Result<ExpenseRow, StoreError> {
        let row = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT id, title, amount, note, tags
            FROM expenses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// No ORDER BY: rows come back in whatever order Postgres scans them.
    async fn fetch_all(&self) -> Result<Vec<ExpenseRow>, StoreError> {
        let rows = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT id, title, amount, note, tags
            FROM expenses
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn update(&self, id: i32, params: &ExpenseParams) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE expenses
            SET title = $1, amount = $2, note = $3, tags = $4
            WHERE id = $5
            "#,
        )
        .bind(&params.title)
        .bind(params.amount)
        .bind(&params.note)
        .bind(&params.tags[..])
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
