//! Schema bootstrap for the expenses table

use sqlx::PgPool;

use crate::Result;

/// Create the expenses table if it does not exist.
///
/// Run once at process start; there are no further migrations.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    tracing::info!("Ensuring expenses table exists");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS expenses (
            id SERIAL PRIMARY KEY,
            title TEXT,
            amount FLOAT,
            note TEXT,
            tags TEXT[]
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
