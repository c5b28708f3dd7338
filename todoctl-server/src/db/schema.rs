//! Schema bootstrap for the todos table

use sqlx::PgPool;

use super::StoreError;

/// Create the `todos` table and its index if they don't exist.
///
/// Safe to run on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    tracing::info!("Ensuring todos schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            completed BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(StoreError::Schema)?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_todos_created ON todos(created_at DESC)")
        .execute(pool)
        .await
        .map_err(StoreError::Schema)?;

    tracing::info!("Todos schema ready");
    Ok(())
}
