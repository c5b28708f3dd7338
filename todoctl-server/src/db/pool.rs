//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgPool};

use super::StoreError;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool and verify it is live.
///
/// # Errors
///
/// Returns [`StoreError::Unavailable`] if the connection or ping fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/todo", DEFAULT_MAX_CONNECTIONS).await?;
/// ```
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(StoreError::Unavailable)?;

    let mut conn = pool.acquire().await.map_err(StoreError::Unavailable)?;
    conn.ping().await.map_err(StoreError::Unavailable)?;

    Ok(pool)
}
