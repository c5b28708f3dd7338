//! Postgres todo repository
//!
//! One statement per operation:
//! - add: INSERT ... RETURNING (id and created_at come from the database)
//! - toggle: UPDATE ... RETURNING, no row means not found
//! - delete: rows_affected == 0 means not found

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::{create_pool, ensure_schema, StoreError, TodoStore};
use crate::models::{Todo, TodoId};

/// Todo store backed by the `todos` table
#[derive(Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    /// Connect, verify liveness and ensure the schema exists.
    ///
    /// Idempotent against an already-initialized database.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = create_pool(database_url, max_connections).await?;
        tracing::info!(max_connections, "Database connection established");

        ensure_schema(&pool).await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool. The schema is assumed to exist.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn add(&self, title: &str) -> Result<Todo, StoreError> {
        sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (title) VALUES ($1) RETURNING id, title, completed, created_at",
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::Write)
    }

    async fn get_all(&self) -> Result<Vec<Todo>, StoreError> {
        sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, completed, created_at
            FROM todos
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Read)
    }

    async fn toggle(&self, id: TodoId) -> Result<bool, StoreError> {
        let completed: Option<bool> = sqlx::query_scalar(
            "UPDATE todos SET completed = NOT completed WHERE id = $1 RETURNING completed",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::Write)?;

        completed.ok_or(StoreError::NotFound { id })
    }

    async fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Write)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p todoctl-server -- --ignored

    async fn store() -> PgTodoStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        PgTodoStore::connect(&url, 2)
            .await
            .expect("store initialization failed")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn connect_is_idempotent() {
        let first = store().await;
        let second = store().await;
        first.get_all().await.expect("read after first init");
        second.get_all().await.expect("read after second init");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn add_toggle_delete_roundtrip() {
        let store = store().await;

        let todo = store.add("integration item").await.unwrap();
        assert_eq!(todo.title, "integration item");
        assert!(!todo.completed);

        let listed = store.get_all().await.unwrap();
        assert_eq!(listed.first().map(|t| t.id), Some(todo.id));

        assert!(store.toggle(todo.id).await.unwrap());
        assert!(!store.toggle(todo.id).await.unwrap());

        store.delete(todo.id).await.unwrap();
        let err = store.delete(todo.id).await.unwrap_err();
        assert!(err.is_not_found());

        let err = store.toggle(todo.id).await.unwrap_err();
        assert!(err.is_not_found());

        // ids are not reused
        let next = store.add("integration item 2").await.unwrap();
        assert!(next.id > todo.id);
        store.delete(next.id).await.unwrap();
    }
}
