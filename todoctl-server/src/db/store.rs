//! Todo store trait
//!
//! The router only sees `Arc<dyn TodoStore>`, so the Postgres store and the
//! in-memory store are interchangeable.

use async_trait::async_trait;

use super::StoreError;
use crate::models::{Todo, TodoId};

/// Persistence for todo items.
///
/// Each operation is a single atomic step against the backing store.
/// No cross-call transactions are offered.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Insert a todo and return it with its generated id and timestamp.
    ///
    /// Blank titles are not rejected here; callers validate first.
    async fn add(&self, title: &str) -> Result<Todo, StoreError>;

    /// All todos, newest first. Empty when there are none.
    async fn get_all(&self) -> Result<Vec<Todo>, StoreError>;

    /// Flip `completed` and return the new value.
    async fn toggle(&self, id: TodoId) -> Result<bool, StoreError>;

    /// Remove a todo.
    async fn delete(&self, id: TodoId) -> Result<(), StoreError>;
}
