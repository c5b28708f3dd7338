//! In-memory todo store
//!
//! Same contract as the Postgres store: ids are monotonic and never reused,
//! listing is newest first. Nothing survives a restart.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{StoreError, TodoStore};
use crate::models::{Todo, TodoId};

#[derive(Default)]
struct Inner {
    last_id: TodoId,
    todos: Vec<Todo>,
}

/// Process-local todo store
#[derive(Default)]
pub struct MemoryTodoStore {
    inner: RwLock<Inner>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn add(&self, title: &str) -> Result<Todo, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted)?;
        inner.last_id = id;

        let todo = Todo {
            id,
            title: title.to_owned(),
            completed: false,
            created_at: Utc::now(),
        };
        inner.todos.push(todo.clone());
        Ok(todo)
    }

    async fn get_all(&self) -> Result<Vec<Todo>, StoreError> {
        let inner = self.inner.read().await;
        let mut todos = inner.todos.clone();
        todos.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(todos)
    }

    async fn toggle(&self, id: TodoId) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let todo = inner
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound { id })?;

        todo.completed = !todo.completed;
        Ok(todo.completed)
    }

    async fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.todos.len();
        inner.todos.retain(|t| t.id != id);

        if inner.todos.len() == before {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_assigns_fresh_ids() {
        let store = MemoryTodoStore::new();

        let first = store.add("Buy milk").await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.title, "Buy milk");
        assert!(!first.completed);

        let second = store.add("Walk dog").await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn get_all_is_newest_first() {
        let store = MemoryTodoStore::new();
        assert!(store.get_all().await.unwrap().is_empty());

        for title in ["a", "b", "c"] {
            store.add(title).await.unwrap();
        }

        let titles: Vec<_> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, ["c", "b", "a"]);
    }

    #[tokio::test]
    async fn toggle_twice_restores_state() {
        let store = MemoryTodoStore::new();
        let todo = store.add("Buy milk").await.unwrap();

        assert!(store.toggle(todo.id).await.unwrap());
        assert!(!store.toggle(todo.id).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let store = MemoryTodoStore::new();
        assert!(store.toggle(99).await.unwrap_err().is_not_found());
        assert!(store.delete(99).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn ids_not_reused_after_delete() {
        let store = MemoryTodoStore::new();
        let first = store.add("one").await.unwrap();
        store.delete(first.id).await.unwrap();

        assert!(store.get_all().await.unwrap().is_empty());

        let second = store.add("two").await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn add_fails_once_ids_run_out() {
        let store = MemoryTodoStore {
            inner: RwLock::new(Inner {
                last_id: TodoId::MAX - 1,
                todos: Vec::new(),
            }),
        };

        let last = store.add("last").await.unwrap();
        assert_eq!(last.id, TodoId::MAX);

        let err = store.add("one too many").await.unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted));
        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blank_titles_are_stored_as_given() {
        let store = MemoryTodoStore::new();
        let todo = store.add("").await.unwrap();
        assert_eq!(todo.title, "");
    }
}
