//! Store error type

use crate::models::TodoId;

/// Errors raised by a [`TodoStore`](super::TodoStore).
///
/// `Unavailable` and `Schema` only occur during initialization and are
/// fatal to the process. The rest surface per request.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("schema setup failed: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("failed to read todos: {0}")]
    Read(#[source] sqlx::Error),

    #[error("failed to write todo: {0}")]
    Write(#[source] sqlx::Error),

    #[error("todo id space exhausted")]
    IdsExhausted,

    #[error("todo {id} not found")]
    NotFound { id: TodoId },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
