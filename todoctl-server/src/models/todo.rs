//! Todo item record and validated request values

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Row id of a todo item (`SERIAL` column)
pub type TodoId = i32;

/// A persisted todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Non-blank todo title.
///
/// Only emptiness is checked; the text is stored exactly as submitted.
///
/// # Example
/// ```
/// use todoctl_server::models::TodoTitle;
///
/// assert!(TodoTitle::new("Buy milk").is_ok());
/// assert!(TodoTitle::new("").is_err());
/// assert!(TodoTitle::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a todo id from a form value.
pub fn parse_todo_id(raw: Option<&str>) -> Result<TodoId, ValidationError> {
    let raw = raw.ok_or(ValidationError::Empty { field: "id" })?;
    if raw.is_empty() {
        return Err(ValidationError::Empty { field: "id" });
    }
    raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "id",
        reason: "must be an integer",
    })
}

/// Body of a successful toggle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub completed: bool,
}
