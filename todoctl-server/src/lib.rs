//! todoctl-server: todo item store and HTTP router
//!
//! A Postgres-backed (or in-memory) store of todo items behind
//! create/list/toggle/delete, exposed over `/todos` as JSON with either an
//! HTML index page or a JSON status document at `/`.

pub mod db;
pub mod http;
pub mod models;

pub use db::{MemoryTodoStore, PgTodoStore, StoreError, TodoStore};
pub use http::{run_server, Presentation, ServerConfig};
pub use models::{Todo, TodoId};
