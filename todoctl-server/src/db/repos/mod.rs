//! Repository implementations for database access
//!
//! Each repository issues parameterized statements against a shared pool.

pub mod todos;

pub use todos::PgTodoStore;
