//! Domain models with validation at construction
//!
//! Request input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod todo;
pub mod validation;

pub use todo::{parse_todo_id, ToggleResponse, Todo, TodoId, TodoTitle};
pub use validation::ValidationError;
