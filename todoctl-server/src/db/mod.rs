//! Database layer - connection pool, schema and todo stores
//!
//! - Connection pool (default max 5 connections) - no Arc<Mutex<Connection>>
//! - One statement per store operation, no transactions
//! - Store errors keep "not found" distinct from read/write failures

pub mod error;
pub mod memory;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryTodoStore;
pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use repos::PgTodoStore;
pub use schema::ensure_schema;
pub use store::TodoStore;
