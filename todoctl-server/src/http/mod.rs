//! HTTP server layer
//!
//! Axum server with:
//! - HTML or JSON index page
//! - Optional permissive CORS
//! - Request tracing
//! - Graceful shutdown
//! - Plain-text error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;
pub mod templates;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, Presentation, ServerConfig, ServerError};
