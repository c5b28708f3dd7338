//! Axum server setup
//!
//! Server skeleton with:
//! - HTML or JSON index depending on presentation mode
//! - Optional permissive CORS
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::TodoStore;

/// Largest accepted request body, same as a default Go form parse
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// How responses are presented.
///
/// `html()` serves an HTML index and no CORS headers. `api()` serves a JSON
/// status document at `/`, answers CORS preflights, and returns a JSON
/// envelope from DELETE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    /// Render `GET /` as an HTML page listing all todos
    pub html_index: bool,

    /// Add permissive cross-origin headers and answer `OPTIONS /todos`
    pub cors_enabled: bool,
}

impl Presentation {
    pub const fn html() -> Self {
        Self {
            html_index: true,
            cors_enabled: false,
        }
    }

    pub const fn api() -> Self {
        Self {
            html_index: false,
            cors_enabled: true,
        }
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::html()
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    pub presentation: Presentation,

    /// Directory served under `/static`, if any
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            presentation: Presentation::default(),
            static_dir: None,
        }
    }
}

/// Shared application state
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
    pub presentation: Presentation,
}

/// Build the application router.
pub fn build_router(store: Arc<dyn TodoStore>, config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        store,
        presentation: config.presentation,
    });

    let mut app = Router::new()
        .merge(routes::index::router())
        .merge(routes::todos::router());

    if let Some(dir) = &config.static_dir {
        app = app.nest_service("/static", ServeDir::new(dir));
    }

    if config.presentation.cors_enabled {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE]);
        app = app.layer(cors);
    }

    app.layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// # Example
///
/// ```ignore
/// let store = PgTodoStore::connect(&database_url, DEFAULT_MAX_CONNECTIONS).await?;
/// run_server(Arc::new(store), ServerConfig::default()).await?;
/// ```
pub async fn run_server(store: Arc<dyn TodoStore>, config: ServerConfig) -> Result<(), ServerError> {
    tracing::info!(
        html_index = config.presentation.html_index,
        cors_enabled = config.presentation.cors_enabled,
        "Presentation mode"
    );
    if let Some(dir) = &config.static_dir {
        tracing::info!(static_dir = %dir.display(), "Serving static files");
    }

    let app = build_router(store, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
