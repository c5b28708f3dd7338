//! Index endpoint: HTML todo page or JSON status document

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::http::templates::render_index;

/// Endpoints advertised by the status document
pub const ENDPOINTS: &[&str] = &[
    "GET /todos",
    "POST /todos",
    "PUT /todos",
    "DELETE /todos",
];

/// Status document served at `/` when the HTML index is disabled
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [&'static str],
}

/// GET /
async fn index(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    if !state.presentation.html_index {
        return Ok(Json(StatusResponse {
            status: "running",
            version: env!("CARGO_PKG_VERSION"),
            endpoints: ENDPOINTS,
        })
        .into_response());
    }

    let todos = state.store.get_all().await?;
    let page = render_index(&todos).map_err(|e| ApiError::Internal {
        message: format!("failed to render index: {}", e),
    })?;
    Ok(Html(page).into_response())
}

/// Index routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}
