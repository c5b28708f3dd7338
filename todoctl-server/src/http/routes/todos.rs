//! Todo endpoints
//!
//! All operations share `/todos`; parameters come from form fields.
//! OPTIONS is answered by the CORS layer when CORS is enabled.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::http::error::ApiError;
use crate::http::extractors::FormFields;
use crate::http::server::AppState;
use crate::models::{Todo, ToggleResponse};

/// GET /todos - list all todos, newest first
async fn list_todos(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.store.get_all().await?;
    Ok(Json(todos))
}

/// POST /todos - add a todo (form field `title`)
async fn add_todo(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> Result<Json<Todo>, ApiError> {
    let title = form.title()?;
    let todo = state.store.add(title.as_str()).await?;
    tracing::debug!(id = todo.id, "todo added");
    Ok(Json(todo))
}

/// PUT /todos - flip `completed` (form field `id`)
async fn toggle_todo(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> Result<Json<ToggleResponse>, ApiError> {
    let id = form.id()?;
    let completed = state.store.toggle(id).await?;
    Ok(Json(ToggleResponse { completed }))
}

/// DELETE /todos - remove a todo (form field `id`)
async fn delete_todo(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> Result<Response, ApiError> {
    let id = form.id()?;
    state.store.delete(id).await?;
    tracing::debug!(id, "todo deleted");

    if state.presentation.html_index {
        Ok(StatusCode::OK.into_response())
    } else {
        Ok(Json(json!({ "status": "success" })).into_response())
    }
}

/// Any other method, including OPTIONS when CORS is disabled.
/// With CORS enabled, the CORS layer answers OPTIONS before routing.
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/todos",
        get(list_todos)
            .post(add_todo)
            .put(toggle_todo)
            .delete(delete_todo)
            .fallback(method_not_allowed),
    )
}
