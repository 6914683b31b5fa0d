use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

use crate::application::simple_todo_service::SimpleTodoService;
use crate::domain::simple_todo::{SimpleTodo, SimpleTodoId, SimpleTodoInput};
use crate::http::extract::{BodyRejection, LenientJson};
use crate::http::types::{ApiError, Envelope};

#[derive(Clone)]
pub struct AppState<S: SimpleTodoService> { pub service: S }

/// Routes of the text-only service, all mounted at the root.
pub fn router<S: SimpleTodoService + Clone>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(list_todos::<S>).post(create_todo::<S>).fallback(not_found))
        .route("/:id", put(update_todo::<S>).delete(delete_todo::<S>).fallback(not_found))
        .fallback(not_found)
        .with_state(state)
}

// Unknown methods on known paths are a plain 404, not a 405.
async fn not_found() -> (StatusCode, &'static str) { (StatusCode::NOT_FOUND, "404 Not Found") }

async fn list_todos<S: SimpleTodoService>(State(state): State<AppState<S>>) -> Result<Json<Vec<SimpleTodo>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

async fn create_todo<S: SimpleTodoService>(
    State(state): State<AppState<S>>,
    body: Result<LenientJson<SimpleTodoInput>, BodyRejection>,
) -> Result<(StatusCode, Json<Envelope<SimpleTodo>>), ApiError> {
    const FAILED: &str = "Failed to create todo";
    let LenientJson(input) = body.map_err(|e| unreadable_body(FAILED, e))?;
    let todo = state.service.create(input).await.map_err(|e| ApiError::from_todo_error(e, FAILED))?;
    Ok((StatusCode::CREATED, Json(Envelope::with_todo("Successfully created todo", todo))))
}

async fn update_todo<S: SimpleTodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Result<LenientJson<SimpleTodoInput>, BodyRejection>,
) -> Result<Json<Envelope<SimpleTodo>>, ApiError> {
    const FAILED: &str = "Failed to update todo";
    let LenientJson(input) = body.map_err(|e| unreadable_body(FAILED, e))?;
    let text = input.require_text().map_err(|e| ApiError::from_todo_error(e, FAILED))?;
    let id = parse_id(&id)?;
    let todo = state
        .service
        .update(&id, SimpleTodoInput { text: Some(text) })
        .await
        .map_err(|e| ApiError::from_todo_error(e, FAILED))?;
    Ok(Json(Envelope::with_todo("Todo updated", todo)))
}

async fn delete_todo<S: SimpleTodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<SimpleTodo>>, ApiError> {
    let id = parse_id(&id)?;
    let todo = state.service.delete(&id).await.map_err(|e| ApiError::from_todo_error(e, "Server error"))?;
    Ok(Json(Envelope::with_todo("Todo successfully deleted", todo)))
}

// Non-numeric ids cannot match any todo.
fn parse_id(s: &str) -> Result<SimpleTodoId, ApiError> { s.parse().map_err(|_| ApiError::not_found()) }

fn unreadable_body(message: &str, rejection: BodyRejection) -> ApiError {
    tracing::error!(error = %rejection.0, "{message}");
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
}
