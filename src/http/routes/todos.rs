use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::application::todo_service::TodoService;
use crate::domain::todo::{CreateTodo, Todo, TodoId, UpdateTodo};
use crate::http::extract::{BodyRejection, JsonOrForm};
use crate::http::types::{ApiError, Envelope};

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

/// Routes of the task service, including the root banner and the catch-all
/// that lists [`ROUTES`].
pub fn router<S: TodoService + Clone>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(root).fallback(route_not_found))
        .route(
            "/todos",
            get(list_todos::<S>)
                .post(create_todo::<S>)
                .delete(delete_all_todos::<S>)
                .fallback(route_not_found),
        )
        .route(
            "/todos/:id",
            get(get_todo::<S>)
                .put(update_todo::<S>)
                .delete(delete_todo::<S>)
                .fallback(route_not_found),
        )
        .fallback(route_not_found)
        .with_state(state)
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteInfo {
    pub method: &'static str,
    pub route: &'static str,
}

pub const ROUTES: [RouteInfo; 7] = [
    RouteInfo { method: "GET", route: "/" },
    RouteInfo { method: "POST", route: "/todos" },
    RouteInfo { method: "GET", route: "/todos" },
    RouteInfo { method: "GET", route: "/todos/:id" },
    RouteInfo { method: "PUT", route: "/todos/:id" },
    RouteInfo { method: "DELETE", route: "/todos/:id" },
    RouteInfo { method: "DELETE", route: "/todos" },
];

#[derive(Serialize)]
struct RouteListing {
    message: &'static str,
    routes: &'static [RouteInfo],
}

async fn root() -> String {
    format!("Server is Running! Random String to Check: {}", uuid::Uuid::new_v4())
}

async fn route_not_found() -> (StatusCode, Json<RouteListing>) {
    (
        StatusCode::NOT_FOUND,
        Json(RouteListing {
            message: "Requested route not found. Here are the available routes:",
            routes: &ROUTES,
        }),
    )
}

async fn create_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    body: Result<JsonOrForm<CreateTodo>, BodyRejection>,
) -> Result<(StatusCode, Json<Envelope<Todo>>), ApiError> {
    let JsonOrForm(input) = body.map_err(|e| invalid_body("Invalid JSON or request body", e))?;
    let todo = state.service.create(input).await?;
    Ok((StatusCode::CREATED, Json(Envelope::with_todo("Todo created", todo))))
}

async fn list_todos<S: TodoService>(State(state): State<AppState<S>>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

async fn get_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.service.get(&id).await?))
}

async fn update_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Result<JsonOrForm<UpdateTodo>, BodyRejection>,
) -> Result<Json<Envelope<Todo>>, ApiError> {
    let JsonOrForm(input) = body.map_err(|e| invalid_body("Invalid JSON data", e))?;
    let id = parse_id(&id)?;
    let todo = state.service.update(&id, input).await?;
    Ok(Json(Envelope::with_todo("Todo updated", todo)))
}

async fn delete_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Todo>>, ApiError> {
    let id = parse_id(&id)?;
    let todo = state.service.delete(&id).await?;
    Ok(Json(Envelope::with_todo("Todo deleted", todo)))
}

async fn delete_all_todos<S: TodoService>(State(state): State<AppState<S>>) -> Result<Json<Envelope<()>>, ApiError> {
    state.service.delete_all().await?;
    Ok(Json(Envelope::message("All todos have been deleted!")))
}

// Ids are compared as opaque strings, so only the hyphenated lowercase form
// that todos are serialized with can match.
fn parse_id(s: &str) -> Result<TodoId, ApiError> {
    s.parse::<TodoId>()
        .ok()
        .filter(|id| id.to_string() == s)
        .ok_or_else(ApiError::not_found)
}

fn invalid_body(message: &str, rejection: BodyRejection) -> ApiError {
    tracing::warn!(error = %rejection.0, "{message}");
    ApiError::new(StatusCode::BAD_REQUEST, message).with_detail(rejection.0)
}
