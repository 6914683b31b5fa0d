use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::error::TodoError;

/// JSON error envelope: `{ "message": ..., "error"?: ... }`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), error: None }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.error = Some(detail.into());
        self
    }

    /// Maps a service error, using `internal_message` for unexpected failures.
    pub fn from_todo_error(err: TodoError, internal_message: &str) -> Self {
        match err {
            TodoError::Validation(message) => Self::new(StatusCode::BAD_REQUEST, message),
            TodoError::Conflict(message) => Self::new(StatusCode::CONFLICT, message),
            TodoError::NotFound => Self::new(StatusCode::NOT_FOUND, TodoError::NotFound.to_string()),
            TodoError::Internal(e) => {
                tracing::error!(error = ?e, "{internal_message}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, internal_message)
            }
        }
    }

    pub fn not_found() -> Self { Self::from(TodoError::NotFound) }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self { Self::from_todo_error(err, "Internal server error") }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response { (self.status, axum::Json(self)).into_response() }
}

/// Success envelope: `{ "message": ..., "todo"?: ... }`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo: Option<T>,
}

impl<T> Envelope<T> {
    pub fn with_todo(message: &'static str, todo: T) -> Self { Self { message, todo: Some(todo) } }
}

impl Envelope<()> {
    pub fn message(message: &'static str) -> Self { Self { message, todo: None } }
}
