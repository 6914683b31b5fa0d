use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::TodoError;
use super::repository::Identified;

pub const MAX_TITLE_CHARS: usize = 200;
pub const DEFAULT_STATUS: &str = "todo";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TodoId(pub Uuid);

impl TodoId {
    pub fn new() -> Self { Self(Uuid::new_v4()) }
}

impl Default for TodoId {
    fn default() -> Self { Self::new() }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

impl FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Uuid::parse_str(s).map(Self) }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identified for Todo {
    type Id = TodoId;

    fn id(&self) -> &TodoId { &self.id }
}

/// Body of a create request. Both fields are optional at the wire level so a
/// missing title is reported as a validation failure, not a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
    pub status: Option<String>,
}

impl CreateTodo {
    pub fn into_todo(self, now: DateTime<Utc>) -> Result<Todo, TodoError> {
        let title = self
            .title
            .filter(|t| is_valid_title(t))
            .ok_or_else(|| TodoError::validation("Title is required and should be within 200 characters"))?;
        Ok(Todo {
            id: TodoId::new(),
            title,
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Partial update. A field is applied iff it is present; `null` counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub status: Option<String>,
}

impl UpdateTodo {
    /// Validates the patch and applies it. `todo` is left untouched on error.
    pub fn apply(self, todo: &mut Todo, now: DateTime<Utc>) -> Result<(), TodoError> {
        if let Some(title) = &self.title {
            if !is_valid_title(title) {
                return Err(TodoError::validation("Title is required"));
            }
        }
        if let Some(title) = self.title { todo.title = title; }
        if let Some(status) = self.status { todo.status = status; }
        todo.updated_at = now;
        Ok(())
    }
}

/// Non-empty and at most [`MAX_TITLE_CHARS`] characters.
pub fn is_valid_title(title: &str) -> bool {
    !title.is_empty() && title.chars().count() <= MAX_TITLE_CHARS
}
