use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::TodoError;
use super::repository::Identified;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct SimpleTodoId(pub u64);

impl fmt::Display for SimpleTodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

impl FromStr for SimpleTodoId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { s.parse().map(Self) }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimpleTodo {
    pub id: SimpleTodoId,
    pub text: String,
    pub date: DateTime<Utc>,
}

impl Identified for SimpleTodo {
    type Id = SimpleTodoId;

    fn id(&self) -> &SimpleTodoId { &self.id }
}

/// Body of both create and update requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimpleTodoInput {
    pub text: Option<String>,
}

impl SimpleTodoInput {
    pub fn require_text(self) -> Result<String, TodoError> {
        self.text
            .filter(|t| !t.is_empty())
            .ok_or_else(|| TodoError::validation("Todo text is required"))
    }
}
