use thiserror::Error;

/// Failures surfaced by the todo services.
///
/// The `Display` text of `Validation` and `Conflict` is sent to clients as-is.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Todo not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl TodoError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}
