use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::error::TodoError;
use crate::domain::repository::TodoRepository;
use crate::domain::simple_todo::{SimpleTodo, SimpleTodoId, SimpleTodoInput};

#[async_trait]
pub trait SimpleTodoService: Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<SimpleTodo>, TodoError>;
    async fn create(&self, input: SimpleTodoInput) -> Result<SimpleTodo, TodoError>;
    async fn update(&self, id: &SimpleTodoId, input: SimpleTodoInput) -> Result<SimpleTodo, TodoError>;
    async fn delete(&self, id: &SimpleTodoId) -> Result<SimpleTodo, TodoError>;
}

/// Text-only todos. Ids come from a counter that only grows, so an id is
/// never handed out twice even after deletions.
#[derive(Clone)]
pub struct SimpleTodoServiceImpl<R: TodoRepository<SimpleTodo>> {
    repo: R,
    clock: Arc<dyn Clock>,
    next_id: Arc<AtomicU64>,
}

impl<R: TodoRepository<SimpleTodo>> SimpleTodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self::with_clock(repo, Arc::new(SystemClock)) }

    pub fn with_clock(repo: R, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock, next_id: Arc::new(AtomicU64::new(0)) }
    }
}

#[async_trait]
impl<R: TodoRepository<SimpleTodo>> SimpleTodoService for SimpleTodoServiceImpl<R> {
    async fn list(&self) -> Result<Vec<SimpleTodo>, TodoError> { self.repo.list().await }

    async fn create(&self, input: SimpleTodoInput) -> Result<SimpleTodo, TodoError> {
        let text = input.require_text()?;
        let date = self.clock.now();
        let next_id = Arc::clone(&self.next_id);
        // Uniqueness check and push share one lock; the counter only moves on success.
        self.repo
            .insert_with(move |existing| {
                if existing.iter().any(|todo| todo.text == text) {
                    return Err(TodoError::conflict("Todo already exists"));
                }
                let id = SimpleTodoId(next_id.fetch_add(1, Ordering::Relaxed));
                Ok(SimpleTodo { id, text, date })
            })
            .await
    }

    async fn update(&self, id: &SimpleTodoId, input: SimpleTodoInput) -> Result<SimpleTodo, TodoError> {
        let text = input.require_text()?;
        let date = self.clock.now();
        self.repo
            .update_with(id, move |todo| {
                todo.text = text;
                todo.date = date;
                Ok(())
            })
            .await?
            .ok_or(TodoError::NotFound)
    }

    async fn delete(&self, id: &SimpleTodoId) -> Result<SimpleTodo, TodoError> {
        self.repo.remove(id).await?.ok_or(TodoError::NotFound)
    }
}
