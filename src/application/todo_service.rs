use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::error::TodoError;
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{CreateTodo, Todo, TodoId, UpdateTodo};

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn create(&self, input: CreateTodo) -> Result<Todo, TodoError>;
    async fn get(&self, id: &TodoId) -> Result<Todo, TodoError>;
    async fn list(&self) -> Result<Vec<Todo>, TodoError>;
    async fn update(&self, id: &TodoId, input: UpdateTodo) -> Result<Todo, TodoError>;
    async fn delete(&self, id: &TodoId) -> Result<Todo, TodoError>;
    /// Returns the number of todos removed.
    async fn delete_all(&self) -> Result<usize, TodoError>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository<Todo>> {
    repo: R,
    clock: Arc<dyn Clock>,
}

impl<R: TodoRepository<Todo>> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self::with_clock(repo, Arc::new(SystemClock)) }

    pub fn with_clock(repo: R, clock: Arc<dyn Clock>) -> Self { Self { repo, clock } }
}

#[async_trait]
impl<R: TodoRepository<Todo>> TodoService for TodoServiceImpl<R> {
    async fn create(&self, input: CreateTodo) -> Result<Todo, TodoError> {
        let todo = input.into_todo(self.clock.now())?;
        let todo = self.repo.insert(todo).await?;
        tracing::debug!(id = %todo.id, "todo created");
        Ok(todo)
    }

    async fn get(&self, id: &TodoId) -> Result<Todo, TodoError> {
        self.repo.get(id).await?.ok_or(TodoError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Todo>, TodoError> { self.repo.list().await }

    async fn update(&self, id: &TodoId, input: UpdateTodo) -> Result<Todo, TodoError> {
        let now = self.clock.now();
        self.repo
            .update_with(id, move |todo| input.apply(todo, now))
            .await?
            .ok_or(TodoError::NotFound)
    }

    async fn delete(&self, id: &TodoId) -> Result<Todo, TodoError> {
        self.repo.remove(id).await?.ok_or(TodoError::NotFound)
    }

    async fn delete_all(&self) -> Result<usize, TodoError> {
        let dropped = self.repo.clear().await?;
        tracing::debug!(dropped, "all todos deleted");
        Ok(dropped)
    }
}
