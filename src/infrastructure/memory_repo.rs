use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repository::{Identified, RepoResult, TodoRepository};

/// Process-lifetime store backed by a `Vec`. Lookups are linear scans.
#[derive(Debug)]
pub struct MemoryRepository<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> MemoryRepository<T> {
    pub fn new() -> Self {
        Self { items: Arc::new(RwLock::new(Vec::new())) }
    }
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self { Self::new() }
}

// Clones share the same collection.
impl<T> Clone for MemoryRepository<T> {
    fn clone(&self) -> Self {
        Self { items: Arc::clone(&self.items) }
    }
}

#[async_trait]
impl<T> TodoRepository<T> for MemoryRepository<T>
where
    T: Identified + Clone + Send + Sync + 'static,
{
    async fn list(&self) -> RepoResult<Vec<T>> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: &T::Id) -> RepoResult<Option<T>> {
        Ok(self.items.read().await.iter().find(|item| item.id() == id).cloned())
    }

    async fn insert(&self, item: T) -> RepoResult<T> {
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn insert_with<F>(&self, build: F) -> RepoResult<T>
    where
        F: FnOnce(&[T]) -> RepoResult<T> + Send + 'static,
    {
        let mut items = self.items.write().await;
        let item = build(items.as_slice())?;
        items.push(item.clone());
        Ok(item)
    }

    async fn update_with<F>(&self, id: &T::Id, apply: F) -> RepoResult<Option<T>>
    where
        F: FnOnce(&mut T) -> RepoResult<()> + Send + 'static,
    {
        let mut items = self.items.write().await;
        let Some(item) = items.iter_mut().find(|item| item.id() == id) else { return Ok(None) };
        apply(item)?;
        Ok(Some(item.clone()))
    }

    async fn remove(&self, id: &T::Id) -> RepoResult<Option<T>> {
        let mut items = self.items.write().await;
        let Some(index) = items.iter().position(|item| item.id() == id) else { return Ok(None) };
        Ok(Some(items.remove(index)))
    }

    async fn clear(&self) -> RepoResult<usize> {
        let mut items = self.items.write().await;
        let dropped = items.len();
        items.clear();
        Ok(dropped)
    }
}
