use async_trait::async_trait;

use super::error::TodoError;

pub type RepoResult<T> = Result<T, TodoError>;

/// A record that can be located in a collection by its identifier.
pub trait Identified {
    type Id: PartialEq + Send + Sync;

    fn id(&self) -> &Self::Id;
}

/// Ordered collection of records. Insertion order is preserved and removal
/// keeps the relative order of the remaining records.
///
/// The `*_with` operations run their closure while the collection is locked,
/// so a check against existing records and the following write are atomic.
#[async_trait]
pub trait TodoRepository<T>: Send + Sync + 'static
where
    T: Identified + Clone + Send + Sync + 'static,
{
    async fn list(&self) -> RepoResult<Vec<T>>;
    async fn get(&self, id: &T::Id) -> RepoResult<Option<T>>;
    async fn insert(&self, item: T) -> RepoResult<T>;
    async fn insert_with<F>(&self, build: F) -> RepoResult<T>
    where
        F: FnOnce(&[T]) -> RepoResult<T> + Send + 'static;
    /// Returns `Ok(None)` when no record has `id`; `apply` is not called then.
    async fn update_with<F>(&self, id: &T::Id, apply: F) -> RepoResult<Option<T>>
    where
        F: FnOnce(&mut T) -> RepoResult<()> + Send + 'static;
    async fn remove(&self, id: &T::Id) -> RepoResult<Option<T>>;
    /// Empties the collection, returning how many records were dropped.
    async fn clear(&self) -> RepoResult<usize>;
}
