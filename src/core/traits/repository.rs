use async_trait::async_trait;

use crate::core::Result;

/// Base repository trait for CRUD operations
/// Every collection repository implements this trait for consistency
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Send + Sync,
{
    /// List every stored record in insertion order
    async fn list(&self) -> Result<Vec<T>>;

    /// Find record by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<T>>;

    /// Insert a new record and return it as stored
    async fn insert(&self, record: &T) -> Result<T>;

    /// Overwrite every column of the record with the same ID.
    /// Returns `None` when no row carries that ID.
    async fn replace(&self, record: &T) -> Result<Option<T>>;

    /// Delete a record by ID, returning whether a row was removed
    async fn delete(&self, id: &str) -> Result<bool>;
}
