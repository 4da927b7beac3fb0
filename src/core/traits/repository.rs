use async_trait::async_trait;

use crate::core::Result;

/// Base repository trait for id-keyed persistence
/// Every record store backing a service implements this trait
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// Insert the entity when it has no id yet, otherwise overwrite the stored record
    async fn save(&self, entity: T) -> Result<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: ID) -> Result<Option<T>>;

    /// List all entities in store iteration order
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Check whether an entity is stored under ID
    async fn exists_by_id(&self, id: ID) -> Result<bool>;

    /// Delete the entity stored under ID
    async fn delete_by_id(&self, id: ID) -> Result<()>;

    /// Verify the backing store is reachable
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
