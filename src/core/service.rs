//! Data provider trait for entity operations

use crate::core::Entity;
use anyhow::Result;
use async_trait::async_trait;

/// Service trait performing durable create/read/update/delete of entities
///
/// Implementations may talk to a remote API, a database or plain memory; the
/// list controller only sees success or an opaque error. Failures are surfaced
/// to the presentation layer as their `Display` text.
#[async_trait]
pub trait DataProvider<T: Entity>: Send + Sync {
    /// List all entities
    async fn get_all(&self) -> Result<Vec<T>>;

    /// Get an entity by ID
    ///
    /// An unknown id is an error, not an empty result.
    async fn get_by_id(&self, id: &str) -> Result<T>;

    /// Create a new entity
    async fn create(&self, entity: T) -> Result<()>;

    /// Replace an existing entity, matched by its id
    async fn update(&self, entity: T) -> Result<()>;

    /// Delete an entity
    async fn delete(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl<T: Entity, P: DataProvider<T> + ?Sized> DataProvider<T> for std::sync::Arc<P> {
    async fn get_all(&self) -> Result<Vec<T>> {
        (**self).get_all().await
    }

    async fn get_by_id(&self, id: &str) -> Result<T> {
        (**self).get_by_id(id).await
    }

    async fn create(&self, entity: T) -> Result<()> {
        (**self).create(entity).await
    }

    async fn update(&self, entity: T) -> Result<()> {
        (**self).update(entity).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        (**self).delete(id).await
    }
}
