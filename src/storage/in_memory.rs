//! In-memory implementation of DataProvider for testing and development

use crate::core::error::CatalogError;
use crate::core::{DataProvider, Entity};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// In-memory data provider
///
/// Keeps entities in insertion order so `get_all` is deterministic. Clones
/// share the same storage.
#[derive(Clone)]
pub struct InMemoryDataProvider<T> {
    entities: Arc<RwLock<IndexMap<String, T>>>,
}

impl<T: Entity> InMemoryDataProvider<T> {
    /// Create an empty provider
    pub fn new() -> Self {
        Self {
            entities: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a provider seeded with `items`; later duplicates replace earlier ones
    pub fn with_items(items: impl IntoIterator<Item = T>) -> Self {
        let entities = items
            .into_iter()
            .map(|item| (item.id().to_string(), item))
            .collect();
        Self {
            entities: Arc::new(RwLock::new(entities)),
        }
    }

    /// Number of stored entities
    pub fn len(&self) -> usize {
        self.entities.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn not_found(id: &str) -> anyhow::Error {
        anyhow::Error::new(CatalogError::NotFound {
            entity_type: T::resource_name_singular().to_string(),
            id: id.to_string(),
        })
    }
}

impl<T: Entity> Default for InMemoryDataProvider<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> DataProvider<T> for InMemoryDataProvider<T> {
    async fn get_all(&self) -> Result<Vec<T>> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(entities.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<T> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        entities.get(id).cloned().ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, entity: T) -> Result<()> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if entities.contains_key(entity.id()) {
            return Err(anyhow::Error::new(CatalogError::AlreadyExists {
                entity_type: T::resource_name_singular().to_string(),
                id: entity.id().to_string(),
            }));
        }

        tracing::debug!(entity_type = T::resource_name_singular(), id = entity.id(), "stored");
        entities.insert(entity.id().to_string(), entity);
        Ok(())
    }

    async fn update(&self, entity: T) -> Result<()> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let slot = entities
            .get_mut(entity.id())
            .ok_or_else(|| Self::not_found(entity.id()))?;
        *slot = entity;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        entities
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }
}
