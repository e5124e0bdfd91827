//! Application operations over a data provider
//!
//! Each use case wraps one provider call, rejects obviously bad arguments
//! before any I/O, and converts provider failures into [`CatalogError`].
//! A list controller holds the whole set as [`UseCases`].

use crate::core::error::{CatalogError, CatalogResult};
use crate::core::validation;
use crate::core::{DataProvider, Entity};
use std::marker::PhantomData;
use std::sync::Arc;

fn check_id(id: &str) -> CatalogResult<()> {
    validation::required()("id", id)?;
    Ok(())
}

macro_rules! use_case {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        pub struct $name<T, P> {
            provider: Arc<P>,
            _entity: PhantomData<fn() -> T>,
        }

        impl<T: Entity, P: DataProvider<T>> $name<T, P> {
            pub fn new(provider: Arc<P>) -> Self {
                Self {
                    provider,
                    _entity: PhantomData,
                }
            }
        }

        impl<T, P> Clone for $name<T, P> {
            fn clone(&self) -> Self {
                Self {
                    provider: Arc::clone(&self.provider),
                    _entity: PhantomData,
                }
            }
        }
    };
}

use_case!(
    /// Fetch the whole collection
    GetAllEntities
);
use_case!(
    /// Fetch one entity by id
    GetEntityById
);
use_case!(
    /// Persist a new entity
    CreateEntity
);
use_case!(
    /// Replace an existing entity
    UpdateEntity
);
use_case!(
    /// Remove an entity by id
    DeleteEntity
);

impl<T: Entity, P: DataProvider<T>> GetAllEntities<T, P> {
    pub async fn execute(&self) -> CatalogResult<Vec<T>> {
        self.provider
            .get_all()
            .await
            .map_err(CatalogError::from_provider)
    }
}

impl<T: Entity, P: DataProvider<T>> GetEntityById<T, P> {
    pub async fn execute(&self, id: &str) -> CatalogResult<T> {
        check_id(id)?;
        self.provider
            .get_by_id(id)
            .await
            .map_err(CatalogError::from_provider)
    }
}

impl<T: Entity, P: DataProvider<T>> CreateEntity<T, P> {
    pub async fn execute(&self, entity: T) -> CatalogResult<()> {
        check_id(entity.id())?;
        self.provider
            .create(entity)
            .await
            .map_err(CatalogError::from_provider)
    }
}

impl<T: Entity, P: DataProvider<T>> UpdateEntity<T, P> {
    pub async fn execute(&self, entity: T) -> CatalogResult<()> {
        check_id(entity.id())?;
        self.provider
            .update(entity)
            .await
            .map_err(CatalogError::from_provider)
    }
}

impl<T: Entity, P: DataProvider<T>> DeleteEntity<T, P> {
    pub async fn execute(&self, id: &str) -> CatalogResult<()> {
        check_id(id)?;
        self.provider
            .delete(id)
            .await
            .map_err(CatalogError::from_provider)
    }
}

/// All use cases sharing one provider
pub struct UseCases<T, P> {
    pub get_all: GetAllEntities<T, P>,
    pub get_by_id: GetEntityById<T, P>,
    pub create: CreateEntity<T, P>,
    pub update: UpdateEntity<T, P>,
    pub delete: DeleteEntity<T, P>,
}

impl<T: Entity, P: DataProvider<T>> UseCases<T, P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            get_all: GetAllEntities::new(Arc::clone(&provider)),
            get_by_id: GetEntityById::new(Arc::clone(&provider)),
            create: CreateEntity::new(Arc::clone(&provider)),
            update: UpdateEntity::new(Arc::clone(&provider)),
            delete: DeleteEntity::new(provider),
        }
    }
}

impl<T, P> Clone for UseCases<T, P> {
    fn clone(&self) -> Self {
        Self {
            get_all: self.get_all.clone(),
            get_by_id: self.get_by_id.clone(),
            create: self.create.clone(),
            update: self.update.clone(),
            delete: self.delete.clone(),
        }
    }
}
