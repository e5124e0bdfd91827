//! Core module containing fundamental traits and types

pub mod entity;
pub mod error;
pub mod events;
pub mod field;
pub mod query;
pub mod service;
pub mod use_cases;
pub mod validation;

pub use entity::{Entity, FieldAccessor};
pub use error::{CatalogError, CatalogResult, ValidationError};
pub use events::{EventBus, ListEvent};
pub use field::FieldValue;
pub use query::{PageSpec, PaginationMeta, SearchSpec, SortDirection, SortSpec, ViewRequest};
pub use service::DataProvider;
pub use use_cases::UseCases;
