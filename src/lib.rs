//! # Product Catalog
//!
//! Search, sort and pagination for a catalog of financial products, over any
//! data provider.
//!
//! ## Features
//!
//! - **Generic shaping**: `filter`, `sort` and `paginate` work on any record
//!   implementing [`FieldAccessor`](core::FieldAccessor)
//! - **List controller**: holds search/sort/page state and re-derives the
//!   visible page on every change
//! - **Provider-agnostic**: create/read/update/delete go through the
//!   [`DataProvider`](core::DataProvider) trait
//! - **Stale reload guard**: only the latest reload is applied
//! - **Events**: reload and mutation outcomes are broadcast to subscribers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog::prelude::*;
//!
//! let provider = Arc::new(InMemoryDataProvider::with_items(products));
//! let mut list = ListController::with_defaults(provider)?;
//!
//! list.reload().await?;
//! list.set_search_term("card");
//! list.sort_by("name");
//! list.set_page_size(10);
//!
//! println!("page {} of {}", list.current_page(), list.total_pages());
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod storage;
pub mod view;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::{Entity, FieldAccessor},
        field::FieldValue,
        service::DataProvider,
    };

    // === Query ===
    pub use crate::core::query::{
        PageSpec, PaginationMeta, QueryParams, SearchSpec, SortDirection, SortSpec, ViewRequest,
    };

    // === Errors & Events ===
    pub use crate::core::error::{CatalogError, CatalogResult, ValidationError};
    pub use crate::core::events::{EventBus, EventEnvelope, ListEvent, MutationKind};

    // === View ===
    pub use crate::view::{
        EditorState, ListController, LoadStatus, ReloadTicket, ViewState, filter, paginate,
        sort, toggle_direction,
    };

    // === Domain & Storage ===
    pub use crate::catalog::{FinancialProduct, ProductDraft};
    pub use crate::storage::InMemoryDataProvider;

    // === Config ===
    pub use crate::config::{CatalogConfig, ListSettings, LoggingConfig};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use std::sync::Arc;
}
