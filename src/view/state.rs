//! Derived view of a collection for one request

use crate::core::FieldAccessor;
use crate::core::query::{PaginationMeta, ViewRequest};
use crate::view::{filter, pagination, sort};
use serde::Serialize;

/// Result of running filter, sort and paginate over a collection
///
/// A `ViewState` is always rebuilt from scratch; nothing in it is patched
/// when the collection or the request changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState<T> {
    /// Items that matched the search, sorted, across all pages
    pub ordered: Vec<T>,

    /// Items on the requested page
    pub page_items: Vec<T>,

    /// Page numbers available for navigation
    pub page_numbers: Vec<usize>,

    pub pagination: PaginationMeta,
}

impl<T: FieldAccessor + Clone> ViewState<T> {
    /// Run the pipeline: filter, then sort, then paginate.
    pub fn derive(collection: &[T], request: &ViewRequest) -> Self {
        let filtered = filter::filter(collection, &request.search.term, &request.search.fields);
        let ordered = sort::sort(&filtered, request.sort.active_field(), request.sort.direction);
        Self::paginated(ordered, request)
    }

    /// Re-slice an already ordered sequence for a new page.
    ///
    /// Used when only the page number changes.
    pub fn paginated(ordered: Vec<T>, request: &ViewRequest) -> Self {
        let page = request.page.page();
        let page_size = request.page.page_size();
        let page_items = pagination::paginate(&ordered, page, page_size);
        let pagination = PaginationMeta::new(page, page_size, ordered.len());
        let page_numbers = pagination::page_numbers(pagination.total_pages);

        Self {
            ordered,
            page_items,
            page_numbers,
            pagination,
        }
    }

    /// Number of items that matched the search
    pub fn matched(&self) -> usize {
        self.ordered.len()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            ordered: Vec::new(),
            page_items: Vec::new(),
            page_numbers: Vec::new(),
            pagination: PaginationMeta::new(1, 1, 0),
        }
    }
}
