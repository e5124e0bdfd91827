//! Stateful list view over a data provider
//!
//! [`ListController`] owns the working collection and the current
//! [`ViewRequest`]. Every trigger builds a new request and re-derives the
//! [`ViewState`]; nothing is patched in place.
//!
//! # Usage
//!
//! ```rust,ignore
//! let provider = Arc::new(InMemoryDataProvider::with_items(products));
//! let mut list = ListController::new(provider, &ListSettings::default())?;
//!
//! list.reload().await?;
//! list.set_search_term("card");
//! list.sort_by("date_release");
//! for product in list.page_items() {
//!     println!("{}", product.name);
//! }
//! ```

use crate::config::ListSettings;
use crate::core::error::{CatalogError, CatalogResult, ValidationError};
use crate::core::events::{EventBus, EventEnvelope, ListEvent, MutationKind};
use crate::core::query::{PageSpec, QueryParams, SearchSpec, SortSpec, ViewRequest};
use crate::core::use_cases::UseCases;
use crate::core::{DataProvider, Entity};
use crate::view::state::ViewState;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Where the list is in its load cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested yet
    Idle,
    /// A reload is in flight
    Loading,
    /// The last applied reload succeeded
    Ready,
    /// The last applied reload failed; the previous collection is kept
    Error,
}

/// Which editing surface is open, if any
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState<T> {
    #[default]
    Closed,
    Creating,
    Editing(T),
    Deleting(T),
}

impl<T> EditorState<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditorState::Closed)
    }

    /// Record being edited or deleted
    pub fn selected(&self) -> Option<&T> {
        match self {
            EditorState::Editing(item) | EditorState::Deleting(item) => Some(item),
            _ => None,
        }
    }
}

/// Handle for a reload started with [`ListController::begin_reload`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a reload ticket must be passed to complete_reload"]
pub struct ReloadTicket {
    seq: u64,
}

impl ReloadTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// List view controller for one entity type
pub struct ListController<T: Entity, P: DataProvider<T>> {
    use_cases: UseCases<T, P>,
    events: EventBus,
    page_sizes: Vec<usize>,

    collection: Vec<T>,
    request: ViewRequest,
    view: ViewState<T>,

    status: LoadStatus,
    error: Option<String>,
    editor: EditorState<T>,

    reload_seq: u64,
}

impl<T: Entity, P: DataProvider<T>> ListController<T, P> {
    /// Create a controller with an empty collection
    pub fn new(provider: Arc<P>, settings: &ListSettings) -> CatalogResult<Self> {
        settings.validate()?;

        let fields: Vec<&str> = settings.search_fields.iter().map(String::as_str).collect();
        let request = ViewRequest::new(
            SearchSpec::new("", &fields),
            settings.sort_spec()?,
            PageSpec::new(1, settings.default_page_size),
        );

        let collection = Vec::new();
        let view = ViewState::derive(&collection, &request);

        Ok(Self {
            use_cases: UseCases::new(provider),
            events: EventBus::new(settings.event_capacity),
            page_sizes: settings.page_sizes.clone(),
            collection,
            view,
            request,
            status: LoadStatus::Idle,
            error: None,
            editor: EditorState::Closed,
            reload_seq: 0,
        })
    }

    /// Controller using [`ListSettings::for_entity`]
    pub fn with_defaults(provider: Arc<P>) -> CatalogResult<Self> {
        Self::new(provider, &ListSettings::for_entity::<T>())
    }

    // === Presentation state ===

    /// Items on the current page
    pub fn page_items(&self) -> &[T] {
        &self.view.page_items
    }

    /// Full derived view
    pub fn view(&self) -> &ViewState<T> {
        &self.view
    }

    /// The request the current view was derived from
    pub fn request(&self) -> &ViewRequest {
        &self.request
    }

    /// Working collection as last loaded
    pub fn collection(&self) -> &[T] {
        &self.collection
    }

    pub fn search_term(&self) -> &str {
        &self.request.search.term
    }

    pub fn sort(&self) -> &SortSpec {
        &self.request.sort
    }

    pub fn current_page(&self) -> usize {
        self.request.page.page()
    }

    pub fn page_size(&self) -> usize {
        self.request.page.page_size()
    }

    /// Page sizes offered to the user
    pub fn page_sizes(&self) -> &[usize] {
        &self.page_sizes
    }

    pub fn total_pages(&self) -> usize {
        self.view.total_pages()
    }

    pub fn page_numbers(&self) -> &[usize] {
        &self.view.page_numbers
    }

    /// Message of the last failed reload or mutation
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn editor(&self) -> &EditorState<T> {
        &self.editor
    }

    /// Receive events published after this call
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.events.subscribe()
    }

    /// Dismiss the current error message
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // === View triggers ===

    /// Change the search term and return to the first page
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let request = self.request.with_search_term(term);
        self.apply(request);
    }

    /// Select a sort column.
    ///
    /// The active column toggles its direction; another column becomes active
    /// in ascending order. The current page is kept.
    pub fn sort_by(&mut self, column: &str) {
        let sort = self.request.sort.select(column);
        let request = self.request.with_sort(sort);
        self.apply(request);
    }

    /// Replace the sort outright; the current page is kept
    pub fn set_sort(&mut self, sort: SortSpec) {
        let request = self.request.with_sort(sort);
        self.apply(request);
    }

    /// Change the page size and return to the first page
    pub fn set_page_size(&mut self, page_size: usize) {
        let request = self.request.with_page_size(page_size);
        self.apply(request);
    }

    /// Navigate to a page; pages past the end show no items
    pub fn go_to_page(&mut self, page: usize) {
        self.request = self.request.with_page(page);
        let ordered = std::mem::take(&mut self.view.ordered);
        self.view = ViewState::paginated(ordered, &self.request);
    }

    /// Replace search, sort and page from query parameters in one step.
    ///
    /// The configured search fields are kept; an unreadable sort means no
    /// sort.
    pub fn apply_query(&mut self, params: &QueryParams) {
        let request = {
            let fields: Vec<&str> = self.request.search.fields.iter().map(String::as_str).collect();
            params.to_request(&fields)
        };
        self.apply(request);
    }

    fn apply(&mut self, request: ViewRequest) {
        self.request = request;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.view = ViewState::derive(&self.collection, &self.request);
        tracing::debug!(
            entity_type = T::resource_name(),
            matched = self.view.matched(),
            page = self.current_page(),
            total_pages = self.view.total_pages(),
            "view recomputed"
        );
    }

    // === Reload ===

    /// Mark a reload as started.
    ///
    /// Only the most recently issued ticket is applied by
    /// [`complete_reload`](Self::complete_reload); older ones are discarded.
    pub fn begin_reload(&mut self) -> ReloadTicket {
        self.reload_seq += 1;
        self.status = LoadStatus::Loading;
        tracing::debug!(
            entity_type = T::resource_name(),
            seq = self.reload_seq,
            "reload started"
        );
        ReloadTicket {
            seq: self.reload_seq,
        }
    }

    /// Apply the outcome of a reload.
    ///
    /// On success the collection is replaced and the view re-derived with the
    /// current page kept. On failure the collection and view are left as they
    /// were and the error message is stored verbatim. Returns `false` when the
    /// ticket is stale and the outcome was discarded.
    pub fn complete_reload<E: std::fmt::Display>(
        &mut self,
        ticket: ReloadTicket,
        result: Result<Vec<T>, E>,
    ) -> bool {
        if ticket.seq != self.reload_seq {
            tracing::warn!(
                entity_type = T::resource_name(),
                seq = ticket.seq,
                latest = self.reload_seq,
                "discarding stale reload"
            );
            return false;
        }

        match result {
            Ok(items) => {
                let count = items.len();
                self.collection = items;
                self.status = LoadStatus::Ready;
                self.error = None;
                self.recompute();

                tracing::info!(entity_type = T::resource_name(), count, "collection loaded");
                self.events.publish(ListEvent::Loaded {
                    entity_type: T::resource_name().to_string(),
                    count,
                });
            }
            Err(err) => {
                let message = err.to_string();
                self.status = LoadStatus::Error;
                self.error = Some(message.clone());

                tracing::warn!(entity_type = T::resource_name(), error = %message, "reload failed");
                self.events.publish(ListEvent::LoadFailed {
                    entity_type: T::resource_name().to_string(),
                    message,
                });
            }
        }
        true
    }

    /// Fetch the full collection and apply it
    pub async fn reload(&mut self) -> CatalogResult<()> {
        let ticket = self.begin_reload();
        match self.use_cases.get_all.execute().await {
            Ok(items) => {
                self.complete_reload(ticket, Ok::<_, CatalogError>(items));
                Ok(())
            }
            Err(err) => {
                self.complete_reload(ticket, Err(&err));
                Err(err)
            }
        }
    }

    // === Editor ===

    pub fn open_create(&mut self) {
        self.editor = EditorState::Creating;
    }

    pub fn open_edit(&mut self, item: T) {
        self.editor = EditorState::Editing(item);
    }

    /// Ask for delete confirmation; an item without id is refused
    pub fn open_delete(&mut self, item: T) -> Result<(), ValidationError> {
        crate::core::validation::required()("id", item.id())?;
        self.editor = EditorState::Deleting(item);
        Ok(())
    }

    pub fn close_editor(&mut self) {
        self.editor = EditorState::Closed;
    }

    // === Mutations ===

    /// Fetch one entity by id without touching list state
    pub async fn fetch(&self, id: &str) -> CatalogResult<T> {
        self.use_cases.get_by_id.execute(id).await
    }

    /// Create `item`, then reload.
    ///
    /// Returns the reload error if the follow-up reload fails; the item has
    /// been created in that case.
    pub async fn create(&mut self, item: T) -> CatalogResult<()> {
        let id = item.id().to_string();
        let result = self.use_cases.create.execute(item).await;
        self.finish_mutation(MutationKind::Create, id, result).await
    }

    /// Build an item from a draft and create it.
    ///
    /// A draft that fails validation is returned to the caller and changes
    /// nothing.
    pub async fn create_from<D>(&mut self, draft: D) -> CatalogResult<()>
    where
        T: TryFrom<D, Error = ValidationError>,
    {
        let item = T::try_from(draft)?;
        self.create(item).await
    }

    /// Replace `item` (matched by id), then reload
    pub async fn update(&mut self, item: T) -> CatalogResult<()> {
        let id = item.id().to_string();
        let result = self.use_cases.update.execute(item).await;
        self.finish_mutation(MutationKind::Update, id, result).await
    }

    /// Build an item from a draft and update it
    pub async fn update_from<D>(&mut self, draft: D) -> CatalogResult<()>
    where
        T: TryFrom<D, Error = ValidationError>,
    {
        let item = T::try_from(draft)?;
        self.update(item).await
    }

    /// Delete the item with `id`, then reload
    pub async fn delete(&mut self, id: &str) -> CatalogResult<()> {
        let result = self.use_cases.delete.execute(id).await;
        self.finish_mutation(MutationKind::Delete, id.to_string(), result)
            .await
    }

    async fn finish_mutation(
        &mut self,
        kind: MutationKind,
        id: String,
        result: CatalogResult<()>,
    ) -> CatalogResult<()> {
        match result {
            Ok(()) => {
                tracing::info!(
                    entity_type = T::resource_name(),
                    id = %id,
                    action = kind.as_str(),
                    "mutation applied"
                );
                self.editor = EditorState::Closed;
                self.error = None;
                self.events.publish(ListEvent::Saved {
                    entity_type: T::resource_name_singular().to_string(),
                    entity_id: id,
                    kind,
                });
                self.reload().await
            }
            // Rejected before reaching the provider: report to the caller only.
            Err(err @ CatalogError::Validation(_)) => Err(err),
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(
                    entity_type = T::resource_name(),
                    id = %id,
                    action = kind.as_str(),
                    error = %message,
                    "mutation failed"
                );
                self.error = Some(message.clone());
                self.events.publish(ListEvent::SaveFailed {
                    entity_type: T::resource_name_singular().to_string(),
                    entity_id: id,
                    kind,
                    message,
                });
                Err(err)
            }
        }
    }
}
