//! Search, sort and page specifications plus pagination metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Short form used in query strings
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search term and the fields it is matched against
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchSpec {
    /// Raw term as typed; may be empty or padded with whitespace
    pub term: String,

    /// Field names searched for the term
    pub fields: Vec<String>,
}

impl SearchSpec {
    pub fn new(term: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            term: term.into(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Field and direction of a sort
///
/// # Format
/// - `field` or `field:asc` (ascending)
/// - `field:desc` (descending)
///
/// ```
/// use catalog::core::query::{SortDirection, SortSpec};
///
/// let spec: SortSpec = "date_release:desc".parse().unwrap();
/// assert_eq!(spec.field.as_deref(), Some("date_release"));
/// assert_eq!(spec.direction, SortDirection::Descending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    /// `None` means the sequence is left in its original order
    pub field: Option<String>,

    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    /// No sorting
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Sort by `field` in `direction`
    pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: Some(field.into()),
            direction,
        }
    }

    /// Active field, ignoring an empty name
    pub fn active_field(&self) -> Option<&str> {
        self.field.as_deref().filter(|f| !f.is_empty())
    }

    /// Column selection as done by clicking a table header.
    ///
    /// Selecting the active column toggles its direction; any other column
    /// becomes active in ascending order.
    pub fn select(&self, column: &str) -> Self {
        if self.active_field() == Some(column) {
            Self {
                field: self.field.clone(),
                direction: self.direction.toggle(),
            }
        } else {
            Self::by(column, SortDirection::Ascending)
        }
    }
}

impl FromStr for SortSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::unsorted());
        }

        let (field, direction) = match s.rsplit_once(':') {
            Some((field, "asc")) => (field, SortDirection::Ascending),
            Some((field, "desc")) => (field, SortDirection::Descending),
            Some((_, other)) => return Err(format!("Unknown sort direction '{}'", other)),
            None => (s, SortDirection::Ascending),
        };

        Ok(Self::by(field.trim(), direction))
    }
}

/// Requested page and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    page: usize,
    page_size: usize,
}

impl PageSpec {
    /// Both values are clamped to a minimum of 1
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Page number (starts at 1)
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of items per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Same page size, different page
    pub fn with_page(self, page: usize) -> Self {
        Self::new(page, self.page_size)
    }

    /// New page size, back on the first page
    pub fn with_page_size(self, page_size: usize) -> Self {
        Self::new(1, page_size)
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::new(1, default_limit())
    }
}

/// Everything needed to derive a view from a collection
///
/// Values are immutable; the `with_*` methods return an updated copy and
/// apply the page reset rules of the list view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewRequest {
    pub search: SearchSpec,
    pub sort: SortSpec,
    pub page: PageSpec,
}

impl ViewRequest {
    pub fn new(search: SearchSpec, sort: SortSpec, page: PageSpec) -> Self {
        Self { search, sort, page }
    }

    /// New search term; returns to the first page
    pub fn with_search_term(&self, term: impl Into<String>) -> Self {
        Self {
            search: SearchSpec {
                term: term.into(),
                fields: self.search.fields.clone(),
            },
            sort: self.sort.clone(),
            page: self.page.with_page(1),
        }
    }

    /// New sort; the current page is kept
    pub fn with_sort(&self, sort: SortSpec) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    /// New page size; returns to the first page
    pub fn with_page_size(&self, page_size: usize) -> Self {
        Self {
            page: self.page.with_page_size(page_size),
            ..self.clone()
        }
    }

    /// Navigate to a page
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: self.page.with_page(page),
            ..self.clone()
        }
    }
}

/// Query parameters for listing, as they arrive from a presentation layer
///
/// # Example
/// ```rust,ignore
/// // ?search=bond&sort=name:desc&page=2&limit=10
/// let params: QueryParams = serde_json::from_value(json!({
///     "search": "bond", "sort": "name:desc", "page": 2, "limit": 10
/// }))?;
/// let request = params.to_request(&["name", "description"]);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of items per page
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Free-text search term
    pub search: Option<String>,

    /// Sort field and direction (`field`, `field:asc`, `field:desc`)
    pub sort: Option<String>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            search: None,
            sort: None,
        }
    }
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    5
}

impl QueryParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get limit, ensuring it doesn't exceed the maximum
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, 100)
    }

    /// Parse the sort parameter; an unreadable value means no sort
    pub fn sort_spec(&self) -> SortSpec {
        self.sort
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Build a view request searching over `fields`
    pub fn to_request(&self, fields: &[&str]) -> ViewRequest {
        ViewRequest::new(
            SearchSpec::new(self.search.clone().unwrap_or_default(), fields),
            self.sort_spec(),
            PageSpec::new(self.page(), self.limit()),
        )
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let page = page.max(1);
        let limit = limit.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };
        let start = (page - 1).saturating_mul(limit);

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start.saturating_add(limit) < total,
            has_prev: page > 1,
        }
    }
}
