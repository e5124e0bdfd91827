//! Client-side list shaping: filter, sort, paginate, and the controller that
//! composes them
//!
//! Data flows one way:
//!
//! ```text
//! collection ──▶ filter ──▶ sort ──▶ paginate ──▶ page items
//! ```

pub mod controller;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod state;

pub use controller::{EditorState, ListController, LoadStatus, ReloadTicket};
pub use filter::filter;
pub use pagination::{page_numbers, paginate, total_pages};
pub use sort::{sort, toggle_direction};
pub use state::ViewState;
