//! Pure logic behind the storefront page enhancements.
//!
//! Nothing here draws anything: the UI crate reads these states and turns them
//! into widgets, and feeds user input back in as navigation requests.

mod config;
mod document;
pub mod pagination;
mod scroll_to_top;

pub use config::{PaginationConfig, ScrollConfig, StorefrontConfig};
pub use document::{DocumentError, PageDocument, PaginationMarkup, TableMarkup, TextSection};
pub use pagination::{
    ControlSlot, ControlsOrigin, FadeIn, NavigateOutcome, PageChange, PageItem, PageWindow,
    PaginationControls, PaginationState, Paginator, RowSet, page_window,
};
pub use scroll_to_top::{ScrollAnimation, ScrollToTop};
