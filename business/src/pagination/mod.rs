//! Client-side pagination of a pre-rendered table.
//!
//! - `state`: current page and page geometry
//! - `window`: which page buttons to draw
//! - `rows`: the immutable row set and the slice shown per page
//! - `controls`: prev / numbers / next, reused from the page or constructed
//! - `fade`: row fade-in and the loading dim
//! - `paginator`: the state machine tying them together

mod controls;
mod fade;
mod paginator;
mod rows;
mod state;
mod window;

pub use controls::{ControlSlot, ControlsOrigin, PaginationControls};
pub use fade::{FadeIn, LOADING_TABLE_OPACITY};
pub use paginator::{NavigateOutcome, PageChange, Paginator};
pub use rows::RowSet;
pub use state::PaginationState;
pub use window::{PageItem, PageWindow, page_window};
