mod catalog_table;
mod loading_indicator;
mod pagination_controls;
mod scroll_to_top;
mod storefront_page;

pub use catalog_table::catalog_table;
pub use loading_indicator::{LOADING_LABEL, loading_indicator};
pub use pagination_controls::pagination_controls;
pub use scroll_to_top::{SCROLL_TO_TOP_LABEL, scroll_to_top};
pub use storefront_page::storefront_page;
