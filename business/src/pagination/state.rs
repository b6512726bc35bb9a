use std::ops::Range;

/// Current page plus the fixed page geometry.
///
/// Pages are 1-based. With rows present `current_page` stays in
/// `1..=total_pages`; an empty table has zero pages and sits on page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    items_per_page: usize,
    total_rows: usize,
    total_pages: usize,
}

impl PaginationState {
    /// Starts on page 1. A page size of zero is treated as one.
    pub fn new(total_rows: usize, items_per_page: usize) -> Self {
        let items_per_page = items_per_page.max(1);
        Self {
            current_page: 1,
            items_per_page,
            total_rows,
            total_pages: total_rows.div_ceil(items_per_page),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Pulls `page` into the valid range.
    pub fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages.max(1))
    }

    /// The same geometry on another page, clamped.
    #[must_use]
    pub fn with_page(self, page: usize) -> Self {
        Self {
            current_page: self.clamp_page(page),
            ..self
        }
    }

    /// Row indices shown on the current page.
    pub fn row_range(&self) -> Range<usize> {
        let start = (self.current_page - 1) * self.items_per_page;
        let end = (start + self.items_per_page).min(self.total_rows);
        start.min(end)..end
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    pub fn prev_page(&self) -> Option<usize> {
        (!self.is_first_page()).then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<usize> {
        (!self.is_last_page()).then(|| self.current_page + 1)
    }
}
