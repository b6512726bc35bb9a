use super::PaginationState;

/// The rows present at initialization, in page order.
///
/// Rows are opaque to pagination; the set never grows or shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSet<R> {
    rows: Vec<R>,
}

impl<R> RowSet<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows shown for `state`.
    pub fn visible(&self, state: &PaginationState) -> &[R] {
        let range = state.row_range();
        let end = range.end.min(self.rows.len());
        let start = range.start.min(end);
        &self.rows[start..end]
    }
}
