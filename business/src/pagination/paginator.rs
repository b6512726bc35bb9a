//! The table paginator.
//!
//! `Paginator` owns the immutable rows, the current page and the pending page
//! change. Navigation never changes the page directly: it dims the table and
//! schedules the change on the [`Scheduler`], and [`Paginator::poll`] applies
//! it once the loading delay has passed. A newer request cancels the older
//! one, so only the last click wins.

use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use storefront_states::{Scheduler, State, TaskId};

use super::fade::LOADING_TABLE_OPACITY;
use super::{FadeIn, PageWindow, PaginationControls, PaginationState, RowSet, page_window};
use crate::{PageDocument, PaginationConfig};

/// A page change that has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub from: usize,
    pub to: usize,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateOutcome {
    /// Already there, or already on the way there.
    Unchanged,
    /// Loading started; the change lands when the task comes due.
    Scheduled { target: usize, task: TaskId },
    /// A pending change was dropped because the request targets the current page.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingPage(usize);

#[derive(Debug)]
pub struct Paginator<R> {
    rows: RowSet<R>,
    state: PaginationState,
    config: PaginationConfig,
    controls: PaginationControls,
    pending: Scheduler<PendingPage>,
    fade: Option<FadeIn>,
}

impl<R: 'static> State for Paginator<R> {
    const TYPE: &'static str = "paginator";
}

impl Paginator<Vec<String>> {
    /// Attaches to the table in `document`, or returns `None` when there is none.
    pub fn init(
        document: &PageDocument,
        config: PaginationConfig,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        let Some(table) = document.table.as_ref() else {
            debug!("No catalog table in page, pagination stays off");
            return None;
        };

        let controls =
            PaginationControls::resolve(document.pagination.as_ref(), document.loading_indicator);
        let paginator = Self::new(table.rows.clone(), config, controls).with_fade_from(now);
        info!(
            "Paginating {} rows into {} pages ({:?} controls)",
            paginator.rows.len(),
            paginator.total_pages(),
            paginator.controls.origin()
        );
        Some(paginator)
    }
}

impl<R> Paginator<R> {
    pub fn new(rows: Vec<R>, config: PaginationConfig, controls: PaginationControls) -> Self {
        let rows = RowSet::new(rows);
        let state = PaginationState::new(rows.len(), config.items_per_page);
        Self {
            rows,
            state,
            config,
            controls,
            pending: Scheduler::new(),
            fade: None,
        }
    }

    /// Fades in the first page starting at `now`.
    #[must_use]
    pub fn with_fade_from(mut self, now: DateTime<Utc>) -> Self {
        self.fade = Some(FadeIn::new(now, self.config.fade_in));
        self
    }

    pub fn rows(&self) -> &RowSet<R> {
        &self.rows
    }

    pub fn controls(&self) -> &PaginationControls {
        &self.controls
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }

    pub fn window(&self) -> PageWindow {
        page_window(
            self.state.current_page(),
            self.state.total_pages(),
            self.config.max_visible_pages,
        )
    }

    pub fn visible_rows(&self) -> &[R] {
        self.rows.visible(&self.state)
    }

    pub fn is_loading(&self) -> bool {
        self.pending.pending().is_some()
    }

    pub fn pending_target(&self) -> Option<usize> {
        self.pending.pending().map(|(_, PendingPage(page))| *page)
    }

    /// Time left before the pending change lands.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.pending.remaining(now)
    }

    pub fn table_opacity(&self) -> f32 {
        if self.is_loading() {
            LOADING_TABLE_OPACITY
        } else {
            1.0
        }
    }

    /// Opacity of the visible rows while they fade in.
    pub fn row_opacity(&self, now: DateTime<Utc>) -> f32 {
        self.fade.map_or(1.0, |fade| fade.opacity(now))
    }

    pub fn is_animating(&self, now: DateTime<Utc>) -> bool {
        self.fade.is_some_and(|fade| !fade.is_finished(now))
    }

    /// Requests a move to `target`, clamped to the existing pages.
    pub fn navigate(&mut self, target: usize, now: DateTime<Utc>) -> NavigateOutcome {
        if self.state.total_pages() == 0 {
            return NavigateOutcome::Unchanged;
        }

        let target = self.state.clamp_page(target);
        let current = self.state.current_page();

        match self.pending_target() {
            Some(pending) if pending == target => NavigateOutcome::Unchanged,
            Some(pending) if target == current => {
                debug!("Back to page {current}, dropping change to page {pending}");
                self.pending.cancel_all();
                NavigateOutcome::Cancelled
            }
            None if target == current => NavigateOutcome::Unchanged,
            _ => {
                let handle =
                    self.pending
                        .schedule(PendingPage(target), now, self.config.loading_delay);
                debug!("Loading page {target} (from {current})");
                NavigateOutcome::Scheduled {
                    target,
                    task: handle.id(),
                }
            }
        }
    }

    /// Steps back from the pending target, or the current page if none.
    pub fn prev(&mut self, now: DateTime<Utc>) -> NavigateOutcome {
        match self.step_base().prev_page() {
            Some(target) => self.navigate(target, now),
            None => NavigateOutcome::Unchanged,
        }
    }

    /// Steps forward from the pending target, or the current page if none.
    pub fn next(&mut self, now: DateTime<Utc>) -> NavigateOutcome {
        match self.step_base().next_page() {
            Some(target) => self.navigate(target, now),
            None => NavigateOutcome::Unchanged,
        }
    }

    fn step_base(&self) -> PaginationState {
        self.pending_target()
            .map_or(self.state, |pending| self.state.with_page(pending))
    }

    /// Applies a page change whose delay has elapsed.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<PageChange> {
        let PendingPage(to) = self.pending.poll(now).pop()?.payload;
        let from = self.state.current_page();

        self.state = self.state.with_page(to);
        self.fade = Some(FadeIn::new(now, self.config.fade_in));
        debug!("Showing page {to} of {}", self.state.total_pages());

        Some(PageChange {
            from,
            to: self.state.current_page(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epoch() -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH
    }

    fn ms(value: i64) -> DateTime<Utc> {
        epoch() + Duration::milliseconds(value)
    }

    fn paginator(rows: usize) -> Paginator<usize> {
        Paginator::new(
            (0..rows).collect(),
            PaginationConfig::default(),
            PaginationControls::default(),
        )
    }

    #[test]
    fn starts_on_first_page() {
        let p = paginator(5);

        assert_eq!(p.current_page(), 1);
        assert_eq!(p.total_pages(), 3);
        assert_eq!(p.visible_rows(), [0, 1]);
        assert!(!p.is_loading());
        assert!((p.table_opacity() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn navigate_to_current_page_is_noop() {
        let mut p = paginator(5);

        assert_eq!(p.navigate(1, epoch()), NavigateOutcome::Unchanged);
        assert!(!p.is_loading());
        assert_eq!(p.poll(ms(1_000)), None);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn navigate_waits_for_loading_delay() {
        let mut p = paginator(5);

        let outcome = p.navigate(3, epoch());
        assert!(matches!(outcome, NavigateOutcome::Scheduled { target: 3, .. }));
        assert!(p.is_loading());
        assert_eq!(p.pending_target(), Some(3));
        assert!((p.table_opacity() - LOADING_TABLE_OPACITY).abs() < f32::EPSILON);

        assert_eq!(p.poll(ms(299)), None);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.visible_rows(), [0, 1]);

        assert_eq!(p.poll(ms(300)), Some(PageChange { from: 1, to: 3 }));
        assert_eq!(p.current_page(), 3);
        assert_eq!(p.visible_rows(), [4]);
        assert!(!p.is_loading());
        assert_eq!(p.window().active_page(), Some(3));
    }

    #[test]
    fn later_request_supersedes_pending_one() {
        let mut p = paginator(10);

        p.navigate(2, epoch());
        p.navigate(5, ms(100));

        // the first deadline passes without a change
        assert_eq!(p.poll(ms(350)), None);
        assert_eq!(p.current_page(), 1);
        assert!(p.is_loading());

        assert_eq!(p.poll(ms(400)), Some(PageChange { from: 1, to: 5 }));
        assert!(!p.is_loading());
    }

    #[test]
    fn repeating_pending_target_keeps_original_deadline() {
        let mut p = paginator(10);

        p.navigate(4, epoch());
        assert_eq!(p.navigate(4, ms(200)), NavigateOutcome::Unchanged);

        assert_eq!(p.poll(ms(300)), Some(PageChange { from: 1, to: 4 }));
    }

    #[test]
    fn returning_to_current_page_cancels_pending_change() {
        let mut p = paginator(10);

        p.navigate(4, epoch());
        assert_eq!(p.navigate(1, ms(50)), NavigateOutcome::Cancelled);

        assert!(!p.is_loading());
        assert_eq!(p.poll(ms(1_000)), None);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn out_of_range_targets_are_clamped() {
        let mut p = paginator(5);

        assert!(matches!(
            p.navigate(42, epoch()),
            NavigateOutcome::Scheduled { target: 3, .. }
        ));
        p.poll(ms(300));
        assert!(matches!(
            p.navigate(0, ms(400)),
            NavigateOutcome::Scheduled { target: 1, .. }
        ));
    }

    #[test]
    fn prev_and_next_respect_boundaries() {
        let mut p = paginator(4);

        assert_eq!(p.prev(epoch()), NavigateOutcome::Unchanged);
        assert!(matches!(
            p.next(epoch()),
            NavigateOutcome::Scheduled { target: 2, .. }
        ));
        p.poll(ms(300));
        assert_eq!(p.next(ms(400)), NavigateOutcome::Unchanged);
        assert!(matches!(
            p.prev(ms(400)),
            NavigateOutcome::Scheduled { target: 1, .. }
        ));
    }

    #[test]
    fn quick_next_clicks_step_from_pending_target() {
        let mut p = paginator(10);

        p.next(epoch());
        p.next(ms(50));
        p.next(ms(100));

        assert_eq!(p.pending_target(), Some(4));
        assert_eq!(p.poll(ms(400)), Some(PageChange { from: 1, to: 4 }));
    }

    #[test]
    fn empty_table_never_navigates() {
        let mut p = paginator(0);

        assert_eq!(p.navigate(1, epoch()), NavigateOutcome::Unchanged);
        assert_eq!(p.next(epoch()), NavigateOutcome::Unchanged);
        assert!(p.window().items.is_empty());
        assert!(p.visible_rows().is_empty());
    }

    #[test]
    fn rows_fade_in_after_change() {
        let mut p = paginator(5);
        p.navigate(2, epoch());
        p.poll(ms(300));

        assert!(p.row_opacity(ms(300)).abs() < f32::EPSILON);
        assert!(p.is_animating(ms(450)));
        assert!((p.row_opacity(ms(600)) - 1.0).abs() < f32::EPSILON);
        assert!(!p.is_animating(ms(600)));
    }

    #[test]
    fn remaining_reports_loading_countdown() {
        let mut p = paginator(5);
        assert_eq!(p.remaining(epoch()), None);

        p.navigate(2, epoch());
        assert_eq!(p.remaining(ms(100)), Some(Duration::milliseconds(200)));
    }

    #[test]
    fn init_without_table_is_silent_noop() {
        let document = PageDocument::default();

        assert!(Paginator::init(&document, PaginationConfig::default(), epoch()).is_none());
    }

    #[test]
    fn init_reads_rows_and_controls_from_document() {
        let document = PageDocument::from_json(
            r#"{
                "table": { "columns": ["Product"], "rows": [["a"], ["b"], ["c"]] },
                "loading_indicator": true
            }"#,
        )
        .unwrap();

        let p = Paginator::init(&document, PaginationConfig::default(), epoch()).unwrap();

        assert_eq!(p.total_pages(), 2);
        assert_eq!(p.visible_rows(), [vec!["a".to_string()], vec!["b".to_string()]]);
        assert!(p.controls().has_loading_indicator());
        assert!(p.is_animating(epoch()));
    }
}
