use chrono::{DateTime, Duration, Utc};
use log::{debug, error, warn};
use storefront_business::{PageChange, PageDocument, Paginator, ScrollToTop, StorefrontConfig};
use storefront_states::{CommandQueue, StateCtx, Time};

/// The page shipped with the app.
pub const STOREFRONT_DOCUMENT: &str = include_str!("../assets/storefront.json");

/// The paginator over the catalog table's text cells.
pub type CatalogPaginator = Paginator<Vec<String>>;

/// User intents recorded by widgets during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCommand {
    GoToPage(usize),
    PrevPage,
    NextPage,
    ScrollToTop,
}

/// The main application state.
pub struct State {
    /// Business states: `Time`, `StorefrontConfig`, and the paginator and
    /// scroll-to-top states when the page has them.
    pub ctx: StateCtx,
    pub commands: CommandQueue<PageCommand>,
    document: PageDocument,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(StorefrontConfig::default())
    }
}

impl State {
    /// The embedded page, starting from the wall clock.
    pub fn with_config(config: StorefrontConfig) -> Self {
        let document = PageDocument::from_json(STOREFRONT_DOCUMENT).unwrap_or_else(|err| {
            error!("Embedded storefront page is invalid: {err}");
            PageDocument::default()
        });
        Self::new(document, config, Utc::now())
    }

    /// Attaches the enhancements the page supports.
    pub fn new(document: PageDocument, config: StorefrontConfig, now: DateTime<Utc>) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::new(now));
        ctx.add_state(config);
        if let Some(paginator) = CatalogPaginator::init(&document, config.pagination, now) {
            ctx.add_state(paginator);
        }
        if let Some(scroll) = ScrollToTop::init(&document, config.scroll) {
            ctx.add_state(scroll);
        }

        Self {
            ctx,
            commands: CommandQueue::new(),
            document,
        }
    }

    /// Default configuration with the clock frozen at the Unix epoch.
    pub fn test(document: PageDocument) -> Self {
        Self::new(
            document,
            StorefrontConfig::default(),
            DateTime::<Utc>::UNIX_EPOCH,
        )
    }

    pub fn document(&self) -> &PageDocument {
        &self.document
    }

    pub fn columns(&self) -> &[String] {
        self.document
            .table
            .as_ref()
            .map(|table| table.columns.as_slice())
            .unwrap_or_default()
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.ctx
            .state::<Time>()
            .map_or_else(|_| Utc::now(), Time::now)
    }

    pub fn set_time(&mut self, now: DateTime<Utc>) {
        if let Err(err) = self.ctx.update::<Time>(|time| *time.as_mut() = now) {
            warn!("Clock not set: {err}");
        }
    }

    pub fn advance_time(&mut self, by: Duration) {
        if let Err(err) = self.ctx.update::<Time>(|time| time.advance(by)) {
            warn!("Clock not advanced: {err}");
        }
    }

    pub fn paginator(&self) -> Option<&CatalogPaginator> {
        self.ctx.get::<CatalogPaginator>()
    }

    pub fn scroll(&self) -> Option<&ScrollToTop> {
        self.ctx.get::<ScrollToTop>()
    }

    /// Applies a page change whose loading delay has elapsed.
    pub fn sync(&mut self) -> Option<PageChange> {
        let now = self.now();
        self.ctx.get_mut::<CatalogPaginator>()?.poll(now)
    }

    /// Applies the commands widgets enqueued this frame.
    pub fn flush_commands(&mut self) {
        let now = self.now();
        for command in self.commands.drain() {
            debug!("Apply {command:?}");
            match command {
                PageCommand::GoToPage(page) => {
                    if let Some(paginator) = self.ctx.get_mut::<CatalogPaginator>() {
                        paginator.navigate(page, now);
                    }
                }
                PageCommand::PrevPage => {
                    if let Some(paginator) = self.ctx.get_mut::<CatalogPaginator>() {
                        paginator.prev(now);
                    }
                }
                PageCommand::NextPage => {
                    if let Some(paginator) = self.ctx.get_mut::<CatalogPaginator>() {
                        paginator.next(now);
                    }
                }
                PageCommand::ScrollToTop => {
                    if let Some(scroll) = self.ctx.get_mut::<ScrollToTop>() {
                        scroll.start(now);
                    }
                }
            }
        }
    }

    /// Offset the page scroll area must take this frame, if a scroll is animating.
    pub fn scroll_target(&mut self) -> Option<f32> {
        let now = self.now();
        self.ctx.get_mut::<ScrollToTop>()?.animate(now)
    }

    /// Records the offset the page scroll area ended the frame at.
    pub fn observe_scroll(&mut self, offset: f32) {
        if let Some(scroll) = self.ctx.get_mut::<ScrollToTop>() {
            scroll.observe(offset);
        }
    }

    /// When the next frame is needed for pending work.
    pub fn repaint_after(&self) -> Option<std::time::Duration> {
        let now = self.now();
        let animating = self.paginator().is_some_and(|p| p.is_animating(now))
            || self.scroll().is_some_and(ScrollToTop::is_scrolling);
        if animating {
            return Some(std::time::Duration::ZERO);
        }
        self.paginator()
            .and_then(|p| p.remaining(now))
            .and_then(|remaining| remaining.to_std().ok())
    }
}
