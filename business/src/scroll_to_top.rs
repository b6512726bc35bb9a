//! Scroll-to-top button logic.
//!
//! The button is hidden until the page is scrolled past the threshold. A click
//! starts an eased scroll from the current offset back to zero; the UI asks for
//! the offset to apply on every frame until the animation ends.

use chrono::{DateTime, Duration, Utc};
use log::debug;
use storefront_states::State;

use crate::{PageDocument, ScrollConfig};

/// Eased scroll from `from` to offset zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    started_at: DateTime<Utc>,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, started_at: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            from,
            started_at,
            duration,
        }
    }

    fn progress(&self, now: DateTime<Utc>) -> f32 {
        let total = self.duration.num_milliseconds();
        if total <= 0 {
            return 1.0;
        }
        let elapsed = (now - self.started_at).num_milliseconds().clamp(0, total);
        elapsed as f32 / total as f32
    }

    /// Offset to show at `now`.
    pub fn offset_at(&self, now: DateTime<Utc>) -> f32 {
        self.from * (1.0 - ease_in_out_cubic(self.progress(now)))
    }

    pub fn is_finished(&self, now: DateTime<Utc>) -> bool {
        now - self.started_at >= self.duration
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollToTop {
    config: ScrollConfig,
    offset: f32,
    animation: Option<ScrollAnimation>,
}

impl State for ScrollToTop {
    const TYPE: &'static str = "scroll_to_top";
}

impl ScrollToTop {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            offset: 0.0,
            animation: None,
        }
    }

    /// `None` when the page has no scroll-to-top button.
    pub fn init(document: &PageDocument, config: ScrollConfig) -> Option<Self> {
        if !document.scroll_to_top {
            debug!("No scroll-to-top button in page");
            return None;
        }
        Some(Self::new(config))
    }

    /// Button visibility for a given vertical offset.
    pub fn is_visible_at(threshold: f32, offset: f32) -> bool {
        offset > threshold
    }

    pub fn is_visible(&self) -> bool {
        Self::is_visible_at(self.config.threshold, self.offset)
    }

    /// Records the offset the scroll area reported this frame.
    pub fn observe(&mut self, offset: f32) {
        self.offset = offset.max(0.0);
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_scrolling(&self) -> bool {
        self.animation.is_some()
    }

    /// Starts a smooth scroll from the last observed offset.
    pub fn start(&mut self, now: DateTime<Utc>) {
        if self.offset <= 0.0 {
            return;
        }
        debug!("Scrolling to top from offset {}", self.offset);
        self.animation = Some(ScrollAnimation::new(self.offset, now, self.config.duration));
    }

    /// Offset the scroll area should take this frame, if an animation runs.
    ///
    /// The final frame yields exactly zero and ends the animation.
    pub fn animate(&mut self, now: DateTime<Utc>) -> Option<f32> {
        let animation = self.animation?;
        if animation.is_finished(now) {
            self.animation = None;
            self.offset = 0.0;
            return Some(0.0);
        }
        let offset = animation.offset_at(now);
        self.offset = offset;
        Some(offset)
    }
}
