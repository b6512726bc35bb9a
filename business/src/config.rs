use std::env::vars;

use chrono::Duration;
use log::info;
use serde::Deserialize;
use storefront_states::State;

/// Pagination knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Rows shown per page.
    pub items_per_page: usize,
    /// Numbered buttons in the page window, boundary shortcuts excluded.
    pub max_visible_pages: usize,
    /// How long the loading state lasts before a page change is applied.
    pub loading_delay: Duration,
    /// Fade-in of rows that became visible.
    pub fade_in: Duration,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            items_per_page: 2,
            max_visible_pages: 5,
            loading_delay: Duration::milliseconds(300),
            fade_in: Duration::milliseconds(300),
        }
    }
}

/// Scroll-to-top knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// The button shows once the vertical offset is strictly above this.
    pub threshold: f32,
    pub duration: Duration,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold: 300.0,
            duration: Duration::milliseconds(400),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StorefrontConfig {
    pub pagination: PaginationConfig,
    pub scroll: ScrollConfig,
}

impl State for StorefrontConfig {
    const TYPE: &'static str = "storefront_config";
}

// Every field is optional: unset variables fall back to the defaults above.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    storefront_page_size: Option<usize>,
    storefront_max_visible_pages: Option<usize>,
    storefront_loading_delay_ms: Option<u32>,
    storefront_fade_in_ms: Option<u32>,
    storefront_scroll_threshold: Option<f32>,
    storefront_scroll_duration_ms: Option<u32>,
}

impl StorefrontConfig {
    /// Reads `STOREFRONT_*` environment variables over the defaults.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading storefront configuration from environment variables");

        let raw: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            storefront_page_size,
            storefront_max_visible_pages,
            storefront_loading_delay_ms,
            storefront_fade_in_ms,
            storefront_scroll_threshold,
            storefront_scroll_duration_ms,
        } = raw;

        let defaults = Self::default();

        let items_per_page = match storefront_page_size {
            Some(0) => anyhow::bail!("STOREFRONT_PAGE_SIZE must be at least 1"),
            Some(size) => size,
            None => defaults.pagination.items_per_page,
        };

        let max_visible_pages = match storefront_max_visible_pages {
            Some(0) => anyhow::bail!("STOREFRONT_MAX_VISIBLE_PAGES must be at least 1"),
            Some(count) => count,
            None => defaults.pagination.max_visible_pages,
        };

        let threshold = match storefront_scroll_threshold {
            Some(value) if !value.is_finite() || value < 0.0 => {
                anyhow::bail!("STOREFRONT_SCROLL_THRESHOLD must be a non-negative number")
            }
            Some(value) => value,
            None => defaults.scroll.threshold,
        };

        let millis = |value: Option<u32>, fallback: Duration| {
            value.map_or(fallback, |ms| Duration::milliseconds(i64::from(ms)))
        };

        let config = Self {
            pagination: PaginationConfig {
                items_per_page,
                max_visible_pages,
                loading_delay: millis(
                    storefront_loading_delay_ms,
                    defaults.pagination.loading_delay,
                ),
                fade_in: millis(storefront_fade_in_ms, defaults.pagination.fade_in),
            },
            scroll: ScrollConfig {
                threshold,
                duration: millis(storefront_scroll_duration_ms, defaults.scroll.duration),
            },
        };
        info!(
            "Pagination: {} rows per page, {} visible pages",
            config.pagination.items_per_page, config.pagination.max_visible_pages
        );
        Ok(config)
    }
}
