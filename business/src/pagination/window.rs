/// One entry in the numbers container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: usize, active: bool },
    Ellipsis,
}

impl PageItem {
    pub fn page(number: usize, current_page: usize) -> Self {
        Self::Page {
            number,
            active: number == current_page,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Page { active: true, .. })
    }
}

/// What the pagination controls show for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// First page of the contiguous window.
    pub start: usize,
    /// Last page of the contiguous window; below `start` when there are no pages.
    pub end: usize,
    /// Numbers container content, boundary shortcuts and ellipses included.
    pub items: Vec<PageItem>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl PageWindow {
    /// Pages inside the contiguous window.
    pub fn window_len(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }

    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().filter_map(|item| match item {
            PageItem::Page { number, .. } => Some(*number),
            PageItem::Ellipsis => None,
        })
    }

    pub fn active_page(&self) -> Option<usize> {
        self.items.iter().find_map(|item| match item {
            PageItem::Page {
                number,
                active: true,
            } => Some(*number),
            _ => None,
        })
    }

    pub fn ellipsis_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, PageItem::Ellipsis))
            .count()
    }
}

/// Lays out the numbered buttons around `current_page`.
///
/// The window is centred on the current page and slid back from the end so it
/// stays `max_visible` wide whenever there are enough pages. Page 1 and the last
/// page are always reachable, with an ellipsis where pages are skipped.
pub fn page_window(current_page: usize, total_pages: usize, max_visible: usize) -> PageWindow {
    let max_visible = max_visible.max(1);

    let mut start = current_page.saturating_sub(max_visible / 2).max(1);
    let end = total_pages.min(start.saturating_add(max_visible - 1));
    if (end + 1).saturating_sub(start) < max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }

    let mut items = Vec::with_capacity(max_visible.min(total_pages) + 4);

    if start > 1 {
        items.push(PageItem::page(1, current_page));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    items.extend((start..=end).map(|number| PageItem::page(number, current_page)));

    if end < total_pages {
        if end + 1 < total_pages {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::page(total_pages, current_page));
    }

    PageWindow {
        start,
        end,
        items,
        prev_disabled: current_page <= 1,
        next_disabled: current_page >= total_pages,
    }
}
