use ustr::Ustr;

use crate::PaginationMarkup;

/// Sibling positions of the controls after the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSlot {
    Prev,
    Numbers,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsOrigin {
    /// Reused from the page markup.
    Existing,
    /// Built because the page lacked at least one control.
    Constructed,
}

/// The prev / numbers / next controls the paginator drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    prev_label: Ustr,
    next_label: Ustr,
    origin: ControlsOrigin,
    loading_indicator: bool,
}

impl PaginationControls {
    pub const DEFAULT_PREV_LABEL: &'static str = "‹ Prev";
    pub const DEFAULT_NEXT_LABEL: &'static str = "Next ›";
    /// Sibling order of the controls, reused or constructed alike.
    pub const ORDER: [ControlSlot; 3] = [ControlSlot::Prev, ControlSlot::Numbers, ControlSlot::Next];

    /// Reuses the page's controls when all three exist, otherwise builds a full set.
    pub fn resolve(markup: Option<&PaginationMarkup>, loading_indicator: bool) -> Self {
        match markup {
            Some(PaginationMarkup {
                prev: Some(prev),
                next: Some(next),
                numbers: true,
            }) => Self {
                prev_label: Ustr::from(prev),
                next_label: Ustr::from(next),
                origin: ControlsOrigin::Existing,
                loading_indicator,
            },
            _ => Self {
                loading_indicator,
                ..Self::constructed()
            },
        }
    }

    pub fn constructed() -> Self {
        Self {
            prev_label: Ustr::from(Self::DEFAULT_PREV_LABEL),
            next_label: Ustr::from(Self::DEFAULT_NEXT_LABEL),
            origin: ControlsOrigin::Constructed,
            loading_indicator: false,
        }
    }

    pub fn prev_label(&self) -> &str {
        self.prev_label.as_str()
    }

    pub fn next_label(&self) -> &str {
        self.next_label.as_str()
    }

    pub fn origin(&self) -> ControlsOrigin {
        self.origin
    }

    pub fn has_loading_indicator(&self) -> bool {
        self.loading_indicator
    }
}

impl Default for PaginationControls {
    fn default() -> Self {
        Self::constructed()
    }
}
