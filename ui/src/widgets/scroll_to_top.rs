use egui::{Button, Color32, CornerRadius, RichText, Ui};

use crate::state::{PageCommand, State};
use crate::utils::colors::COLOR_PINK;

pub const SCROLL_TO_TOP_LABEL: &str = "↑ Top";

/// The floating button, shown once the page is scrolled past the threshold.
pub fn scroll_to_top(state: &State, ui: &mut Ui) {
    let Some(scroll) = state.scroll() else {
        return;
    };
    if !scroll.is_visible() {
        return;
    }

    let text = RichText::new(SCROLL_TO_TOP_LABEL)
        .strong()
        .color(Color32::WHITE);
    let button = Button::new(text)
        .fill(COLOR_PINK)
        .corner_radius(CornerRadius::same(u8::MAX));
    if ui.add(button).on_hover_text("Back to top").clicked() {
        state.commands.enqueue(PageCommand::ScrollToTop);
    }
}
