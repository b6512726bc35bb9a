use egui::{Button, CornerRadius, RichText, Ui};
use storefront_business::{ControlSlot, PageItem, PageWindow, PaginationControls};

use crate::state::{PageCommand, State};
use crate::utils::colors::{COLOR_PINK, COLOR_PINK_DARK, COLOR_PINK_LIGHT};

const BUTTON_RADIUS: u8 = 6;
const ELLIPSIS: &str = "•••";

/// Renders `[prev][numbers][next]` for the current page window.
///
/// Clicks are not applied here: they become [`PageCommand`]s flushed at the
/// end of the frame.
pub fn pagination_controls(state: &State, ui: &mut Ui) {
    let Some(paginator) = state.paginator() else {
        return;
    };
    let window = paginator.window();
    let controls = paginator.controls();

    ui.horizontal(|ui| {
        for slot in PaginationControls::ORDER {
            if let Some(command) = render_slot(slot, controls, &window, ui) {
                state.commands.enqueue(command);
            }
        }
    });
}

fn render_slot(
    slot: ControlSlot,
    controls: &PaginationControls,
    window: &PageWindow,
    ui: &mut Ui,
) -> Option<PageCommand> {
    match slot {
        ControlSlot::Prev => step_button(controls.prev_label(), !window.prev_disabled, ui)
            .then_some(PageCommand::PrevPage),
        ControlSlot::Next => step_button(controls.next_label(), !window.next_disabled, ui)
            .then_some(PageCommand::NextPage),
        ControlSlot::Numbers => page_numbers(window, ui),
    }
}

fn step_button(label: &str, enabled: bool, ui: &mut Ui) -> bool {
    let button = Button::new(RichText::new(label).color(COLOR_PINK))
        .corner_radius(CornerRadius::same(BUTTON_RADIUS));
    ui.add_enabled(enabled, button).clicked()
}

fn page_numbers(window: &PageWindow, ui: &mut Ui) -> Option<PageCommand> {
    let mut clicked = None;
    for item in &window.items {
        match *item {
            PageItem::Page { number, active } => {
                let text = if active {
                    RichText::new(number.to_string()).strong().color(COLOR_PINK_DARK)
                } else {
                    RichText::new(number.to_string()).color(COLOR_PINK_DARK)
                };
                let mut button = Button::new(text)
                    .selected(active)
                    .corner_radius(CornerRadius::same(BUTTON_RADIUS));
                if active {
                    button = button.fill(COLOR_PINK_LIGHT);
                }
                if ui.add(button).clicked() {
                    clicked = Some(PageCommand::GoToPage(number));
                }
            }
            PageItem::Ellipsis => {
                ui.label(RichText::new(ELLIPSIS).color(COLOR_PINK_DARK));
            }
        }
    }
    clicked
}
