use egui::{Spinner, Ui};

use crate::utils::colors::COLOR_PINK;

pub const LOADING_LABEL: &str = "Loading…";

/// Shown while a page change is pending, if the page declares an indicator.
pub fn loading_indicator(state: &crate::state::State, ui: &mut Ui) {
    let Some(paginator) = state.paginator() else {
        return;
    };
    if !paginator.is_loading() || !paginator.controls().has_loading_indicator() {
        return;
    }

    ui.horizontal(|ui| {
        ui.add(Spinner::new().color(COLOR_PINK));
        ui.label(LOADING_LABEL);
    });
}
