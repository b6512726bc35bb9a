use egui::{RichText, Ui};

use crate::state::State;

use super::{catalog_table, loading_indicator, pagination_controls};

/// The page body: static sections, then the paginated catalog.
pub fn storefront_page(state: &State, ui: &mut Ui) {
    let document = state.document();

    if let Some(title) = &document.title {
        ui.heading(title);
    }
    for section in &document.sections {
        ui.add_space(8.0);
        ui.label(RichText::new(&section.heading).strong().size(18.0));
        if !section.body.is_empty() {
            ui.label(&section.body);
        }
    }

    if state.paginator().is_none() {
        return;
    }

    ui.add_space(12.0);
    loading_indicator(state, ui);
    catalog_table(state, ui);
    ui.add_space(8.0);
    pagination_controls(state, ui);
}
