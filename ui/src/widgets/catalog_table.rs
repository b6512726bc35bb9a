//! The catalog table, showing only the rows of the current page.

use egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};
use storefront_business::TableMarkup;

use crate::state::State;

pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;
const MIN_COLUMN_WIDTH: f32 = 96.0;

/// Renders the visible rows.
///
/// The whole table is dimmed while a page change is loading, and freshly shown
/// rows fade in.
pub fn catalog_table(state: &State, ui: &mut Ui) {
    let Some(paginator) = state.paginator() else {
        return;
    };
    let columns = state.columns();
    let rows = paginator.visible_rows();
    let row_opacity = paginator.row_opacity(state.now());

    let column_count = state
        .document()
        .table
        .as_ref()
        .map_or(0, TableMarkup::column_count)
        .max(1);

    ui.scope(|ui| {
        ui.multiply_opacity(paginator.table_opacity());

        TableBuilder::new(ui)
            .id_salt("catalog_table")
            .striped(true)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(Align::Center))
            .columns(Column::auto().at_least(MIN_COLUMN_WIDTH), column_count - 1)
            .column(Column::remainder().at_least(MIN_COLUMN_WIDTH))
            .header(HEADER_HEIGHT, |mut header| {
                for index in 0..column_count {
                    header.col(|ui| {
                        ui.strong(columns.get(index).map_or("", String::as_str));
                    });
                }
            })
            .body(|mut body| {
                for row in rows {
                    body.row(ROW_HEIGHT, |mut table_row| {
                        for index in 0..column_count {
                            table_row.col(|ui| {
                                ui.multiply_opacity(row_opacity);
                                ui.label(row.get(index).map_or("", String::as_str));
                            });
                        }
                    });
                }
            });
    });
}
