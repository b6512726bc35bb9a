use chrono::Utc;
use egui::{Align2, Area, Id, ScrollArea};
use log::debug;

use crate::{state::State, widgets};

const SCROLL_BUTTON_MARGIN: f32 = 24.0;

pub struct StorefrontApp {
    state: State,
    /// Whether each frame moves `Time` to the wall clock. Tests advance it by hand.
    wall_clock: bool,
}

impl StorefrontApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            wall_clock: true,
        }
    }

    /// An app whose clock only moves through [`State::advance_time`].
    pub fn with_virtual_time(state: State) -> Self {
        Self {
            state,
            wall_clock: false,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    fn render(&mut self, ctx: &egui::Context) {
        if let Some(change) = self.state.sync() {
            debug!("Showing page {} (was {})", change.to, change.from);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Storefront");
                if let Some(paginator) = self.state.paginator() {
                    ui.separator();
                    ui.weak(format!(
                        "{} products · page {} of {}",
                        paginator.rows().len(),
                        paginator.current_page(),
                        paginator.total_pages()
                    ));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut area = ScrollArea::vertical()
                .id_salt("page_scroll")
                .auto_shrink(false);
            if let Some(offset) = self.state.scroll_target() {
                area = area.vertical_scroll_offset(offset);
            }
            let output = area.show(ui, |ui| widgets::storefront_page(&self.state, ui));
            self.state.observe_scroll(output.state.offset.y);
        });

        Area::new(Id::new("scroll_to_top"))
            .anchor(
                Align2::RIGHT_BOTTOM,
                [-SCROLL_BUTTON_MARGIN, -SCROLL_BUTTON_MARGIN],
            )
            .show(ctx, |ui| widgets::scroll_to_top(&self.state, ui));

        self.state.flush_commands();

        match self.state.repaint_after() {
            Some(delay) if delay.is_zero() => ctx.request_repaint(),
            Some(delay) => ctx.request_repaint_after(delay),
            None => {}
        }
    }
}

impl eframe::App for StorefrontApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.wall_clock {
            self.state.set_time(Utc::now());
        }
        self.render(ctx);
    }
}
