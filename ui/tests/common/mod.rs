use chrono::Duration;
use egui_kittest::Harness;
use storefront_business::PageDocument;
use storefront_ui::StorefrontApp;
use storefront_ui::state::{STOREFRONT_DOCUMENT, State};

/// Tall enough to show the whole first page without scrolling.
const WIDTH: f32 = 1024.0;
const HEIGHT: f32 = 1200.0;

pub struct TestCtx<'a, T = StorefrontApp> {
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }
}

impl<'a> TestCtx<'a, StorefrontApp> {
    /// The app over the embedded page, with the clock frozen at the Unix epoch.
    pub fn new_app() -> Self {
        Self::new_app_with_document(embedded_document())
    }

    #[allow(unused)]
    pub fn new_app_with_document(document: PageDocument) -> Self {
        let app = StorefrontApp::with_virtual_time(State::test(document));
        let harness = Harness::builder()
            .with_size(egui::vec2(WIDTH, HEIGHT))
            .build_eframe(|_| app);
        Self { harness }
    }

    pub fn state(&self) -> &State {
        self.harness.state().state()
    }

    pub fn state_mut(&mut self) -> &mut State {
        self.harness.state_mut().state_mut()
    }

    /// Moves the virtual clock and renders a frame at the new time.
    pub fn advance(&mut self, millis: i64) {
        self.state_mut().advance_time(Duration::milliseconds(millis));
        self.harness.step();
    }
}

pub fn embedded_document() -> PageDocument {
    PageDocument::from_json(STOREFRONT_DOCUMENT).expect("embedded page should parse")
}
