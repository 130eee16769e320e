//! egui renderer for the fine-tuning dashboard.

mod cards;
mod chat_panel;
mod layout;
mod run_panel;
mod sidebar;
pub mod style;

use crate::egui_app::controller::EguiController;
use eframe::egui;

/// Minimum window size that keeps the sidebar and cards readable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 640.0);

/// Renders the dashboard using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app around an existing controller.
    pub fn new(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    /// Create the app with the system clock, seeding the form from `config.toml`.
    ///
    /// A broken config file is reported in the status bar and defaults are used.
    pub fn with_configuration() -> Self {
        let mut controller = EguiController::with_system_clock();
        if let Err(err) = controller.load_configuration() {
            tracing::warn!("Using default settings: {err}");
            controller.set_status(
                format!("Using default settings: {err}"),
                style::StatusTone::Warning,
            );
        }
        Self::new(controller)
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.consume_dropped_files(ctx);
        if let Some(wait) = self.controller.tick() {
            ctx.request_repaint_after(wait);
        }
        self.render_panels(ctx);
    }
}
