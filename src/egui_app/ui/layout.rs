use crate::egui_app::ui::EguiApp;
use crate::egui_app::ui::style;
use eframe::egui;
use eframe::egui::{RichText, TopBottomPanel};

impl EguiApp {
    pub(super) fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    /// Take the first file dropped onto the window as the dataset upload.
    pub(super) fn consume_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped_files.into_iter().next() else {
            return;
        };
        if self.controller.is_running() {
            self.controller.set_status(
                "Wait for the current run to finish before replacing the dataset",
                style::StatusTone::Warning,
            );
            return;
        }
        let name = if file.name.is_empty() {
            file.path
                .as_deref()
                .and_then(|path| path.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            file.name.clone()
        };
        if let Err(err) =
            self.controller
                .accept_dropped_file(&name, file.path.as_deref(), file.bytes.as_deref())
        {
            self.controller
                .set_status(err.to_string(), style::StatusTone::Error);
        }
    }

    pub(super) fn render_panels(&mut self, ctx: &egui::Context) {
        self.render_status(ctx);
        egui::SidePanel::left("configuration")
            .resizable(true)
            .default_width(280.0)
            .min_width(240.0)
            .max_width(420.0)
            .show(ctx, |ui| self.render_sidebar(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| self.render_dashboard(ui));
        });
    }

    fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.heading(RichText::new("Fine-Tuning Pipeline Dashboard").color(palette.text_primary));
        ui.add_space(8.0);
        self.render_overview_card(ui);
        ui.add_space(10.0);
        self.render_upload_card(ui);
        ui.add_space(10.0);
        self.render_hyperparameter_card(ui);
        ui.add_space(10.0);
        self.render_launch_row(ui);
        if self.controller.ui.run.visible {
            ui.add_space(10.0);
            self.render_run_card(ui);
        }
        if self.controller.ui.results.is_some() {
            ui.add_space(10.0);
            self.render_results_card(ui);
        }
        ui.add_space(10.0);
        self.render_chat_card(ui);
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        TopBottomPanel::bottom("status_bar")
            .frame(egui::Frame::new().fill(style::palette().bg_primary))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                let palette = style::palette();
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 18.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), 5.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).color(status.badge_color));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                    const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_space(8.0);
                        ui.label(RichText::new(APP_VERSION).color(palette.text_muted));
                    });
                });
            });
    }
}
