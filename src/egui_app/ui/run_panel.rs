use super::style;
use crate::egui_app::ui::EguiApp;
use eframe::egui::{self, ProgressBar, RichText, Ui};

impl EguiApp {
    /// Progress bar, status line and banners of the current (or last) run.
    pub(super) fn render_run_card(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let run = &self.controller.ui.run;
        style::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            for notice in &run.notices {
                ui.label(RichText::new(&notice.text).color(style::notice_color(notice.tone)));
            }
            ui.add_space(6.0);
            let bar = ProgressBar::new(run.fraction())
                .desired_width(ui.available_width())
                .text(format!("{}%", run.percent))
                .animate(self.controller.is_running());
            ui.add(bar);
            if !run.status_text.is_empty() {
                ui.label(RichText::new(&run.status_text).color(palette.text_muted));
            }
        });
    }

    pub(super) fn render_results_card(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let Some(results) = self.controller.ui.results.as_ref() else {
            return;
        };
        style::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("Evaluation metrics")
                    .strong()
                    .color(palette.text_primary),
            );
            ui.add_space(6.0);
            let tiles = results.metrics.tiles();
            ui.columns(tiles.len(), |columns| {
                for (column, tile) in columns.iter_mut().zip(tiles.iter()) {
                    column.vertical_centered(|ui| {
                        ui.label(RichText::new(tile.label).color(palette.text_muted));
                        ui.label(
                            RichText::new(&tile.value)
                                .size(22.0)
                                .strong()
                                .color(palette.accent_mint),
                        );
                    });
                }
            });
            ui.add_space(8.0);
            for line in results.metrics.score_lines() {
                ui.label(format!("{}: {}", line.label, line.value));
            }
            if results.used_fallback {
                ui.label(
                    RichText::new("Evaluated on the built-in sample records.")
                        .small()
                        .color(palette.text_muted),
                );
            }
            ui.add_space(6.0);
            egui::CollapsingHeader::new(format!(
                "Generated predictions ({})",
                results.record_count()
            ))
            .id_salt("predictions")
            .show(ui, |ui| {
                for (index, prediction) in results.predictions.iter().enumerate() {
                    ui.label(
                        RichText::new(format!("{}. {}", index + 1, prediction.text))
                            .color(palette.text_primary),
                    );
                }
            });
        });
    }
}
