use super::style;
use crate::egui_app::ui::EguiApp;
use crate::finetune::dataset::ACCEPTED_EXTENSIONS;
use crate::finetune::hyperparams::{
    BATCH_SIZE_RANGE, BATCH_SIZE_STEP, EPOCHS_RANGE, LEARNING_RATE_RANGE, LEARNING_RATE_STEP,
    snap_batch_size, snap_learning_rate,
};
use eframe::egui::{self, RichText, Slider, Ui};

const OVERVIEW_TEXT: &str = "Fine-tune a foundation model on your own validation essays. \
Upload a dataset, pick the hyperparameters, and start a run to see progress, \
generated predictions, and evaluation metrics.";

impl EguiApp {
    pub(super) fn render_overview_card(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        style::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Overview").strong().color(palette.text_primary));
            ui.add_space(4.0);
            ui.label(RichText::new(OVERVIEW_TEXT).color(palette.text_muted));
        });
    }

    pub(super) fn render_upload_card(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let locked = self.controller.is_running();
        style::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("Validation dataset")
                    .strong()
                    .color(palette.text_primary),
            );
            ui.label(
                RichText::new(format!(
                    "Accepted: {}. Drop a file anywhere in the window or browse.",
                    ACCEPTED_EXTENSIONS.join(", ")
                ))
                .color(palette.text_muted),
            );
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!locked, egui::Button::new("Browse..."))
                    .clicked()
                {
                    self.controller.pick_dataset_via_dialog();
                }
                let selected = self
                    .controller
                    .ui
                    .form
                    .dataset
                    .as_ref()
                    .map(|dataset| {
                        format!(
                            "{} ({} bytes)",
                            dataset.file_name(),
                            dataset.size_bytes()
                        )
                    });
                match selected {
                    Some(label) => {
                        ui.label(RichText::new(label).color(palette.accent_mint));
                        if ui.add_enabled(!locked, egui::Button::new("Remove")).clicked() {
                            self.controller.clear_dataset();
                        }
                    }
                    None => {
                        ui.label(RichText::new("No file selected").color(palette.text_muted));
                    }
                }
            });
        });
    }

    pub(super) fn render_hyperparameter_card(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let locked = self.controller.is_running();
        style::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("Hyperparameters")
                    .strong()
                    .color(palette.text_primary),
            );
            ui.add_space(6.0);
            let params = &mut self.controller.ui.form.hyperparameters;
            ui.add_enabled_ui(!locked, |ui| {
                ui.add(
                    Slider::new(&mut params.batch_size, BATCH_SIZE_RANGE)
                        .step_by(f64::from(BATCH_SIZE_STEP))
                        .text("Batch size"),
                );
                ui.add(
                    Slider::new(&mut params.learning_rate, LEARNING_RATE_RANGE)
                        .step_by(LEARNING_RATE_STEP)
                        .fixed_decimals(4)
                        .text("Learning rate"),
                );
                ui.add(Slider::new(&mut params.epochs, EPOCHS_RANGE).text("Epochs"));
            });
            params.batch_size = snap_batch_size(params.batch_size);
            params.learning_rate = snap_learning_rate(params.learning_rate);
        });
    }

    pub(super) fn render_launch_row(&mut self, ui: &mut Ui) {
        let running = self.controller.is_running();
        ui.horizontal(|ui| {
            let label = if running {
                "Fine-tuning..."
            } else {
                "Start Fine-Tuning"
            };
            let button = egui::Button::new(RichText::new(label).strong())
                .min_size(egui::vec2(180.0, 32.0));
            if ui.add_enabled(!running, button).clicked() {
                self.controller.start_fine_tuning();
            }
            if let Some(error) = self.controller.ui.launch_error.as_deref() {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(error).color(style::status_badge_color(style::StatusTone::Error)),
                );
            }
        });
    }
}
