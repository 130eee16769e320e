use super::style;
use crate::egui_app::ui::EguiApp;
use crate::finetune::ModelChoice;
use eframe::egui::{self, ComboBox, RichText, TextEdit, Ui};

const EMPTY_MODEL_TEXT: &str = "Choose a model";

impl EguiApp {
    pub(super) fn render_sidebar(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let locked = self.controller.is_running();
        ui.add_space(6.0);
        ui.heading(RichText::new("Configuration").color(palette.text_primary));
        ui.add_space(10.0);

        ui.label(RichText::new("Hugging Face token").color(palette.text_primary));
        ui.add_enabled(
            !locked,
            TextEdit::singleline(&mut self.controller.ui.form.token)
                .password(true)
                .hint_text("hf_...")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(10.0);

        ui.label(RichText::new("Foundation model").color(palette.text_primary));
        ui.add_enabled_ui(!locked, |ui| {
            let selected = self.controller.ui.form.model;
            let selected_text = if selected.is_selected() {
                selected.label()
            } else {
                EMPTY_MODEL_TEXT
            };
            ComboBox::from_id_salt("model_choice")
                .selected_text(selected_text)
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for choice in ModelChoice::ALL {
                        let label = if choice.is_selected() {
                            choice.label()
                        } else {
                            "-"
                        };
                        ui.selectable_value(&mut self.controller.ui.form.model, choice, label);
                    }
                });
        });

        let warnings = self.controller.sidebar_warnings();
        if !warnings.is_empty() {
            ui.add_space(12.0);
            let color = style::status_badge_color(style::StatusTone::Warning);
            for warning in warnings {
                ui.label(RichText::new(warning).color(color));
            }
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("Nothing entered here is saved.")
                    .small()
                    .color(palette.text_muted),
            );
        });
    }
}
