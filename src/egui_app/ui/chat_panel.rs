use super::style;
use crate::egui_app::ui::EguiApp;
use eframe::egui::{self, RichText, TextEdit, Ui};

impl EguiApp {
    pub(super) fn render_chat_card(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        style::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("Chat with the model")
                    .strong()
                    .color(palette.text_primary),
            );
            ui.add_space(6.0);
            let mut submit = false;
            ui.horizontal(|ui| {
                let response = ui.add(
                    TextEdit::singleline(&mut self.controller.ui.chat.input)
                        .hint_text("Ask a question")
                        .desired_width(ui.available_width() - 80.0),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                if ui.button("Send").clicked() {
                    submit = true;
                }
            });
            if submit {
                self.controller.send_chat();
            }
            if let Some(reply) = self.controller.ui.chat.reply.as_deref() {
                ui.add_space(4.0);
                ui.label(RichText::new(reply).color(palette.accent_ice));
            }
        });
    }
}
