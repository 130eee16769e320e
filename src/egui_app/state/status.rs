use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
    /// Tone that produced the current badge.
    pub tone: StatusTone,
}

impl StatusBarState {
    /// Default status shown before anything has happened.
    pub fn idle() -> Self {
        let mut state = Self {
            text: String::new(),
            badge_label: String::new(),
            badge_color: Color32::TRANSPARENT,
            tone: StatusTone::Idle,
        };
        state.apply("Configure a model and upload a dataset to begin", StatusTone::Idle);
        state
    }

    pub fn apply(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.text = text.into();
        self.badge_label = style::status_badge_label(tone).to_string();
        self.badge_color = style::status_badge_color(tone);
        self.tone = tone;
    }
}
