//! Maintains session state and bridges the mock fine-tuning core to the egui UI.

mod chat;
mod dataset;
mod run;

#[cfg(test)]
mod test_support;

use std::time::Instant;

use uuid::Uuid;

use crate::config::{self, AppSettings, ConfigError};
use crate::egui_app::state::*;
use crate::egui_app::ui::style::StatusTone;
use crate::finetune::{Clock, MockTrainingRunner, SystemClock};

/// Run currently being paced by the frame loop.
struct ActiveRun {
    runner: MockTrainingRunner,
    next_step_at: Instant,
    /// `run` span carrying the id; entered while the run's events are applied.
    span: tracing::Span,
}

/// Owns the session state consumed by the renderer.
pub struct EguiController {
    pub ui: UiState,
    settings: AppSettings,
    clock: Box<dyn Clock>,
    active_run: Option<ActiveRun>,
}

impl EguiController {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        let mut controller = Self {
            ui: UiState::default(),
            settings: AppSettings::default(),
            clock,
            active_run: None,
        };
        controller.apply_settings(AppSettings::default());
        controller
    }

    pub fn with_system_clock() -> Self {
        Self::new(Box::new(SystemClock))
    }

    /// Load `config.toml` and seed the form from it.
    pub fn load_configuration(&mut self) -> Result<(), ConfigError> {
        let settings = config::load_or_default()?;
        self.apply_settings(settings);
        Ok(())
    }

    /// Replace the active settings and reset the form defaults.
    pub fn apply_settings(&mut self, settings: AppSettings) {
        self.ui.form.model = settings.initial_model();
        self.ui.form.hyperparameters = settings.initial_hyperparameters();
        self.settings = settings;
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Warnings shown in the sidebar while inputs are incomplete.
    pub fn sidebar_warnings(&self) -> Vec<&'static str> {
        self.ui.form.warnings()
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.apply(text, tone);
    }
}
