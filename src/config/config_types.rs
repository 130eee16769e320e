use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use super::config_defaults::{
    clamp_time_unit_ms, default_batch_size, default_epochs, default_learning_rate,
    default_time_unit_ms,
};
use crate::finetune::hyperparams::{Hyperparameters, ModelChoice};

/// Settings read from `config.toml`.
///
/// Config keys (TOML): `timing`, `defaults`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub timing: TimingSettings,
    #[serde(default)]
    pub defaults: FormDefaults,
}

impl AppSettings {
    pub(super) fn normalized(mut self) -> Self {
        self.timing.time_unit_ms = clamp_time_unit_ms(self.timing.time_unit_ms);
        let params = self.initial_hyperparameters();
        self.defaults.batch_size = params.batch_size;
        self.defaults.learning_rate = params.learning_rate;
        self.defaults.epochs = params.epochs;
        self
    }

    /// Length of one simulated time unit.
    pub fn time_unit(&self) -> Duration {
        Duration::from_millis(self.timing.time_unit_ms)
    }

    pub fn initial_model(&self) -> ModelChoice {
        self.defaults
            .model
            .as_deref()
            .and_then(ModelChoice::from_label)
            .unwrap_or_default()
    }

    pub fn initial_hyperparameters(&self) -> Hyperparameters {
        Hyperparameters {
            batch_size: self.defaults.batch_size,
            learning_rate: self.defaults.learning_rate,
            epochs: self.defaults.epochs,
        }
        .normalized()
    }
}

/// Pacing of the simulated run.
///
/// Config keys: `time_unit_ms`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimingSettings {
    /// Milliseconds per time unit (checkpoint wait = 1 unit).
    #[serde(default = "default_time_unit_ms")]
    pub time_unit_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            time_unit_ms: default_time_unit_ms(),
        }
    }
}

/// Initial values for the dashboard form.
///
/// Config keys: `model`, `batch_size`, `learning_rate`, `epochs`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormDefaults {
    /// Model label as shown in the sidebar; unknown labels select nothing.
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_epochs")]
    pub epochs: u32,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            model: None,
            batch_size: default_batch_size(),
            learning_rate: default_learning_rate(),
            epochs: default_epochs(),
        }
    }
}

/// Errors raised while locating or reading the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No suitable config directory found")]
    NoConfigDir,
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
}
