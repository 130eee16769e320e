//! Model choices and the hyperparameter ranges offered by the form.

use std::fmt;
use std::ops::RangeInclusive;

/// Foundation model offered in the sidebar. `Unselected` is the empty entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelChoice {
    #[default]
    Unselected,
    Llama3,
    Mistral,
    SmolLm,
}

impl ModelChoice {
    /// Options in sidebar order, including the empty entry.
    pub const ALL: [ModelChoice; 4] = [
        ModelChoice::Unselected,
        ModelChoice::Llama3,
        ModelChoice::Mistral,
        ModelChoice::SmolLm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unselected => "",
            Self::Llama3 => "Llama 3",
            Self::Mistral => "Mistral",
            Self::SmolLm => "SmolLM",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.label().eq_ignore_ascii_case(label.trim()))
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, Self::Unselected)
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const BATCH_SIZE_RANGE: RangeInclusive<u32> = 8..=64;
pub const BATCH_SIZE_STEP: u32 = 8;
pub const LEARNING_RATE_RANGE: RangeInclusive<f64> = 0.0001..=0.01;
pub const LEARNING_RATE_STEP: f64 = 0.0001;
pub const EPOCHS_RANGE: RangeInclusive<u32> = 1..=20;

pub const DEFAULT_BATCH_SIZE: u32 = 16;
pub const DEFAULT_LEARNING_RATE: f64 = 0.001;
pub const DEFAULT_EPOCHS: u32 = 5;

/// Hyperparameters collected for a run. Logged, never used by the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperparameters {
    pub batch_size: u32,
    pub learning_rate: f64,
    pub epochs: u32,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            learning_rate: DEFAULT_LEARNING_RATE,
            epochs: DEFAULT_EPOCHS,
        }
    }
}

impl Hyperparameters {
    /// Snap each value onto its slider grid and clamp into range.
    pub fn normalized(self) -> Self {
        Self {
            batch_size: snap_batch_size(self.batch_size),
            learning_rate: snap_learning_rate(self.learning_rate),
            epochs: self.epochs.clamp(*EPOCHS_RANGE.start(), *EPOCHS_RANGE.end()),
        }
    }
}

pub fn snap_batch_size(value: u32) -> u32 {
    let snapped = value.saturating_add(BATCH_SIZE_STEP / 2) / BATCH_SIZE_STEP * BATCH_SIZE_STEP;
    snapped.clamp(*BATCH_SIZE_RANGE.start(), *BATCH_SIZE_RANGE.end())
}

pub fn snap_learning_rate(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_LEARNING_RATE;
    }
    let steps = (value / LEARNING_RATE_STEP).round();
    (steps * LEARNING_RATE_STEP).clamp(*LEARNING_RATE_RANGE.start(), *LEARNING_RATE_RANGE.end())
}
