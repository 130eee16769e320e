use crate::finetune::hyperparams::{DEFAULT_BATCH_SIZE, DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE};

pub(super) const MAX_TIME_UNIT_MS: u64 = 10_000;

pub(super) fn clamp_time_unit_ms(value: u64) -> u64 {
    value.min(MAX_TIME_UNIT_MS)
}

pub(super) fn default_time_unit_ms() -> u64 {
    1_000
}

pub(super) fn default_batch_size() -> u32 {
    DEFAULT_BATCH_SIZE
}

pub(super) fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

pub(super) fn default_epochs() -> u32 {
    DEFAULT_EPOCHS
}
