//! Library exports for reuse in the binary and integration tests.
/// Application directory resolution.
pub mod app_dirs;
/// Settings loaded from `config.toml`.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Mock fine-tuning pipeline.
pub mod finetune;
/// Tracing subscriber setup.
pub mod logging;
