//! Read-only dashboard settings stored as TOML in the app directory.

mod config_defaults;
mod config_io;
mod config_types;

pub use config_io::{CONFIG_FILE_NAME, config_path, load_or_default, load_settings_from};
pub use config_types::{AppSettings, ConfigError, FormDefaults, TimingSettings};
