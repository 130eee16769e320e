use std::path::{Path, PathBuf};

use serde::de::Error as SerdeDeError;

use crate::app_dirs;

use super::config_types::{AppSettings, ConfigError};

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load settings from the app directory, returning defaults if the file is missing.
///
/// The file is never written; session inputs are not persisted.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    let path = config_path()?;
    load_settings_from(&path)
}

/// Load settings from a specific file, returning defaults if it does not exist.
pub fn load_settings_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}; using defaults", path.display());
        return Ok(AppSettings::default());
    }
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source: SerdeDeError::custom(source),
    })?;
    toml::from_str(&text)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
        .map(AppSettings::normalized)
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finetune::hyperparams::ModelChoice;
    use std::time::Duration;
    use tempfile::tempdir;

    fn with_config_home<T>(dir: &Path, f: impl FnOnce() -> T) -> T {
        let _guard = crate::app_dirs::ConfigBaseGuard::set(dir.to_path_buf());
        f()
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = with_config_home(dir.path(), load_or_default).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.time_unit(), Duration::from_secs(1));
        assert!(
            !dir.path()
                .join(app_dirs::APP_DIR_NAME)
                .join(CONFIG_FILE_NAME)
                .exists()
        );
    }

    #[test]
    fn reads_settings_from_app_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path().join(app_dirs::APP_DIR_NAME);
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(
            root.join(CONFIG_FILE_NAME),
            "[timing]\ntime_unit_ms = 25\n\n[defaults]\nmodel = \"SmolLM\"\nepochs = 9\n",
        )
        .unwrap();
        let settings = with_config_home(dir.path(), load_or_default).unwrap();
        assert_eq!(settings.time_unit(), Duration::from_millis(25));
        assert_eq!(settings.initial_model(), ModelChoice::SmolLm);
        let params = settings.initial_hyperparameters();
        assert_eq!(params.epochs, 9);
        assert_eq!(params.batch_size, 16);
    }

    #[test]
    fn out_of_range_values_are_normalized() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(
            &path,
            "[timing]\ntime_unit_ms = 999999\n\n[defaults]\nbatch_size = 3\nlearning_rate = 0.5\nepochs = 0\nmodel = \"GPT\"\n",
        )
        .unwrap();
        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.timing.time_unit_ms, 10_000);
        assert_eq!(settings.defaults.batch_size, 8);
        assert_eq!(settings.defaults.learning_rate, 0.01);
        assert_eq!(settings.defaults.epochs, 1);
        assert_eq!(settings.initial_model(), ModelChoice::Unselected);
    }

    #[test]
    fn invalid_toml_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(&path, "[timing\ntime_unit_ms = 1").unwrap();
        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(&path, "theme = \"dark\"\n[timing]\nspeed = 3\n").unwrap();
        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings, AppSettings::default());
    }
}
