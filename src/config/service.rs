//! Configuration service for managing application config.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::error::ConfigError;

use super::types::AppConfig;

/// Global config instance (mutable via RwLock).
static CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::default_const());

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("deskapp"))
}

/// Path of the config file, `~/.config/deskapp/config.toml`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoDirFound)
}

/// Read and parse a config file.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
    toml::from_str::<AppConfig>(&content).map_err(ConfigError::ParseFailed)
}

/// Load application config from `~/.config/deskapp/config.toml`.
///
/// Returns `None` if the config file doesn't exist.
/// Logs warning and returns `None` if reading or parsing fails.
fn load_app_config() -> Option<AppConfig> {
    let config_path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!("{}, using defaults", e);
            return None;
        }
    };

    if !config_path.exists() {
        tracing::debug!("Config file not found at {:?}, using defaults", config_path);
        return None;
    }

    match load_config_from(&config_path) {
        Ok(config) => {
            tracing::info!("Loaded app config from {:?}", config_path);
            Some(config)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load config file at {:?}: {}, using defaults",
                config_path,
                e
            );
            None
        }
    }
}

/// Initialize config from file (call once at startup).
///
/// Loads the configuration and validates it, logging any warnings for
/// invalid or unusual values. The desktop environment override, if any,
/// is applied to the desktop module.
pub fn init_config() {
    let loaded = load_app_config().unwrap_or_default();

    for warning in super::validation::validate_config(&loaded) {
        tracing::warn!("Config validation: {} - {}", warning.field, warning.message);
    }

    if let Some(desktop_env) = &loaded.desktop_env {
        crate::desktop::env::set_desktop_env(Some(desktop_env.as_str()));
    }

    *CONFIG.write().unwrap_or_else(PoisonError::into_inner) = loaded;
}

/// Get a clone of the current config.
pub fn config() -> AppConfig {
    CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// The terminal command line from the current config.
pub fn terminal_command() -> String {
    config().terminal_command()
}
