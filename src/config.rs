//! Configuration loading
//!
//! Reads `~/.config/alumni-toast/config.toml`. A missing file means defaults;
//! an unreadable or invalid one also means defaults, plus a warning for the
//! caller to surface.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

pub use types::{
    Config, DEFAULT_BASE_URL, DEFAULT_LOGIN_DELAY_MS, LoginConfig, ServerConfig, ToastConfig,
};

pub const CONFIG_DIR: &str = "alumni-toast";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus a warning when the file could not be used
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Directory holding the config and storage files
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("Ignoring {}: {}", path.display(), e)),
        },
    }
}

fn read_config(path: &Path) -> Result<Config, AppError> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
