// SPDX-License-Identifier: MPL-2.0
//! User preferences, loaded from and saved to a `settings.toml` file.
//!
//! Preferences cover language, theme, and the gallery synchronization mode.
//! The image collection itself is deliberately never persisted; it lives and
//! dies with the session.
//!
//! A corrupt or unreadable settings file falls back to defaults and returns
//! a notification key so the UI can tell the user, instead of failing
//! startup.

use crate::error::Result;
use crate::ui::gallery::SyncMode;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "SnapGrid";

/// Environment override for the config directory, mainly for tests and
/// portable installs.
pub const CONFIG_DIR_ENV: &str = "SNAPGRID_CONFIG_DIR";

/// Notification key shown when the settings file exists but cannot be used.
pub const LOAD_WARNING_KEY: &str = "notification-config-load-error";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    /// Light, dark, or follow the system.
    pub theme_mode: ThemeMode,
    /// How the gallery observes the collection; see `ui::gallery`.
    pub gallery_sync: SyncMode,
}

fn default_config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, falling back to defaults.
///
/// Returns the config plus an optional notification key: `Some` when a
/// settings file was present but could not be read or parsed.
pub fn load() -> (Config, Option<&'static str>) {
    let Some(path) = default_config_path() else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            log::warn!("failed to load {}: {err}", path.display());
            (Config::default(), Some(LOAD_WARNING_KEY))
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to the default location, creating parent
/// directories as needed.
pub fn save(config: &Config) -> Result<()> {
    let Some(path) = default_config_path() else {
        return Ok(());
    };
    save_to_path(config, &path)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
