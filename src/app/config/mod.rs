// SPDX-License-Identifier: MPL-2.0
//! User-editable settings stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[i18n]` - Optional directory of dictionary overrides
//!
//! The language preference is deliberately *not* stored here; it is state
//! owned by the locale store (see [`crate::app::persisted_state`]).
//!
//! # Examples
//!
//! ```no_run
//! use lowuder::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.theme_mode = lowuder::ui::theming::ThemeMode::Dark;
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::i18n::keys::{self, Key};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file name within the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Localization settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
    /// Directory holding `<tag>.json` files that replace the embedded
    /// dictionaries. `--i18n-dir` takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary_dir: Option<PathBuf>,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub i18n: I18nConfig,
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns the config and, if the file exists but cannot be read, the key of
/// a warning to show the user. Defaults are used in that case.
pub fn load() -> (Config, Option<Key>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<Key>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to load settings");
            (Config::default(), Some(keys::NOTICE_CONFIG_LOAD_ERROR))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
