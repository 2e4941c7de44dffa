// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[viewer]` - Pulse overlay behaviour (autoplay, captions, backdrop, keyboard)
//! - `[identity]` - Identity of the signed-in viewer
//!
//! # Examples
//!
//! ```no_run
//! use pulse_viewer::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Write it somewhere else
//! config::save_to_path(&config, std::path::Path::new("settings.toml"))
//!     .expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::pulse_viewer::Preferences;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Pulse overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay_video: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_captions: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_on_backdrop: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_navigation: Option<bool>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            autoplay_video: Some(DEFAULT_AUTOPLAY_VIDEO),
            show_captions: Some(DEFAULT_SHOW_CAPTIONS),
            close_on_backdrop: Some(DEFAULT_CLOSE_ON_BACKDROP),
            keyboard_navigation: Some(DEFAULT_KEYBOARD_NAVIGATION),
        }
    }
}

impl ViewerConfig {
    /// Resolves unset options to their defaults.
    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences {
            autoplay_video: self.autoplay_video.unwrap_or(DEFAULT_AUTOPLAY_VIDEO),
            show_captions: self.show_captions.unwrap_or(DEFAULT_SHOW_CAPTIONS),
            close_on_backdrop: self.close_on_backdrop.unwrap_or(DEFAULT_CLOSE_ON_BACKDROP),
            keyboard_navigation: self
                .keyboard_navigation
                .unwrap_or(DEFAULT_KEYBOARD_NAVIGATION),
        }
    }
}

/// Identity of the person using the viewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct IdentityConfig {
    /// User id matched against pulse authors. Unset means anonymous.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_id: Option<String>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub identity: IdentityConfig,
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "config load failed, using defaults");
                    return (Config::default(), Some(err.i18n_key().to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            viewer: ViewerConfig {
                autoplay_video: Some(false),
                show_captions: Some(true),
                close_on_backdrop: Some(false),
                keyboard_navigation: Some(true),
            },
            identity: IdentityConfig {
                viewer_id: Some("alice".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[viewer]\nautoplay_video = \"yes\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config: Config = toml::from_str("[identity]\nviewer_id = \"bob\"\n")
            .expect("partial config should parse");
        assert_eq!(config.identity.viewer_id.as_deref(), Some("bob"));
        assert_eq!(config.viewer, ViewerConfig::default());
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn unset_viewer_options_resolve_to_defaults() {
        let viewer = ViewerConfig {
            autoplay_video: None,
            show_captions: Some(false),
            close_on_backdrop: None,
            keyboard_navigation: None,
        };
        let preferences = viewer.preferences();
        assert_eq!(preferences.autoplay_video, DEFAULT_AUTOPLAY_VIDEO);
        assert!(!preferences.show_captions);
        assert_eq!(preferences.close_on_backdrop, DEFAULT_CLOSE_ON_BACKDROP);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
