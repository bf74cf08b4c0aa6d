// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[slideshow]` - Autoplay enablement, interval and transition effect
//! - `[gallery]` - Zoom behavior on navigation
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `ICED_REEL_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_reel::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load_with_override(None);
//! config.slideshow.autoplay = Some(false);
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::showcase::TransitionEffect;
use crate::domain::ui::AutoplaySpeed;
use crate::error::{Error, Result};
use crate::showcase::Preferences;
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
}

/// Slideshow settings, written back whenever they change in the settings panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Autoplay interval in milliseconds. Clamped on load.
    #[serde(
        default = "default_autoplay_speed_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay_speed_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionEffect>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            autoplay: Some(DEFAULT_AUTOPLAY),
            autoplay_speed_ms: Some(DEFAULT_AUTOPLAY_SPEED_MS),
            transition: Some(TransitionEffect::default()),
        }
    }
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    #[serde(
        default = "default_reset_zoom_on_navigation",
        skip_serializing_if = "Option::is_none"
    )]
    pub reset_zoom_on_navigation: Option<bool>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            reset_zoom_on_navigation: Some(DEFAULT_RESET_ZOOM_ON_NAVIGATION),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Slideshow preferences, with missing values replaced by defaults and the
    /// interval clamped into its supported range.
    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences {
            autoplay: self.slideshow.autoplay.unwrap_or(DEFAULT_AUTOPLAY),
            speed: AutoplaySpeed::new(
                self.slideshow
                    .autoplay_speed_ms
                    .unwrap_or(DEFAULT_AUTOPLAY_SPEED_MS),
            ),
            transition: self.slideshow.transition.unwrap_or_default(),
        }
    }

    /// Writes slideshow preferences back into the `[slideshow]` section.
    pub fn set_preferences(&mut self, preferences: Preferences) {
        self.slideshow.autoplay = Some(preferences.autoplay);
        self.slideshow.autoplay_speed_ms = Some(preferences.speed.millis());
        self.slideshow.transition = Some(preferences.transition);
    }

    #[must_use]
    pub fn reset_zoom_on_navigation(&self) -> bool {
        self.gallery
            .reset_zoom_on_navigation
            .unwrap_or(DEFAULT_RESET_ZOOM_ON_NAVIGATION)
    }
}

// =============================================================================
// Serde Default Helpers
// =============================================================================

fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_AUTOPLAY)
}

fn default_autoplay_speed_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_SPEED_MS)
}

fn default_reset_zoom_on_navigation() -> Option<bool> {
    Some(DEFAULT_RESET_ZOOM_ON_NAVIGATION)
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

/// Loads the configuration from a custom directory, or the default one when
/// `base_dir` is `None`.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
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

/// Saves the configuration to a custom directory, or the default one when
/// `base_dir` is `None`.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

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
