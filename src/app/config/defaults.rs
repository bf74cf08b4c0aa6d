// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration constants.

use crate::domain::ui::newtypes::autoplay_bounds;

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Whether the slideshow advances on its own at startup.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Default autoplay interval in milliseconds.
pub const DEFAULT_AUTOPLAY_SPEED_MS: u64 = autoplay_bounds::DEFAULT_MS;

/// Speed presets offered when the manifest does not list any.
pub const DEFAULT_SPEED_PRESETS_MS: [u64; 3] = [3_000, 5_000, 8_000];

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Whether zoom goes back to 1.0 when a new image is shown.
pub const DEFAULT_RESET_ZOOM_ON_NAVIGATION: bool = false;

// ==========================================================================
// Manifest Defaults
// ==========================================================================

/// Manifest file name used when none is given on the command line.
pub const DEFAULT_MANIFEST_FILE: &str = "showcase.toml";
