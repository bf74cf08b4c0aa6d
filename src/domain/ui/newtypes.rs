// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Zoom Bounds
// =============================================================================

/// Zoom factor bounds (0.5× to 3.0×).
pub mod zoom_bounds {
    /// Minimum zoom factor.
    pub const MIN_FACTOR: f32 = 0.5;
    /// Maximum zoom factor.
    pub const MAX_FACTOR: f32 = 3.0;
    /// Default zoom factor (original size).
    pub const DEFAULT_FACTOR: f32 = 1.0;
    /// Multiplier applied by one zoom in step (and divisor for zoom out).
    pub const STEP_MULTIPLIER: f32 = 1.2;
}

// =============================================================================
// ZoomFactor
// =============================================================================

/// Multiplicative zoom factor, guaranteed to be within valid range (0.5×–3.0×).
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a new zoom factor, clamping the value to the valid range.
    ///
    /// Non-finite input falls back to the default factor.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if !factor.is_finite() {
            return Self::default();
        }
        Self(factor.clamp(zoom_bounds::MIN_FACTOR, zoom_bounds::MAX_FACTOR))
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the zoom is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN_FACTOR
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= zoom_bounds::MAX_FACTOR
    }

    /// Multiplies the factor by one step, saturating at the maximum.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self((self.0 * zoom_bounds::STEP_MULTIPLIER).min(zoom_bounds::MAX_FACTOR))
    }

    /// Divides the factor by one step, saturating at the minimum.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self((self.0 / zoom_bounds::STEP_MULTIPLIER).max(zoom_bounds::MIN_FACTOR))
    }

    /// Cursor affordance matching this factor.
    #[must_use]
    pub fn cursor(self) -> ZoomCursor {
        if self.0 > zoom_bounds::DEFAULT_FACTOR {
            ZoomCursor::ZoomOut
        } else {
            ZoomCursor::ZoomIn
        }
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(zoom_bounds::DEFAULT_FACTOR)
    }
}

/// Cursor hint shown over the zoomable image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomCursor {
    /// Further zoom in is the expected interaction.
    ZoomIn,
    /// The image is magnified; zooming out is the expected interaction.
    ZoomOut,
}

// =============================================================================
// Autoplay Speed Bounds
// =============================================================================

/// Autoplay interval bounds (0.5 to 60 seconds).
pub mod autoplay_bounds {
    /// Minimum interval in milliseconds.
    pub const MIN_MS: u64 = 500;
    /// Maximum interval in milliseconds.
    pub const MAX_MS: u64 = 60_000;
    /// Default interval in milliseconds.
    pub const DEFAULT_MS: u64 = 5_000;
}

// =============================================================================
// AutoplaySpeed
// =============================================================================

/// Interval between two automatic slide advances.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (500 ms–60 s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoplaySpeed(u64);

impl AutoplaySpeed {
    /// Creates a new interval, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(autoplay_bounds::MIN_MS, autoplay_bounds::MAX_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AutoplaySpeed {
    fn default() -> Self {
        Self(autoplay_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
