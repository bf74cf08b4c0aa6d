// SPDX-License-Identifier: MPL-2.0
//! Core showcase types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// One of the two mutually exclusive display modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Full-width slides with indicators and optional autoplay.
    #[default]
    Slideshow,
    /// Main image with metadata panel and a thumbnail strip.
    Gallery,
}

impl View {
    /// All views, in selector order.
    pub const ALL: [View; 2] = [View::Slideshow, View::Gallery];

    /// Stable identifier used in manifests and config files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            View::Slideshow => "slideshow",
            View::Gallery => "gallery",
        }
    }

    /// i18n key for the selector label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            View::Slideshow => "view-slideshow",
            View::Gallery => "view-gallery",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a view identifier is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view '{0}'")]
pub struct ParseViewError(pub String);

impl FromStr for View {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "slideshow" => Ok(View::Slideshow),
            "gallery" => Ok(View::Gallery),
            other => Err(ParseViewError(other.to_string())),
        }
    }
}

/// Visual transition applied uniformly to every slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionEffect {
    #[default]
    Fade,
    Slide,
    Zoom,
}

impl TransitionEffect {
    /// All effects, in selector order.
    pub const ALL: [TransitionEffect; 3] = [
        TransitionEffect::Fade,
        TransitionEffect::Slide,
        TransitionEffect::Zoom,
    ];

    /// Stable identifier used in config files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TransitionEffect::Fade => "fade",
            TransitionEffect::Slide => "slide",
            TransitionEffect::Zoom => "zoom",
        }
    }

    /// i18n key for the selector label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            TransitionEffect::Fade => "transition-fade",
            TransitionEffect::Slide => "transition-slide",
            TransitionEffect::Zoom => "transition-zoom",
        }
    }
}

/// Error returned when a transition effect name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transition effect '{0}'")]
pub struct ParseTransitionError(pub String);

impl FromStr for TransitionEffect {
    type Err = ParseTransitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fade" => Ok(TransitionEffect::Fade),
            "slide" => Ok(TransitionEffect::Slide),
            "zoom" => Ok(TransitionEffect::Zoom),
            other => Err(ParseTransitionError(other.to_string())),
        }
    }
}

/// A single slideshow entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRecord {
    pub source: PathBuf,
    pub caption: Option<String>,
}

/// Gallery entry derived once at setup; immutable afterwards.
///
/// The position in the owning sequence is the display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub index: usize,
    pub source: PathBuf,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
}

impl ImageRecord {
    /// Text used as the image's alternative description.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.title
    }
}
