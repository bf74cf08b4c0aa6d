// SPDX-License-Identifier: MPL-2.0
//! Iced views for the showcase.
//!
//! Views follow the "state down, messages up" pattern: each takes a borrowed
//! view context and emits [`crate::showcase::Message`]s.
//!
//! - [`view_selector`] - Slideshow/gallery switch
//! - [`slideshow`] - Active slide, indicators and the [`settings`] panel
//! - [`gallery`] - Main image, metadata panel and thumbnail strip
//! - [`overlay`] - Fullscreen mirror of the gallery image
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod gallery;
pub mod overlay;
pub mod settings;
pub mod slideshow;
pub mod styles;
pub mod view_selector;
