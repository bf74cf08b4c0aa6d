// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` presents a set of images as an autoplaying slideshow or as a
//! browsable gallery with zoom and a fullscreen overlay.
//!
//! The [`showcase`] module holds the framework-independent controller. The
//! [`app`] and [`ui`] modules are the Iced desktop shell around it.

#![doc(html_root_url = "https://docs.rs/iced_reel/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod manifest;
pub mod media;
pub mod showcase;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
