// SPDX-License-Identifier: MPL-2.0
//! Showcase manifest: the slides, gallery images and presets to present.
//!
//! ```toml
//! speeds = [3000, 5000, 8000]
//! views = ["slideshow", "gallery"]
//!
//! [[slides]]
//! source = "slides/harbor.jpg"
//! caption = "Harbor at dawn"
//!
//! [[images]]
//! source = "gallery/dune.jpg"
//! title = "Dune"
//! description = "Wind-carved ridges"
//! category = "Nature"
//! date = "2024"
//! ```
//!
//! Relative sources resolve against the manifest's directory.

use crate::app::config::DEFAULT_SPEED_PRESETS_MS;
use crate::domain::showcase::{ImageRecord, SlideRecord, View};
use crate::domain::ui::AutoplaySpeed;
use crate::error::{Error, Result};
use crate::media::extensions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Fallbacks for gallery entries that omit a field.
pub mod fallback {
    pub const TITLE: &str = "Image";
    pub const DESCRIPTION: &str = "Description";
    pub const CATEGORY: &str = "Category";
    pub const DATE: &str = "2025";
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    slides: Vec<RawSlide>,
    #[serde(default)]
    images: Vec<RawImage>,
    #[serde(default)]
    speeds: Option<Vec<u64>>,
    #[serde(default)]
    views: Option<Vec<View>>,
}

#[derive(Debug, Deserialize)]
struct RawSlide {
    source: PathBuf,
    #[serde(default)]
    caption: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawImage {
    source: PathBuf,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    date: Option<String>,
}

/// A parsed manifest with sources resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub slides: Vec<SlideRecord>,
    pub images: Vec<ImageRecord>,
    /// Autoplay presets offered in the settings panel, in manifest order.
    pub speeds: Vec<AutoplaySpeed>,
    /// Views that have a container.
    pub views: Vec<View>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            slides: Vec::new(),
            images: Vec::new(),
            speeds: default_speeds(),
            views: View::ALL.to_vec(),
        }
    }
}

fn default_speeds() -> Vec<AutoplaySpeed> {
    DEFAULT_SPEED_PRESETS_MS
        .iter()
        .map(|&ms| AutoplaySpeed::new(ms))
        .collect()
}

/// Reads and parses the manifest at `path`.
pub fn load(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Manifest(format!("{}: {}", path.display(), e)))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let manifest = parse(&content, base_dir)?;
    log::info!(
        "Loaded manifest {} ({} slides, {} images)",
        path.display(),
        manifest.slides.len(),
        manifest.images.len()
    );
    Ok(manifest)
}

/// Parses manifest text, resolving relative sources against `base_dir`.
pub fn parse(content: &str, base_dir: &Path) -> Result<Manifest> {
    let raw: RawManifest = toml::from_str(content).map_err(|e| Error::Manifest(e.to_string()))?;

    let speeds = match raw.speeds {
        None => default_speeds(),
        Some(list) if list.is_empty() => default_speeds(),
        Some(list) => {
            if list.contains(&0) {
                return Err(Error::Manifest(
                    "autoplay speeds must be greater than zero".to_string(),
                ));
            }
            list.into_iter().map(AutoplaySpeed::new).collect()
        }
    };

    let views = match raw.views {
        None => View::ALL.to_vec(),
        Some(list) => {
            let mut views = Vec::with_capacity(list.len());
            for view in list {
                if !views.contains(&view) {
                    views.push(view);
                }
            }
            views
        }
    };

    let slides = raw
        .slides
        .into_iter()
        .map(|slide| SlideRecord {
            source: resolve(base_dir, slide.source),
            caption: non_empty(slide.caption),
        })
        .collect();

    let images = raw
        .images
        .into_iter()
        .enumerate()
        .map(|(index, image)| ImageRecord {
            index,
            source: resolve(base_dir, image.source),
            title: non_empty(image.title).unwrap_or_else(|| fallback::TITLE.to_string()),
            description: non_empty(image.description)
                .unwrap_or_else(|| fallback::DESCRIPTION.to_string()),
            category: non_empty(image.category).unwrap_or_else(|| fallback::CATEGORY.to_string()),
            date: non_empty(image.date).unwrap_or_else(|| fallback::DATE.to_string()),
        })
        .collect::<Vec<_>>();

    for record in &images {
        if !extensions::is_supported_image(&record.source) {
            log::warn!(
                "Gallery image {} has an unsupported extension and will likely fail to decode",
                record.source.display()
            );
        }
    }

    Ok(Manifest {
        slides,
        images,
        speeds,
        views,
    })
}

fn resolve(base_dir: &Path, source: PathBuf) -> PathBuf {
    if source.is_absolute() {
        source
    } else {
        base_dir.join(source)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
