// SPDX-License-Identifier: MPL-2.0
//! Image decoding for the gallery's main display.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Load an image from the given path and return its data.
///
/// # Errors
///
/// Returns [`Error::Decode`] naming the resource if the file cannot be read or
/// its bytes are not a supported raster format.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let resource = path.display().to_string();

    let img_bytes = fs::read(path).map_err(|e| Error::decode(resource.clone(), e))?;
    let img = image_rs::load_from_memory(&img_bytes).map_err(|e| Error::decode(resource, e))?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}
