// SPDX-License-Identifier: MPL-2.0
//! Media loading for the showcase.

pub mod image;

pub use image::{load_image, ImageData};

/// Supported media extensions
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
    ];

    /// Whether `path` has a supported image extension (case-insensitive).
    #[must_use]
    pub fn is_supported_image(path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                IMAGE_EXTENSIONS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::path::Path;

        #[test]
        fn extension_check_ignores_case() {
            assert!(is_supported_image(Path::new("a/b/PHOTO.JPG")));
            assert!(is_supported_image(Path::new("x.webp")));
            assert!(!is_supported_image(Path::new("clip.mp4")));
            assert!(!is_supported_image(Path::new("README")));
        }
    }
}
