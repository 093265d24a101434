// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from common raster formats (PNG, JPEG, GIF, etc.).

use crate::error::{Error, Result};
use image_rs::{DynamicImage, GenericImageView};
use std::fs;
use std::path::Path;

/// Load an image from the given path.
///
/// The format is detected from the file contents rather than the extension,
/// so names like `object.jpg.jpg` decode as whatever they actually hold.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The contents are not a supported or valid image ([`Error::Image`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    let img_bytes =
        fs::read(path).map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;

    let img = image_rs::load_from_memory(&img_bytes)
        .map_err(|e| Error::Image(format!("{}: {}", path.display(), e)))?;

    let (width, height) = img.dimensions();
    log::debug!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        width,
        height,
        img.color()
    );
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image.save(&image_path).expect("failed to write png");

        let loaded = load_image(&image_path).expect("failed to load png");
        assert_eq!(loaded.dimensions(), (4, 2));
    }

    #[test]
    fn load_detects_format_from_contents() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let png_path = temp_dir.path().join("sample.png");
        RgbaImage::from_pixel(3, 3, Rgba([0, 255, 0, 255]))
            .save(&png_path)
            .expect("failed to write png");

        let misnamed = temp_dir.path().join("object.jpg.jpg");
        fs::rename(&png_path, &misnamed).expect("failed to rename");

        let loaded = load_image(&misnamed).expect("failed to load misnamed png");
        assert_eq!(loaded.dimensions(), (3, 3));
    }

    #[test]
    fn load_missing_file_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_image(temp_dir.path().join("missing.png")).expect_err("should fail");
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn load_corrupt_file_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("broken.png");
        fs::write(&image_path, b"definitely not an image").expect("failed to write");

        let err = load_image(&image_path).expect_err("should fail");
        assert!(matches!(err, Error::Image(_)));
    }
}
