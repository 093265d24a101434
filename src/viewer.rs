// SPDX-License-Identifier: MPL-2.0
//! Handing rotated images to something that can show them.

use crate::error::{Error, Result};
use image_rs::{ColorType, DynamicImage, ImageFormat};
use std::borrow::Cow;
use std::path::PathBuf;

/// Shows an image to the user.
///
/// Each call is independent; implementations are not expected to reuse a window.
pub trait Viewer {
    fn show(&mut self, image: &DynamicImage) -> Result<()>;
}

/// Opens images in the platform's default image viewer.
///
/// Each image is written as PNG to a fresh `image_tilt-*.png` file in the
/// system temp directory. These files are never deleted by this program: the
/// viewer is launched detached and may read the file after the loop has moved
/// on or the process has exited. Cleanup is left to the OS temp-directory
/// policy.
#[derive(Debug, Default)]
pub struct SystemViewer;

impl SystemViewer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn write_temp_png(image: &DynamicImage) -> Result<PathBuf> {
        let file = tempfile::Builder::new()
            .prefix("image_tilt-")
            .suffix(".png")
            .tempfile()?;
        let (_, path) = file.keep().map_err(|e| Error::Io(e.to_string()))?;

        // PNG has no float sample support.
        let encodable = match image.color() {
            ColorType::Rgb32F | ColorType::Rgba32F => {
                Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8()))
            }
            _ => Cow::Borrowed(image),
        };
        encodable.save_with_format(&path, ImageFormat::Png)?;
        Ok(path)
    }
}

impl Viewer for SystemViewer {
    fn show(&mut self, image: &DynamicImage) -> Result<()> {
        let path = Self::write_temp_png(image)?;
        log::debug!("opening {} in default viewer", path.display());
        open::that_detached(&path)
            .map_err(|e| Error::Display(format!("{}: {}", path.display(), e)))
    }
}
