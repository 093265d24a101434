// SPDX-License-Identifier: MPL-2.0
//! Image loading and transformation.

pub mod image;
pub mod image_transform;

pub use image::load_image;
pub use image_transform::{expanded_dimensions, rotate, Resampling};
