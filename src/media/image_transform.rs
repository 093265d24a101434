// SPDX-License-Identifier: MPL-2.0
//! Arbitrary-angle rotation with optional canvas expansion.
//!
//! Angles are in degrees and positive values turn the image counter-clockwise.
//! Exact quarter turns are delegated to the lossless `rotate90/180/270`
//! operations of the `image` crate; every other angle is resampled by inverse
//! mapping each output pixel back into the source.

use image_rs::{ColorType, DynamicImage, GenericImageView, Rgba, RgbaImage};
use serde::Deserialize;

/// Decimal places kept in the rotation matrix when sizing the canvas, so
/// quarter turns produce exact zeros instead of `sin`/`cos` noise.
const MATRIX_DECIMALS: i32 = 15;

/// Catmull-Rom tension parameter for the bicubic kernel.
const CUBIC_A: f64 = -0.5;

/// Sampling kernel used for non quarter-turn rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resampling {
    #[default]
    Nearest,
    Bilinear,
    Bicubic,
}

/// Canvas size that fully contains a `width` x `height` image rotated by `degrees`.
///
/// The four corners are rotated about the image centre and each axis spans
/// `ceil(max) - floor(min)` of the transformed coordinates, so the size
/// depends on where the corners land relative to the pixel grid and not only
/// on the rotated extent.
#[must_use]
pub fn expanded_dimensions(width: u32, height: u32, degrees: f64) -> (u32, u32) {
    let (sin, cos) = (-degrees.to_radians()).sin_cos();
    let (a, b) = (round_matrix(cos), round_matrix(sin));
    let (d, e) = (round_matrix(-sin), round_matrix(cos));

    let w = f64::from(width);
    let h = f64::from(height);
    let (cx, cy) = (w / 2.0, h / 2.0);
    let tx = a * -cx + b * -cy + cx;
    let ty = d * -cx + e * -cy + cy;

    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for (x, y) in [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)] {
        let px = a * x + b * y + tx;
        let py = d * x + e * y + ty;
        min = (min.0.min(px), min.1.min(py));
        max = (max.0.max(px), max.1.max(py));
    }

    (
        canvas_extent(max.0.ceil() - min.0.floor()),
        canvas_extent(max.1.ceil() - min.1.floor()),
    )
}

fn round_matrix(value: f64) -> f64 {
    let scale = 10_f64.powi(MATRIX_DECIMALS);
    (value * scale).round() / scale
}

/// Rotate `image` counter-clockwise by `degrees`.
///
/// With `expand` the output canvas grows to the rotated bounding box so no
/// corner is cropped; without it the source dimensions are kept. Uncovered
/// pixels are black, transparent when the source carries alpha. The source
/// colour layout is preserved for 8-bit RGB and luma images.
#[must_use]
pub fn rotate(
    image: &DynamicImage,
    degrees: f64,
    expand: bool,
    resampling: Resampling,
) -> DynamicImage {
    let (width, height) = image.dimensions();
    if let Some(turns) = quarter_turns(degrees) {
        match turns {
            0 => return image.clone(),
            2 => return image.rotate180(),
            1 if expand || width == height => return image.rotate270(),
            3 if expand || width == height => return image.rotate90(),
            // Cropped quarter turn of a non-square image: resample below.
            _ => {}
        }
    }

    let (out_width, out_height) = if expand {
        expanded_dimensions(width, height, degrees)
    } else {
        (width, height)
    };
    let rotated = rotate_sampled(image, degrees, out_width, out_height, resampling);
    restore_color(rotated, image.color())
}

/// Number of counter-clockwise quarter turns, if `degrees` is a multiple of 90.
fn quarter_turns(degrees: f64) -> Option<u8> {
    let turns = degrees / 90.0;
    if !turns.is_finite() || turns.fract() != 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let turns = (turns as i64).rem_euclid(4) as u8;
    Some(turns)
}

fn canvas_extent(extent: f64) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let value = extent.clamp(1.0, f64::from(u32::MAX)) as u32;
    value
}

fn rotate_sampled(
    image: &DynamicImage,
    degrees: f64,
    out_width: u32,
    out_height: u32,
    resampling: Resampling,
) -> RgbaImage {
    let fill = if image.color().has_alpha() {
        Rgba([0, 0, 0, 0])
    } else {
        Rgba([0, 0, 0, 255])
    };
    let source = image.to_rgba8();
    let (sin, cos) = degrees.to_radians().sin_cos();

    let src_cx = f64::from(source.width()) / 2.0;
    let src_cy = f64::from(source.height()) / 2.0;
    let out_cx = f64::from(out_width) / 2.0;
    let out_cy = f64::from(out_height) / 2.0;

    RgbaImage::from_fn(out_width, out_height, |x, y| {
        // Offsets of the output pixel centre from the output centre, y down.
        let dx = f64::from(x) + 0.5 - out_cx;
        let dy = f64::from(y) + 0.5 - out_cy;
        let sx = dx * cos - dy * sin + src_cx;
        let sy = dx * sin + dy * cos + src_cy;
        sample(&source, sx, sy, resampling).unwrap_or(fill)
    })
}

fn restore_color(rotated: RgbaImage, color: ColorType) -> DynamicImage {
    let rotated = DynamicImage::ImageRgba8(rotated);
    match color {
        ColorType::L8 => DynamicImage::ImageLuma8(rotated.to_luma8()),
        ColorType::La8 => DynamicImage::ImageLumaA8(rotated.to_luma_alpha8()),
        c if c.has_alpha() => rotated,
        _ => DynamicImage::ImageRgb8(rotated.to_rgb8()),
    }
}

/// Samples `source` at continuous coordinates (pixel centres at `i + 0.5`).
///
/// Returns `None` outside the source rectangle.
fn sample(source: &RgbaImage, x: f64, y: f64, resampling: Resampling) -> Option<Rgba<u8>> {
    let (width, height) = source.dimensions();
    if x < 0.0 || y < 0.0 || x >= f64::from(width) || y >= f64::from(height) {
        return None;
    }

    let pixel = match resampling {
        Resampling::Nearest => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let (px, py) = (x as u32, y as u32);
            *source.get_pixel(px.min(width - 1), py.min(height - 1))
        }
        Resampling::Bilinear => bilinear(source, x - 0.5, y - 0.5),
        Resampling::Bicubic => bicubic(source, x - 0.5, y - 0.5),
    };
    Some(pixel)
}

fn bilinear(source: &RgbaImage, u: f64, v: f64) -> Rgba<u8> {
    let (x0, y0) = (u.floor(), v.floor());
    let (tx, ty) = (u - x0, v - y0);
    #[allow(clippy::cast_possible_truncation)]
    let (x0, y0) = (x0 as i64, y0 as i64);

    let mut acc = [0.0_f64; 4];
    for (j, wy) in [(0, 1.0 - ty), (1, ty)] {
        for (i, wx) in [(0, 1.0 - tx), (1, tx)] {
            accumulate(&mut acc, clamped_pixel(source, x0 + i, y0 + j), wx * wy);
        }
    }
    to_rgba(acc)
}

fn bicubic(source: &RgbaImage, u: f64, v: f64) -> Rgba<u8> {
    let (x0, y0) = (u.floor(), v.floor());
    let (tx, ty) = (u - x0, v - y0);
    #[allow(clippy::cast_possible_truncation)]
    let (x0, y0) = (x0 as i64, y0 as i64);

    let mut acc = [0.0_f64; 4];
    for j in -1_i64..=2 {
        #[allow(clippy::cast_precision_loss)]
        let wy = cubic_weight(ty - j as f64);
        for i in -1_i64..=2 {
            #[allow(clippy::cast_precision_loss)]
            let wx = cubic_weight(tx - i as f64);
            accumulate(&mut acc, clamped_pixel(source, x0 + i, y0 + j), wx * wy);
        }
    }
    to_rgba(acc)
}

/// Keys cubic convolution kernel.
fn cubic_weight(distance: f64) -> f64 {
    let d = distance.abs();
    if d <= 1.0 {
        (CUBIC_A + 2.0) * d * d * d - (CUBIC_A + 3.0) * d * d + 1.0
    } else if d < 2.0 {
        CUBIC_A * d * d * d - 5.0 * CUBIC_A * d * d + 8.0 * CUBIC_A * d - 4.0 * CUBIC_A
    } else {
        0.0
    }
}

fn clamped_pixel(source: &RgbaImage, x: i64, y: i64) -> &Rgba<u8> {
    let max_x = i64::from(source.width()) - 1;
    let max_y = i64::from(source.height()) - 1;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (x, y) = (x.clamp(0, max_x) as u32, y.clamp(0, max_y) as u32);
    source.get_pixel(x, y)
}

fn accumulate(acc: &mut [f64; 4], pixel: &Rgba<u8>, weight: f64) {
    for (sum, channel) in acc.iter_mut().zip(pixel.0) {
        *sum += f64::from(channel) * weight;
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_rgba(acc: [f64; 4]) -> Rgba<u8> {
    Rgba(acc.map(|v| v.round().clamp(0.0, 255.0) as u8))
}
