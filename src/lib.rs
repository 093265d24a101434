// SPDX-License-Identifier: MPL-2.0
//! `image_tilt` interactively tilts an image in fixed angular steps.
//!
//! Each time the user answers `yes`, the cumulative angle grows by 30° and a
//! fresh, canvas-expanded rotation of the original image is opened in the
//! platform's default viewer. Answering `no` ends the session.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod tilt;
pub mod viewer;

#[cfg(test)]
mod test_utils;
