// SPDX-License-Identifier: MPL-2.0
//! Domain layer.
//!
//! Pure types with no dependency on the console, the filesystem, or the
//! image codecs.

pub mod tilt;
