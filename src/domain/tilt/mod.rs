// SPDX-License-Identifier: MPL-2.0
//! Tilt domain types.
//!
//! Pure value types for the interactive tilt loop: the cumulative angle and
//! the parsed user answer. No I/O happens here.

mod newtypes;

pub use newtypes::{Answer, TiltAngle};
