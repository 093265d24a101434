// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the fixed values
//! used by the tilt loop.

// ==========================================================================
// Tilt Defaults
// ==========================================================================

/// Image loaded at startup, relative to the working directory.
pub const DEFAULT_IMAGE_PATH: &str = "object.jpg.jpg";

/// Degrees added to the cumulative angle on each accepted tilt.
pub const TILT_STEP_DEGREES: u32 = 30;

/// Whether rotated output grows to fit the rotated bounds.
pub const EXPAND_CANVAS: bool = true;

// ==========================================================================
// Localization Defaults
// ==========================================================================

/// Locale used when no other source selects one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log filter applied when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";
