// SPDX-License-Identifier: MPL-2.0
//! Tilt newtypes.

// =============================================================================
// TiltAngle
// =============================================================================

/// Cumulative tilt angle in degrees.
///
/// Unlike a display rotation, the value is never wrapped at 360°: it only
/// grows, one step per accepted tilt.
///
/// # Example
///
/// ```
/// use image_tilt::domain::tilt::TiltAngle;
///
/// let angle = TiltAngle::ZERO.advance(30).advance(30);
/// assert_eq!(angle.degrees(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TiltAngle(u32);

impl TiltAngle {
    /// No tilt (0°).
    pub const ZERO: Self = Self(0);

    /// Creates an angle from a raw degree value.
    #[must_use]
    pub fn new(degrees: u32) -> Self {
        Self(degrees)
    }

    /// Returns the angle advanced by `step` degrees.
    #[must_use]
    pub fn advance(self, step: u32) -> Self {
        Self(self.0.saturating_add(step))
    }

    /// Returns the cumulative angle in degrees.
    #[must_use]
    pub fn degrees(self) -> u32 {
        self.0
    }
}

// =============================================================================
// Answer
// =============================================================================

/// A user reply to the tilt prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Invalid,
}

impl Answer {
    /// Parses a raw input line.
    ///
    /// Surrounding whitespace is ignored and matching is case-insensitive;
    /// only the exact words `yes` and `no` are accepted.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "yes" => Answer::Yes,
            "no" => Answer::No,
            _ => Answer::Invalid,
        }
    }
}
