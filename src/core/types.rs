use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// A point in element-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn distance_to_origin(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Length expressed either in absolute pixels or relative to a reference extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Length {
    Pixels(f64),
    /// Percentage in `0..=100` of a caller-supplied reference extent.
    Percent(f64),
}

impl Length {
    /// Resolves the length against `reference` (used for percent values).
    #[must_use]
    pub fn resolve(self, reference: f64) -> f64 {
        match self {
            Self::Pixels(px) => px,
            Self::Percent(pct) => reference * pct / 100.0,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::Pixels(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> SceneResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SceneError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Cosine of an angle given in degrees.
#[must_use]
pub fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Sine of an angle given in degrees.
#[must_use]
pub fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Rounds to `decimals` fractional digits. Path emission uses this to keep
/// output deterministic across repeated draws.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
