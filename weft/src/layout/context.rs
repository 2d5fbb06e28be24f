//! Layout context: ambient configuration threaded through every pass.
//!
//! Hosts usually provide density and text direction as global state. Here
//! they are an explicit value handed to each pass, so a layout is a pure
//! function of (children, constraints, context).

use serde::{Deserialize, Serialize};

/// A density-independent length.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dp(pub f32);

impl From<f32> for Dp {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

/// Pixels per [`Dp`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Density(pub f32);

impl Density {
    pub const fn new(scale: f32) -> Self {
        Self(scale)
    }

    /// Convert a [`Dp`] length to whole pixels, rounding half away from zero.
    #[inline]
    pub fn round_to_px(&self, dp: Dp) -> i32 {
        let px = (dp.0 * self.0).round();
        if px.is_nan() {
            0
        } else {
            // `as` saturates for out-of-range floats.
            px as i32
        }
    }
}

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Horizontal reading direction. Relative placements mirror under `Rtl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Ambient values every measure policy can read.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutContext {
    pub density: Density,
    pub direction: LayoutDirection,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    #[inline]
    pub fn round_to_px(&self, dp: Dp) -> i32 {
        self.density.round_to_px(dp)
    }
}
