//! Padding wrapper - insets a single child.
//!
//! The child is measured against the incoming constraints shrunk by the
//! padding, and the wrapper reports the child's size plus padding, clamped
//! back into the incoming constraints.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::primitives::to_extent;

use super::constraints::Constraints;
use super::context::Dp;
use super::measure::Child;
use super::pass::{MeasurePolicy, MeasureScope};
use super::placement::LayoutResult;

/// Insets on each side, in [`Dp`]. `start`/`end` follow layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub start: Dp,
    pub top: Dp,
    pub end: Dp,
    pub bottom: Dp,
}

impl Padding {
    pub fn new(start: f32, top: f32, end: f32, bottom: f32) -> Self {
        Self {
            start: Dp(start),
            top: Dp(top),
            end: Dp(end),
            bottom: Dp(bottom),
        }
    }

    /// Uniform padding on all sides.
    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Symmetric padding (horizontal, vertical).
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddingLayout {
    padding: Padding,
    rtl_aware: bool,
}

impl PaddingLayout {
    /// Direction-aware padding: `start` is the leading edge.
    pub fn new(padding: Padding) -> Self {
        Self {
            padding,
            rtl_aware: true,
        }
    }

    /// Padding where `start` is always the left edge.
    pub fn absolute(padding: Padding) -> Self {
        Self {
            padding,
            rtl_aware: false,
        }
    }
}

impl MeasurePolicy for PaddingLayout {
    fn name(&self) -> &'static str {
        "Padding"
    }

    fn measure<'a>(
        &self,
        scope: &MeasureScope<'a>,
        children: Vec<Child<'a>>,
        constraints: Constraints,
    ) -> Result<LayoutResult, LayoutError> {
        scope.expect_children(1)?;
        let Some(child) = children.into_iter().next() else {
            return Err(LayoutError::ChildCount {
                policy: self.name(),
                expected: 1,
                found: 0,
            });
        };

        // Negative insets are treated as zero.
        let px = |dp: Dp| scope.round_to_px(dp).max(0);
        let start = px(self.padding.start);
        let top = px(self.padding.top);
        let horizontal = to_extent(i64::from(start) + i64::from(px(self.padding.end)));
        let vertical = to_extent(i64::from(top) + i64::from(px(self.padding.bottom)));

        let placeable = child.measure(constraints.deflate(horizontal, vertical))?;

        let width = constraints.constrain_width(placeable.width().saturating_add(horizontal));
        let height = constraints.constrain_height(placeable.height().saturating_add(vertical));

        let rtl_aware = self.rtl_aware;
        scope.layout(width, height, |placer| {
            if rtl_aware {
                placer.place_relative(placeable, start, top);
            } else {
                placer.place(placeable, start, top);
            }
        })
    }
}
