//! First-baseline-to-top wrapper.
//!
//! Wraps one child that exposes a first baseline (typically text) and pads it
//! from above so the distance from the wrapper's top edge to that baseline is
//! exactly `distance`, independent of the child's own font metrics.

use crate::error::LayoutError;
use crate::primitives::{to_extent, to_offset};

use super::constraints::Constraints;
use super::context::Dp;
use super::measure::Child;
use super::pass::{MeasurePolicy, MeasureScope};
use super::placement::LayoutResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstBaselineToTop {
    distance: Dp,
}

impl FirstBaselineToTop {
    pub fn new(distance: impl Into<Dp>) -> Self {
        Self {
            distance: distance.into(),
        }
    }
}

impl MeasurePolicy for FirstBaselineToTop {
    fn name(&self) -> &'static str {
        "FirstBaselineToTop"
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

        let placeable = child.measure(constraints)?;
        let first_baseline = placeable
            .first_baseline()
            .ok_or(LayoutError::MissingFirstBaseline { policy: self.name() })?;

        // Shift by the child's own baseline so top-to-baseline == distance.
        let placeable_y = scope.round_to_px(self.distance).saturating_sub(first_baseline);
        let width = placeable.width();
        let height = to_extent(i64::from(to_offset(placeable.height())) + i64::from(placeable_y));

        scope.layout(width, height, |placer| {
            placer.place_relative(placeable, 0, placeable_y);
        })
    }
}
