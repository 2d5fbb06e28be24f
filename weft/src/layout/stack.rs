//! Vertical stack - children top to bottom at x = 0, no gaps.
//!
//! Unlike the grid, the stack does not shrink to its content: it claims the
//! full maximum size of its constraints.

use crate::error::{Axis, LayoutError};
use crate::primitives::to_offset;

use super::constraints::Constraints;
use super::measure::Child;
use super::pass::{MeasurePolicy, MeasureScope};
use super::placement::LayoutResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerticalStack;

impl VerticalStack {
    pub fn new() -> Self {
        Self
    }
}

impl MeasurePolicy for VerticalStack {
    fn name(&self) -> &'static str {
        "VerticalStack"
    }

    fn measure<'a>(
        &self,
        scope: &MeasureScope<'a>,
        children: Vec<Child<'a>>,
        constraints: Constraints,
    ) -> Result<LayoutResult, LayoutError> {
        let placeables = children
            .into_iter()
            .map(|child| child.measure(constraints))
            .collect::<Result<Vec<_>, _>>()?;

        if !constraints.has_bounded_width() {
            return Err(LayoutError::UnboundedConstraints {
                policy: self.name(),
                axis: Axis::Horizontal,
            });
        }
        if !constraints.has_bounded_height() {
            return Err(LayoutError::UnboundedConstraints {
                policy: self.name(),
                axis: Axis::Vertical,
            });
        }

        scope.layout(constraints.max_width, constraints.max_height, |placer| {
            let mut y = 0i32;
            for placeable in placeables {
                let height = to_offset(placeable.height());
                placer.place_relative(placeable, 0, y);
                y = y.saturating_add(height);
            }
        })
    }
}
