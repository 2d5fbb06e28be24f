//! Pass driver: runs one measure policy over one set of children.
//!
//! ```text
//! run(policy, children, constraints, ctx)
//!   -> policy.measure(scope, [Child], constraints)
//!        Child::measure -> Placeable          (all children, phase 1)
//!        scope.layout(w, h, |placer| ...)     (all placeables, phase 2)
//!   -> LayoutResult
//! ```
//!
//! The driver owns the bookkeeping for the two-phase discipline: placement
//! cannot start while a child is unmeasured, and a result is only produced
//! once every child has been placed.

use std::cell::Cell;

use crate::error::LayoutError;
use crate::primitives::Size;

use super::constraints::Constraints;
use super::context::{Dp, LayoutContext};
use super::measure::{Child, Measurable};
use super::placement::{LayoutResult, Placer};

/// A custom layout: measures its children, then sizes itself and places them.
pub trait MeasurePolicy: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    fn measure<'a>(
        &self,
        scope: &MeasureScope<'a>,
        children: Vec<Child<'a>>,
        constraints: Constraints,
    ) -> Result<LayoutResult, LayoutError>;
}

/// Per-pass view handed to a [`MeasurePolicy`].
pub struct MeasureScope<'a> {
    policy: &'static str,
    context: &'a LayoutContext,
    measured: &'a [Cell<bool>],
}

impl<'a> MeasureScope<'a> {
    #[inline]
    pub fn context(&self) -> &LayoutContext {
        self.context
    }

    #[inline]
    pub fn round_to_px(&self, dp: Dp) -> i32 {
        self.context.round_to_px(dp)
    }

    /// Fail unless the pass has exactly `expected` children.
    pub fn expect_children(&self, expected: usize) -> Result<(), LayoutError> {
        if self.measured.len() == expected {
            Ok(())
        } else {
            Err(LayoutError::ChildCount {
                policy: self.policy,
                expected,
                found: self.measured.len(),
            })
        }
    }

    /// Declare the container size and place children.
    ///
    /// Every child must already be measured; `place` must place each of
    /// them.
    pub fn layout<F>(&self, width: u32, height: u32, place: F) -> Result<LayoutResult, LayoutError>
    where
        F: FnOnce(&mut Placer),
    {
        if let Some(index) = self.measured.iter().position(|m| !m.get()) {
            return Err(LayoutError::UnmeasuredChild {
                policy: self.policy,
                index,
            });
        }

        let mut placer = Placer::new(Size::new(width, height), self.context.direction, self.measured.len());
        place(&mut placer);
        placer.finish(self.policy)
    }
}

/// Run one layout pass.
pub fn run(
    policy: &dyn MeasurePolicy,
    children: &[&dyn Measurable],
    constraints: Constraints,
    context: &LayoutContext,
) -> Result<LayoutResult, LayoutError> {
    constraints.validate()?;

    let name = policy.name();
    let flags: Vec<Cell<bool>> = children.iter().map(|_| Cell::new(false)).collect();
    let scope = MeasureScope {
        policy: name,
        context,
        measured: &flags,
    };
    let handles = children
        .iter()
        .zip(&flags)
        .enumerate()
        .map(|(index, (node, flag))| Child::new(index, *node, flag))
        .collect();

    let result = policy.measure(&scope, handles, constraints)?;
    if result.placements().len() != children.len() {
        return Err(LayoutError::UnplacedChild {
            policy: name,
            index: result.placements().len().min(children.len()),
        });
    }

    tracing::debug!(
        policy = name,
        children = children.len(),
        min_width = constraints.min_width,
        max_width = constraints.max_width,
        min_height = constraints.min_height,
        max_height = constraints.max_height,
        width = result.width(),
        height = result.height(),
        "layout pass"
    );
    if !constraints.is_satisfied_by(result.size()) {
        tracing::warn!(
            policy = name,
            width = result.width(),
            height = result.height(),
            max_width = constraints.max_width,
            max_height = constraints.max_height,
            "container size outside its constraints"
        );
    }

    Ok(result)
}
