//! Placement phase: the scope that assigns offsets, and the pass result.

use serde::Serialize;

use crate::error::LayoutError;
use crate::primitives::{Point, Size, to_offset};

use super::context::LayoutDirection;
use super::measure::Placeable;

/// Final position of one child, relative to its container's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub index: usize,
    pub position: Point,
    pub size: Size,
}

/// What a pass hands back to the host: the container's size plus one
/// placement per child, in child order.
///
/// Only [`MeasureScope::layout`](super::pass::MeasureScope::layout) builds
/// these, so every result has gone through the placement checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutResult {
    size: Size,
    first_baseline: Option<i32>,
    placements: Vec<Placement>,
}

impl LayoutResult {
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Topmost child baseline in container coordinates.
    #[inline]
    pub fn first_baseline(&self) -> Option<i32> {
        self.first_baseline
    }

    #[inline]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placement of the child at `index`.
    #[inline]
    pub fn placement(&self, index: usize) -> Option<&Placement> {
        self.placements.get(index)
    }

    pub fn into_placements(self) -> Vec<Placement> {
        self.placements
    }
}

/// Receives every measured child exactly once and records where it goes.
pub struct Placer {
    size: Size,
    direction: LayoutDirection,
    slots: Vec<Option<Placement>>,
    first_baseline: Option<i32>,
}

impl Placer {
    pub(crate) fn new(size: Size, direction: LayoutDirection, child_count: usize) -> Self {
        Self {
            size,
            direction,
            slots: vec![None; child_count],
            first_baseline: None,
        }
    }

    /// Place a child at `(x, y)` regardless of layout direction.
    pub fn place(&mut self, placeable: Placeable, x: i32, y: i32) {
        let index = placeable.index();
        let Some(slot) = self.slots.get_mut(index) else {
            tracing::warn!(index, "ignoring placeable from a different pass");
            return;
        };
        if slot.is_some() {
            tracing::warn!(index, "ignoring second placement of child");
            return;
        }

        if let Some(baseline) = placeable.first_baseline() {
            let candidate = y.saturating_add(baseline);
            self.first_baseline = Some(self.first_baseline.map_or(candidate, |b| b.min(candidate)));
        }

        tracing::trace!(index, x, y, width = placeable.width(), height = placeable.height(), "place");
        *slot = Some(Placement {
            index,
            position: Point::new(x, y),
            size: placeable.size(),
        });
    }

    /// Place a child at `(x, y)` measured from the leading edge: under
    /// right-to-left direction `x` counts from the container's right edge.
    pub fn place_relative(&mut self, placeable: Placeable, x: i32, y: i32) {
        let x = match self.direction {
            LayoutDirection::Ltr => x,
            LayoutDirection::Rtl => to_offset(self.size.width)
                .saturating_sub(to_offset(placeable.width()))
                .saturating_sub(x),
        };
        self.place(placeable, x, y);
    }

    pub(crate) fn finish(self, policy: &'static str) -> Result<LayoutResult, LayoutError> {
        let placements = self
            .slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| slot.ok_or(LayoutError::UnplacedChild { policy, index }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LayoutResult {
            size: self.size,
            first_baseline: self.first_baseline,
            placements,
        })
    }
}
