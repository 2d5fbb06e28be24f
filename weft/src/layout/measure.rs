//! Measure phase: child handles and their sized results.
//!
//! A [`Measurable`] is the host's view of a child node. Policies never see it
//! directly; they receive a [`Child`] per node, and measuring consumes the
//! `Child`, so no child can be measured twice within one pass. The result is
//! a [`Placeable`], which in turn is consumed when it is placed.

use std::cell::Cell;

use crate::error::LayoutError;
use crate::primitives::Size;

use super::constraints::Constraints;

/// Outcome of measuring a node: its size and, for text-like content, the
/// distance from its top edge to its first baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measured {
    pub size: Size,
    pub first_baseline: Option<i32>,
}

impl Measured {
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            first_baseline: None,
        }
    }

    pub const fn with_baseline(mut self, baseline: i32) -> Self {
        self.first_baseline = Some(baseline);
        self
    }
}

/// A child node that can be sized against constraints.
///
/// Implemented by the host. Nested layouts implement it by running their
/// own pass, which is why measuring may fail.
pub trait Measurable {
    fn measure(&self, constraints: Constraints) -> Result<Measured, LayoutError>;
}

/// A leaf with a preferred size, coerced into whatever constraints it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fixed {
    pub size: Size,
    pub first_baseline: Option<i32>,
}

impl Fixed {
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            first_baseline: None,
        }
    }

    pub const fn with_baseline(mut self, baseline: i32) -> Self {
        self.first_baseline = Some(baseline);
        self
    }
}

impl Measurable for Fixed {
    fn measure(&self, constraints: Constraints) -> Result<Measured, LayoutError> {
        Ok(Measured {
            size: constraints.constrain(self.size),
            first_baseline: self.first_baseline,
        })
    }
}

/// One child handle, valid for a single pass.
pub struct Child<'a> {
    index: usize,
    node: &'a dyn Measurable,
    measured: &'a Cell<bool>,
}

impl<'a> Child<'a> {
    pub(crate) fn new(index: usize, node: &'a dyn Measurable, measured: &'a Cell<bool>) -> Self {
        Self {
            index,
            node,
            measured,
        }
    }

    /// Position of this child in composition order.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Measure the child, consuming the handle.
    pub fn measure(self, constraints: Constraints) -> Result<Placeable, LayoutError> {
        let measured = self.node.measure(constraints)?;
        self.measured.set(true);
        Ok(Placeable {
            index: self.index,
            size: measured.size,
            first_baseline: measured.first_baseline,
        })
    }
}

impl std::fmt::Debug for Child<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Child").field("index", &self.index).finish()
    }
}

/// A measured child waiting for its position. Deliberately not `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct Placeable {
    index: usize,
    size: Size,
    first_baseline: Option<i32>,
}

impl Placeable {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.height
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Distance from the child's top edge to its first baseline, if it has one.
    #[inline]
    pub fn first_baseline(&self) -> Option<i32> {
        self.first_baseline
    }
}
