//! Layout constraints for constraint-based layout.
//!
//! Constraints flow down the tree, specifying the min/max bounds a child may
//! occupy. A container may narrow them before forwarding, never widen them.

use crate::error::LayoutError;
use crate::primitives::Size;

/// Min/max bounds imposed on a child during measurement.
///
/// All values are pixels. `max_*` may be [`Constraints::INFINITY`] to mean
/// unbounded; `min_*` never is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}

impl Constraints {
    /// Sentinel for an unbounded maximum.
    pub const INFINITY: u32 = u32::MAX;

    /// Unbounded constraints (zero min, infinite max).
    pub const UNBOUNDED: Self = Self {
        min_width: 0,
        max_width: Self::INFINITY,
        min_height: 0,
        max_height: Self::INFINITY,
    };

    #[inline]
    pub const fn new(min_width: u32, max_width: u32, min_height: u32, max_height: u32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Tight constraints (exact size required).
    #[inline]
    pub const fn fixed(width: u32, height: u32) -> Self {
        Self::new(width, width, height, height)
    }

    /// Loose constraints with maximum bounds.
    #[inline]
    pub const fn loose(max_width: u32, max_height: u32) -> Self {
        Self::new(0, max_width, 0, max_height)
    }

    /// Check the `min <= max` invariant.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let ok = self.min_width <= self.max_width
            && self.min_height <= self.max_height
            && self.min_width != Self::INFINITY
            && self.min_height != Self::INFINITY;
        if ok {
            Ok(())
        } else {
            Err(LayoutError::InvalidConstraints {
                min_width: self.min_width,
                max_width: self.max_width,
                min_height: self.min_height,
                max_height: self.max_height,
            })
        }
    }

    #[inline]
    pub fn constrain_width(&self, width: u32) -> u32 {
        debug_assert!(self.min_width <= self.max_width, "inverted width constraints");
        width.clamp(self.min_width, self.max_width)
    }

    #[inline]
    pub fn constrain_height(&self, height: u32) -> u32 {
        debug_assert!(self.min_height <= self.max_height, "inverted height constraints");
        height.clamp(self.min_height, self.max_height)
    }

    /// Constrain a size to these bounds.
    #[inline]
    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: self.constrain_width(size.width),
            height: self.constrain_height(size.height),
        }
    }

    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width != Self::INFINITY
    }

    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height != Self::INFINITY
    }

    /// Whether these are tight constraints (min == max).
    #[inline]
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Whether `size` lies within these bounds.
    #[inline]
    pub fn is_satisfied_by(&self, size: Size) -> bool {
        size.width >= self.min_width
            && size.width <= self.max_width
            && size.height >= self.min_height
            && size.height <= self.max_height
    }

    /// Shrink constraints by `horizontal` and `vertical` pixels.
    ///
    /// Unbounded maxima stay unbounded. Both ends floor at zero, so the
    /// result still satisfies `min <= max`.
    #[inline]
    pub fn deflate(&self, horizontal: u32, vertical: u32) -> Self {
        Self {
            min_width: self.min_width.saturating_sub(horizontal),
            max_width: shrink_max(self.max_width, horizontal),
            min_height: self.min_height.saturating_sub(vertical),
            max_height: shrink_max(self.max_height, vertical),
        }
    }

    /// Drop the minimums, keeping the maximums.
    #[inline]
    pub fn loosen(&self) -> Self {
        Self {
            min_width: 0,
            min_height: 0,
            ..*self
        }
    }

    /// The smallest size that satisfies these constraints.
    #[inline]
    pub fn smallest(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }
}

#[inline]
fn shrink_max(max: u32, by: u32) -> u32 {
    if max == Constraints::INFINITY {
        max
    } else {
        max.saturating_sub(by)
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_constraints() {
        let c = Constraints::fixed(100, 50);
        assert!(c.is_tight());
        assert_eq!(c.min_width, 100);
        assert_eq!(c.max_width, 100);
        assert_eq!(c.min_height, 50);
        assert_eq!(c.max_height, 50);
    }

    #[test]
    fn test_loose_constraints() {
        let c = Constraints::loose(100, 50);
        assert!(!c.is_tight());
        assert_eq!(c.min_width, 0);
        assert_eq!(c.max_width, 100);
    }

    #[test]
    fn test_constrain() {
        let c = Constraints::new(50, 200, 30, 100);

        assert_eq!(c.constrain(Size::new(100, 50)), Size::new(100, 50));
        assert_eq!(c.constrain(Size::new(10, 10)), Size::new(50, 30));
        assert_eq!(c.constrain(Size::new(500, 500)), Size::new(200, 100));
    }

    #[test]
    fn test_deflate() {
        let c = Constraints::fixed(100, 50);
        let deflated = c.deflate(20, 20);
        assert_eq!(deflated, Constraints::fixed(80, 30));

        // Narrowing never goes negative and never inverts.
        let tiny = Constraints::new(5, 10, 0, 4).deflate(30, 30);
        assert_eq!(tiny, Constraints::new(0, 0, 0, 0));
        assert!(tiny.validate().is_ok());
    }

    #[test]
    fn test_deflate_keeps_unbounded() {
        let c = Constraints::UNBOUNDED.deflate(16, 16);
        assert!(!c.has_bounded_width());
        assert!(!c.has_bounded_height());
    }

    #[test]
    fn test_bounded_checks() {
        let unbounded = Constraints::UNBOUNDED;
        assert!(!unbounded.has_bounded_width());
        assert!(!unbounded.has_bounded_height());

        let bounded = Constraints::loose(100, 50);
        assert!(bounded.has_bounded_width());
        assert!(bounded.has_bounded_height());
    }

    #[test]
    fn test_validate_rejects_inverted() {
        let c = Constraints::new(200, 100, 0, 10);
        assert!(matches!(
            c.validate(),
            Err(LayoutError::InvalidConstraints { min_width: 200, max_width: 100, .. })
        ));
        assert!(Constraints::new(Constraints::INFINITY, Constraints::INFINITY, 0, 0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_loosen_and_smallest() {
        let c = Constraints::new(10, 100, 20, 200);
        assert_eq!(c.loosen(), Constraints::loose(100, 200));
        assert_eq!(c.smallest(), Size::new(10, 20));
        assert!(c.is_satisfied_by(Size::new(10, 200)));
        assert!(!c.is_satisfied_by(Size::new(101, 20)));
    }
}
