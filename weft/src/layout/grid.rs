//! Staggered grid - children dealt round-robin onto horizontal lines.
//!
//! Child `i` goes to line `i % lines`. Each line packs its children left to
//! right with no gaps; lines stack top to bottom in index order. Children are
//! measured against the incoming constraints unchanged, so content decides
//! the grid's size rather than the other way round.

use std::num::NonZeroUsize;

use crate::error::LayoutError;
use crate::primitives::to_offset;

use super::constraints::Constraints;
use super::measure::Child;
use super::pass::{MeasurePolicy, MeasureScope};
use super::placement::LayoutResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggeredGrid {
    lines: NonZeroUsize,
}

impl StaggeredGrid {
    pub const DEFAULT_LINES: usize = 3;

    /// Grid with the default three lines.
    pub fn new() -> Self {
        Self {
            lines: NonZeroUsize::new(Self::DEFAULT_LINES).unwrap_or(NonZeroUsize::MIN),
        }
    }

    /// Grid with `lines` lines. Zero lines is rejected.
    pub fn with_lines(lines: usize) -> Result<Self, LayoutError> {
        NonZeroUsize::new(lines)
            .map(|lines| Self { lines })
            .ok_or(LayoutError::InvalidLineCount)
    }

    #[inline]
    pub fn lines(&self) -> usize {
        self.lines.get()
    }

    /// Line a child at `index` is assigned to.
    #[inline]
    pub fn line_of(&self, index: usize) -> usize {
        index % self.lines.get()
    }
}

impl Default for StaggeredGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasurePolicy for StaggeredGrid {
    fn name(&self) -> &'static str {
        "StaggeredGrid"
    }

    fn measure<'a>(
        &self,
        scope: &MeasureScope<'a>,
        children: Vec<Child<'a>>,
        constraints: Constraints,
    ) -> Result<LayoutResult, LayoutError> {
        let lines = self.lines();
        let mut line_widths = vec![0u32; lines];
        let mut line_heights = vec![0u32; lines];

        let placeables = children
            .into_iter()
            .map(|child| {
                let placeable = child.measure(constraints)?;
                let line = self.line_of(placeable.index());
                line_widths[line] = line_widths[line].saturating_add(placeable.width());
                line_heights[line] = line_heights[line].max(placeable.height());
                Ok(placeable)
            })
            .collect::<Result<Vec<_>, LayoutError>>()?;

        // Widest line; all lines are empty (width 0) when there are no children,
        // which clamps to min_width.
        let widest = line_widths.iter().copied().max().unwrap_or(0);
        let width = constraints.constrain_width(widest);
        let height = constraints.constrain_height(
            line_heights.iter().fold(0u32, |acc, h| acc.saturating_add(*h)),
        );

        let mut line_tops = vec![0i32; lines];
        for line in 1..lines {
            line_tops[line] = line_tops[line - 1].saturating_add(to_offset(line_heights[line - 1]));
        }

        scope.layout(width, height, |placer| {
            let mut line_x = vec![0i32; lines];
            for placeable in placeables {
                let line = self.line_of(placeable.index());
                let x = line_x[line];
                line_x[line] = x.saturating_add(to_offset(placeable.width()));
                placer.place_relative(placeable, x, line_tops[line]);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::context::{LayoutContext, LayoutDirection};
    use crate::layout::measure::{Fixed, Measurable};
    use crate::layout::pass::run;
    use crate::primitives::{Point, Size};

    fn grid_run(grid: StaggeredGrid, leaves: &[Fixed], constraints: Constraints) -> LayoutResult {
        let children: Vec<&dyn Measurable> = leaves.iter().map(|l| l as &dyn Measurable).collect();
        run(&grid, &children, constraints, &LayoutContext::default()).unwrap()
    }

    #[test]
    fn test_zero_lines_rejected() {
        assert_eq!(StaggeredGrid::with_lines(0), Err(LayoutError::InvalidLineCount));
        assert_eq!(StaggeredGrid::default().lines(), 3);
    }

    #[test]
    fn test_height_is_sum_of_line_maxima() {
        let leaves: Vec<Fixed> = [10, 20, 30, 10, 20].iter().map(|&h| Fixed::new(7, h)).collect();
        let result = grid_run(StaggeredGrid::new(), &leaves, Constraints::UNBOUNDED);
        assert_eq!(result.height(), 60);

        // Line assignment is index mod 3, line tops are 0, 10, 30.
        let ys: Vec<i32> = result.placements().iter().map(|p| p.position.y).collect();
        assert_eq!(ys, vec![0, 10, 30, 0, 10]);
    }

    #[test]
    fn test_width_is_widest_line() {
        let leaves = [
            Fixed::new(10, 5),
            Fixed::new(40, 5),
            Fixed::new(5, 5),
            Fixed::new(25, 5),
        ];
        // Lines: [10 + 5, 40 + 25] -> widest 65.
        let result = grid_run(StaggeredGrid::with_lines(2).unwrap(), &leaves, Constraints::UNBOUNDED);
        assert_eq!(result.width(), 65);
        assert_eq!(result.placement(2).unwrap().position, Point::new(10, 0));
        assert_eq!(result.placement(3).unwrap().position, Point::new(40, 5));
    }

    #[test]
    fn test_size_clamped_into_constraints() {
        let leaves = [Fixed::new(30, 30), Fixed::new(30, 30)];
        let constraints = Constraints::new(0, 50, 0, 20);
        let result = grid_run(StaggeredGrid::with_lines(1).unwrap(), &leaves, constraints);
        assert_eq!(result.size(), Size::new(50, 20));

        let small = [Fixed::new(1, 1)];
        let result = grid_run(StaggeredGrid::new(), &small, Constraints::new(40, 100, 30, 100));
        assert_eq!(result.size(), Size::new(40, 30));
    }

    #[test]
    fn test_no_children_uses_minimums() {
        let result = grid_run(StaggeredGrid::new(), &[], Constraints::new(12, 100, 34, 100));
        assert_eq!(result.size(), Size::new(12, 34));
        assert!(result.placements().is_empty());
    }

    #[test]
    fn test_single_line_behaves_like_row() {
        let leaves = [Fixed::new(10, 4), Fixed::new(20, 8), Fixed::new(30, 6)];
        let result = grid_run(StaggeredGrid::with_lines(1).unwrap(), &leaves, Constraints::UNBOUNDED);

        let xs: Vec<i32> = result.placements().iter().map(|p| p.position.x).collect();
        assert_eq!(xs, vec![0, 10, 30]);
        assert!(result.placements().iter().all(|p| p.position.y == 0));
        assert_eq!(result.size(), Size::new(60, 8));
    }

    #[test]
    fn test_every_child_placed_once_for_many_line_counts() {
        let leaves: Vec<Fixed> = (0..11).map(|i| Fixed::new(3 + i, 2 + (i % 4))).collect();
        for lines in 1..=13 {
            let grid = StaggeredGrid::with_lines(lines).unwrap();
            let result = grid_run(grid, &leaves, Constraints::UNBOUNDED);
            assert_eq!(result.placements().len(), leaves.len());
            for (i, p) in result.placements().iter().enumerate() {
                assert_eq!(p.index, i);
            }

            let mut used: Vec<usize> = (0..leaves.len()).map(|i| grid.line_of(i)).collect();
            used.sort_unstable();
            used.dedup();
            assert_eq!(used, (0..lines.min(leaves.len())).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_height_independent_of_widths() {
        let narrow: Vec<Fixed> = [5, 9, 2, 7].iter().map(|&h| Fixed::new(1, h)).collect();
        let wide: Vec<Fixed> = [5, 9, 2, 7].iter().map(|&h| Fixed::new(500, h)).collect();
        let grid = StaggeredGrid::with_lines(2).unwrap();
        assert_eq!(
            grid_run(grid, &narrow, Constraints::UNBOUNDED).height(),
            grid_run(grid, &wide, Constraints::UNBOUNDED).height()
        );
    }

    #[test]
    fn test_rtl_mirrors_lines() {
        let leaves = [Fixed::new(10, 5), Fixed::new(20, 5)];
        let ctx = LayoutContext::default().with_direction(LayoutDirection::Rtl);
        let children: Vec<&dyn Measurable> = leaves.iter().map(|l| l as &dyn Measurable).collect();
        let grid = StaggeredGrid::with_lines(1).unwrap();
        let result = run(&grid, &children, Constraints::UNBOUNDED, &ctx).unwrap();

        assert_eq!(result.width(), 30);
        assert_eq!(result.placement(0).unwrap().position, Point::new(20, 0));
        assert_eq!(result.placement(1).unwrap().position, Point::new(0, 0));
    }
}
