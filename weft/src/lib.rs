//! Weft: two-phase custom layouts
//!
//! Weft implements the measure/place contract that declarative UI toolkits
//! expose for custom layouts, independent of any particular toolkit:
//! - a [`MeasurePolicy`](layout::MeasurePolicy) measures every child, then
//!   sizes itself and places each child exactly once
//! - the host supplies children through [`Measurable`](layout::Measurable)
//! - ambient values (density, text direction) travel in a
//!   [`LayoutContext`](layout::LayoutContext) instead of global state
//!
//! # Usage
//!
//! ```
//! use weft::layout::{run, Constraints, Fixed, LayoutContext, Measurable, StaggeredGrid};
//!
//! let chips: Vec<Fixed> = [40, 60, 50, 30].iter().map(|&w| Fixed::new(w, 20)).collect();
//! let children: Vec<&dyn Measurable> = chips.iter().map(|c| c as &dyn Measurable).collect();
//!
//! let grid = StaggeredGrid::with_lines(2).unwrap();
//! let result = run(&grid, &children, Constraints::loose(300, 300), &LayoutContext::default()).unwrap();
//! assert_eq!((result.width(), result.height()), (90, 40));
//! ```

// Core primitives
pub mod error;
pub mod primitives;

// Layout system (measure policies and the pass driver)
pub mod layout;

// Scene trees and configuration files
pub mod config;
pub mod scene;

// Re-export core types
pub use error::{Axis, LayoutError, LoadError};
pub use primitives::{Point, Rect, Size};
pub use scene::{Frame, Node};
