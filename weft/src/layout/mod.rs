//! Layout System for Weft
//!
//! Custom layouts implement [`MeasurePolicy`]; the host hands them child
//! handles and constraints, and gets back a size plus one placement per child.
//!
//! # Architecture
//!
//! ```text
//! pass::run -> measure every Child -> Placeables -> scope.layout(w, h) -> place each -> LayoutResult
//! ```
//!
//! Each pass is self-contained: nothing is cached between passes.

pub mod constraints;
pub mod context;
pub mod measure;
pub mod pass;
pub mod placement;

// policies
pub mod baseline;
pub mod grid;
pub mod padding;
pub mod stack;

// Re-export core types
pub use constraints::Constraints;
pub use context::{Density, Dp, LayoutContext, LayoutDirection};
pub use measure::{Child, Fixed, Measurable, Measured, Placeable};
pub use pass::{MeasurePolicy, MeasureScope, run};
pub use placement::{LayoutResult, Placement, Placer};

// Re-export policies
pub use baseline::FirstBaselineToTop;
pub use grid::StaggeredGrid;
pub use padding::{Padding, PaddingLayout};
pub use stack::VerticalStack;
