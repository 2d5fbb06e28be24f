//! Layout and scene error types.

use std::path::PathBuf;

use thiserror::Error;

/// Axis of a constraint, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("line count must be at least 1")]
    InvalidLineCount,

    #[error("invalid constraints: width {min_width}..={max_width}, height {min_height}..={max_height}")]
    InvalidConstraints {
        min_width: u32,
        max_width: u32,
        min_height: u32,
        max_height: u32,
    },

    #[error("{policy} needs a bounded {axis} maximum")]
    UnboundedConstraints { policy: &'static str, axis: Axis },

    #[error("{policy} requires a child with a first baseline")]
    MissingFirstBaseline { policy: &'static str },

    #[error("{policy} expects {expected} child(ren), got {found}")]
    ChildCount {
        policy: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{policy} started placement before measuring child {index}")]
    UnmeasuredChild { policy: &'static str, index: usize },

    #[error("{policy} did not place child {index}")]
    UnplacedChild { policy: &'static str, index: usize },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
