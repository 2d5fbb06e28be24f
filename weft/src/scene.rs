//! Scene trees: nested layouts described as data.
//!
//! A [`Node`] is either a leaf box or a container backed by one of the
//! measure policies. Containers implement nesting by wrapping each child in a
//! [`Measurable`] that runs the child's own pass when measured, then keeping
//! the child's frame so the whole tree can be reported in absolute
//! coordinates.

use std::cell::RefCell;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::read_json;
use crate::error::{LayoutError, LoadError};
use crate::layout::{
    Constraints, Fixed, FirstBaselineToTop, LayoutContext, Measurable, MeasurePolicy, Measured, Padding,
    PaddingLayout, StaggeredGrid, VerticalStack, pass,
};
use crate::primitives::{Point, Rect, Size};

fn default_lines() -> usize {
    StaggeredGrid::DEFAULT_LINES
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// A leaf with a preferred size, e.g. an image or a line of text.
    Box {
        width: u32,
        height: u32,
        #[serde(default)]
        baseline: Option<i32>,
        #[serde(default)]
        label: Option<String>,
    },
    Grid {
        #[serde(default = "default_lines")]
        lines: usize,
        children: Vec<Node>,
    },
    Column {
        children: Vec<Node>,
    },
    Padding {
        #[serde(default)]
        padding: Padding,
        #[serde(default = "default_true")]
        rtl_aware: bool,
        child: Box<Node>,
    },
    BaselineToTop {
        distance: f32,
        child: Box<Node>,
    },
}

impl Node {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read a scene from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        read_json(path)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Node::Box { .. } => "box",
            Node::Grid { .. } => "grid",
            Node::Column { .. } => "column",
            Node::Padding { .. } => "padding",
            Node::BaselineToTop { .. } => "baseline_to_top",
        }
    }

    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Box { .. } => Vec::new(),
            Node::Grid { children, .. } | Node::Column { children } => children.iter().collect(),
            Node::Padding { child, .. } | Node::BaselineToTop { child, .. } => vec![child.as_ref()],
        }
    }

    /// The measure policy behind a container node; `None` for leaves.
    pub fn policy(&self) -> Result<Option<Box<dyn MeasurePolicy>>, LayoutError> {
        let policy: Box<dyn MeasurePolicy> = match self {
            Node::Box { .. } => return Ok(None),
            Node::Grid { lines, .. } => Box::new(StaggeredGrid::with_lines(*lines)?),
            Node::Column { .. } => Box::new(VerticalStack::new()),
            Node::Padding {
                padding, rtl_aware, ..
            } => {
                if *rtl_aware {
                    Box::new(PaddingLayout::new(*padding))
                } else {
                    Box::new(PaddingLayout::absolute(*padding))
                }
            }
            Node::BaselineToTop { distance, .. } => Box::new(FirstBaselineToTop::new(*distance)),
        };
        Ok(Some(policy))
    }

    /// Lay out this subtree with its origin at (0, 0).
    pub fn layout(&self, constraints: Constraints, context: &LayoutContext) -> Result<Frame, LayoutError> {
        constraints.validate()?;
        let Some(policy) = self.policy()? else {
            return self.leaf_frame(constraints);
        };

        let children: Vec<SceneChild<'_>> = self
            .children()
            .into_iter()
            .map(|node| SceneChild::new(node, context))
            .collect();
        let handles: Vec<&dyn Measurable> = children.iter().map(|c| c as &dyn Measurable).collect();
        let result = pass::run(policy.as_ref(), &handles, constraints, context)?;

        let frames = children
            .into_iter()
            .zip(result.placements())
            .map(|(child, placement)| {
                let mut frame = child.frame.into_inner().ok_or(LayoutError::UnmeasuredChild {
                    policy: policy.name(),
                    index: placement.index,
                })?;
                frame.translate(placement.position);
                Ok(frame)
            })
            .collect::<Result<Vec<_>, LayoutError>>()?;

        Ok(Frame {
            kind: self.kind(),
            label: None,
            bounds: Rect::from_origin_size(Point::ORIGIN, result.size()),
            first_baseline: result.first_baseline(),
            children: frames,
        })
    }

    fn leaf_frame(&self, constraints: Constraints) -> Result<Frame, LayoutError> {
        let Node::Box {
            width,
            height,
            baseline,
            label,
        } = self
        else {
            return Err(LayoutError::ChildCount {
                policy: self.kind(),
                expected: 0,
                found: self.children().len(),
            });
        };

        let leaf = Fixed {
            size: Size::new(*width, *height),
            first_baseline: *baseline,
        };
        let measured = leaf.measure(constraints)?;
        Ok(Frame {
            kind: self.kind(),
            label: label.clone(),
            bounds: Rect::from_origin_size(Point::ORIGIN, measured.size),
            first_baseline: measured.first_baseline,
            children: Vec::new(),
        })
    }
}

/// Child handle that remembers the frame produced while measuring.
struct SceneChild<'n> {
    node: &'n Node,
    context: &'n LayoutContext,
    frame: RefCell<Option<Frame>>,
}

impl<'n> SceneChild<'n> {
    fn new(node: &'n Node, context: &'n LayoutContext) -> Self {
        Self {
            node,
            context,
            frame: RefCell::new(None),
        }
    }
}

impl Measurable for SceneChild<'_> {
    fn measure(&self, constraints: Constraints) -> Result<Measured, LayoutError> {
        let frame = self.node.layout(constraints, self.context)?;
        let measured = Measured {
            size: frame.bounds.size(),
            first_baseline: frame.first_baseline,
        };
        *self.frame.borrow_mut() = Some(frame);
        Ok(measured)
    }
}

/// A laid-out node. `bounds` is in scene coordinates; `first_baseline` is
/// measured from the frame's own top edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub bounds: Rect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_baseline: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Frame>,
}

impl Frame {
    /// Move this frame and all descendants by `offset`.
    pub fn translate(&mut self, offset: Point) {
        self.bounds = self.bounds.translate(offset);
        for child in &mut self.children {
            child.translate(offset);
        }
    }

    /// Whether this frame came from a leaf box. Empty containers are not leaves.
    pub fn is_leaf(&self) -> bool {
        self.kind == "box"
    }

    /// Leaf frames in depth-first order.
    pub fn leaves(&self) -> Vec<&Frame> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Frame>) {
        if self.is_leaf() {
            out.push(self);
        }
        for child in &self.children {
            child.collect_leaves(out);
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.kind, indent = depth * 2)?;
        if let Some(label) = &self.label {
            write!(f, " {:?}", label)?;
        }
        write!(
            f,
            " @({}, {}) {}x{}",
            self.bounds.x, self.bounds.y, self.bounds.width, self.bounds.height
        )?;
        if let Some(baseline) = self.first_baseline {
            write!(f, " baseline={}", baseline)?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let node = Node::from_json_str(r#"{"type":"grid","children":[]}"#).unwrap();
        assert_eq!(
            node,
            Node::Grid {
                lines: 3,
                children: vec![]
            }
        );

        let node = Node::from_json_str(r#"{"type":"padding","child":{"type":"box","width":1,"height":2}}"#).unwrap();
        let Node::Padding {
            padding, rtl_aware, ..
        } = node
        else {
            panic!("expected padding node");
        };
        assert_eq!(padding, Padding::default());
        assert!(rtl_aware);
    }

    #[test]
    fn test_nested_frames_are_absolute() {
        let scene = Node::from_json_str(
            r#"{
                "type": "grid",
                "lines": 2,
                "children": [
                    {"type": "padding", "padding": {"start": 4, "top": 4, "end": 4, "bottom": 4},
                     "child": {"type": "box", "width": 10, "height": 10, "label": "a"}},
                    {"type": "box", "width": 30, "height": 5, "label": "b"},
                    {"type": "box", "width": 7, "height": 7, "label": "c"}
                ]
            }"#,
        )
        .unwrap();

        let frame = scene.layout(Constraints::UNBOUNDED, &LayoutContext::default()).unwrap();
        // Line 0: padded a (18x18) then c; line 1: b.
        assert_eq!(frame.bounds, Rect::new(0, 0, 30, 23));

        let leaves: Vec<(Option<&str>, Rect)> = frame
            .leaves()
            .into_iter()
            .map(|l| (l.label.as_deref(), l.bounds))
            .collect();
        assert_eq!(
            leaves,
            vec![
                (Some("a"), Rect::new(4, 4, 10, 10)),
                (Some("b"), Rect::new(0, 18, 30, 5)),
                (Some("c"), Rect::new(18, 0, 7, 7)),
            ]
        );
    }

    #[test]
    fn test_baseline_propagates_through_padding() {
        let scene = Node::from_json_str(
            r#"{"type": "baseline_to_top", "distance": 24,
                "child": {"type": "padding", "padding": {"top": 6},
                          "child": {"type": "box", "width": 40, "height": 16, "baseline": 12}}}"#,
        )
        .unwrap();

        let frame = scene.layout(Constraints::UNBOUNDED, &LayoutContext::default()).unwrap();
        assert_eq!(frame.first_baseline, Some(24));
        // Padded child baseline is 18, so it is pushed down by 6.
        assert_eq!(frame.leaves()[0].bounds, Rect::new(0, 12, 40, 16));
    }

    #[test]
    fn test_errors_surface_from_nested_nodes() {
        let scene = Node::from_json_str(
            r#"{"type": "column", "children": [
                {"type": "baseline_to_top", "distance": 8, "child": {"type": "box", "width": 5, "height": 5}}
            ]}"#,
        )
        .unwrap();
        let err = scene.layout(Constraints::loose(100, 100), &LayoutContext::default()).unwrap_err();
        assert_eq!(err, LayoutError::MissingFirstBaseline { policy: "FirstBaselineToTop" });

        let bad_grid = Node::from_json_str(r#"{"type":"grid","lines":0,"children":[]}"#).unwrap();
        assert_eq!(
            bad_grid.layout(Constraints::UNBOUNDED, &LayoutContext::default()),
            Err(LayoutError::InvalidLineCount)
        );
    }

    #[test]
    fn test_leaf_scene_rejects_inverted_constraints() {
        let scene = Node::from_json_str(r#"{"type":"box","width":20,"height":20}"#).unwrap();
        assert_eq!(
            scene.layout(Constraints::new(100, 50, 0, 10), &LayoutContext::default()),
            Err(LayoutError::InvalidConstraints {
                min_width: 100,
                max_width: 50,
                min_height: 0,
                max_height: 10,
            })
        );
    }

    #[test]
    fn test_empty_container_is_not_a_leaf() {
        let scene = Node::from_json_str(
            r#"{"type":"column","children":[
                {"type":"grid","children":[]},
                {"type":"box","width":4,"height":4,"label":"only"}
            ]}"#,
        )
        .unwrap();
        let frame = scene.layout(Constraints::loose(10, 10), &LayoutContext::default()).unwrap();

        let leaves = frame.leaves();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].label.as_deref(), Some("only"));
        assert!(!frame.children[0].is_leaf());
    }

    #[test]
    fn test_display_lists_tree() {
        let scene = Node::from_json_str(
            r#"{"type":"grid","lines":1,"children":[{"type":"box","width":3,"height":4,"label":"x"}]}"#,
        )
        .unwrap();
        let frame = scene.layout(Constraints::UNBOUNDED, &LayoutContext::default()).unwrap();
        assert_eq!(frame.to_string(), "grid @(0, 0) 3x4\n  box \"x\" @(0, 0) 3x4\n");
    }
}
