//! Render-facing projections of the tree.
//!
//! These are the only shapes the presentation layer ever sees. They are
//! owned snapshots, so a traversal taken before an animation starts is not
//! affected by later mutations of the tree.

use serde::{Deserialize, Serialize};

/// A 2-D coordinate in graph space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Position {
    /// The root coordinate.
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    /// Create a new position.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return this position moved by (dx, dy).
    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A node as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeView {
    /// Node identity, the string form of the key.
    pub id: String,
    /// Display label, also the string form of the key.
    pub key: String,
    /// Where to draw the node.
    pub position: Position,
}

/// A directed parent → child edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeView {
    /// Edge identity, `e{source}-{target}`.
    pub id: String,
    /// Parent node id.
    pub source: String,
    /// Child node id.
    pub target: String,
}

impl EdgeView {
    /// Build the edge between two node ids.
    pub fn between(source: &str, target: &str) -> Self {
        Self {
            id: format!("e{source}-{target}"),
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

/// Full redraw description: nodes in breadth-first order plus their edges.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TreeLayout {
    /// Nodes in level order with recomputed positions.
    pub nodes: Vec<NodeView>,
    /// Parent → child edges in discovery order.
    pub edges: Vec<EdgeView>,
}

impl TreeLayout {
    /// Check if the layout has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Bounding box of all nodes as (min_x, min_y, max_x, max_y).
    ///
    /// Returns None for an empty layout.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.nodes.first()?.position;
        let init = (first.x, first.y, first.x, first.y);

        Some(self.nodes.iter().fold(init, |(min_x, min_y, max_x, max_y), node| {
            let p = node.position;
            (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
        }))
    }

    /// Positions interleaved as [x0, y0, x1, y1, ...] in node order.
    pub fn interleaved_positions(&self) -> Vec<f64> {
        let mut positions = Vec::with_capacity(self.nodes.len() * 2);
        for node in &self.nodes {
            positions.push(node.position.x);
            positions.push(node.position.y);
        }
        positions
    }
}
