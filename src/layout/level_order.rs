//! Breadth-first tree layout.
//!
//! Walks the tree one level at a time from a root pinned at (0, 0). Each
//! level splits a fixed total width evenly between its nodes; a child sits
//! half of its parent's share to the left or right, one level spacing below.
//!
//! Positions computed here replace the provisional ones cached at insertion
//! and are what a full redraw should use. Exact coordinate collisions
//! (possible when two cousins point toward each other) are resolved by
//! sliding the later node right by half the level share until it is free.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt::Display;

use crate::error::TreeError;
use crate::spatial::PositionAllocator;
use crate::tree::{BinarySearchTree, Side};
use crate::view::{EdgeView, Position, TreeLayout};

/// Configuration for the level-order layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LevelOrderConfig {
    /// Horizontal width shared by the nodes of one level.
    pub total_width: f64,
    /// Vertical spacing between tree levels.
    pub level_spacing: f64,
}

impl Default for LevelOrderConfig {
    fn default() -> Self {
        Self {
            total_width: 400.0,
            level_spacing: 100.0,
        }
    }
}

impl LevelOrderConfig {
    /// Both values must be finite and positive.
    pub fn validate(&self) -> Result<(), TreeError> {
        for (name, value) in [
            ("totalWidth", self.total_width),
            ("levelSpacing", self.level_spacing),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TreeError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// The level-order layout engine.
pub struct LevelOrderLayout {
    config: LevelOrderConfig,
}

impl LevelOrderLayout {
    /// Create a layout engine with the given configuration.
    pub fn new(config: LevelOrderConfig) -> Self {
        Self { config }
    }

    /// Create a layout engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(LevelOrderConfig::default())
    }

    /// The active configuration.
    pub fn config(&self) -> &LevelOrderConfig {
        &self.config
    }

    /// Compute positions and edges for the whole tree.
    ///
    /// Nodes come out in breadth-first order, left child before right.
    /// An empty tree yields an empty layout.
    pub fn compute<K: Display, C>(&self, tree: &BinarySearchTree<K, C>) -> TreeLayout {
        let Some(root) = tree.root() else {
            return TreeLayout::default();
        };

        let mut layout = TreeLayout {
            nodes: Vec::with_capacity(tree.len()),
            edges: Vec::with_capacity(tree.len().saturating_sub(1)),
        };
        let mut occupancy = PositionAllocator::new();
        occupancy.claim(Position::ORIGIN);

        let mut queue = VecDeque::from([(root, Position::ORIGIN)]);
        let mut levels = 0usize;

        while !queue.is_empty() {
            let level_size = queue.len();
            let half_share = self.config.total_width / level_size as f64 / 2.0;

            for _ in 0..level_size {
                let Some((index, position)) = queue.pop_front() else {
                    break;
                };
                let node = tree.node(index);
                let id = node.id();
                layout.nodes.push(node.view_at(position));

                for (side, dx) in [(Side::Left, -half_share), (Side::Right, half_share)] {
                    let Some(child) = tree.child(index, side) else {
                        continue;
                    };
                    let candidate = position.offset(dx, self.config.level_spacing);
                    let child_position = occupancy.resolve(candidate, half_share);

                    layout
                        .edges
                        .push(EdgeView::between(&id, &tree.node(child).id()));
                    queue.push_back((child, child_position));
                }
            }
            levels += 1;
        }

        tracing::trace!(
            "level-order layout: {} nodes, {} edges over {levels} levels",
            layout.nodes.len(),
            layout.edges.len()
        );
        layout
    }
}

impl Default for LevelOrderLayout {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::NodeView;

    fn build(keys: &[f64]) -> BinarySearchTree<f64> {
        let mut tree = BinarySearchTree::new();
        for &key in keys {
            tree.insert(key).unwrap();
        }
        tree
    }

    fn find<'a>(layout: &'a TreeLayout, id: &str) -> &'a NodeView {
        layout
            .nodes
            .iter()
            .find(|node| node.id == id)
            .unwrap_or_else(|| panic!("node {id} missing from layout"))
    }

    #[test]
    fn test_empty_tree() {
        let tree: BinarySearchTree<f64> = BinarySearchTree::new();
        let layout = LevelOrderLayout::with_defaults().compute(&tree);

        assert!(layout.nodes.is_empty());
        assert!(layout.edges.is_empty());
    }

    #[test]
    fn test_single_node() {
        let tree = build(&[42.0]);
        let layout = LevelOrderLayout::with_defaults().compute(&tree);

        assert_eq!(layout.nodes.len(), 1);
        assert_eq!(layout.nodes[0].position, Position::ORIGIN);
        assert!(layout.edges.is_empty());
    }

    #[test]
    fn test_five_node_positions() {
        let tree = build(&[10.0, 5.0, 15.0, 3.0, 7.0]);
        let layout = LevelOrderLayout::with_defaults().compute(&tree);

        let order: Vec<_> = layout.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(order, ["10", "5", "15", "3", "7"]);

        assert_eq!(find(&layout, "10").position, Position::new(0.0, 0.0));
        assert_eq!(find(&layout, "5").position, Position::new(-200.0, 100.0));
        assert_eq!(find(&layout, "15").position, Position::new(200.0, 100.0));
        assert_eq!(find(&layout, "3").position, Position::new(-300.0, 200.0));
        assert_eq!(find(&layout, "7").position, Position::new(-100.0, 200.0));
    }

    #[test]
    fn test_five_node_edges() {
        let tree = build(&[10.0, 5.0, 15.0, 3.0, 7.0]);
        let layout = LevelOrderLayout::with_defaults().compute(&tree);

        let ids: Vec<_> = layout.edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["e10-5", "e10-15", "e5-3", "e5-7"]);
        assert_eq!(layout.edges[0].source, "10");
        assert_eq!(layout.edges[0].target, "5");
    }

    #[test]
    fn test_lone_child_uses_full_level_width() {
        let tree = build(&[10.0, 5.0, 3.0, 7.0]);
        let layout = LevelOrderLayout::with_defaults().compute(&tree);

        // Level two holds only 5, so its children are 200 away on each side.
        assert_eq!(find(&layout, "5").position, Position::new(-200.0, 100.0));
        assert_eq!(find(&layout, "3").position, Position::new(-400.0, 200.0));
        assert_eq!(find(&layout, "7").position, Position::new(0.0, 200.0));
    }

    #[test]
    fn test_cousin_collision_is_resolved() {
        // 4 is the right child of 3 and 6 the left child of 7; both land on
        // (-200, 300) before resolution.
        let tree = build(&[10.0, 5.0, 15.0, 3.0, 7.0, 4.0, 6.0]);
        let layout = LevelOrderLayout::with_defaults().compute(&tree);

        assert_eq!(find(&layout, "4").position, Position::new(-200.0, 300.0));
        assert_eq!(find(&layout, "6").position, Position::new(-100.0, 300.0));
    }

    #[test]
    fn test_layout_ignores_cached_positions() {
        let mut tree = build(&[10.0, 5.0, 15.0, 3.0, 7.0]);
        tree.remove(&5.0).unwrap();
        let layout = LevelOrderLayout::with_defaults().compute(&tree);

        // 7 took over 5's slot, cached at (-150, 100).
        assert_eq!(find(&layout, "7").position, Position::new(-200.0, 100.0));
        assert_eq!(find(&layout, "3").position, Position::new(-300.0, 200.0));
        let ids: Vec<_> = layout.edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["e10-7", "e10-15", "e7-3"]);
    }

    #[test]
    fn test_custom_config() {
        let tree = build(&[10.0, 5.0, 15.0]);
        let layout = LevelOrderLayout::new(LevelOrderConfig {
            total_width: 800.0,
            level_spacing: 50.0,
        })
        .compute(&tree);

        assert_eq!(find(&layout, "5").position, Position::new(-400.0, 50.0));
        assert_eq!(find(&layout, "15").position, Position::new(400.0, 50.0));
    }

    #[test]
    fn test_config_validation() {
        assert!(LevelOrderConfig::default().validate().is_ok());

        let zero_width = LevelOrderConfig {
            total_width: 0.0,
            ..LevelOrderConfig::default()
        };
        assert!(matches!(
            zero_width.validate(),
            Err(TreeError::InvalidConfig(_))
        ));

        let negative_spacing = LevelOrderConfig {
            level_spacing: -1.0,
            ..LevelOrderConfig::default()
        };
        assert!(negative_spacing.validate().is_err());
    }
}
