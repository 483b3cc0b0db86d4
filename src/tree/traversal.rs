//! Depth-first and level-order traversals.
//!
//! Every traversal returns an owned, fully materialized list of node views,
//! so the presentation layer can animate it while the tree keeps changing.

use petgraph::stable_graph::NodeIndex;
use std::fmt::{self, Display};
use std::str::FromStr;

use super::bst::BinarySearchTree;
use super::node::Side;
use crate::error::TreeError;
use crate::layout::LevelOrderLayout;
use crate::view::NodeView;

/// The traversals the visualizer can animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
    /// Breadth-first, one level at a time.
    LevelOrder,
}

impl TraversalOrder {
    /// All traversals in button order.
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::InOrder,
        TraversalOrder::PreOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::LevelOrder,
    ];

    /// The camelCase name used by the JavaScript side.
    pub fn as_str(self) -> &'static str {
        match self {
            TraversalOrder::PreOrder => "preOrder",
            TraversalOrder::InOrder => "inOrder",
            TraversalOrder::PostOrder => "postOrder",
            TraversalOrder::LevelOrder => "levelOrder",
        }
    }
}

impl Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalOrder {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TraversalOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| TreeError::UnknownTraversal(s.to_string()))
    }
}

impl<K: Display, C> BinarySearchTree<K, C> {
    /// Visit node, left subtree, right subtree.
    pub fn pre_order(&self) -> Vec<NodeView> {
        let mut visited = Vec::with_capacity(self.len());
        if let Some(root) = self.root() {
            self.pre_order_from(root, &mut visited);
        }
        visited
    }

    /// Visit left subtree, node, right subtree. Yields keys in ascending order.
    pub fn in_order(&self) -> Vec<NodeView> {
        let mut visited = Vec::with_capacity(self.len());
        if let Some(root) = self.root() {
            self.in_order_from(root, &mut visited);
        }
        visited
    }

    /// Visit left subtree, right subtree, node.
    pub fn post_order(&self) -> Vec<NodeView> {
        let mut visited = Vec::with_capacity(self.len());
        if let Some(root) = self.root() {
            self.post_order_from(root, &mut visited);
        }
        visited
    }

    /// Run the named traversal.
    ///
    /// Level order comes from a default level-order layout pass, so its
    /// views carry layout positions rather than cached insertion positions.
    pub fn traverse(&self, order: TraversalOrder) -> Vec<NodeView> {
        match order {
            TraversalOrder::PreOrder => self.pre_order(),
            TraversalOrder::InOrder => self.in_order(),
            TraversalOrder::PostOrder => self.post_order(),
            TraversalOrder::LevelOrder => LevelOrderLayout::with_defaults().compute(self).nodes,
        }
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut current = self.root();

        while current.is_some() || !stack.is_empty() {
            while let Some(index) = current {
                stack.push(index);
                current = self.child(index, Side::Left);
            }
            if let Some(index) = stack.pop() {
                keys.push(self.node(index).key());
                current = self.child(index, Side::Right);
            }
        }
        keys
    }

    fn pre_order_from(&self, index: NodeIndex, visited: &mut Vec<NodeView>) {
        visited.push(self.node(index).view());
        if let Some(left) = self.child(index, Side::Left) {
            self.pre_order_from(left, visited);
        }
        if let Some(right) = self.child(index, Side::Right) {
            self.pre_order_from(right, visited);
        }
    }

    fn in_order_from(&self, index: NodeIndex, visited: &mut Vec<NodeView>) {
        if let Some(left) = self.child(index, Side::Left) {
            self.in_order_from(left, visited);
        }
        visited.push(self.node(index).view());
        if let Some(right) = self.child(index, Side::Right) {
            self.in_order_from(right, visited);
        }
    }

    fn post_order_from(&self, index: NodeIndex, visited: &mut Vec<NodeView>) {
        if let Some(left) = self.child(index, Side::Left) {
            self.post_order_from(left, visited);
        }
        if let Some(right) = self.child(index, Side::Right) {
            self.post_order_from(right, visited);
        }
        visited.push(self.node(index).view());
    }
}
