//! BinarySearchTree - arena-backed unbalanced BST.
//!
//! Nodes are stored in petgraph's StableGraph. Every parent → child link is
//! a directed edge weighted with the child's `Side`, so a node's parent is
//! its single incoming edge and its children are its outgoing edges. Arena
//! indices are stable across removals, which lets successor promotion
//! rewrite a key in place without moving the node.

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use std::cmp::Ordering;
use std::fmt::Display;

use super::compare::{Comparator, NaturalOrder};
use super::node::{Side, TreeNode};
use crate::error::TreeError;
use crate::spatial::{PlacementConfig, PositionAllocator};
use crate::view::{NodeView, Position};

/// The binary search tree.
///
/// This struct manages:
/// - The node arena and root handle
/// - The injected key comparator
/// - Provisional placement of newly inserted nodes
pub struct BinarySearchTree<K, C = NaturalOrder> {
    /// Node arena. Edges point parent → child and carry the child's side.
    graph: StableGraph<TreeNode<K>, Side, Directed>,

    /// Root handle, None when the tree is empty.
    root: Option<NodeIndex>,

    /// Three-way key ordering.
    comparator: C,

    /// Offsets for placing inserted nodes.
    placement: PlacementConfig,

    /// Coordinates handed out by insertion. Never released by removal.
    occupancy: PositionAllocator,
}

impl<K> BinarySearchTree<K, NaturalOrder> {
    /// Create an empty tree ordered by the keys' natural ordering.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K> Default for BinarySearchTree<K, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> BinarySearchTree<K, C> {
    /// Create an empty tree using a custom comparator.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            graph: StableGraph::new(),
            root: None,
            comparator,
            placement: PlacementConfig::default(),
            occupancy: PositionAllocator::new(),
        }
    }

    /// Create an empty tree with custom placement offsets.
    pub fn with_placement(comparator: C, placement: PlacementConfig) -> Result<Self, TreeError> {
        placement.validate()?;
        let mut tree = Self::with_comparator(comparator);
        tree.placement = placement;
        Ok(tree)
    }

    /// Check if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Remove every node and release all occupied coordinates.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.root = None;
        self.occupancy.clear();
        tracing::debug!("tree cleared");
    }

    /// Number of coordinates ever handed out since the last clear.
    pub fn occupied_positions(&self) -> usize {
        self.occupancy.len()
    }

    pub(crate) fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    pub(crate) fn node(&self, index: NodeIndex) -> &TreeNode<K> {
        &self.graph[index]
    }

    pub(crate) fn child(&self, index: NodeIndex, side: Side) -> Option<NodeIndex> {
        self.graph
            .edges_directed(index, Direction::Outgoing)
            .find(|edge| *edge.weight() == side)
            .map(|edge| edge.target())
    }

    fn parent(&self, index: NodeIndex) -> Option<(NodeIndex, Side)> {
        self.graph
            .edges_directed(index, Direction::Incoming)
            .next()
            .map(|edge| (edge.source(), *edge.weight()))
    }

    fn leftmost(&self, mut index: NodeIndex) -> NodeIndex {
        while let Some(left) = self.child(index, Side::Left) {
            index = left;
        }
        index
    }

    /// Detach a node with at most one child, splicing that child into the
    /// node's former slot. Returns the removed node.
    fn unlink(&mut self, index: NodeIndex) -> Option<TreeNode<K>> {
        let child = self
            .child(index, Side::Left)
            .or_else(|| self.child(index, Side::Right));
        let parent = self.parent(index);

        let removed = self.graph.remove_node(index);
        match (parent, child) {
            (Some((parent, side)), Some(child)) => {
                self.graph.add_edge(parent, child, side);
            }
            (Some(_), None) => {}
            (None, child) => self.root = child,
        }
        removed
    }
}

impl<K, C> BinarySearchTree<K, C>
where
    K: Display,
    C: Comparator<K>,
{
    fn compare(&self, key: &K, other: &K) -> Result<Ordering, TreeError> {
        self.comparator
            .compare(key, other)
            .ok_or_else(|| TreeError::InvalidKey(key.to_string()))
    }

    /// A key that cannot be ordered against itself is rejected up front.
    fn ensure_orderable(&self, key: &K) -> Result<(), TreeError> {
        self.compare(key, key).map(|_| ())
    }

    fn locate(&self, key: &K) -> Result<Option<NodeIndex>, TreeError> {
        self.ensure_orderable(key)?;

        let mut current = self.root;
        while let Some(index) = current {
            current = match self.compare(key, &self.graph[index].key)? {
                Ordering::Equal => return Ok(Some(index)),
                Ordering::Less => self.child(index, Side::Left),
                Ordering::Greater => self.child(index, Side::Right),
            };
        }
        Ok(None)
    }

    /// Insert a key, returning the node that holds it.
    ///
    /// If an equal key is already present nothing changes and the existing
    /// node is returned.
    pub fn insert(&mut self, key: K) -> Result<NodeView, TreeError> {
        self.ensure_orderable(&key)?;

        let Some(mut current) = self.root else {
            self.occupancy.claim(Position::ORIGIN);
            let index = self.graph.add_node(TreeNode::new(key, Position::ORIGIN));
            self.root = Some(index);
            tracing::debug!("inserted {} as root", self.graph[index].key);
            return Ok(self.graph[index].view());
        };

        loop {
            let side = match self.compare(&key, &self.graph[current].key)? {
                Ordering::Equal => {
                    tracing::debug!("insert {key}: already present");
                    return Ok(self.graph[current].view());
                }
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };

            match self.child(current, side) {
                Some(next) => current = next,
                None => return Ok(self.attach(current, side, key)),
            }
        }
    }

    fn attach(&mut self, parent: NodeIndex, side: Side, key: K) -> NodeView {
        let candidate = self.placement.candidate(self.graph[parent].position, side);
        let position = self
            .occupancy
            .resolve(candidate, self.placement.collision_step);

        let index = self.graph.add_node(TreeNode::new(key, position));
        self.graph.add_edge(parent, index, side);

        let view = self.graph[index].view();
        tracing::debug!(
            "inserted {} as {side} child of {} at ({}, {})",
            view.key,
            self.graph[parent].key,
            position.x,
            position.y
        );
        view
    }

    /// Remove a key.
    ///
    /// Returns false if no node holds the key, in which case the tree is
    /// unchanged. A node with two children takes over its in-order
    /// successor's key and the successor's slot is unlinked instead.
    pub fn remove(&mut self, key: &K) -> Result<bool, TreeError> {
        let Some(index) = self.locate(key)? else {
            tracing::debug!("remove {key}: not found");
            return Ok(false);
        };

        let left = self.child(index, Side::Left);
        let right = self.child(index, Side::Right);
        match (left, right) {
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                if let Some(promoted) = self.unlink(successor) {
                    tracing::debug!("removed {key}, promoted successor {}", promoted.key);
                    self.graph[index].key = promoted.key;
                }
            }
            _ => {
                self.unlink(index);
                tracing::debug!("removed {key}");
            }
        }
        Ok(true)
    }

    /// Check if a key is present.
    pub fn contains(&self, key: &K) -> Result<bool, TreeError> {
        Ok(self.locate(key)?.is_some())
    }
}

impl<K> BinarySearchTree<K, fn(&K, &K) -> Option<Ordering>> {
    /// Create an empty tree from a plain comparison function.
    pub fn with_compare_fn(compare: fn(&K, &K) -> Option<Ordering>) -> Self {
        Self::with_comparator(compare)
    }
}
