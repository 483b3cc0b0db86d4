//! Node type and related structures.
//!
//! Nodes live in the tree's arena. Each node has:
//! - A key, compared with the tree's comparator
//! - A cached position assigned when the node was placed
//!
//! The parent/child relation is not stored on the node itself: it is the
//! set of `Side`-labelled arena edges touching it.

use std::fmt;

use crate::view::{NodeView, Position};

/// Which child slot of its parent a node occupies.
///
/// This is the weight of every parent → child edge in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Keys comparing smaller than the parent.
    Left,
    /// Keys comparing greater than the parent.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// A tree element stored in the arena.
#[derive(Debug, Clone)]
pub struct TreeNode<K> {
    pub(crate) key: K,
    pub(crate) position: Position,
}

impl<K> TreeNode<K> {
    /// Create a node at the given position.
    #[inline]
    pub fn new(key: K, position: Position) -> Self {
        Self { key, position }
    }

    /// The node's key.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The position cached when the node was placed.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }
}

impl<K: fmt::Display> TreeNode<K> {
    /// Node identity, which is the string form of the key.
    pub fn id(&self) -> String {
        self.key.to_string()
    }

    /// Project the node at its cached position.
    pub fn view(&self) -> NodeView {
        self.view_at(self.position)
    }

    /// Project the node at an externally computed position.
    pub fn view_at(&self, position: Position) -> NodeView {
        let label = self.id();
        NodeView {
            id: label.clone(),
            key: label,
            position,
        }
    }
}
