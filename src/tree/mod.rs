//! Binary search tree data structure and operations.
//!
//! This module provides the tree itself (an arena on petgraph's
//! StableGraph), the injectable comparator, and the depth-first and
//! level-order traversals.

mod bst;
mod compare;
mod node;
mod traversal;

pub use bst::BinarySearchTree;
pub use compare::{Comparator, NaturalOrder};
pub use node::{Side, TreeNode};
pub use traversal::TraversalOrder;
