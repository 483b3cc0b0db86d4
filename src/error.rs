//! Error type shared by the tree, layout and configuration layers.
//!
//! A key that cannot be found is not an error: `remove` and `contains`
//! report it through their `bool` result and leave the tree unchanged.

/// Recoverable failures reported to the immediate caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The comparator cannot order the supplied key, or the key could not be
    /// coerced to a number at the JavaScript boundary.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The traversal name is not one of preOrder, inOrder, postOrder, levelOrder.
    #[error("unknown traversal: {0}")]
    UnknownTraversal(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
