//! Layout algorithms for tree visualization.
//!
//! This module computes the authoritative node positions used for a full
//! redraw. The positions cached on nodes at insertion time are only
//! provisional placeholders.

pub mod level_order;

pub use level_order::{LevelOrderConfig, LevelOrderLayout};
