//! Screen-space bookkeeping for node placement.
//!
//! This module provides an R-tree based occupancy set so that no two nodes
//! are ever handed the same coordinate.

mod occupancy;

pub use occupancy::{PlacementConfig, PositionAllocator};
