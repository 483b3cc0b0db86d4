//! Coordinate occupancy backed by an rstar R-tree.
//!
//! The allocator remembers every coordinate it has handed out and resolves
//! collisions by sliding a candidate to the right until it lands on a free
//! spot. The tree's insertion placement and the level-order layout pass each
//! own one.

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::tree::Side;
use crate::view::Position;

/// Two coordinates closer than this are the same screen slot.
const SAME_SLOT_EPSILON: f64 = 1e-6;

/// An occupied coordinate stored in the index.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OccupiedPoint {
    x: f64,
    y: f64,
}

impl From<Position> for OccupiedPoint {
    fn from(position: Position) -> Self {
        Self {
            x: position.x,
            y: position.y,
        }
    }
}

impl RTreeObject for OccupiedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.x, self.y])
    }
}

impl PointDistance for OccupiedPoint {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.x - point[0];
        let dy = self.y - point[1];
        dx * dx + dy * dy
    }
}

/// Offsets used to place a newly inserted node relative to its parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlacementConfig {
    /// Horizontal offset of a left child from its parent.
    pub left_offset: f64,
    /// Horizontal offset of a right child from its parent.
    pub right_offset: f64,
    /// Vertical distance between a parent and its children.
    pub level_spacing: f64,
    /// Rightward shift applied while the candidate slot is taken.
    pub collision_step: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            left_offset: -150.0,
            right_offset: 50.0,
            level_spacing: 100.0,
            collision_step: 150.0,
        }
    }
}

impl PlacementConfig {
    /// The unresolved position for a child on `side` of a node at `parent`.
    pub fn candidate(&self, parent: Position, side: Side) -> Position {
        let dx = match side {
            Side::Left => self.left_offset,
            Side::Right => self.right_offset,
        };
        parent.offset(dx, self.level_spacing)
    }

    /// Reject offsets that cannot produce a terminating placement.
    pub fn validate(&self) -> Result<(), TreeError> {
        let values = [
            ("leftOffset", self.left_offset),
            ("rightOffset", self.right_offset),
            ("levelSpacing", self.level_spacing),
            ("collisionStep", self.collision_step),
        ];
        if let Some((name, _)) = values.iter().find(|(_, value)| !value.is_finite()) {
            return Err(TreeError::InvalidConfig(format!("{name} must be finite")));
        }
        if self.collision_step == 0.0 {
            return Err(TreeError::InvalidConfig(
                "collisionStep must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Tracks which coordinates are already taken.
pub struct PositionAllocator {
    occupied: RTree<OccupiedPoint>,
}

impl PositionAllocator {
    /// Create an allocator with nothing occupied.
    pub fn new() -> Self {
        Self {
            occupied: RTree::new(),
        }
    }

    /// Check if a coordinate has already been handed out.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupied
            .locate_within_distance(
                [position.x, position.y],
                SAME_SLOT_EPSILON * SAME_SLOT_EPSILON,
            )
            .next()
            .is_some()
    }

    /// Mark a coordinate as taken.
    ///
    /// Returns false if it was already occupied.
    pub fn claim(&mut self, position: Position) -> bool {
        if self.is_occupied(position) {
            return false;
        }
        self.occupied.insert(position.into());
        true
    }

    /// Claim the first free coordinate at or to the right of `candidate`,
    /// moving `step` units along x per collision.
    ///
    /// `step` must be non-zero.
    pub fn resolve(&mut self, candidate: Position, step: f64) -> Position {
        debug_assert!(step != 0.0, "collision step must be non-zero");

        let mut position = candidate;
        while self.is_occupied(position) {
            tracing::trace!(
                "slot ({}, {}) taken, shifting by {step}",
                position.x,
                position.y
            );
            position = position.offset(step, 0.0);
        }
        self.occupied.insert(position.into());
        position
    }

    /// Forget every occupied coordinate.
    pub fn clear(&mut self) {
        self.occupied = RTree::new();
    }

    /// Number of occupied coordinates.
    pub fn len(&self) -> usize {
        self.occupied.size()
    }

    /// Check if nothing is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupied.size() == 0
    }
}

impl Default for PositionAllocator {
    fn default() -> Self {
        Self::new()
    }
}
