//! Tile geometry: world points and axis-aligned zones.
//!
//! Zones are rectangles of tiles on a single elevation plane. A position is
//! inside a zone when both coordinates fall within the (inclusive) bounds and
//! the plane matches exactly.

use serde::{Deserialize, Serialize};

/// A tile coordinate in the game world.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

impl WorldPoint {
    pub fn new(x: i32, y: i32, plane: i32) -> WorldPoint {
        WorldPoint { x, y, plane }
    }
}

/// An axis-aligned rectangle of tiles on one elevation plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
    pub plane: i32,
}

impl Zone {
    /// Build a zone from any two opposite corners on the same plane.
    /// Coordinates are sorted per axis, so corner order doesn't matter.
    pub fn new(a: WorldPoint, b: WorldPoint) -> Zone {
        Zone {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
            plane: a.plane,
        }
    }

    /// A zone covering exactly one tile.
    pub fn single_tile(point: WorldPoint) -> Zone {
        Zone::new(point, point)
    }

    /// Inclusive containment check; the plane must match exactly.
    pub fn contains(&self, point: WorldPoint) -> bool {
        point.plane == self.plane
            && (self.min_x..=self.max_x).contains(&point.x)
            && (self.min_y..=self.max_y).contains(&point.y)
    }
}
