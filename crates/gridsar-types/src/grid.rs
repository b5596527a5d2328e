//! Grid coordinates and the distance measure used by every range check.
//!
//! The engine reports object locations as integer pairs. Range checks
//! (grab, remove, door) all use the same rounded-up Euclidean distance, so
//! a diagonal neighbour is at distance 2, not 1.

use serde::{Deserialize, Serialize};

/// A position on the simulation grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate from column and row indices.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rounded-up Euclidean distance to another coordinate.
    ///
    /// Matches the engine's range semantics: `ceil(sqrt(dx^2 + dy^2))`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn distance(self, other: Self) -> u32 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy).ceil() as u32
    }
}

impl core::fmt::Display for Coord {
    /// Renders the engine's wire form, `"(x, y)"`, which is also how
    /// locations appear in action-log target columns.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_rounded_up() {
        let origin = Coord::new(0, 0);
        assert_eq!(origin.distance(Coord::new(1, 0)), 1);
        assert_eq!(origin.distance(Coord::new(1, 1)), 2); // sqrt(2) -> 2
        assert_eq!(origin.distance(Coord::new(3, 4)), 5);
        assert_eq!(origin.distance(origin), 0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coord::new(2, 9);
        let b = Coord::new(-1, 4);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn wire_format() {
        assert_eq!(Coord::new(23, 8).to_string(), "(23, 8)");
    }
}
