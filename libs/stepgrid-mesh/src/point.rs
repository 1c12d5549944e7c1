//! # Grid Point
//!
//! The atomic vertex type: a position in grid units.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A vertex in grid space.
///
/// `column` and `row` are cell-corner coordinates (whole numbers for every
/// point the builder emits), `value` is the height in the grid's own unit.
/// Two points are the same vertex iff all three coordinates are equal; the
/// builder never deduplicates, it recomputes identical triples instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    pub column: f64,
    pub row: f64,
    pub value: f64,
}

impl GridPoint {
    /// Creates a point.
    #[inline]
    pub const fn new(column: f64, row: f64, value: f64) -> Self {
        Self { column, row, value }
    }

    /// Creates a point at an integer cell corner.
    #[inline]
    pub fn at_corner(corner: (i64, i64), value: f64) -> Self {
        Self::new(corner.0 as f64, corner.1 as f64, value)
    }

    /// Returns the point as `(column, row, value)`.
    #[inline]
    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.column, self.row, self.value)
    }

    /// Bit-exact key, used wherever points are hashed.
    ///
    /// `-0.0` and `+0.0` are folded together so that equal points always
    /// share a key.
    #[inline]
    pub fn key(self) -> [u64; 3] {
        let bits = |v: f64| if v == 0.0 { 0u64 } else { v.to_bits() };
        [bits(self.column), bits(self.row), bits(self.value)]
    }
}

impl From<GridPoint> for DVec3 {
    fn from(point: GridPoint) -> Self {
        point.to_dvec3()
    }
}
