//! # Grid Face
//!
//! A planar triangle or quad of [`GridPoint`]s. The arity is part of the
//! type, so a face with any other number of points cannot reach a consumer.

use crate::point::GridPoint;
use glam::DVec3;

/// A planar polygon of 3 or 4 points.
///
/// Winding is significant: points run counter-clockwise when viewed from
/// outside the solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridFace {
    Triangle([GridPoint; 3]),
    Quad([GridPoint; 4]),
}

impl GridFace {
    /// Builds a face from a boundary list and three or four indices into it.
    ///
    /// # Panics
    ///
    /// Panics if `indices` does not hold 3 or 4 entries or an index is out of
    /// range. Callers pass indices from a fixed table, so either case is a
    /// logic defect.
    pub fn from_indices(points: &[GridPoint], indices: &[usize]) -> Self {
        match *indices {
            [a, b, c] => Self::Triangle([points[a], points[b], points[c]]),
            [a, b, c, d] => Self::Quad([points[a], points[b], points[c], points[d]]),
            _ => unreachable!("face needs 3 or 4 indices, got {}", indices.len()),
        }
    }

    /// Returns the points in winding order.
    #[inline]
    pub fn points(&self) -> &[GridPoint] {
        match self {
            Self::Triangle(points) => points,
            Self::Quad(points) => points,
        }
    }

    /// Returns the number of points (3 or 4).
    #[inline]
    pub fn len(&self) -> usize {
        self.points().len()
    }

    /// Always false; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns true for four-point faces.
    #[inline]
    pub fn is_quad(&self) -> bool {
        matches!(self, Self::Quad(_))
    }

    /// Returns the directed boundary edges, closing back to the first point.
    pub fn edges(&self) -> impl Iterator<Item = (GridPoint, GridPoint)> + '_ {
        let points = self.points();
        (0..points.len()).map(move |i| (points[i], points[(i + 1) % points.len()]))
    }

    /// Splits the face into triangles that keep its winding.
    ///
    /// A quad `(p0, p1, p2, p3)` becomes `(p0, p1, p2)` and `(p0, p2, p3)`,
    /// sharing the diagonal from its first point.
    pub fn triangles(&self) -> impl Iterator<Item = [GridPoint; 3]> {
        let (first, second) = match *self {
            Self::Triangle(tri) => (tri, None),
            Self::Quad([p0, p1, p2, p3]) => ([p0, p1, p2], Some([p0, p2, p3])),
        };
        std::iter::once(first).chain(second)
    }

    /// Returns the (unnormalized) face normal using Newell's method.
    pub fn normal(&self) -> DVec3 {
        let mut normal = DVec3::ZERO;
        for (a, b) in self.edges() {
            let (a, b) = (a.to_dvec3(), b.to_dvec3());
            normal.x += (a.y - b.y) * (a.z + b.z);
            normal.y += (a.z - b.z) * (a.x + b.x);
            normal.z += (a.x - b.x) * (a.y + b.y);
        }
        normal
    }

    /// Returns true if any three cyclically consecutive points are collinear
    /// within `tolerance` (cross-product magnitude).
    pub fn has_collinear_points(&self, tolerance: f64) -> bool {
        let points = self.points();
        let n = points.len();
        (0..n).any(|i| {
            let a = points[i].to_dvec3();
            let b = points[(i + 1) % n].to_dvec3();
            let c = points[(i + 2) % n].to_dvec3();
            (b - a).cross(c - b).length() <= tolerance
        })
    }
}
