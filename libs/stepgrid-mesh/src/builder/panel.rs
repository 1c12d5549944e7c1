//! # Wall Panel Triangulation
//!
//! A wall panel is bounded by two horizontal edges and two vertical edges.
//! Each vertical edge may carry 0, 1 or 2 extra collinear points, so the
//! panel's topology is fully known from `(n1, n2)` and a fixed case table
//! tiles it.
//!
//! ## Boundary Layout
//!
//! ```text
//! index:  0, 1            near horizontal edge (start, end) at the cell value
//!         2 .. 2+n1       extras on the end edge, cell value -> neighbour value
//!         2+n1, 3+n1      far horizontal edge (end, start) at the neighbour value
//!         4+n1 .. 4+n1+n2 extras on the start edge, neighbour value -> cell value
//! ```

use crate::face::GridFace;
use crate::point::GridPoint;
use config::constants::{MAX_EDGE_EXTRA_POINTS, PANEL_FIXED_POINTS};

/// One face of a panel decomposition, as indices into the boundary list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFace {
    Tri([usize; 3]),
    Quad([usize; 4]),
}

impl PanelFace {
    /// Returns the boundary indices in winding order.
    pub fn indices(&self) -> &[usize] {
        match self {
            Self::Tri(indices) => indices,
            Self::Quad(indices) => indices,
        }
    }
}

use PanelFace::{Quad, Tri};

/// Decompositions indexed by `[n1][n2]`.
pub const PANEL_TABLE: [[&[PanelFace]; MAX_EDGE_EXTRA_POINTS + 1]; MAX_EDGE_EXTRA_POINTS + 1] = [
    [
        &[Quad([0, 1, 2, 3])],
        &[Tri([0, 1, 4]), Quad([1, 2, 3, 4])],
        &[Tri([0, 1, 5]), Tri([2, 3, 4]), Quad([4, 5, 1, 2])],
    ],
    [
        &[Tri([0, 1, 2]), Quad([2, 3, 4, 0])],
        &[Quad([0, 1, 2, 5]), Quad([2, 3, 4, 5])],
        &[Quad([0, 1, 2, 6]), Quad([2, 3, 5, 6]), Tri([3, 4, 5])],
    ],
    [
        &[Tri([0, 1, 2]), Quad([2, 3, 5, 0]), Tri([3, 4, 5])],
        &[Quad([0, 1, 2, 6]), Tri([2, 3, 6]), Quad([3, 4, 5, 6])],
        &[Quad([0, 1, 2, 7]), Quad([2, 3, 6, 7]), Quad([3, 4, 5, 6])],
    ],
];

/// Returns the fixed decomposition for a panel with `n1` and `n2` extras.
///
/// # Panics
///
/// Panics if either count exceeds [`MAX_EDGE_EXTRA_POINTS`]; the builder
/// can never produce such a panel.
pub fn decomposition(n1: usize, n2: usize) -> &'static [PanelFace] {
    assert!(
        n1 <= MAX_EDGE_EXTRA_POINTS && n2 <= MAX_EDGE_EXTRA_POINTS,
        "unsupported wall panel shape ({n1}, {n2})"
    );
    PANEL_TABLE[n1][n2]
}

/// Tiles a panel boundary and appends the faces to `out`.
///
/// # Panics
///
/// Panics if `points.len() != 4 + n1 + n2` or a count is out of range.
pub fn triangulate_into(points: &[GridPoint], n1: usize, n2: usize, out: &mut Vec<GridFace>) {
    assert_eq!(
        points.len(),
        PANEL_FIXED_POINTS + n1 + n2,
        "panel boundary does not match ({n1}, {n2})"
    );
    out.extend(
        decomposition(n1, n2)
            .iter()
            .map(|face| GridFace::from_indices(points, face.indices())),
    );
}

/// Tiles a panel boundary into a new face list.
pub fn triangulate(points: &[GridPoint], n1: usize, n2: usize) -> Vec<GridFace> {
    let mut faces = Vec::with_capacity(decomposition(n1, n2).len());
    triangulate_into(points, n1, n2, &mut faces);
    faces
}
