//! # Seam Sweep
//!
//! Builds the boundary of the wall panel between a cell and its neighbour
//! along one axis. Both axes go through the same routine; [`SeamAxis`] only
//! decides where the seam lies in plan view and which diagonal cells meet
//! at each of its two vertical edges.
//!
//! ## Extra Points
//!
//! A vertical edge of a seam is shared by four cells: the wall's own two
//! cells and two diagonal neighbours. The neighbours' walls end at their
//! own heights on that edge, so each neighbour height lying strictly between
//! the wall's two heights needs a matching vertex here. Heights equal to
//! either end never qualify.

use super::panel;
use crate::face::GridFace;
use crate::field::GridField;
use crate::point::GridPoint;
use config::constants::MAX_EDGE_EXTRA_POINTS;
use serde::{Deserialize, Serialize};

/// Direction of a seam sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeamAxis {
    /// Wall between `(column, row)` and `(column + 1, row)`.
    Column,
    /// Wall between `(column, row)` and `(column, row + 1)`.
    Row,
}

/// Plan-view layout of one seam.
struct SeamGeometry {
    /// Neighbour cell.
    neighbor: (i64, i64),
    /// Seam corner where the near horizontal edge starts.
    start: (i64, i64),
    /// Seam corner where the near horizontal edge ends (first vertical edge).
    end: (i64, i64),
    /// Cells sharing the end corner, other than the wall's own two.
    end_diagonals: [(i64, i64); 2],
    /// Cells sharing the start corner, other than the wall's own two.
    start_diagonals: [(i64, i64); 2],
}

impl SeamAxis {
    /// Both axes, in the order the builder sweeps them.
    pub const ALL: [SeamAxis; 2] = [SeamAxis::Column, SeamAxis::Row];

    fn geometry(self, column: i64, row: i64) -> SeamGeometry {
        let (c, r) = (column, row);
        match self {
            SeamAxis::Column => SeamGeometry {
                neighbor: (c + 1, r),
                start: (c + 1, r + 1),
                end: (c + 1, r),
                end_diagonals: [(c, r - 1), (c + 1, r - 1)],
                start_diagonals: [(c, r + 1), (c + 1, r + 1)],
            },
            SeamAxis::Row => SeamGeometry {
                neighbor: (c, r + 1),
                start: (c, r + 1),
                end: (c + 1, r + 1),
                end_diagonals: [(c + 1, r), (c + 1, r + 1)],
                start_diagonals: [(c - 1, r + 1), (c - 1, r)],
            },
        }
    }

    /// Cell indices swept along this axis for a `columns x rows` grid.
    ///
    /// The swept index starts at −1 so the outer wall on the low side of the
    /// grid is built from the synthetic exterior cell.
    pub fn cells(self, columns: usize, rows: usize) -> impl Iterator<Item = (i64, i64)> {
        let (columns, rows) = (columns as i64, rows as i64);
        let (column_start, row_start) = match self {
            SeamAxis::Column => (-1, 0),
            SeamAxis::Row => (0, -1),
        };
        (column_start..columns).flat_map(move |c| (row_start..rows).map(move |r| (c, r)))
    }
}

/// The boundary of one wall panel, ready for triangulation.
#[derive(Debug, Clone, PartialEq)]
pub struct WallPanel {
    pub axis: SeamAxis,
    pub column: i64,
    pub row: i64,
    /// Boundary points in the layout described in [`panel`].
    pub points: Vec<GridPoint>,
    /// Extra points on the first (end) vertical edge.
    pub n1: usize,
    /// Extra points on the second (start) vertical edge.
    pub n2: usize,
}

impl WallPanel {
    /// Tiles the panel into faces.
    pub fn faces(&self) -> Vec<GridFace> {
        panel::triangulate(&self.points, self.n1, self.n2)
    }

    /// Appends the panel's faces to `out`.
    pub fn faces_into(&self, out: &mut Vec<GridFace>) {
        panel::triangulate_into(&self.points, self.n1, self.n2, out);
    }
}

/// Builds the wall panel between `(column, row)` and its neighbour along
/// `axis`, or `None` when the two cells are flush.
///
/// Cells outside the grid read as `base`.
///
/// # Example
///
/// ```rust
/// use stepgrid_mesh::{wall_panel, GridField, SeamAxis};
///
/// let field = GridField::from_columns(&[vec![5.0], vec![1.0]]).unwrap();
/// let panel = wall_panel(&field, 0.0, SeamAxis::Column, 0, 0).unwrap();
/// assert_eq!((panel.n1, panel.n2), (0, 0));
/// assert_eq!(panel.points.len(), 4);
/// assert!(wall_panel(&field, 0.0, SeamAxis::Column, 5, 5).is_none());
/// ```
pub fn wall_panel(
    field: &GridField,
    base: f64,
    axis: SeamAxis,
    column: i64,
    row: i64,
) -> Option<WallPanel> {
    let value = |(c, r): (i64, i64)| field.value_at(c, r, base);
    let geometry = axis.geometry(column, row);

    let cell = value((column, row));
    let neighbor = value(geometry.neighbor);
    if cell == neighbor {
        return None;
    }

    let end_extras = edge_extras(cell, neighbor, geometry.end_diagonals.map(value));
    let start_extras = edge_extras(neighbor, cell, geometry.start_diagonals.map(value));

    let mut points = Vec::with_capacity(4 + end_extras.len() + start_extras.len());
    points.push(GridPoint::at_corner(geometry.start, cell));
    points.push(GridPoint::at_corner(geometry.end, cell));
    points.extend(end_extras.iter().map(|&v| GridPoint::at_corner(geometry.end, v)));
    points.push(GridPoint::at_corner(geometry.end, neighbor));
    points.push(GridPoint::at_corner(geometry.start, neighbor));
    points.extend(start_extras.iter().map(|&v| GridPoint::at_corner(geometry.start, v)));

    Some(WallPanel {
        axis,
        column,
        row,
        points,
        n1: end_extras.len(),
        n2: start_extras.len(),
    })
}

/// Heights of diagonal neighbours that need a vertex on a vertical edge
/// running from `from` to `to`, ordered in that direction.
///
/// A height qualifies iff it lies strictly between `from` and `to`. Two
/// equal qualifying heights yield one point.
pub fn edge_extras(from: f64, to: f64, diagonals: [f64; 2]) -> Vec<f64> {
    let (low, high) = if from < to { (from, to) } else { (to, from) };
    let mut extras: Vec<f64> = diagonals
        .into_iter()
        .filter(|&v| low < v && v < high)
        .collect();

    if from < to {
        extras.sort_by(f64::total_cmp);
    } else {
        extras.sort_by(|a, b| b.total_cmp(a));
    }
    extras.dedup();

    debug_assert!(extras.len() <= MAX_EDGE_EXTRA_POINTS);
    extras
}
