//! # Mesh Builder
//!
//! Converts a [`GridField`] into a closed [`StepMesh`].
//!
//! ## Face Order
//!
//! 1. Top caps, one quad per cell at the cell's value.
//! 2. Bottom caps, one quad per cell at the base value, reversed winding.
//! 3. Column-direction wall panels, column index from −1.
//! 4. Row-direction wall panels, row index from −1.
//!
//! ## Example
//!
//! ```rust
//! use stepgrid_mesh::{build_mesh, GridField};
//!
//! let field = GridField::from_columns(&[vec![5.0]]).unwrap();
//! let mesh = build_mesh(&field, 0.0);
//! assert_eq!(mesh.face_count(), 6);
//! ```

pub mod panel;
pub mod seam;

#[cfg(test)]
mod tests;

use crate::face::GridFace;
use crate::field::GridField;
use crate::point::GridPoint;
use crate::step_mesh::{MeshStats, StepMesh};
use seam::{wall_panel, SeamAxis};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Builds the complete stepped mesh for `field` standing on `base`.
///
/// Pure and total: every valid field yields a mesh, and the same input
/// always yields the same face list.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "stepgrid::build_mesh"))]
pub fn build_mesh(field: &GridField, base: f64) -> StepMesh {
    let mut builder = MeshBuilder::new(field, base);
    builder.build_top_caps();
    builder.build_bottom_caps();
    for axis in SeamAxis::ALL {
        builder.build_walls(axis);
    }
    builder.finish()
}

// =============================================================================
// MESH BUILDER
// =============================================================================

/// Mesh builder state, local to one [`build_mesh`] call.
struct MeshBuilder<'a> {
    field: &'a GridField,
    base: f64,
    /// Accumulated faces.
    faces: Vec<GridFace>,
    stats: MeshStats,
}

impl<'a> MeshBuilder<'a> {
    fn new(field: &'a GridField, base: f64) -> Self {
        let cells = field.columns() * field.rows();
        // Caps plus a rough allowance for one wall per seam.
        let capacity = 2 * cells + 2 * cells + field.columns() + field.rows();
        Self {
            field,
            base,
            faces: Vec::with_capacity(capacity),
            stats: MeshStats::default(),
        }
    }

    fn cells(&self) -> impl Iterator<Item = (i64, i64)> {
        let rows = self.field.rows() as i64;
        (0..self.field.columns() as i64).flat_map(move |c| (0..rows).map(move |r| (c, r)))
    }

    // =========================================================================
    // CAPS
    // =========================================================================

    /// One quad per cell at the cell value, wound for an upward normal.
    fn build_top_caps(&mut self) {
        let before = self.faces.len();
        for (c, r) in self.cells() {
            let value = self.field.value_at(c, r, self.base);
            self.faces.push(GridFace::Quad([
                GridPoint::at_corner((c, r), value),
                GridPoint::at_corner((c + 1, r), value),
                GridPoint::at_corner((c + 1, r + 1), value),
                GridPoint::at_corner((c, r + 1), value),
            ]));
        }
        self.stats.top_caps = self.faces.len() - before;
    }

    /// One quad per cell at the base value, wound for a downward normal.
    fn build_bottom_caps(&mut self) {
        let before = self.faces.len();
        for (c, r) in self.cells() {
            let base = self.base;
            self.faces.push(GridFace::Quad([
                GridPoint::at_corner((c, r + 1), base),
                GridPoint::at_corner((c + 1, r + 1), base),
                GridPoint::at_corner((c + 1, r), base),
                GridPoint::at_corner((c, r), base),
            ]));
        }
        self.stats.bottom_caps = self.faces.len() - before;
    }

    // =========================================================================
    // WALLS
    // =========================================================================

    fn build_walls(&mut self, axis: SeamAxis) {
        let before = self.faces.len();
        for (c, r) in axis.cells(self.field.columns(), self.field.rows()) {
            let Some(panel) = wall_panel(self.field, self.base, axis, c, r) else {
                continue;
            };
            self.stats.panel_cases[panel.n1][panel.n2] += 1;
            panel.faces_into(&mut self.faces);
        }
        let emitted = self.faces.len() - before;
        match axis {
            SeamAxis::Column => self.stats.column_walls = emitted,
            SeamAxis::Row => self.stats.row_walls = emitted,
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(?axis, faces = emitted, "built wall panels");
    }

    fn finish(self) -> StepMesh {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            columns = self.field.columns(),
            rows = self.field.rows(),
            faces = self.faces.len(),
            "mesh complete"
        );
        StepMesh::new(
            self.faces,
            self.field.columns(),
            self.field.rows(),
            self.base,
            self.stats,
        )
    }
}
