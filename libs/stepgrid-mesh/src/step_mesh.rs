//! # Stepped Mesh
//!
//! The builder's output: an ordered, immutable list of faces in grid units.
//! Consumers walk it with [`StepMesh::for_each_face`] and apply their own
//! transform.

use crate::builder::build_mesh;
use crate::error::MeshError;
use crate::face::GridFace;
use crate::field::GridField;
use crate::mesh::TriangleMesh;
use glam::DVec3;
use serde::Serialize;

/// Face counts per category plus a histogram of panel shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MeshStats {
    pub top_caps: usize,
    pub bottom_caps: usize,
    /// Faces emitted by column-direction wall panels.
    pub column_walls: usize,
    /// Faces emitted by row-direction wall panels.
    pub row_walls: usize,
    /// Number of wall panels per `(n1, n2)` shape.
    pub panel_cases: [[usize; 3]; 3],
}

impl MeshStats {
    /// Total number of wall panels.
    pub fn panel_count(&self) -> usize {
        self.panel_cases.iter().flatten().sum()
    }

    /// Total number of wall faces.
    pub fn wall_faces(&self) -> usize {
        self.column_walls + self.row_walls
    }
}

/// A closed stepped relief mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct StepMesh {
    faces: Vec<GridFace>,
    columns: usize,
    rows: usize,
    base: f64,
    stats: MeshStats,
}

impl StepMesh {
    pub(crate) fn new(
        faces: Vec<GridFace>,
        columns: usize,
        rows: usize,
        base: f64,
        stats: MeshStats,
    ) -> Self {
        Self {
            faces,
            columns,
            rows,
            base,
            stats,
        }
    }

    /// Validates a raw `[column][row]` array and builds its mesh.
    ///
    /// # Errors
    ///
    /// [`MeshError::EmptyGrid`] or [`MeshError::RaggedGrid`] when the array
    /// is not a non-empty rectangle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepgrid_mesh::StepMesh;
    ///
    /// let mesh = StepMesh::from_columns(&[vec![5.0, 1.0]], 0.0).unwrap();
    /// assert_eq!(mesh.stats().top_caps, 2);
    /// assert!(StepMesh::from_columns(&[Vec::<f64>::new()], 0.0).is_err());
    /// ```
    pub fn from_columns<C: AsRef<[f64]>>(columns: &[C], base: f64) -> Result<Self, MeshError> {
        let field = GridField::from_columns(columns)?;
        Ok(build_mesh(&field, base))
    }

    /// Faces in build order.
    #[inline]
    pub fn faces(&self) -> &[GridFace] {
        &self.faces
    }

    /// Calls `visitor` with every face, in build order.
    pub fn for_each_face(&self, mut visitor: impl FnMut(&GridFace)) {
        for face in &self.faces {
            visitor(face);
        }
    }

    /// Number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of triangles after splitting every quad.
    pub fn triangle_count(&self) -> usize {
        self.faces.iter().map(|f| if f.is_quad() { 2 } else { 1 }).sum()
    }

    /// Total number of point references over all faces.
    pub fn point_count(&self) -> usize {
        self.faces.iter().map(GridFace::len).sum()
    }

    /// Grid columns the mesh was built from.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Grid rows the mesh was built from.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Base value the mesh stands on.
    #[inline]
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Per-category face counts.
    #[inline]
    pub fn stats(&self) -> &MeshStats {
        &self.stats
    }

    /// Top cap faces.
    pub fn top_caps(&self) -> &[GridFace] {
        &self.faces[..self.stats.top_caps]
    }

    /// Bottom cap faces.
    pub fn bottom_caps(&self) -> &[GridFace] {
        let start = self.stats.top_caps;
        &self.faces[start..start + self.stats.bottom_caps]
    }

    /// Wall faces of both axes.
    pub fn walls(&self) -> &[GridFace] {
        &self.faces[self.stats.top_caps + self.stats.bottom_caps..]
    }

    /// Axis-aligned bounds in grid units as `(min, max)`.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let mut points = self.faces.iter().flat_map(|f| f.points().iter());
        let Some(first) = points.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        let first = first.to_dvec3();
        points.fold((first, first), |(min, max), p| {
            let v = p.to_dvec3();
            (min.min(v), max.max(v))
        })
    }

    /// Indexed triangle mesh for GPU or browser preview.
    pub fn to_triangle_mesh(&self) -> TriangleMesh {
        TriangleMesh::from_faces(&self.faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slices() {
        let mesh = StepMesh::from_columns(&[vec![5.0, 1.0]], 0.0).unwrap();
        assert_eq!(mesh.top_caps().len(), 2);
        assert_eq!(mesh.bottom_caps().len(), 2);
        assert_eq!(mesh.walls().len(), mesh.stats().wall_faces());
        assert!(mesh.bottom_caps().iter().all(|f| f.points().iter().all(|p| p.value == 0.0)));
    }

    #[test]
    fn test_for_each_face_visits_in_order() {
        let mesh = StepMesh::from_columns(&[vec![2.0]], 0.0).unwrap();
        let mut visited = Vec::new();
        mesh.for_each_face(|f| visited.push(*f));
        assert_eq!(visited, mesh.faces());
    }

    #[test]
    fn test_bounding_box() {
        let mesh = StepMesh::from_columns(&[vec![2.0, 3.0], vec![1.0, 4.0]], -1.0).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(0.0, 0.0, -1.0));
        assert_eq!(max, DVec3::new(2.0, 2.0, 4.0));
    }

    #[test]
    fn test_triangle_count() {
        let mesh = StepMesh::from_columns(&[vec![2.0]], 0.0).unwrap();
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.point_count(), 24);
    }

    #[test]
    fn test_mesh_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StepMesh>();
    }
}
