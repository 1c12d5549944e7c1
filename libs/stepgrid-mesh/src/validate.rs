//! # Mesh Validation
//!
//! Topology and degeneracy checks over a face list.
//!
//! - **Watertight**: every directed edge is matched by the same number of
//!   edges running the other way.
//! - **Manifold**: every undirected edge is used by exactly two faces, once
//!   in each direction. Saddle corners (four walls meeting on one vertical
//!   segment) are watertight but not manifold.
//! - **Non-degenerate**: no face has three collinear consecutive points.

use crate::error::MeshError;
use crate::face::GridFace;
use crate::point::GridPoint;
use config::constants::COLLINEAR_EPSILON;
use serde::Serialize;
use std::collections::HashMap;

type EdgeKey = ([u64; 3], [u64; 3]);

/// Outcome of [`validate_faces`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Distinct undirected edges.
    pub edge_count: usize,
    /// Undirected edges whose two directions are not used equally often.
    pub unbalanced_edges: usize,
    /// Undirected edges not used exactly once in each direction.
    pub non_manifold_edges: usize,
    /// Faces with three collinear consecutive points.
    pub degenerate_faces: usize,
}

impl ValidationReport {
    /// True when every directed edge has a reverse partner.
    pub fn is_watertight(&self) -> bool {
        self.unbalanced_edges == 0
    }

    /// True when every edge joins exactly two faces with opposite winding.
    pub fn is_manifold(&self) -> bool {
        self.non_manifold_edges == 0
    }

    /// Converts the report into an error for the first failed check.
    ///
    /// Non-manifold edges are tolerated; saddle corners produce them
    /// legitimately.
    pub fn into_result(self) -> Result<Self, MeshError> {
        if self.degenerate_faces > 0 {
            return Err(MeshError::degenerate(format!(
                "{} faces have collinear points",
                self.degenerate_faces
            )));
        }
        if self.unbalanced_edges > 0 {
            return Err(MeshError::invalid_topology(format!(
                "{} of {} edges are not closed",
                self.unbalanced_edges, self.edge_count
            )));
        }
        Ok(self)
    }
}

/// Runs every check over `faces`.
///
/// # Example
///
/// ```rust
/// use stepgrid_mesh::{validate_faces, StepMesh};
///
/// let mesh = StepMesh::from_columns(&[vec![5.0, 1.0]], 0.0).unwrap();
/// let report = validate_faces(mesh.faces());
/// assert!(report.is_watertight());
/// assert!(report.is_manifold());
/// ```
pub fn validate_faces(faces: &[GridFace]) -> ValidationReport {
    let directed = directed_edges(faces);

    let mut report = ValidationReport {
        degenerate_faces: faces
            .iter()
            .filter(|f| f.has_collinear_points(COLLINEAR_EPSILON))
            .count(),
        ..Default::default()
    };

    for (&(a, b), &forward) in &directed {
        // Visit each undirected edge once, from its smaller key.
        let backward = directed.get(&(b, a)).copied().unwrap_or(0);
        if a > b && backward > 0 {
            continue;
        }
        report.edge_count += 1;
        if forward != backward {
            report.unbalanced_edges += 1;
        }
        if forward != 1 || backward != 1 {
            report.non_manifold_edges += 1;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(?report, "validated faces");

    report
}

/// Counts every directed edge of every face.
pub fn directed_edges(faces: &[GridFace]) -> HashMap<EdgeKey, usize> {
    let mut edges = HashMap::new();
    for face in faces {
        for (a, b) in face.edges() {
            *edges.entry(edge_key(a, b)).or_insert(0) += 1;
        }
    }
    edges
}

fn edge_key(a: GridPoint, b: GridPoint) -> EdgeKey {
    (a.key(), b.key())
}
