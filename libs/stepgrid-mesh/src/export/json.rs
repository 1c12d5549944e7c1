//! # JSON Preview Export
//!
//! Serializes the indexed triangle mesh as flat buffers for a browser or GPU
//! preview. The preview owns projection, lighting and camera control.

use super::GridTransform;
use crate::error::MeshError;
use crate::step_mesh::{MeshStats, StepMesh};
use serde::Serialize;
use std::io::Write;

/// Flat-buffer description of a transformed mesh.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewDocument {
    pub columns: usize,
    pub rows: usize,
    pub base: f64,
    pub stats: MeshStats,
    /// `[x, y, z, ...]` in output space.
    pub vertices: Vec<f32>,
    /// `[i0, i1, i2, ...]`, counter-clockwise from outside.
    pub indices: Vec<u32>,
    /// Unit vertex normals, parallel to `vertices`.
    pub normals: Vec<f32>,
    /// `[min, max]` corners in output space.
    pub bounds: [[f64; 3]; 2],
}

impl PreviewDocument {
    /// Builds the preview buffers for `mesh` under `transform`.
    pub fn new(mesh: &StepMesh, transform: &GridTransform) -> Self {
        let mut triangles = mesh.to_triangle_mesh();
        let transform = *transform;
        triangles.map_vertices(|v| transform.offset + transform.scale * v);
        triangles.compute_normals();
        let (min, max) = triangles.bounding_box();

        Self {
            columns: mesh.columns(),
            rows: mesh.rows(),
            base: mesh.base(),
            stats: *mesh.stats(),
            vertices: triangles.vertices_f32(),
            indices: triangles.indices_u32(),
            normals: triangles.normals_f32().unwrap_or_default(),
            bounds: [min.to_array(), max.to_array()],
        }
    }
}

/// Writes the preview document for `mesh` as JSON.
pub fn write_json<W: Write>(
    mesh: &StepMesh,
    transform: &GridTransform,
    out: &mut W,
) -> Result<(), MeshError> {
    serde_json::to_writer(&mut *out, &PreviewDocument::new(mesh, transform))?;
    out.flush()?;
    Ok(())
}

/// Renders the preview document for `mesh` as a JSON string.
pub fn to_json_string(mesh: &StepMesh, transform: &GridTransform) -> Result<String, MeshError> {
    Ok(serde_json::to_string(&PreviewDocument::new(mesh, transform))?)
}
