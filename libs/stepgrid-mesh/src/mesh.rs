//! # Triangle Mesh
//!
//! Indexed triangle representation of a stepped mesh, for preview renderers
//! that want shared vertices and flat GPU buffers.

use crate::face::GridFace;
use crate::point::GridPoint;
use glam::DVec3;
use serde::Serialize;
use std::collections::HashMap;

/// A triangle mesh with welded vertices and indices.
///
/// Vertices are welded only when their grid coordinates are bit-identical,
/// which is exactly how the builder shares vertices between faces.
///
/// # Example
///
/// ```rust
/// use stepgrid_mesh::StepMesh;
///
/// let mesh = StepMesh::from_columns(&[vec![5.0]], 0.0).unwrap().to_triangle_mesh();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct TriangleMesh {
    /// Vertex positions as `(column, row, value)`
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals
    #[serde(skip_serializing_if = "Option::is_none")]
    normals: Option<Vec<DVec3>>,
}

impl TriangleMesh {
    /// Triangulates faces and welds identical points.
    pub fn from_faces(faces: &[GridFace]) -> Self {
        let mut mesh = Self {
            vertices: Vec::new(),
            triangles: Vec::with_capacity(faces.len() * 2),
            normals: None,
        };
        let mut lookup: HashMap<[u64; 3], u32> = HashMap::new();

        for face in faces {
            for tri in face.triangles() {
                let [a, b, c] = tri.map(|p| mesh.weld(&mut lookup, p));
                mesh.triangles.push([a, b, c]);
            }
        }
        mesh
    }

    fn weld(&mut self, lookup: &mut HashMap<[u64; 3], u32>, point: GridPoint) -> u32 {
        *lookup.entry(point.key()).or_insert_with(|| {
            let index = self.vertices.len() as u32;
            self.vertices.push(point.to_dvec3());
            index
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes and sets area-weighted vertex normals.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(&first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        self.vertices[1..]
            .iter()
            .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Maps every vertex through `f`, e.g. a display transform.
    pub fn map_vertices(&mut self, f: impl Fn(DVec3) -> DVec3) {
        for v in &mut self.vertices {
            *v = f(*v);
        }
        // Normals no longer match a non-uniform transform.
        if self.normals.is_some() {
            self.compute_normals();
        }
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }
}
