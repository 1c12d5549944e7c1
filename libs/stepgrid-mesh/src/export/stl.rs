//! # ASCII STL Export
//!
//! ```text
//! solid <name>
//! facet normal 0 0 0
//!    outer loop
//!    vertex x y z
//!    vertex x y z
//!    vertex x y z
//!    endloop
//! endfacet
//! ...
//! endsolid <name>
//! ```
//!
//! Normals are written as the `0 0 0` placeholder; readers recompute them
//! from the vertex winding. Quads are split along the diagonal from their
//! first point as `(p0, p1, p2)` and `(p0, p2, p3)`, so both halves keep the
//! quad's outward winding. Writers that emit the second half as
//! `(p2, p0, p3)` flip it; files from those differ here on every second
//! triangle of a quad.

use super::GridTransform;
use crate::error::MeshError;
use crate::step_mesh::StepMesh;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `mesh` as an ASCII STL solid called `name`.
///
/// # Example
///
/// ```rust
/// use stepgrid_mesh::export::stl::write_stl;
/// use stepgrid_mesh::{GridTransform, StepMesh};
///
/// let mesh = StepMesh::from_columns(&[vec![1.0]], 0.0).unwrap();
/// let mut out = Vec::new();
/// write_stl(&mesh, "cell", &GridTransform::IDENTITY, &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("solid cell\n"));
/// assert_eq!(text.matches("facet normal 0 0 0").count(), 12);
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "stepgrid::write_stl"))]
pub fn write_stl<W: Write>(
    mesh: &StepMesh,
    name: &str,
    transform: &GridTransform,
    out: &mut W,
) -> Result<(), MeshError> {
    writeln!(out, "solid {name}")?;
    for face in mesh.faces() {
        for tri in face.triangles() {
            writeln!(out, "facet normal 0 0 0")?;
            writeln!(out, "   outer loop")?;
            for point in tri {
                let v = transform.apply(point);
                writeln!(out, "   vertex {} {} {}", v.x, v.y, v.z)?;
            }
            writeln!(out, "   endloop")?;
            writeln!(out, "endfacet")?;
        }
    }
    writeln!(out, "endsolid {name}")?;
    out.flush()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(name, triangles = mesh.triangle_count(), "wrote STL solid");

    Ok(())
}

/// Renders `mesh` as an ASCII STL string.
pub fn to_stl_string(
    mesh: &StepMesh,
    name: &str,
    transform: &GridTransform,
) -> Result<String, MeshError> {
    let mut out = Vec::new();
    write_stl(mesh, name, transform, &mut out)?;
    // Only ASCII text is ever written.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Writes `mesh` to an ASCII STL file at `path`.
pub fn save_stl(
    mesh: &StepMesh,
    name: &str,
    transform: &GridTransform,
    path: impl AsRef<Path>,
) -> Result<(), MeshError> {
    let mut out = BufWriter::new(File::create(path)?);
    write_stl(mesh, name, transform, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn vertex_lines(text: &str) -> Vec<[f64; 3]> {
        text.lines()
            .filter_map(|l| l.trim_start().strip_prefix("vertex "))
            .map(|rest| {
                let mut it = rest.split(' ').map(|t| t.parse::<f64>().unwrap());
                [it.next().unwrap(), it.next().unwrap(), it.next().unwrap()]
            })
            .collect()
    }

    #[test]
    fn test_frame_and_block_layout() {
        let mesh = StepMesh::from_columns(&[vec![1.0]], 0.0).unwrap();
        let text = to_stl_string(&mesh, "StepGrid", &GridTransform::IDENTITY).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.first(), Some(&"solid StepGrid"));
        assert_eq!(lines.last(), Some(&"endsolid StepGrid"));
        assert_eq!(
            &lines[1..8],
            &[
                "facet normal 0 0 0",
                "   outer loop",
                "   vertex 0 0 1",
                "   vertex 1 0 1",
                "   vertex 1 1 1",
                "   endloop",
                "endfacet",
            ]
        );
        // 6 quads -> 12 blocks of 7 lines, plus header and footer.
        assert_eq!(lines.len(), 12 * 7 + 2);
    }

    #[test]
    fn test_quad_split_keeps_winding() {
        let mesh = StepMesh::from_columns(&[vec![1.0]], 0.0).unwrap();
        let text = to_stl_string(&mesh, "s", &GridTransform::IDENTITY).unwrap();
        let vertices = vertex_lines(&text);
        // First top cap: (0,0,1) (1,0,1) (1,1,1) (0,1,1).
        assert_eq!(vertices[3..6], [[0.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]]);
        for tri in vertices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(DVec3::from_array);
            assert!((b - a).cross(c - a).length() > 0.0);
        }
    }

    #[test]
    fn test_quad_halves_face_the_same_way() {
        let mesh = StepMesh::from_columns(&[vec![2.0, 1.0]], 0.0).unwrap();
        let text = to_stl_string(&mesh, "s", &GridTransform::IDENTITY).unwrap();
        let vertices = vertex_lines(&text);
        let normal = |tri: &[[f64; 3]]| {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(DVec3::from_array);
            (b - a).cross(c - a).normalize()
        };
        let mut offset = 0;
        for face in mesh.faces() {
            let count = if face.is_quad() { 2 } else { 1 };
            let first = normal(&vertices[offset..offset + 3]);
            if count == 2 {
                let second = normal(&vertices[offset + 3..offset + 6]);
                assert!(first.dot(second) > 0.999, "{face:?}");
            }
            assert!(first.dot(face.normal().normalize()) > 0.999, "{face:?}");
            offset += 3 * count;
        }
        assert_eq!(offset, vertices.len());
    }

    #[test]
    fn test_transform_applied() {
        let mesh = StepMesh::from_columns(&[vec![1.0]], 0.0).unwrap();
        let transform = GridTransform::new(DVec3::new(5.0, 5.0, 10.0), DVec3::new(-30.0, -30.0, 2.0));
        let text = to_stl_string(&mesh, "s", &transform).unwrap();
        let vertices = vertex_lines(&text);
        assert_eq!(vertices[0], [-30.0, -30.0, 12.0]);
        assert_eq!(vertices[1], [-25.0, -30.0, 12.0]);
        assert!(vertices.iter().all(|v| v[2] == 2.0 || v[2] == 12.0));
    }

    #[test]
    fn test_triangle_faces_write_one_block() {
        // A lone raised cell beside a lower one gives triangles in its walls.
        let mesh = StepMesh::from_columns(&[vec![1.0, 3.0], vec![2.0, 0.0]], 0.0).unwrap();
        let text = to_stl_string(&mesh, "s", &GridTransform::IDENTITY).unwrap();
        assert_eq!(text.matches("facet normal").count(), mesh.triangle_count());
        assert_eq!(text.matches("endfacet").count(), mesh.triangle_count());
    }

    #[test]
    fn test_save_stl_to_file() {
        let mesh = StepMesh::from_columns(&[vec![1.0]], 0.0).unwrap();
        let path = std::env::temp_dir().join(format!("stepgrid_stl_{}.stl", std::process::id()));
        save_stl(&mesh, "file", &GridTransform::IDENTITY, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(text.ends_with("endsolid file\n"));
    }
}
