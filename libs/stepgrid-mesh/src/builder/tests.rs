//! # Mesh Builder Tests
//!
//! Scenario and property tests for cap and wall construction.

use super::*;
use crate::validate::validate_faces;
use std::collections::HashSet;

fn field(columns: &[Vec<f64>]) -> GridField {
    GridField::from_columns(columns).unwrap()
}

/// Deterministic small-integer grid; small ranges force plenty of ties.
fn scrambled(columns: usize, rows: usize, levels: u64, seed: u64) -> GridField {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    GridField::from_fn(columns, rows, |_, _| {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 33) % levels) as f64
    })
    .unwrap()
}

// =============================================================================
// CAPS
// =============================================================================

#[test]
fn test_cap_count_is_twice_cell_count() {
    for (columns, rows) in [(1, 1), (2, 1), (1, 3), (4, 5)] {
        let mesh = build_mesh(&scrambled(columns, rows, 4, 7), -1.0);
        assert_eq!(mesh.stats().top_caps, columns * rows);
        assert_eq!(mesh.stats().bottom_caps, columns * rows);
        assert!(mesh.top_caps().iter().chain(mesh.bottom_caps()).all(GridFace::is_quad));
    }
}

#[test]
fn test_top_caps_follow_grid_order() {
    let f = field(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
    let mesh = build_mesh(&f, 0.0);
    for (i, face) in mesh.top_caps().iter().enumerate() {
        let (c, r) = ((i / 2) as f64, (i % 2) as f64);
        assert_eq!(
            face.points(),
            &[
                GridPoint::new(c, r, f.values()[i]),
                GridPoint::new(c + 1.0, r, f.values()[i]),
                GridPoint::new(c + 1.0, r + 1.0, f.values()[i]),
                GridPoint::new(c, r + 1.0, f.values()[i]),
            ]
        );
    }
}

#[test]
fn test_bottom_caps_reverse_winding_at_base() {
    let mesh = build_mesh(&field(&[vec![4.0]]), -0.5);
    assert_eq!(
        mesh.bottom_caps(),
        &[GridFace::Quad([
            GridPoint::new(0.0, 1.0, -0.5),
            GridPoint::new(1.0, 1.0, -0.5),
            GridPoint::new(1.0, 0.0, -0.5),
            GridPoint::new(0.0, 0.0, -0.5),
        ])]
    );
    assert!(mesh.top_caps()[0].normal().z > 0.0);
    assert!(mesh.bottom_caps()[0].normal().z < 0.0);
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_single_cell_is_a_box() {
    let mesh = build_mesh(&field(&[vec![5.0]]), 0.0);
    assert_eq!(mesh.face_count(), 6);
    assert_eq!(mesh.point_count(), 24);
    assert!(mesh.faces().iter().all(GridFace::is_quad));
    assert_eq!(mesh.stats().panel_cases[0][0], 4);
    assert_eq!(mesh.stats().column_walls, 2);
    assert_eq!(mesh.stats().row_walls, 2);
}

#[test]
fn test_two_cells_column_seams_are_simple() {
    let mesh = build_mesh(&field(&[vec![5.0], vec![1.0]]), 0.0);
    let stats = mesh.stats();
    // Seams at columns -1, 0 and 1 all see base-valued diagonals.
    assert_eq!(stats.column_walls, 3);
    let column_walls = &mesh.walls()[..stats.column_walls];
    assert!(column_walls.iter().all(GridFace::is_quad));
    assert_eq!(column_walls[1].points().iter().map(|p| p.value).collect::<Vec<_>>(), vec![5.0, 5.0, 1.0, 1.0]);
    // The long outer row walls of the tall cell pass the lower cell's corner.
    assert_eq!(stats.panel_cases[1][0], 2);
    assert_eq!(mesh.face_count(), 13);
}

#[test]
fn test_flush_grid_only_has_outer_walls() {
    let mesh = build_mesh(&field(&[vec![3.0, 3.0], vec![3.0, 3.0]]), 0.0);
    assert_eq!(mesh.stats().panel_count(), 8);
    assert_eq!(mesh.stats().panel_cases[0][0], 8);
    assert_eq!(mesh.face_count(), 8 + 8);
}

#[test]
fn test_cells_at_base_have_no_walls() {
    let mesh = build_mesh(&field(&[vec![0.0, 0.0]]), 0.0);
    assert_eq!(mesh.stats().wall_faces(), 0);
    assert_eq!(mesh.face_count(), 4);
}

#[test]
fn test_equal_neighbours_emit_no_wall() {
    let f = field(&[vec![2.0, 2.0], vec![2.0, 7.0]]);
    for axis in SeamAxis::ALL {
        for (c, r) in axis.cells(f.columns(), f.rows()) {
            let cell = f.value_at(c, r, 0.0);
            let (nc, nr) = match axis {
                SeamAxis::Column => (c + 1, r),
                SeamAxis::Row => (c, r + 1),
            };
            let flush = cell == f.value_at(nc, nr, 0.0);
            assert_eq!(wall_panel(&f, 0.0, axis, c, r).is_none(), flush, "{axis:?} ({c}, {r})");
        }
    }
}

#[test]
fn test_diagonal_equal_to_wall_end_is_not_inserted() {
    // Column seam (0,1)|(1,1) runs 1 -> 4; diagonals at its end corner hold
    // exactly 1 and 4, at its start corner exactly 4 and 1.
    let f = field(&[vec![1.0, 1.0, 4.0], vec![4.0, 4.0, 1.0]]);
    let panel = wall_panel(&f, 0.0, SeamAxis::Column, 0, 1).unwrap();
    assert_eq!((panel.n1, panel.n2), (0, 0));
    assert!(validate_faces(build_mesh(&f, 0.0).faces()).is_watertight());
}

// =============================================================================
// PANEL PROPERTIES
// =============================================================================

#[test]
fn test_every_panel_uses_all_boundary_points() {
    let mut seen_cases = HashSet::new();
    for seed in 0..200 {
        let f = scrambled(5, 4, 6, seed);
        for axis in SeamAxis::ALL {
            for (c, r) in axis.cells(f.columns(), f.rows()) {
                let Some(panel) = wall_panel(&f, 0.0, axis, c, r) else {
                    continue;
                };
                seen_cases.insert((panel.n1, panel.n2));
                let faces = panel.faces();
                assert!(!faces.is_empty());
                let used: HashSet<_> = faces.iter().flat_map(|f| f.points().iter().map(|p| p.key())).collect();
                assert_eq!(used.len(), panel.points.len());
                assert_eq!(panel.points.len(), 4 + panel.n1 + panel.n2);
            }
        }
    }
    assert_eq!(seen_cases.len(), 9, "cases seen: {seen_cases:?}");
}

#[test]
fn test_walls_stay_on_their_seam() {
    let f = scrambled(4, 4, 5, 3);
    for axis in SeamAxis::ALL {
        for (c, r) in axis.cells(f.columns(), f.rows()) {
            let Some(panel) = wall_panel(&f, -1.0, axis, c, r) else {
                continue;
            };
            for face in panel.faces() {
                for p in face.points() {
                    match axis {
                        SeamAxis::Column => assert_eq!(p.column, (c + 1) as f64),
                        SeamAxis::Row => assert_eq!(p.row, (r + 1) as f64),
                    }
                }
            }
        }
    }
}

// =============================================================================
// WHOLE-MESH PROPERTIES
// =============================================================================

#[test]
fn test_meshes_are_watertight_and_non_degenerate() {
    for seed in 0..25 {
        for base in [-1.0, 0.0, 2.0] {
            let f = scrambled(1 + (seed % 5) as usize, 1 + (seed % 3) as usize, 5, seed);
            let mesh = build_mesh(&f, base);
            let report = validate_faces(mesh.faces());
            assert!(report.is_watertight(), "seed {seed} base {base}: {report:?}");
            assert_eq!(report.degenerate_faces, 0, "seed {seed} base {base}");
        }
    }
}

#[test]
fn test_ramp_is_manifold() {
    let f = GridField::from_fn(3, 2, |c, r| (1 + c + r) as f64).unwrap();
    let report = validate_faces(build_mesh(&f, 0.0).faces());
    assert!(report.is_watertight());
    assert!(report.is_manifold(), "{report:?}");
}

#[test]
fn test_saddle_is_watertight_but_not_manifold() {
    // Diagonal cells share a level, so four walls meet on the centre edge.
    let f = field(&[vec![1.0, 3.0], vec![3.0, 1.0]]);
    let report = validate_faces(build_mesh(&f, 0.0).faces());
    assert!(report.is_watertight());
    assert!(!report.is_manifold());
}

#[test]
fn test_build_is_idempotent() {
    let f = scrambled(6, 5, 7, 11);
    let first = build_mesh(&f, -0.2);
    let second = build_mesh(&f, -0.2);
    assert_eq!(first, second);
    let bits = |m: &StepMesh| -> Vec<[u64; 3]> {
        m.faces()
            .iter()
            .flat_map(|f| f.points().iter().map(|p| [p.column.to_bits(), p.row.to_bits(), p.value.to_bits()]))
            .collect()
    };
    assert_eq!(bits(&first), bits(&second));
}

#[test]
fn test_faces_close_in_volume() {
    // Signed volume of a closed mesh equals the volume of the step solid.
    let f = field(&[vec![2.0, 1.0], vec![3.0, 0.5]]);
    let base = 0.0;
    let mesh = build_mesh(&f, base);
    let volume: f64 = mesh
        .faces()
        .iter()
        .flat_map(|face| face.triangles())
        .map(|[a, b, c]| a.to_dvec3().dot(b.to_dvec3().cross(c.to_dvec3())) / 6.0)
        .sum();
    let expected: f64 = f.values().iter().map(|v| v - base).sum();
    approx::assert_relative_eq!(volume, expected, epsilon = 1e-9);
}
