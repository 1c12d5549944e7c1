//! # Stepped Grid Mesh
//!
//! Converts a 2D grid of step heights into one watertight polygonal mesh
//! resembling a stepped relief model: a top cap per cell, a bottom cap at
//! the base value, and vertical skirt walls wherever neighbouring cells
//! (or a cell and the exterior) differ.
//!
//! ## Architecture
//!
//! ```text
//! GridField -> build_mesh -> StepMesh -> export::stl / export::json / TriangleMesh
//! ```
//!
//! ## Algorithms
//!
//! - **Caps**: one quad per cell, top and bottom
//! - **Walls**: one parameterized seam sweep per axis; extra collinear
//!   vertices on each vertical wall edge come from the diagonal neighbours
//! - **Panels**: a fixed case table tiles each wall, keyed by the number of
//!   extra points on its two vertical edges
//!
//! ## Usage
//!
//! ```rust
//! use stepgrid_mesh::{build_mesh, validate_faces, GridField};
//!
//! let field = GridField::from_columns(&[vec![5.0], vec![1.0]]).unwrap();
//! let mesh = build_mesh(&field, 0.0);
//! assert_eq!(mesh.stats().top_caps + mesh.stats().bottom_caps, 4);
//! assert!(validate_faces(mesh.faces()).is_watertight());
//! ```

pub mod builder;
pub mod error;
pub mod export;
pub mod face;
pub mod field;
pub mod mesh;
pub mod point;
pub mod step_mesh;
pub mod validate;

pub use builder::build_mesh;
pub use builder::seam::{wall_panel, SeamAxis, WallPanel};
pub use error::MeshError;
pub use export::GridTransform;
pub use face::GridFace;
pub use field::GridField;
pub use mesh::TriangleMesh;
pub use point::GridPoint;
pub use step_mesh::{MeshStats, StepMesh};
pub use validate::{validate_faces, ValidationReport};
