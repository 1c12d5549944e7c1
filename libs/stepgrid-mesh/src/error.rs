//! # Mesh Errors
//!
//! Error types for grid construction, mesh validation and export.

use thiserror::Error;

/// Errors that can occur while building, validating or exporting a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The input grid has no columns or no rows
    #[error("Empty grid: {columns} columns x {rows} rows")]
    EmptyGrid { columns: usize, rows: usize },

    /// The grid's cell count does not fit in memory addressing
    #[error("Grid too large: {columns} columns x {rows} rows")]
    GridTooLarge { columns: usize, rows: usize },

    /// A column of the input grid has a different length than the first
    #[error("Ragged grid: column {column} has {found} rows (expected {expected})")]
    RaggedGrid {
        column: usize,
        expected: usize,
        found: usize,
    },

    /// Invalid mesh topology
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Writing an export failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing an export failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MeshError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}
