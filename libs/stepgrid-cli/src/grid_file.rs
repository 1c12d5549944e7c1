//! JSON grid files: `{ "base": f64, "values": [[f64]] }`, one inner array
//! per column.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use stepgrid_mesh::GridField;

/// On-disk grid description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridFile {
    /// Elevation of the bottom cap and of everything outside the grid.
    pub base: f64,
    /// `values[column][row]`.
    pub values: Vec<Vec<f64>>,
}

impl GridFile {
    pub fn from_field(field: &GridField, base: f64) -> Self {
        Self {
            base,
            values: field.to_columns(),
        }
    }

    /// Validates the value array into a [`GridField`].
    pub fn to_field(&self) -> Result<GridField> {
        GridField::from_columns(&self.values).context("Invalid grid values")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid file: {}", path.display()))?;
        let grid: GridFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse grid file: {}", path.display()))?;
        if !grid.base.is_finite() || grid.values.iter().flatten().any(|v| !v.is_finite()) {
            anyhow::bail!("Grid file {} contains non-finite values", path.display());
        }
        Ok(grid)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).context("Failed to serialize grid")?;
        std::fs::write(path, text)
            .with_context(|| format!("Failed to write grid file: {}", path.display()))
    }
}
