//! # Export
//!
//! Writers that walk a [`StepMesh`](crate::StepMesh) face by face and place
//! each point in output space through a [`GridTransform`].

pub mod json;
pub mod stl;

use crate::point::GridPoint;
use config::constants::ExportConfig;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Per-axis scale and offset from grid units to output units:
/// `out = offset + scale * (column, row, value)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridTransform {
    pub scale: DVec3,
    pub offset: DVec3,
}

impl GridTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale: DVec3::ONE,
        offset: DVec3::ZERO,
    };

    /// Creates a transform from `(column, row, value)` scale and offset.
    pub fn new(scale: DVec3, offset: DVec3) -> Self {
        Self { scale, offset }
    }

    /// Maps a grid point to output space.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use stepgrid_mesh::{GridPoint, GridTransform};
    ///
    /// let t = GridTransform::new(DVec3::new(5.0, 5.0, 10.0), DVec3::new(-30.0, -30.0, 0.5));
    /// let p = t.apply(GridPoint::new(2.0, 1.0, 3.0));
    /// assert_eq!(p, DVec3::new(-20.0, -25.0, 30.5));
    /// ```
    #[inline]
    pub fn apply(&self, point: GridPoint) -> DVec3 {
        self.offset + self.scale * point.to_dvec3()
    }
}

impl Default for GridTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<&ExportConfig> for GridTransform {
    fn from(config: &ExportConfig) -> Self {
        Self::new(DVec3::from_array(config.scale), DVec3::from_array(config.offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let p = GridPoint::new(1.5, -2.0, 3.0);
        assert_eq!(GridTransform::IDENTITY.apply(p), p.to_dvec3());
        assert_eq!(GridTransform::default(), GridTransform::IDENTITY);
    }

    #[test]
    fn test_from_export_config() {
        let t = GridTransform::from(&ExportConfig::default());
        assert_eq!(t.scale, DVec3::new(5.0, 5.0, 10.0));
        assert_eq!(t.offset, DVec3::new(-30.0, -30.0, 0.2));
    }
}
