//! # Configuration Constants
//!
//! Centralized constants for the stepped grid pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Degeneracy tolerance for face validation
//! - **Panels**: Limits of the wall panel case table
//! - **Generator**: Defaults for random input grids
//! - **Export**: Defaults for the STL writer

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Smallest cross-product magnitude accepted for three consecutive face
/// points before the face is reported as degenerate.
///
/// Grid coordinates are whole cell units and step values are user data, so a
/// genuine wall corner always produces a magnitude far above this.
///
/// # Example
///
/// ```rust
/// use config::constants::COLLINEAR_EPSILON;
///
/// // A unit cell corner is far above the threshold.
/// assert!(1.0 > COLLINEAR_EPSILON);
/// ```
pub const COLLINEAR_EPSILON: f64 = 1e-12;

// =============================================================================
// PANEL CONSTANTS
// =============================================================================

/// Fixed corners of every wall panel (two per horizontal edge).
pub const PANEL_FIXED_POINTS: usize = 4;

/// Maximum number of collinear points inserted on one vertical wall edge.
///
/// A vertical edge is shared by four cells; two of them are the wall's own
/// cells, so at most two diagonal neighbours can add a point.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_EDGE_EXTRA_POINTS, PANEL_FIXED_POINTS};
///
/// let largest_panel = PANEL_FIXED_POINTS + 2 * MAX_EDGE_EXTRA_POINTS;
/// assert_eq!(largest_panel, 8);
/// ```
pub const MAX_EDGE_EXTRA_POINTS: usize = 2;

// =============================================================================
// GENERATOR CONSTANTS
// =============================================================================

/// Elevation of the bottom cap and of everything outside the grid.
pub const DEFAULT_BASE_VALUE: f64 = -0.2;

/// Default number of grid columns for generated grids.
pub const DEFAULT_GRID_COLUMNS: usize = 12;

/// Default number of grid rows for generated grids.
pub const DEFAULT_GRID_ROWS: usize = 12;

/// Width, in cells, of the flat band around a generated grid.
pub const DEFAULT_BORDER_WIDTH: usize = 1;

/// Value of the border band cells.
///
/// Sits above [`DEFAULT_BASE_VALUE`], so a generated grid stands on a low
/// plinth whose outer walls are part of the solid.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_BASE_VALUE, DEFAULT_BORDER_VALUE};
///
/// assert!(DEFAULT_BORDER_VALUE > DEFAULT_BASE_VALUE);
/// ```
pub const DEFAULT_BORDER_VALUE: f64 = 0.0;

/// Lower bound (inclusive) of generated step values.
pub const DEFAULT_MIN_STEP: f64 = 1.0;

/// Upper bound (exclusive) of generated step values.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_MAX_STEP, DEFAULT_MIN_STEP};
///
/// assert!(DEFAULT_MIN_STEP < DEFAULT_MAX_STEP);
/// ```
pub const DEFAULT_MAX_STEP: f64 = 5.0;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Name written after `solid` / `endsolid` in ASCII STL output.
pub const DEFAULT_SOLID_NAME: &str = "StepGrid";

/// Default (column, row, value) scale applied when exporting.
pub const DEFAULT_EXPORT_SCALE: [f64; 3] = [5.0, 5.0, 10.0];

/// Default (column, row, value) offset applied after scaling when exporting.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_EXPORT_OFFSET, DEFAULT_EXPORT_SCALE};
///
/// // Column 0 of a default export lands at x = -30.
/// let x = DEFAULT_EXPORT_OFFSET[0] + DEFAULT_EXPORT_SCALE[0] * 0.0;
/// assert_eq!(x, -30.0);
/// ```
pub const DEFAULT_EXPORT_OFFSET: [f64; 3] = [-30.0, -30.0, 0.2];

/// Default file name stem for exported solids.
pub const DEFAULT_EXPORT_STEM: &str = "demo";

// =============================================================================
// SETTINGS
// =============================================================================

/// Validated settings for the random grid generator.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// let cfg = GeneratorConfig::default();
/// assert!(cfg.columns > 2 * cfg.border);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Number of grid columns.
    pub columns: usize,
    /// Number of grid rows.
    pub rows: usize,
    /// Width of the band held at `border_value`.
    pub border: usize,
    /// Value of every border band cell.
    pub border_value: f64,
    /// Inclusive lower bound of interior values.
    pub min_value: f64,
    /// Exclusive upper bound of interior values.
    pub max_value: f64,
    /// Base value of the generated grid.
    pub base: f64,
}

impl GeneratorConfig {
    /// Builds generator settings, rejecting empty grids, empty ranges and
    /// ranges too wide to sample.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, GeneratorConfig};
    /// let cfg = GeneratorConfig::new(4, 3, 1, 0.0, 1.0, 2.0, 0.0).expect("valid config");
    /// assert_eq!(cfg.rows, 3);
    /// assert_eq!(
    ///     GeneratorConfig::new(0, 3, 0, 0.0, 1.0, 2.0, 0.0).unwrap_err(),
    ///     ConfigError::EmptyGrid { columns: 0, rows: 3 }
    /// );
    /// ```
    pub fn new(
        columns: usize,
        rows: usize,
        border: usize,
        border_value: f64,
        min_value: f64,
        max_value: f64,
        base: f64,
    ) -> Result<Self, ConfigError> {
        if columns == 0 || rows == 0 {
            return Err(ConfigError::EmptyGrid { columns, rows });
        }
        if !(min_value < max_value) || !(max_value - min_value).is_finite() {
            return Err(ConfigError::InvalidRange {
                min: min_value,
                max: max_value,
            });
        }
        if !border_value.is_finite() {
            return Err(ConfigError::NonFinite("border_value"));
        }
        if !base.is_finite() {
            return Err(ConfigError::NonFinite("base"));
        }
        Ok(Self {
            columns,
            rows,
            border,
            border_value,
            min_value,
            max_value,
            base,
        })
    }

    /// Returns true when the cell lies inside the border band.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeneratorConfig;
    /// let cfg = GeneratorConfig::default();
    /// assert!(cfg.in_border(0, 5));
    /// assert!(!cfg.in_border(5, 5));
    /// assert!(cfg.in_border(5, cfg.rows - 1));
    /// ```
    pub fn in_border(&self, column: usize, row: usize) -> bool {
        column < self.border
            || row < self.border
            || column + self.border >= self.columns
            || row + self.border >= self.rows
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_GRID_COLUMNS,
            rows: DEFAULT_GRID_ROWS,
            border: DEFAULT_BORDER_WIDTH,
            border_value: DEFAULT_BORDER_VALUE,
            min_value: DEFAULT_MIN_STEP,
            max_value: DEFAULT_MAX_STEP,
            base: DEFAULT_BASE_VALUE,
        }
    }
}

/// Validated settings for solid export.
///
/// # Examples
/// ```
/// use config::constants::ExportConfig;
/// let cfg = ExportConfig::default();
/// assert_eq!(cfg.solid_name, "StepGrid");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Per-axis (column, row, value) scale.
    pub scale: [f64; 3],
    /// Per-axis (column, row, value) offset applied after scaling.
    pub offset: [f64; 3],
    /// Name written into the `solid` header.
    pub solid_name: String,
}

impl ExportConfig {
    /// Builds export settings, rejecting zero or non-finite scales and names
    /// that would break the single-token STL header.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, ExportConfig};
    /// let cfg = ExportConfig::new([1.0, 1.0, 2.0], [0.0; 3], "terrain").expect("valid config");
    /// assert_eq!(cfg.scale[2], 2.0);
    /// assert_eq!(
    ///     ExportConfig::new([1.0, 0.0, 1.0], [0.0; 3], "terrain").unwrap_err(),
    ///     ConfigError::InvalidScale(0.0)
    /// );
    /// ```
    pub fn new(
        scale: [f64; 3],
        offset: [f64; 3],
        solid_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(bad) = scale.iter().copied().find(|s| *s == 0.0 || !s.is_finite()) {
            return Err(ConfigError::InvalidScale(bad));
        }
        if offset.iter().any(|o| !o.is_finite()) {
            return Err(ConfigError::NonFinite("offset"));
        }
        let solid_name = solid_name.into();
        if solid_name.is_empty() || solid_name.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidSolidName(solid_name));
        }
        Ok(Self {
            scale,
            offset,
            solid_name,
        })
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_EXPORT_SCALE,
            offset: DEFAULT_EXPORT_OFFSET,
            solid_name: DEFAULT_SOLID_NAME.to_string(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a grid would have no columns or no rows.
    EmptyGrid { columns: usize, rows: usize },
    /// Raised when the generator value range is empty or not finite.
    InvalidRange { min: f64, max: f64 },
    /// Raised when an export scale is zero or not finite.
    InvalidScale(f64),
    /// Raised when a named value is NaN or infinite.
    NonFinite(&'static str),
    /// Raised when the solid name is empty or contains whitespace.
    InvalidSolidName(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid { columns, rows } => {
                write!(f, "grid must have at least one cell: {columns}x{rows}")
            }
            ConfigError::InvalidRange { min, max } => {
                write!(f, "value range must satisfy min < max: [{min}, {max})")
            }
            ConfigError::InvalidScale(value) => {
                write!(f, "scale must be finite and non-zero: {value}")
            }
            ConfigError::NonFinite(name) => write!(f, "{name} must be finite"),
            ConfigError::InvalidSolidName(name) => {
                write!(f, "solid name must be one non-empty token: {name:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
