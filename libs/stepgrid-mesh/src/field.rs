//! # Grid Field
//!
//! Read-only 2D array of step values indexed `[column][row]`, with a total
//! lookup that answers a caller-chosen fallback outside the grid. The
//! fallback is what lets boundary cells, corner cells and the synthetic
//! exterior cell go through the same formulas as interior cells.

use crate::error::MeshError;

/// Rectangular field of step values.
///
/// Values are stored column-major: `values[column * rows + row]`.
#[derive(Debug, Clone, PartialEq)]
pub struct GridField {
    values: Vec<f64>,
    columns: usize,
    rows: usize,
}

impl GridField {
    /// Builds a field from nested columns (`values[column][row]`).
    ///
    /// # Errors
    ///
    /// [`MeshError::EmptyGrid`] for zero columns or zero rows and
    /// [`MeshError::RaggedGrid`] when a column's length differs from the
    /// first column's.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepgrid_mesh::GridField;
    ///
    /// let field = GridField::from_columns(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(field.columns(), 2);
    /// assert_eq!(field.value_at(1, 0, 0.0), 3.0);
    /// assert_eq!(field.value_at(2, 0, -1.0), -1.0);
    /// ```
    pub fn from_columns<C: AsRef<[f64]>>(columns: &[C]) -> Result<Self, MeshError> {
        let rows = columns.first().map_or(0, |c| c.as_ref().len());
        let cells = cell_count(columns.len(), rows)?;

        let mut values = Vec::with_capacity(cells);
        for (column, data) in columns.iter().enumerate() {
            let data = data.as_ref();
            if data.len() != rows {
                return Err(MeshError::RaggedGrid {
                    column,
                    expected: rows,
                    found: data.len(),
                });
            }
            values.extend_from_slice(data);
        }

        Ok(Self {
            values,
            columns: columns.len(),
            rows,
        })
    }

    /// Builds a field from a flat column-major buffer.
    ///
    /// # Errors
    ///
    /// [`MeshError::EmptyGrid`] for a zero extent,
    /// [`MeshError::GridTooLarge`] when `columns * rows` overflows and
    /// [`MeshError::RaggedGrid`] when the buffer length is not
    /// `columns * rows`.
    pub fn from_column_major(
        columns: usize,
        rows: usize,
        values: Vec<f64>,
    ) -> Result<Self, MeshError> {
        if values.len() != cell_count(columns, rows)? {
            // Report the first column that comes up short.
            let column = values.len() / rows;
            return Err(MeshError::RaggedGrid {
                column: column.min(columns.saturating_sub(1)),
                expected: rows,
                found: values.len() % rows,
            });
        }
        Ok(Self {
            values,
            columns,
            rows,
        })
    }

    /// Builds a field by evaluating `f(column, row)` for every cell.
    ///
    /// # Errors
    ///
    /// [`MeshError::EmptyGrid`] for a zero extent and
    /// [`MeshError::GridTooLarge`] when `columns * rows` overflows.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepgrid_mesh::GridField;
    ///
    /// let ramp = GridField::from_fn(3, 2, |c, r| (c + r) as f64).unwrap();
    /// assert_eq!(ramp.get(2, 1), Some(3.0));
    /// ```
    pub fn from_fn(
        columns: usize,
        rows: usize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> Result<Self, MeshError> {
        let mut values = Vec::with_capacity(cell_count(columns, rows)?);
        for column in 0..columns {
            for row in 0..rows {
                values.push(f(column, row));
            }
        }
        Self::from_column_major(columns, rows, values)
    }

    /// Number of columns (always at least 1).
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows (always at least 1).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the value of an in-range cell.
    #[inline]
    pub fn get(&self, column: usize, row: usize) -> Option<f64> {
        (column < self.columns && row < self.rows).then(|| self.values[column * self.rows + row])
    }

    /// Returns the cell value, or `fallback` for any position outside the grid.
    ///
    /// Total over all integers; negative indices are simply outside.
    #[inline]
    pub fn value_at(&self, column: i64, row: i64, fallback: f64) -> f64 {
        match (usize::try_from(column), usize::try_from(row)) {
            (Ok(column), Ok(row)) => self.get(column, row).unwrap_or(fallback),
            _ => fallback,
        }
    }

    /// Returns the column-major value buffer.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the data as nested columns (`[column][row]`).
    pub fn to_columns(&self) -> Vec<Vec<f64>> {
        self.values.chunks(self.rows).map(<[f64]>::to_vec).collect()
    }

    /// Smallest cell value.
    pub fn min_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest cell value.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Number of cells in a `columns x rows` grid, rejecting empty and
/// unaddressable extents.
fn cell_count(columns: usize, rows: usize) -> Result<usize, MeshError> {
    if columns == 0 || rows == 0 {
        return Err(MeshError::EmptyGrid { columns, rows });
    }
    columns
        .checked_mul(rows)
        .filter(|&cells| cells <= isize::MAX as usize / std::mem::size_of::<f64>())
        .ok_or(MeshError::GridTooLarge { columns, rows })
}
