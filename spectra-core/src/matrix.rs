use crate::error::SpectraCoreError;
use crate::traits::Matrix;

/// Represents a dense matrix stored in row-major order on the CPU.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>, // Data stored row-major: data[row * cols + col]
}

impl DenseMatrix {
    /// Creates a new DenseMatrix from raw data and dimensions, assuming row-major order.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, SpectraCoreError> {
        if data.len() != rows * cols {
            return Err(SpectraCoreError::InvalidDimensions(format!(
                "Data length ({}) does not match dimensions ({}x{})",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a new DenseMatrix from nested rows, the layout used by the
    /// web transport. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, SpectraCoreError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |row| row.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(SpectraCoreError::InvalidDimensions(format!(
                    "Row {} has length {}, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
        }
        let data = rows.iter().flatten().copied().collect();
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Creates a new DenseMatrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Returns a slice view of the underlying data vector.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Gets the element at the specified row and column.
    /// Returns None if indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&f64> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }
}

// Implement the generic Matrix trait
impl Matrix for DenseMatrix {
    type Value = f64;

    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    // rows(), cols(), is_square() are provided by default impls in the trait
}
