use std::fmt::Debug;

/// Generic trait representing a matrix.
/// Implementations can be dense or sparse.
/// Needs Debug for logging.
pub trait Matrix: Debug {
    /// The underlying numeric type of the matrix elements (e.g., f64).
    type Value: Copy + Debug + Default;

    /// Returns the dimensions of the matrix as (rows, columns).
    fn dims(&self) -> (usize, usize);

    /// Returns the number of rows.
    fn rows(&self) -> usize {
        self.dims().0
    }

    /// Returns the number of columns.
    fn cols(&self) -> usize {
        self.dims().1
    }

    /// Checks if the matrix is square.
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }
}
