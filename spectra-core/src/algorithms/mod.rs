use num_complex::Complex64;

use crate::error::SpectraCoreError;
use crate::matrix::DenseMatrix;
use crate::traits::Matrix;

/// Raw eigendecomposition output.
#[derive(Debug, Clone)]
pub struct EigenPairs {
    /// Eigenvalues, in the order produced by the backend. Not sorted.
    pub values: Vec<Complex64>,
    /// Eigenvector matrix stored row by row: `vectors[i][j]` is component
    /// `i` of the eigenvector paired with `values[j]`.
    pub vectors: Vec<Vec<Complex64>>,
}

// --- Algorithm Trait Definition ---
/// Trait representing an eigendecomposition routine.
/// Implementations may differ in the backend library they delegate to.
pub trait EigenSolver {
    /// Computes all eigenvalues and eigenvectors of `a`.
    ///
    /// # Arguments
    ///
    /// * `a` - The square input matrix.
    ///
    /// # Returns
    ///
    /// A `Result` containing the eigenpairs or a `SpectraCoreError`.
    /// Eigenvalue order is whatever the backend produces; callers must not
    /// assume it is sorted. Normalization of the eigenvectors is the
    /// backend's (typically unit 2-norm, phase unconstrained).
    fn solve(&self, a: &DenseMatrix) -> Result<EigenPairs, SpectraCoreError>;

    // Helper for input validation, called by implementations.
    fn validate_input(&self, a: &DenseMatrix) -> Result<(), SpectraCoreError> {
        let (rows, cols) = a.dims();
        if !a.is_square() {
            return Err(SpectraCoreError::InvalidDimensions(format!(
                "Matrix must be square (dims: {}x{})",
                rows, cols
            )));
        }
        for (idx, value) in a.data().iter().enumerate() {
            if !value.is_finite() {
                return Err(SpectraCoreError::NonFiniteEntry {
                    row: idx / cols,
                    col: idx % cols,
                });
            }
        }
        Ok(())
    }
}

// --- Algorithm Implementations ---

// Declare the modules for specific algorithm implementations
pub mod faer_evd; // Dense general eigendecomposition backed by faer

// --- Algorithm Struct Definitions ---

/// General (non-symmetric) dense eigendecomposition delegating to `faer`.
#[derive(Debug, Clone, Default)]
pub struct FaerEvd;

impl FaerEvd {
    /// Creates a new instance of the faer-backed solver.
    pub fn new() -> Self {
        Self
    }
}
