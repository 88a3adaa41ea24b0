use serde::{Deserialize, Serialize};

use crate::algorithms::EigenSolver;
use crate::error::SpectraCoreError;
use crate::matrix::DenseMatrix;
use crate::record::{to_record_grid, ComplexRecord};
use crate::traits::Matrix;

/// Full spectrum of a square matrix in transport form.
///
/// Created fresh per computation and discarded after serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EigenResult {
    /// Eigenvalues, in the order produced by the solver.
    pub values: Vec<ComplexRecord>,
    /// Eigenvector matrix, row by row. Column `j` pairs with `values[j]`.
    pub vectors: Vec<Vec<ComplexRecord>>,
}

/// Computes all eigenvalues and eigenvectors of `matrix` and converts every
/// complex number into its transport record.
///
/// Fails with `InvalidDimensions` if `matrix` is not square; solver errors
/// propagate unmodified.
pub fn compute_spectrum<S: EigenSolver>(
    matrix: &DenseMatrix,
    solver: &S,
) -> Result<EigenResult, SpectraCoreError> {
    log::info!("Computing matrix spectrum...");
    log::debug!("Input matrix: {:?}", matrix.dims());

    let pairs = solver.solve(matrix)?;

    let values: Vec<ComplexRecord> = pairs
        .values
        .iter()
        .copied()
        .map(ComplexRecord::from)
        .collect();
    let vectors = to_record_grid(&pairs.vectors);

    log::debug!("Spectrum computed: {} eigenvalues", values.len());
    Ok(EigenResult { values, vectors })
}
