use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpectraCoreError {
    #[error("Invalid matrix dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Matrix entry at ({row}, {col}) is not a finite number")]
    NonFiniteEntry { row: usize, col: usize },

    #[error("Eigendecomposition did not converge")]
    NonConvergence,

    #[error("Internal error: {0}")]
    Internal(String),
}
