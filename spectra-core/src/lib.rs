//! # Spectra Core Library
//!
//! Provides the dense matrix type, complex transport records and
//! eigendecomposition routines behind the spectrum webservice.

// Declare modules
pub mod algorithms;
pub mod error;
pub mod matrix;
pub mod record;
pub mod spectrum;
pub mod traits;

// Re-export public types
pub use algorithms::{EigenPairs, EigenSolver, FaerEvd};
pub use error::SpectraCoreError;
pub use matrix::DenseMatrix;
pub use record::{to_record_grid, ComplexRecord};
pub use spectrum::{compute_spectrum, EigenResult};
pub use traits::Matrix;
