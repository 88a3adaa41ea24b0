use serde::{Deserialize, Serialize};
use serde_json::json; // For the json! macro in schema examples
use spectra_core::{ComplexRecord, EigenResult};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

// --- Request Models ---

// Mirrors the core input instead of exposing spectra-core types in the API
// signature, so the web layer carries its own Validate/ToSchema derives.

#[derive(Clone, Debug, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "matrix": [[2.0, 0.0], [0.0, 3.0]]
}))]
pub struct SpectrumRequest {
    /// Square numeric matrix, row by row.
    #[validate(length(min = 1), custom(function = validate_matrix_shape))]
    pub matrix: Vec<Vec<f64>>,
}

// Rows must be rectangular and square and every entry finite, so the numeric
// layer only ever sees well-formed input.
fn validate_matrix_shape(matrix: &[Vec<f64>]) -> Result<(), ValidationError> {
    let n = matrix.len();
    for row in matrix {
        if row.len() != n {
            return Err(ValidationError::new("matrix_not_square"));
        }
        if row.iter().any(|value| !value.is_finite()) {
            return Err(ValidationError::new("matrix_entry_not_finite"));
        }
    }
    Ok(())
}

// --- Response Models ---

/// Transport form of one complex number.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ComplexEntry {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
    /// Angle in radians, in (-pi, pi].
    pub ang: f64,
    /// Euclidean magnitude.
    pub mag: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SpectrumResponse {
    /// Eigenvalues, in solver order.
    pub values: Vec<ComplexEntry>,
    /// Eigenvector matrix, row by row; column `j` pairs with `values[j]`.
    pub vectors: Vec<Vec<ComplexEntry>>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub error: String,
    pub message: String,
    pub details: Option<Vec<String>>,
}

// Conversions off the core types, keeping the web models decoupled.

impl From<ComplexRecord> for ComplexEntry {
    fn from(record: ComplexRecord) -> Self {
        Self {
            re: record.re,
            im: record.im,
            ang: record.ang,
            mag: record.mag,
        }
    }
}

impl From<EigenResult> for SpectrumResponse {
    fn from(result: EigenResult) -> Self {
        Self {
            values: result.values.into_iter().map(Into::into).collect(),
            vectors: result
                .vectors
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(matrix: Vec<Vec<f64>>) -> SpectrumRequest {
        SpectrumRequest { matrix }
    }

    #[test]
    fn test_validation_accepts_square_matrix() {
        assert!(request(vec![vec![2.0, 0.0], vec![0.0, 3.0]])
            .validate()
            .is_ok());
        assert!(request(vec![vec![42.0]]).validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_matrix() {
        assert!(request(vec![]).validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_square_matrix() {
        assert!(request(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
            .validate()
            .is_err());
    }

    #[test]
    fn test_validation_rejects_jagged_rows() {
        assert!(request(vec![vec![1.0, 2.0], vec![3.0]]).validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_finite_entries() {
        assert!(request(vec![vec![1.0, f64::NAN], vec![0.0, 1.0]])
            .validate()
            .is_err());
        assert!(request(vec![vec![1.0, f64::INFINITY], vec![0.0, 1.0]])
            .validate()
            .is_err());
    }
}
