use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Transport representation of a complex number.
///
/// `ang` and `mag` are always recomputed from `re`/`im`
/// (`ang = atan2(im, re)` in (-pi, pi], `mag = sqrt(re^2 + im^2)`), never
/// carried as independent state. For zero, both `ang` and `mag` are 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexRecord {
    pub re: f64,
    pub im: f64,
    pub ang: f64,
    pub mag: f64,
}

impl ComplexRecord {
    /// Builds the record from a complex value.
    pub fn from_complex(z: Complex64) -> Self {
        Self {
            re: z.re,
            im: z.im,
            ang: z.im.atan2(z.re),
            mag: z.norm(),
        }
    }
}

impl From<Complex64> for ComplexRecord {
    fn from(z: Complex64) -> Self {
        Self::from_complex(z)
    }
}

/// Converts a grid of complex numbers element-wise, preserving the exact
/// row/column shape and ordering of the input.
pub fn to_record_grid(rows: &[Vec<Complex64>]) -> Vec<Vec<ComplexRecord>> {
    rows.iter()
        .map(|row| row.iter().copied().map(ComplexRecord::from).collect())
        .collect()
}
