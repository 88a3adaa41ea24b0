use faer::complex_native::c64;
use faer::Mat;
use num_complex::Complex64;

use super::{EigenPairs, EigenSolver, FaerEvd};
use crate::error::SpectraCoreError;
use crate::matrix::DenseMatrix;
use crate::traits::Matrix;

impl EigenSolver for FaerEvd {
    fn solve(&self, a: &DenseMatrix) -> Result<EigenPairs, SpectraCoreError> {
        self.validate_input(a)?;
        let n = a.rows();
        log::debug!("Computing eigendecomposition of a {}x{} matrix", n, n);

        let mat = Mat::from_fn(n, n, |i, j| a.data()[i * n + j]);
        let evd = mat.as_ref().eigendecomposition::<c64>();

        // Eigenvalues come back as the diagonal of S, column j of U is the
        // eigenvector paired with the j-th eigenvalue.
        let s = evd.s().column_vector();
        let values: Vec<Complex64> = (0..n)
            .map(|j| {
                let z = s.read(j);
                Complex64::new(z.re, z.im)
            })
            .collect();

        let u = evd.u();
        let vectors: Vec<Vec<Complex64>> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        let z = u.read(i, j);
                        Complex64::new(z.re, z.im)
                    })
                    .collect()
            })
            .collect();

        // The QR iteration inside faer signals failure through non-finite output.
        if values
            .iter()
            .any(|z| !z.re.is_finite() || !z.im.is_finite())
        {
            log::warn!("Eigendecomposition produced non-finite eigenvalues");
            return Err(SpectraCoreError::NonConvergence);
        }

        Ok(EigenPairs { values, vectors })
    }
}
