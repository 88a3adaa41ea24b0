use num_complex::Complex64;
use spectra_core::record::{to_record_grid, ComplexRecord};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

// Helper for float comparison in tests
fn assert_approx_eq(a: f64, b: f64, tolerance: f64) {
    let diff = (a - b).abs();
    assert!(
        diff <= tolerance,
        "Verification failed: expected {}, got {}, diff {}",
        b,
        a,
        diff
    );
}

#[test]
fn test_record_magnitude_and_angle() {
    let cases = [
        (3.0, 4.0),
        (1.0, 1.0),
        (-1.0, 0.0),
        (0.0, -2.0),
        (-2.5, -2.5),
        (1e-12, 1e12),
    ];
    for (re, im) in cases {
        let record = ComplexRecord::from_complex(Complex64::new(re, im));
        assert_eq!(record.re, re);
        assert_eq!(record.im, im);
        let expected_mag = (re * re + im * im).sqrt();
        assert_approx_eq(record.mag, expected_mag, 1e-9 * expected_mag.max(1.0));
        assert_approx_eq(record.ang, im.atan2(re), 1e-12);
    }
}

#[test]
fn test_record_zero_convention() {
    let record = ComplexRecord::from_complex(Complex64::new(0.0, 0.0));
    assert_eq!(record.ang, 0.0);
    assert_eq!(record.mag, 0.0);
}

#[test]
fn test_record_angle_quadrants() {
    let on_diagonal = ComplexRecord::from_complex(Complex64::new(1.0, 1.0));
    assert_approx_eq(on_diagonal.ang, FRAC_PI_4, 1e-12);

    let negative_real = ComplexRecord::from_complex(Complex64::new(-1.0, 0.0));
    assert_approx_eq(negative_real.ang, PI, 1e-12);

    let negative_imag = ComplexRecord::from_complex(Complex64::new(0.0, -2.0));
    assert_approx_eq(negative_imag.ang, -FRAC_PI_2, 1e-12);
}

#[test]
fn test_grid_preserves_shape() {
    let rows = vec![
        vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0)],
        vec![Complex64::new(-1.0, 2.0)],
        vec![],
    ];

    let grid = to_record_grid(&rows);

    assert_eq!(grid.len(), rows.len());
    for (out_row, in_row) in grid.iter().zip(rows.iter()) {
        assert_eq!(out_row.len(), in_row.len());
    }
    assert_eq!(grid[0][1].im, 1.0);
    assert_eq!(grid[1][0].re, -1.0);
}

#[test]
fn test_record_serializes_with_fixed_field_names() {
    let record = ComplexRecord::from_complex(Complex64::new(2.0, 0.0));
    let json = serde_json::to_value(record).unwrap();

    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 4);
    assert_eq!(json["re"], 2.0);
    assert_eq!(json["im"], 0.0);
    assert_eq!(json["ang"], 0.0);
    assert_eq!(json["mag"], 2.0);
}
