use approx::assert_abs_diff_eq;
use sky_sim::{Catalogue, StarRecord};

/// Precision of the fixed-point columns of the catalogue file
pub const FORMAT_EPS: f64 = 5e-7;

pub fn assert_star_close(actual: &StarRecord, expected: &StarRecord, epsilon: f64) {
    assert_eq!(actual.id, expected.id);
    assert_abs_diff_eq!(actual.ra, expected.ra, epsilon = epsilon);
    assert_abs_diff_eq!(actual.dec, expected.dec, epsilon = epsilon);
}

pub fn assert_catalogue_close(actual: &Catalogue, expected: &Catalogue, epsilon: f64) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_star_close(a, e, epsilon);
    }
}
