//! Float assertions shared by the test suites of the workspace crates.

use std::ops::RangeInclusive;

use assert_float_eq::*;

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

/// Asserts that `actual` lies within `range`, allowing `tolerance` of slack at either end.
pub fn assert_within(range: &RangeInclusive<f64>, actual: f64, tolerance: f64) {
    assert!(
        actual >= range.start() - tolerance && actual <= range.end() + tolerance,
        "{actual} not in {range:?} ± {tolerance}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_relative() {
        assert_slice_f64_relative(&[0.1, 0.2], &[0.10001, 0.19999], 0.001);
    }

    #[test]
    #[should_panic = "lengths do not match: 2 ≠ 1"]
    fn slice_length_mismatch() {
        assert_slice_f64_relative(&[0.1, 0.2], &[0.1], 0.001);
    }

    #[test]
    fn within() {
        assert_within(&(0.15..=0.85), 0.15, 0.0);
        assert_within(&(0.15..=0.85), 0.850_000_1, 1e-6);
    }

    #[test]
    #[should_panic]
    fn not_within() {
        assert_within(&(0.15..=0.85), 0.86, 1e-6);
    }
}
