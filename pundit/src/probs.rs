//! Utilities for working with probabilities.

use std::ops::RangeInclusive;

/// Confines `value` to `bounds`. Bounds are inclusive and must be ordered.
#[inline]
pub fn clamp(value: f64, bounds: &RangeInclusive<f64>) -> f64 {
    f64::max(*bounds.start(), f64::min(*bounds.end(), value))
}

/// Rounds half away from zero to the given number of decimal places.
#[inline]
pub fn round_to(value: f64, decimals: u8) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Expresses a probability as a percentage rounded to one decimal place.
#[inline]
pub fn percentage(prob: f64) -> f64 {
    round_to(prob * 100.0, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_within_and_outside() {
        const BOUNDS: RangeInclusive<f64> = 0.15..=0.85;
        assert_eq!(0.5, clamp(0.5, &BOUNDS));
        assert_eq!(0.15, clamp(0.01, &BOUNDS));
        assert_eq!(0.85, clamp(1.7, &BOUNDS));
        assert_eq!(0.15, clamp(0.15, &BOUNDS));
    }

    #[test]
    fn rounding() {
        assert_eq!(3.21, round_to(3.2076, 2));
        assert_eq!(96.0, percentage(0.9595464145360323));
        assert_eq!(59.5, percentage(0.5952380952380952));
        assert_eq!(-1.5, round_to(-1.54, 1));
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(3.0, round_to(2.5, 0));
        assert_eq!(0.13, round_to(0.125, 2));
        assert_eq!(-0.13, round_to(-0.125, 2));
        assert_eq!(62.5, percentage(0.625));
    }
}
