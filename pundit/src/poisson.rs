//! The Poisson distribution over a goal count.

use crate::error;
use crate::error::InvalidArgument;
use crate::factorial::Factorial;

/// Lines above this are meaningless for any realistic rate and would overrun the factorial domain.
pub const MAX_LINE: f64 = 170.0;

/// Probability of exactly `k` events, given a mean rate of `lambda`.
pub fn univariate(k: u8, lambda: f64, factorial: &impl Factorial) -> Result<f64, InvalidArgument> {
    error::check_rate(lambda)?;
    Ok(mass(k, lambda, factorial))
}

/// Probability that the event count strictly exceeds `line`, i.e., `1 - P(X ≤ ⌊line⌋)`. Intended
/// for half-integer lines, e.g., "Over 2.5" is satisfied by 3 or more goals.
pub fn over_probability(
    lambda: f64,
    line: f64,
    factorial: &impl Factorial,
) -> Result<f64, InvalidArgument> {
    error::check_rate(lambda)?;
    if !(0.0..=MAX_LINE).contains(&line) {
        return Err(InvalidArgument::Line(line));
    }
    let cutoff = line.floor() as u8;
    let at_most = (0..=cutoff)
        .map(|k| mass(k, lambda, factorial))
        .sum::<f64>();
    Ok((1.0 - at_most).clamp(0.0, 1.0))
}

/// Evaluated in log space, as `λ^k` overflows and `e^-λ` underflows for large rates.
#[inline]
fn mass(k: u8, lambda: f64, factorial: &impl Factorial) -> f64 {
    if lambda == 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    let k_factorial = factorial.get(k);
    if k_factorial.is_infinite() {
        return 0.0;
    }
    f64::exp(k as f64 * lambda.ln() - lambda - k_factorial.ln())
}
