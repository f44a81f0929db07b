use thiserror::Error;

/// Raised when a statistical input is structurally invalid, as opposed to merely extreme.
/// Extreme-but-plausible values are clamped by the estimators rather than rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidArgument {
    #[error("rate must be finite and non-negative, got {0}")]
    Rate(f64),

    #[error("line must be finite and within 0..=170, got {0}")]
    Line(f64),

    #[error("decimal odds must be finite and greater than 1.0, got {0}")]
    Odds(f64),

    #[error("probability must be within 0..=1, got {0}")]
    Probability(f64),

    #[error("{field} must be finite and non-negative, got {value}")]
    Statistic { field: &'static str, value: f64 },

    #[error("form points cannot exceed {max}, got {actual}")]
    Form { actual: u8, max: u8 },
}

pub fn check_rate(lambda: f64) -> Result<(), InvalidArgument> {
    if lambda.is_finite() && lambda >= 0.0 {
        Ok(())
    } else {
        Err(InvalidArgument::Rate(lambda))
    }
}

pub fn check_odds(odds: f64) -> Result<(), InvalidArgument> {
    if odds.is_finite() && odds > 1.0 {
        Ok(())
    } else {
        Err(InvalidArgument::Odds(odds))
    }
}

pub fn check_probability(prob: f64) -> Result<(), InvalidArgument> {
    if (0.0..=1.0).contains(&prob) {
        Ok(())
    } else {
        Err(InvalidArgument::Probability(prob))
    }
}

pub fn check_statistic(field: &'static str, value: f64) -> Result<(), InvalidArgument> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InvalidArgument::Statistic { field, value })
    }
}
