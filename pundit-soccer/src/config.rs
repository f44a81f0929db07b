use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::EnumCount;
use thiserror::Error;

use pundit::file;
use pundit::slip::EdgeThresholds;

use crate::analysis::RiskThresholds;
use crate::domain::Market;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} risk threshold ({value}) outside of allowable range {range:?}")]
    RiskThreshold {
        name: &'static str,
        value: f64,
        range: RangeInclusive<f64>,
    },

    #[error("medium risk threshold ({medium}) cannot exceed the strong threshold ({strong})")]
    MisorderedRisk { strong: f64, medium: f64 },

    #[error("edge threshold must be finite and non-negative, got {0}")]
    EdgeThreshold(f64),

    #[error("shortlist length ({actual}) outside of allowable range 1..={max}")]
    ShortlistLen { actual: usize, max: usize },
}

/// Tuning constants of the analyst. Overriding them does not recalibrate the estimators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalystConfig {
    pub risk: RiskThresholds,
    pub edge: EdgeThresholds,
    pub shortlist_len: usize,
}
impl AnalystConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        const CONFIDENCE_RANGE: RangeInclusive<f64> = 0.0..=100.0;
        for (name, value) in [("strong", self.risk.strong), ("medium", self.risk.medium)] {
            if !CONFIDENCE_RANGE.contains(&value) {
                return Err(ConfigError::RiskThreshold {
                    name,
                    value,
                    range: CONFIDENCE_RANGE,
                });
            }
        }
        if self.risk.medium > self.risk.strong {
            return Err(ConfigError::MisorderedRisk {
                strong: self.risk.strong,
                medium: self.risk.medium,
            });
        }
        if !self.edge.value.is_finite() || self.edge.value < 0.0 {
            return Err(ConfigError::EdgeThreshold(self.edge.value));
        }
        if !(1..=Market::COUNT).contains(&self.shortlist_len) {
            return Err(ConfigError::ShortlistLen {
                actual: self.shortlist_len,
                max: Market::COUNT,
            });
        }
        Ok(())
    }

    /// Reads a config from a JSON file. Absent fields take their default values.
    pub fn read_json_file(path: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        file::read_json(path)
    }
}

impl Default for AnalystConfig {
    fn default() -> Self {
        Self {
            risk: RiskThresholds::default(),
            edge: EdgeThresholds::default(),
            shortlist_len: 6,
        }
    }
}
