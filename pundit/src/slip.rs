//! Aggregation of independently-priced legs into a single multi-leg slip.
//!
//! The model probability of a slip is the product of the model probabilities of its legs, which
//! treats the legs as independent events. Legs sharing a league or matchday are correlated in
//! practice; no correction is applied for this.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::error;
use crate::error::InvalidArgument;
use crate::probs;

/// A single selection within a slip: a market on one fixture, taken at the given decimal `odds`,
/// alongside the model's estimate of its probability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg<S> {
    label: String,
    league: String,
    selection: S,
    odds: f64,
    model_prob: f64,
}
impl<S> Leg<S> {
    pub fn new(
        label: impl Into<String>,
        league: impl Into<String>,
        selection: S,
        odds: f64,
        model_prob: f64,
    ) -> Result<Self, InvalidArgument> {
        error::check_odds(odds)?;
        error::check_probability(model_prob)?;
        Ok(Self {
            label: label.into(),
            league: league.into(),
            selection,
            odds,
            model_prob,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn league(&self) -> &str {
        &self.league
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }

    pub fn odds(&self) -> f64 {
        self.odds
    }

    pub fn model_prob(&self) -> f64 {
        self.model_prob
    }

    pub fn implied_prob(&self) -> f64 {
        1.0 / self.odds
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlipError {
    #[error("slip has no legs")]
    EmptyInput,

    #[error("stake must be a positive amount, got {0}")]
    InvalidStake(f64),
}

/// The band of edge values, either side of zero, within which a slip is deemed borderline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeThresholds {
    pub value: f64,
}
impl EdgeThresholds {
    pub fn verdict(&self, edge: f64) -> Verdict {
        if edge > self.value {
            Verdict::Value
        } else if edge < -self.value {
            Verdict::Overpriced
        } else {
            Verdict::Borderline
        }
    }
}

impl Default for EdgeThresholds {
    fn default() -> Self {
        Self { value: 0.03 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Value,
    Borderline,
    Overpriced,
}
impl Verdict {
    pub fn remark(&self) -> &'static str {
        match self {
            Verdict::Value => "the model sees value in this slip",
            Verdict::Borderline => "borderline, no clear edge either way",
            Verdict::Overpriced => "the odds do not pay enough for the risk taken",
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Value => write!(f, "Value"),
            Verdict::Borderline => write!(f, "Borderline"),
            Verdict::Overpriced => write!(f, "Overpriced"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlipSummary {
    pub legs: usize,
    pub stake: f64,
    pub total_odds: f64,
    pub model_prob: f64,
    pub implied_prob: f64,
    pub edge: f64,
    pub potential_return: f64,
    pub profit: f64,
    pub verdict: Verdict,
}

/// An ordered sequence of legs. The order is presentational only; every derived figure is a
/// commutative product over the legs, recomputed on each call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slip<S> {
    legs: Vec<Leg<S>>,
}
impl<S> Slip<S> {
    pub fn push(&mut self, leg: Leg<S>) {
        self.legs.push(leg);
    }

    pub fn legs(&self) -> &[Leg<S>] {
        &self.legs
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn total_odds(&self) -> Result<f64, SlipError> {
        self.check_non_empty()?;
        Ok(self.legs.iter().map(Leg::odds).product())
    }

    pub fn model_probability(&self) -> Result<f64, SlipError> {
        self.check_non_empty()?;
        Ok(probs::clamp(
            self.legs.iter().map(Leg::model_prob).product(),
            &(0.0..=1.0),
        ))
    }

    pub fn implied_probability(&self) -> Result<f64, SlipError> {
        self.check_non_empty()?;
        Ok(probs::clamp(
            self.legs.iter().map(Leg::implied_prob).product(),
            &(0.0..=1.0),
        ))
    }

    pub fn edge(&self) -> Result<f64, SlipError> {
        Ok(self.model_probability()? - self.implied_probability()?)
    }

    pub fn summarise(
        &self,
        stake: f64,
        thresholds: &EdgeThresholds,
    ) -> Result<SlipSummary, SlipError> {
        self.check_non_empty()?;
        if !stake.is_finite() || stake <= 0.0 {
            return Err(SlipError::InvalidStake(stake));
        }
        let total_odds = self.total_odds()?;
        let model_prob = self.model_probability()?;
        let implied_prob = self.implied_probability()?;
        let edge = model_prob - implied_prob;
        let potential_return = stake * total_odds;
        let summary = SlipSummary {
            legs: self.legs.len(),
            stake,
            total_odds,
            model_prob,
            implied_prob,
            edge,
            potential_return,
            profit: potential_return - stake,
            verdict: thresholds.verdict(edge),
        };
        debug!("summarised slip: {summary:?}");
        Ok(summary)
    }

    fn check_non_empty(&self) -> Result<(), SlipError> {
        if self.legs.is_empty() {
            Err(SlipError::EmptyInput)
        } else {
            Ok(())
        }
    }
}

impl<S> Default for Slip<S> {
    fn default() -> Self {
        Self { legs: vec![] }
    }
}

impl<S> From<Vec<Leg<S>>> for Slip<S> {
    fn from(legs: Vec<Leg<S>>) -> Self {
        Self { legs }
    }
}

impl<S> FromIterator<Leg<S>> for Slip<S> {
    fn from_iter<I: IntoIterator<Item = Leg<S>>>(iter: I) -> Self {
        Self {
            legs: iter.into_iter().collect(),
        }
    }
}
