//! Composition of the market estimators into a single table covering every [Market].
//!
//! The table is a set of individually-bounded heuristics rather than a joint distribution:
//! overlapping markets are not mutually consistent beyond the rules applied here. Complementary
//! pairs (Over/Under 2.5, BTTS Yes/No, the corners pair) are always derived from their
//! counterpart and are never estimated independently.

use std::ops::{Index, RangeInclusive};

use serde::{Serialize, Serializer};
use strum::{EnumCount, IntoEnumIterator};
use tracing::{debug, trace};

use pundit::factorial::Factorial;
use pundit::poisson;
use pundit::probs::clamp;
use pundit::InvalidArgument;

use crate::domain::{CornersSide, Market, Match, Side, WinSide};
use crate::estimate;

const UNDER_2_5_BOUNDS: RangeInclusive<f64> = 0.05..=0.95;
const BTTS_NO_BOUNDS: RangeInclusive<f64> = 0.10..=0.90;

const DRAW_SHARE_OF_REMAINDER: f64 = 0.45;
const FAVOURITE_DRAW_BOUNDS: RangeInclusive<f64> = 0.10..=0.35;
const UNDERDOG_BOUNDS: RangeInclusive<f64> = 0.05..=0.40;

const OPEN_HOME_SHARE: f64 = 0.55;
const OPEN_DRAW_SHARE: f64 = 0.35;
const OPEN_HOME_BOUNDS: RangeInclusive<f64> = 0.25..=0.55;
const OPEN_DRAW_BOUNDS: RangeInclusive<f64> = 0.18..=0.38;
const OPEN_AWAY_BOUNDS: RangeInclusive<f64> = 0.10..=0.45;

const WITH_DRAW_BOUNDS: RangeInclusive<f64> = 0.45..=0.90;
const NO_DRAW_BOUNDS: RangeInclusive<f64> = 0.50..=0.92;

const CORNERS_PAIR_BOUNDS: RangeInclusive<f64> = 0.30..=0.70;

#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityTable {
    probs: [f64; Market::COUNT],
}
impl ProbabilityTable {
    pub fn build(m: &Match, factorial: &impl Factorial) -> Result<Self, InvalidArgument> {
        m.validate()?;
        let mut probs = [0.0; Market::COUNT];
        let mut set = |market: Market, prob: f64| {
            trace!("{market}: {prob:.4}");
            probs[market.index()] = prob;
        };

        let expected_goals = estimate::expected_total_goals(m);
        let over_2_5 = poisson::over_probability(expected_goals, 2.5, factorial)?;
        set(Market::Over0_5, poisson::over_probability(expected_goals, 0.5, factorial)?);
        set(Market::Over1_5, poisson::over_probability(expected_goals, 1.5, factorial)?);
        set(Market::Over2_5, over_2_5);
        set(Market::Under2_5, clamp(1.0 - over_2_5, &UNDER_2_5_BOUNDS));

        let btts = estimate::both_teams_to_score(m);
        set(Market::BothTeamsToScore, btts);
        set(Market::NotBothTeamsToScore, clamp(1.0 - btts, &BTTS_NO_BOUNDS));

        let win_side = estimate::win_side(m);
        let (home, draw, away) = match win_side.market {
            WinSide::Home => favourite_split(win_side.probability),
            WinSide::Away => {
                let (away, draw, home) = favourite_split(win_side.probability);
                (home, draw, away)
            }
            WinSide::HomeOrDraw => {
                let home = clamp(win_side.probability * OPEN_HOME_SHARE, &OPEN_HOME_BOUNDS);
                let draw = clamp(win_side.probability * OPEN_DRAW_SHARE, &OPEN_DRAW_BOUNDS);
                let away = clamp(1.0 - home - draw, &OPEN_AWAY_BOUNDS);
                (home, draw, away)
            }
        };
        set(Market::HomeWin, home);
        set(Market::Draw, draw);
        set(Market::AwayWin, away);
        set(Market::HomeOrDraw, clamp(home + draw, &WITH_DRAW_BOUNDS));
        set(Market::DrawOrAway, clamp(away + draw, &WITH_DRAW_BOUNDS));
        set(Market::HomeOrAway, clamp(home + away, &NO_DRAW_BOUNDS));

        set(Market::HomeToScore, estimate::team_to_score(m, Side::Home));
        set(Market::AwayToScore, estimate::team_to_score(m, Side::Away));

        let corners = estimate::corners(m);
        let over_corners = match corners.market {
            CornersSide::Over8_5 => corners.probability,
            CornersSide::Under10_5 => clamp(1.0 - corners.probability, &CORNERS_PAIR_BOUNDS),
        };
        set(Market::OverCorners8_5, over_corners);
        set(Market::UnderCorners10_5, clamp(1.0 - over_corners, &CORNERS_PAIR_BOUNDS));

        debug!(
            "{}: expected goals {expected_goals:.3}, {} at {:.3}, {} at {:.3}",
            m.label(),
            Market::from(win_side.market),
            win_side.probability,
            Market::from(corners.market),
            corners.probability
        );
        Ok(Self { probs })
    }

    pub fn get(&self, market: Market) -> f64 {
        self.probs[market.index()]
    }

    /// Every market and its probability, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Market, f64)> + '_ {
        Market::iter().map(|market| (market, self.get(market)))
    }

    /// Every market and its probability, most probable first. Ties retain canonical order.
    pub fn ranked(&self) -> Vec<(Market, f64)> {
        let mut ranked = self.iter().collect::<Vec<_>>();
        ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        ranked
    }
}

/// Splits the 1X2 markets when one side is the clear favourite: the draw takes a fixed share of
/// the favourite's complement and the underdog takes what is left. Returns
/// `(favourite, draw, underdog)`.
fn favourite_split(favourite: f64) -> (f64, f64, f64) {
    let draw = clamp((1.0 - favourite) * DRAW_SHARE_OF_REMAINDER, &FAVOURITE_DRAW_BOUNDS);
    let underdog = clamp(1.0 - favourite - draw, &UNDERDOG_BOUNDS);
    (favourite, draw, underdog)
}

impl Index<Market> for ProbabilityTable {
    type Output = f64;

    fn index(&self, market: Market) -> &Self::Output {
        &self.probs[market.index()]
    }
}

impl Serialize for ProbabilityTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(market, prob)| (market.label(), prob)))
    }
}

#[cfg(test)]
mod tests;
