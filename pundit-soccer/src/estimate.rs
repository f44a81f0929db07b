//! Per-market estimators. Each is a pure function of a [Match], assumed to have been validated.
//!
//! Estimates are heuristics bounded by fixed calibration ranges; extreme inputs are absorbed
//! by clamping rather than rejected.

use std::ops::RangeInclusive;

use pundit::probs::clamp;

use crate::domain::{CornersSide, Match, Pick, Side, TeamProfile, WinSide};

pub const EXPECTED_GOALS_BOUNDS: RangeInclusive<f64> = 0.8..=4.2;
const FORM_MIDPOINT: f64 = 7.0;
const FORM_SHIFT_PER_POINT: f64 = 0.02;

pub const BTTS_BOUNDS: RangeInclusive<f64> = 0.15..=0.85;
const BTTS_DEFENCE_BOUNDS: RangeInclusive<f64> = 0.7..=1.2;
const BTTS_LEAGUE_CONCEDED: f64 = 1.4;

const HOME_EDGE: f64 = 0.15;
const DECISIVE_DIFF: f64 = 0.35;
pub const WIN_BOUNDS: RangeInclusive<f64> = 0.55..=0.78;
pub const HOME_OR_DRAW_BOUNDS: RangeInclusive<f64> = 0.58..=0.72;

pub const CORNERS_LINE: f64 = 8.5;
const CORNERS_OVER_BOUNDS: RangeInclusive<f64> = 0.35..=0.75;
const CORNERS_UNDER_BOUNDS: RangeInclusive<f64> = 0.40..=0.70;
const CORNERS_PIVOT: f64 = 0.55;

const SCORING_RATE_DIVISOR: f64 = 2.1;
pub const HOME_TO_SCORE_BOUNDS: RangeInclusive<f64> = 0.45..=0.82;
pub const AWAY_TO_SCORE_BOUNDS: RangeInclusive<f64> = 0.40..=0.78;

/// Expected total goals in the match: each side's attack is averaged against the opposing
/// defence, the home attack is boosted by its home advantage, and the sum is scaled by 2% per
/// point of form differential about the 7-point midpoint.
pub fn expected_total_goals(m: &Match) -> f64 {
    let home_part = (m.home.goals_for + m.away.goals_against) / 2.0 * (1.0 + m.home.home_adv);
    let away_part = (m.away.goals_for + m.home.goals_against) / 2.0;
    let form_boost = ((m.home.form_points_5 as f64 - FORM_MIDPOINT)
        - (m.away.form_points_5 as f64 - FORM_MIDPOINT))
        * FORM_SHIFT_PER_POINT;
    clamp((home_part + away_part) * (1.0 + form_boost), &EXPECTED_GOALS_BOUNDS)
}

/// Probability of both teams scoring, driven by how close the weaker attack is to the stronger
/// one and by how leaky the two defences are.
pub fn both_teams_to_score(m: &Match) -> f64 {
    let weaker = f64::min(m.home.goals_for, m.away.goals_for);
    let stronger = f64::max(m.home.goals_for, m.away.goals_for);
    let ratio = if stronger > 0.0 { weaker / stronger } else { 0.0 };
    let base = ratio * 0.8 + 0.1;
    let defence = (m.home.goals_against + m.away.goals_against) / 2.0 / BTTS_LEAGUE_CONCEDED;
    clamp(base * clamp(defence, &BTTS_DEFENCE_BOUNDS), &BTTS_BOUNDS)
}

fn strength(team: &TeamProfile) -> f64 {
    (team.goals_for - team.goals_against)
        + (team.form_points_5 as f64 / TeamProfile::MAX_FORM_POINTS as f64) * 0.6
}

pub fn win_side(m: &Match) -> Pick<WinSide> {
    let diff = (strength(&m.home) + HOME_EDGE) - strength(&m.away);
    if diff >= DECISIVE_DIFF {
        Pick {
            market: WinSide::Home,
            probability: clamp(0.55 + diff * 0.25, &WIN_BOUNDS),
        }
    } else if diff <= -DECISIVE_DIFF {
        Pick {
            market: WinSide::Away,
            probability: clamp(0.55 + (-diff) * 0.25, &WIN_BOUNDS),
        }
    } else {
        Pick {
            market: WinSide::HomeOrDraw,
            probability: clamp(0.60 + diff * 0.10, &HOME_OR_DRAW_BOUNDS),
        }
    }
}

pub fn expected_total_corners(m: &Match) -> f64 {
    (m.home.corners_for + m.away.corners_for + m.home.corners_against + m.away.corners_against)
        / 2.0
}

/// Picks between "Over 8.5" and "Under 10.5" corners, whichever the linear estimate favours.
pub fn corners(m: &Match) -> Pick<CornersSide> {
    let over = clamp(
        (expected_total_corners(m) - CORNERS_LINE) * 0.10 + CORNERS_PIVOT,
        &CORNERS_OVER_BOUNDS,
    );
    if over >= CORNERS_PIVOT {
        Pick {
            market: CornersSide::Over8_5,
            probability: over,
        }
    } else {
        Pick {
            market: CornersSide::Under10_5,
            probability: clamp(0.65 - (over - CORNERS_PIVOT), &CORNERS_UNDER_BOUNDS),
        }
    }
}

pub fn team_to_score(m: &Match, side: Side) -> f64 {
    let bounds = match side {
        Side::Home => &HOME_TO_SCORE_BOUNDS,
        Side::Away => &AWAY_TO_SCORE_BOUNDS,
    };
    clamp(m.team(side).goals_for / SCORING_RATE_DIVISOR, bounds)
}
