use assert_float_eq::*;
use pundit::factorial::Lookup;
use pundit_testing::{assert_slice_f64_relative, assert_within};

use super::*;
use crate::data::demo_matches;
use crate::domain::TeamProfile;

fn fixture(home: TeamProfile, away: TeamProfile) -> Match {
    Match {
        league: "Test League".into(),
        kickoff: "15:00".into(),
        home,
        away,
    }
}

fn assorted_matches() -> Vec<Match> {
    let mut teams = vec![];
    for goals_for in [0.0, 0.4, 1.2, 2.3, 100.0] {
        for goals_against in [0.0, 1.0, 2.5] {
            for form in [0, 8, 15] {
                for corners in [1.0, 5.0, 11.0] {
                    teams.push(TeamProfile::new("T", goals_for, goals_against, form, corners, corners));
                }
            }
        }
    }
    let mut matches = vec![];
    for home in teams.iter().step_by(2) {
        for away in teams.iter().step_by(7) {
            matches.push(fixture(home.clone(), away.clone()));
        }
    }
    matches
}

#[test]
fn barcelona_sevilla() {
    let table = ProbabilityTable::build(&demo_matches()[0], &Lookup::default()).unwrap();
    let actual = table.iter().map(|(_, prob)| prob).collect::<Vec<_>>();
    assert_slice_f64_relative(
        &[
            0.78,
            0.1,
            0.12,
            0.88,
            0.45,
            0.9,
            0.9595464145360323,
            0.8297874938018095,
            0.621680136728263,
            0.37831986327173694,
            0.4828397212543554,
            0.5171602787456446,
            0.82,
            0.5952380952380952,
            0.705,
            0.3,
        ],
        &actual,
        1e-9,
    );
}

#[test]
fn chelsea_everton() {
    let table = ProbabilityTable::build(&demo_matches()[1], &Lookup::default()).unwrap();
    assert_float_absolute_eq!(0.7675, table.get(Market::HomeWin), 1e-12);
    assert_float_absolute_eq!(0.104625, table.get(Market::Draw), 1e-12);
    assert_float_absolute_eq!(0.127875, table.get(Market::AwayWin), 1e-12);
    assert_float_absolute_eq!(0.872125, table.get(Market::HomeOrDraw), 1e-12);
    assert_float_absolute_eq!(0.895375, table.get(Market::HomeOrAway), 1e-12);
    assert_float_relative_eq!(0.5301648286714797, table.get(Market::Over2_5), 1e-9);
    assert_float_absolute_eq!(0.5, table.get(Market::AwayToScore), 1e-12);
}

#[test]
fn away_favourite_mirrors_home_favourite() {
    let strong = TeamProfile::new("Strong", 2.2, 0.8, 13, 5.0, 5.0);
    let weak = TeamProfile::new("Weak", 0.9, 1.7, 3, 5.0, 5.0);
    let home_favoured =
        ProbabilityTable::build(&fixture(strong.clone(), weak.clone()), &Lookup::default()).unwrap();
    let away_favoured = ProbabilityTable::build(&fixture(weak, strong), &Lookup::default()).unwrap();
    assert_eq!(0.78, home_favoured[Market::HomeWin]);
    assert_eq!(home_favoured[Market::HomeWin], away_favoured[Market::AwayWin]);
    assert_eq!(home_favoured[Market::Draw], away_favoured[Market::Draw]);
    assert_eq!(home_favoured[Market::AwayWin], away_favoured[Market::HomeWin]);
}

#[test]
fn open_match_splits_home_or_draw() {
    let even = TeamProfile::new("Even", 1.3, 1.3, 7, 5.0, 5.0);
    let table = ProbabilityTable::build(&fixture(even.clone(), even), &Lookup::default()).unwrap();
    // win side picks 1X at 0.615
    assert_float_absolute_eq!(0.615 * 0.55, table[Market::HomeWin], 1e-12);
    assert_float_absolute_eq!(0.615 * 0.35, table[Market::Draw], 1e-12);
    assert_float_absolute_eq!(1.0 - 0.615 * 0.55 - 0.615 * 0.35, table[Market::AwayWin], 1e-12);
}

#[test]
fn under_corners_pick_feeds_over_corners() {
    let quiet = TeamProfile::new("Quiet", 1.0, 1.0, 7, 3.0, 3.5);
    let table = ProbabilityTable::build(&fixture(quiet.clone(), quiet), &Lookup::default()).unwrap();
    // under picked at 0.70, so over = 0.30 and under = 0.70
    assert_float_absolute_eq!(0.30, table[Market::OverCorners8_5], 1e-12);
    assert_float_absolute_eq!(0.70, table[Market::UnderCorners10_5], 1e-12);
}

#[test]
fn complementary_pairs() {
    for m in demo_matches().iter().chain(assorted_matches().iter()) {
        let table = ProbabilityTable::build(m, &Lookup::default()).unwrap();
        let over = table[Market::Over2_5];
        if UNDER_2_5_BOUNDS.contains(&(1.0 - over)) {
            assert_float_absolute_eq!(1.0 - over, table[Market::Under2_5], 1e-12);
        }
        let btts = table[Market::BothTeamsToScore];
        assert_float_absolute_eq!(1.0 - btts, table[Market::NotBothTeamsToScore], 1e-12);
        let over_corners = table[Market::OverCorners8_5];
        if CORNERS_PAIR_BOUNDS.contains(&(1.0 - over_corners)) {
            assert_float_absolute_eq!(1.0 - over_corners, table[Market::UnderCorners10_5], 1e-12);
        } else {
            assert_eq!(0.30, table[Market::UnderCorners10_5]);
        }
    }
}

#[test]
fn double_chance_covers_constituents() {
    for m in assorted_matches() {
        let table = ProbabilityTable::build(&m, &Lookup::default()).unwrap();
        let (home, draw, away) = (
            table[Market::HomeWin],
            table[Market::Draw],
            table[Market::AwayWin],
        );
        assert!(table[Market::HomeOrDraw] >= f64::max(home, draw));
        assert!(table[Market::DrawOrAway] >= f64::max(draw, away));
        assert!(table[Market::HomeOrAway] >= f64::max(home, away));
    }
}

#[test]
fn every_entry_is_a_probability() {
    for m in assorted_matches() {
        let table = ProbabilityTable::build(&m, &Lookup::default()).unwrap();
        for (market, prob) in table.iter() {
            assert!((0.0..=1.0).contains(&prob), "{market} = {prob}");
        }
        assert_within(&estimate::BTTS_BOUNDS, table[Market::BothTeamsToScore], 0.0);
        assert_within(&CORNERS_PAIR_BOUNDS, table[Market::UnderCorners10_5], 0.0);
    }
}

#[test]
fn ranked_descending_with_stable_ties() {
    let table = ProbabilityTable::build(&demo_matches()[0], &Lookup::default()).unwrap();
    let ranked = table.ranked();
    assert_eq!(Market::COUNT, ranked.len());
    assert_eq!(
        vec![
            Market::Over0_5,
            Market::HomeOrAway,
            Market::HomeOrDraw,
            Market::Over1_5,
            Market::HomeToScore,
            Market::HomeWin,
        ],
        ranked.iter().take(6).map(|(market, _)| *market).collect::<Vec<_>>()
    );
    for pair in ranked.windows(2) {
        assert!(pair[0].1 >= pair[1].1);
    }

    let even = TeamProfile::new("Even", 1.0, 1.0, 7, 4.0, 4.0);
    let table = ProbabilityTable::build(&fixture(even.clone(), even), &Lookup::default()).unwrap();
    let ranked = table.ranked();
    let position = |market| ranked.iter().position(|(m, _)| *m == market).unwrap();
    if table[Market::Draw] == table[Market::AwayWin] {
        assert!(position(Market::Draw) < position(Market::AwayWin));
    }
}

#[test]
fn invalid_match() {
    let m = fixture(
        TeamProfile::new("A", -1.0, 1.0, 7, 5.0, 5.0),
        TeamProfile::new("B", 1.0, 1.0, 7, 5.0, 5.0),
    );
    assert_eq!(
        Err(InvalidArgument::Statistic {
            field: "goals_for",
            value: -1.0
        }),
        ProbabilityTable::build(&m, &Lookup::default())
    );
}

#[test]
fn serialises_as_labelled_map() {
    let table = ProbabilityTable::build(&demo_matches()[0], &Lookup::default()).unwrap();
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(Market::COUNT, json.as_object().unwrap().len());
    assert_eq!(0.78, json["Home Win"].as_f64().unwrap());
    assert_eq!(0.3, json["Under 10.5 Corners"].as_f64().unwrap());
}
