//! Per-match recommendations drawn from the probability table.

use std::fmt::{Display, Formatter};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use pundit::factorial::Lookup;
use pundit::probs;
use pundit::InvalidArgument;

use crate::config::{AnalystConfig, ConfigError};
use crate::domain::{Market, Match};
use crate::estimate;
use crate::table::ProbabilityTable;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize)]
pub enum Risk {
    Strong,
    Medium,
    Risky,
}

impl Display for Risk {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Risk::Strong => write!(f, "Strong"),
            Risk::Medium => write!(f, "Medium"),
            Risk::Risky => write!(f, "Risky"),
        }
    }
}

/// Confidence levels, in percent, at or above which a pick is deemed strong or medium.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub strong: f64,
    pub medium: f64,
}
impl RiskThresholds {
    pub fn classify(&self, confidence: f64) -> Risk {
        if confidence >= self.strong {
            Risk::Strong
        } else if confidence >= self.medium {
            Risk::Medium
        } else {
            Risk::Risky
        }
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            strong: 74.0,
            medium: 62.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ranked {
    pub market: Market,
    pub prob: f64,
    /// The probability as a percentage, to one decimal place.
    pub confidence: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Analysis {
    pub league: String,
    pub kickoff: String,
    pub label: String,
    pub expected_goals: f64,
    pub top_bet: Market,
    /// The top bet's probability as a percentage, to one decimal place. Exact ties round away
    /// from zero, so the last digit may differ from a half-to-even rendering of the same value.
    pub confidence: f64,
    pub risk: Risk,
    pub table: ProbabilityTable,
    pub shortlist: Vec<Ranked>,
}

pub struct Analyst {
    config: AnalystConfig,
    factorial: Lookup,
}
impl Analyst {
    pub fn config(&self) -> &AnalystConfig {
        &self.config
    }

    pub fn analyse(&self, m: &Match) -> Result<Analysis, InvalidArgument> {
        let table = ProbabilityTable::build(m, &self.factorial)?;
        let ranked = table.ranked();
        let (top_bet, top_prob) = ranked[0];
        let confidence = probs::percentage(top_prob);
        let shortlist = ranked
            .into_iter()
            .take(self.config.shortlist_len)
            .map(|(market, prob)| Ranked {
                market,
                prob,
                confidence: probs::percentage(prob),
            })
            .collect();
        let analysis = Analysis {
            league: m.league.clone(),
            kickoff: m.kickoff.clone(),
            label: m.label(),
            expected_goals: probs::round_to(estimate::expected_total_goals(m), 2),
            top_bet,
            confidence,
            risk: self.config.risk.classify(confidence),
            table,
            shortlist,
        };
        debug!(
            "{}: top bet {} at {}% ({})",
            analysis.label, analysis.top_bet, analysis.confidence, analysis.risk
        );
        Ok(analysis)
    }

    pub fn analyse_all<'a>(
        &self,
        matches: impl IntoIterator<Item = &'a Match>,
    ) -> Result<Vec<Analysis>, InvalidArgument> {
        matches.into_iter().map(|m| self.analyse(m)).collect()
    }
}

impl TryFrom<AnalystConfig> for Analyst {
    type Error = ConfigError;

    fn try_from(config: AnalystConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(Self {
            config,
            factorial: Lookup::default(),
        })
    }
}

impl Default for Analyst {
    fn default() -> Self {
        Self {
            config: AnalystConfig::default(),
            factorial: Lookup::default(),
        }
    }
}

/// Narrows analyses down by league and by a free-text search over the match label.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    pub leagues: Option<FxHashSet<String>>,
    pub search: Option<String>,
}
impl Filter {
    pub fn matches(&self, analysis: &Analysis) -> bool {
        if let Some(leagues) = &self.leagues {
            if !leagues.contains(&analysis.league) {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            Some(search) if !search.is_empty() => analysis
                .label
                .to_lowercase()
                .contains(&search.to_lowercase()),
            _ => true,
        }
    }

    pub fn apply(&self, analyses: Vec<Analysis>) -> Vec<Analysis> {
        analyses
            .into_iter()
            .filter(|analysis| self.matches(analysis))
            .collect()
    }
}

/// Headline figures across a set of analyses.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Overview {
    pub count: usize,
    pub avg_confidence: f64,
    pub strong: usize,
    pub risky: usize,
}
impl Overview {
    pub fn summarise(analyses: &[Analysis], thresholds: &RiskThresholds) -> Self {
        let total_confidence = analyses
            .iter()
            .map(|analysis| analysis.confidence)
            .sum::<f64>();
        Self {
            count: analyses.len(),
            avg_confidence: probs::round_to(
                total_confidence / usize::max(1, analyses.len()) as f64,
                1,
            ),
            strong: analyses
                .iter()
                .filter(|analysis| analysis.confidence >= thresholds.strong)
                .count(),
            risky: analyses
                .iter()
                .filter(|analysis| analysis.confidence < thresholds.medium)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::demo_matches;
    use crate::domain::TeamProfile;

    fn analyse_demo() -> Vec<Analysis> {
        Analyst::default().analyse_all(&demo_matches()).unwrap()
    }

    #[test]
    fn demo_analyses() {
        let analyses = analyse_demo();
        assert_eq!(3, analyses.len());

        let barcelona = &analyses[0];
        assert_eq!("Barcelona vs Sevilla", barcelona.label);
        assert_eq!("La Liga", barcelona.league);
        assert_eq!("21:00", barcelona.kickoff);
        assert_eq!(3.21, barcelona.expected_goals);
        assert_eq!(Market::Over0_5, barcelona.top_bet);
        assert_eq!(96.0, barcelona.confidence);
        assert_eq!(Risk::Strong, barcelona.risk);
        assert_eq!(
            vec![
                (Market::Over0_5, 96.0),
                (Market::HomeOrAway, 90.0),
                (Market::HomeOrDraw, 88.0),
                (Market::Over1_5, 83.0),
                (Market::HomeToScore, 82.0),
                (Market::HomeWin, 78.0),
            ],
            barcelona
                .shortlist
                .iter()
                .map(|ranked| (ranked.market, ranked.confidence))
                .collect::<Vec<_>>()
        );

        assert_eq!(2.8, analyses[1].expected_goals);
        assert_eq!(93.9, analyses[1].confidence);
        assert_eq!(3.02, analyses[2].expected_goals);
        assert_eq!(95.1, analyses[2].confidence);
    }

    #[test]
    fn shortlist_length_is_configurable() {
        let analyst = Analyst::try_from(AnalystConfig {
            shortlist_len: 3,
            ..AnalystConfig::default()
        })
        .unwrap();
        let analysis = analyst.analyse(&demo_matches()[0]).unwrap();
        assert_eq!(3, analysis.shortlist.len());
        assert_eq!(Market::Over0_5, analysis.shortlist[0].market);
    }

    #[test]
    fn invalid_match_reported() {
        let mut m = demo_matches().remove(0);
        m.away = TeamProfile { form_points_5: 20, ..m.away };
        assert_eq!(
            Err(InvalidArgument::Form { actual: 20, max: 15 }),
            Analyst::default().analyse(&m)
        );
    }

    #[test]
    fn risk_boundaries() {
        let thresholds = RiskThresholds::default();
        assert_eq!(Risk::Strong, thresholds.classify(74.0));
        assert_eq!(Risk::Medium, thresholds.classify(73.9));
        assert_eq!(Risk::Medium, thresholds.classify(62.0));
        assert_eq!(Risk::Risky, thresholds.classify(61.9));
        assert_eq!(Risk::Risky, thresholds.classify(0.0));

        let lenient = RiskThresholds {
            strong: 60.0,
            medium: 50.0,
        };
        assert_eq!(Risk::Strong, lenient.classify(61.9));
    }

    #[test]
    fn filter_by_league_and_search() {
        let analyses = analyse_demo();

        let all = Filter::default().apply(analyses.clone());
        assert_eq!(3, all.len());

        let filter = Filter {
            leagues: Some(FxHashSet::from_iter(["La Liga".to_string(), "Premier League".to_string()])),
            search: None,
        };
        assert_eq!(
            vec!["Barcelona vs Sevilla", "Chelsea vs Everton"],
            filter
                .apply(analyses.clone())
                .iter()
                .map(|analysis| analysis.label.as_str())
                .collect::<Vec<_>>()
        );

        let filter = Filter {
            leagues: None,
            search: Some("  haifa ".to_string()),
        };
        let found = filter.apply(analyses.clone());
        assert_eq!(1, found.len());
        assert_eq!("Maccabi Tel Aviv vs Hapoel Haifa", found[0].label);

        let filter = Filter {
            leagues: Some(FxHashSet::from_iter(["La Liga".to_string()])),
            search: Some("chelsea".to_string()),
        };
        assert!(filter.apply(analyses.clone()).is_empty());

        let filter = Filter {
            leagues: None,
            search: Some("   ".to_string()),
        };
        assert_eq!(3, filter.apply(analyses).len());
    }

    #[test]
    fn overview() {
        let analyses = analyse_demo();
        let overview = Overview::summarise(&analyses, &RiskThresholds::default());
        assert_eq!(
            Overview {
                count: 3,
                avg_confidence: 95.0,
                strong: 3,
                risky: 0,
            },
            overview
        );

        let strict = RiskThresholds {
            strong: 95.0,
            medium: 94.0,
        };
        let overview = Overview::summarise(&analyses, &strict);
        assert_eq!(2, overview.strong);
        assert_eq!(1, overview.risky);
    }

    #[test]
    fn overview_of_nothing() {
        assert_eq!(
            Overview {
                count: 0,
                avg_confidence: 0.0,
                strong: 0,
                risky: 0,
            },
            Overview::summarise(&[], &RiskThresholds::default())
        );
    }
}
