//! Sources of fixtures to analyse. The source is chosen once, at startup, and injected into
//! whatever consumes the matches.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use thiserror::Error;
use tracing::debug;

use pundit::file;

use crate::domain::{Match, TeamProfile};

pub trait MatchSource {
    fn fetch_todays_matches(&self) -> anyhow::Result<Vec<Match>>;
}

/// A fixed slate of sample fixtures, for use when no real data is on hand.
#[derive(Debug, Default)]
pub struct DemoSource;

impl MatchSource for DemoSource {
    fn fetch_todays_matches(&self) -> anyhow::Result<Vec<Match>> {
        Ok(demo_matches())
    }
}

pub fn demo_matches() -> Vec<Match> {
    vec![
        Match {
            league: "La Liga".into(),
            kickoff: "21:00".into(),
            home: TeamProfile::new("Barcelona", 2.05, 0.95, 12, 6.4, 3.7),
            away: TeamProfile::new("Sevilla", 1.25, 1.35, 8, 4.9, 5.1),
        },
        Match {
            league: "Premier League".into(),
            kickoff: "19:30".into(),
            home: TeamProfile::new("Chelsea", 1.55, 1.15, 10, 6.0, 4.2),
            away: TeamProfile::new("Everton", 1.05, 1.25, 7, 4.3, 5.5),
        },
        Match {
            league: "Israel Ligat Ha'Al".into(),
            kickoff: "20:15".into(),
            home: TeamProfile::new("Maccabi Tel Aviv", 1.75, 0.85, 13, 6.2, 3.9),
            away: TeamProfile::new("Hapoel Haifa", 1.10, 1.30, 6, 4.4, 5.3),
        },
    ]
}

/// Reads fixtures from a JSON file holding an array of matches. Every match is validated on
/// load; a file with any invalid match is rejected outright.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
}
impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MatchSource for FileSource {
    fn fetch_todays_matches(&self) -> anyhow::Result<Vec<Match>> {
        let matches: Vec<Match> = file::read_json(&self.path)
            .with_context(|| format!("reading matches from {}", self.path.display()))?;
        for (index, m) in matches.iter().enumerate() {
            m.validate()
                .with_context(|| format!("match #{} ({}) is invalid", index + 1, m.label()))?;
        }
        debug!("read {} matches from {}", matches.len(), self.path.display());
        Ok(matches)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceKind {
    Demo,
    File,
}

impl FromStr for SourceKind {
    type Err = SourceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "demo" => Ok(SourceKind::Demo),
            "file" => Ok(SourceKind::File),
            _ => Err(SourceParseError(format!("unsupported source '{s}'"))),
        }
    }
}

#[derive(Error, Debug)]
#[error("{0}")]
pub struct SourceParseError(String);
