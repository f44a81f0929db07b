use serde::{Deserialize, Serialize, Serializer};
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use pundit::error;
use pundit::InvalidArgument;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

/// Recent-form and per-match averages for one team.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamProfile {
    pub name: String,
    pub goals_for: f64,
    pub goals_against: f64,
    /// Points earned over the last five matches.
    pub form_points_5: u8,
    pub corners_for: f64,
    pub corners_against: f64,
    /// Fractional boost to attacking output, applied only when playing at home.
    #[serde(default = "TeamProfile::default_home_adv")]
    pub home_adv: f64,
}
impl TeamProfile {
    pub const DEFAULT_HOME_ADV: f64 = 0.10;
    pub const MAX_FORM_POINTS: u8 = 15;

    pub fn new(
        name: impl Into<String>,
        goals_for: f64,
        goals_against: f64,
        form_points_5: u8,
        corners_for: f64,
        corners_against: f64,
    ) -> Self {
        Self {
            name: name.into(),
            goals_for,
            goals_against,
            form_points_5,
            corners_for,
            corners_against,
            home_adv: Self::DEFAULT_HOME_ADV,
        }
    }

    pub fn with_home_adv(self, home_adv: f64) -> Self {
        Self { home_adv, ..self }
    }

    pub fn validate(&self) -> Result<(), InvalidArgument> {
        error::check_statistic("goals_for", self.goals_for)?;
        error::check_statistic("goals_against", self.goals_against)?;
        error::check_statistic("corners_for", self.corners_for)?;
        error::check_statistic("corners_against", self.corners_against)?;
        error::check_statistic("home_adv", self.home_adv)?;
        if self.form_points_5 > Self::MAX_FORM_POINTS {
            return Err(InvalidArgument::Form {
                actual: self.form_points_5,
                max: Self::MAX_FORM_POINTS,
            });
        }
        Ok(())
    }

    fn default_home_adv() -> f64 {
        Self::DEFAULT_HOME_ADV
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub league: String,
    pub kickoff: String,
    pub home: TeamProfile,
    pub away: TeamProfile,
}
impl Match {
    pub fn label(&self) -> String {
        format!("{} vs {}", self.home.name, self.away.name)
    }

    pub fn team(&self, side: Side) -> &TeamProfile {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidArgument> {
        self.home.validate()?;
        self.away.validate()
    }
}

/// The markets priced for every fixture, in their canonical order.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Market {
    #[strum(serialize = "Home Win")]
    HomeWin,
    #[strum(serialize = "Draw")]
    Draw,
    #[strum(serialize = "Away Win")]
    AwayWin,
    #[strum(serialize = "Double Chance (1X)")]
    HomeOrDraw,
    #[strum(serialize = "Double Chance (X2)")]
    DrawOrAway,
    #[strum(serialize = "Double Chance (12)")]
    HomeOrAway,
    #[strum(serialize = "Over 0.5")]
    Over0_5,
    #[strum(serialize = "Over 1.5")]
    Over1_5,
    #[strum(serialize = "Over 2.5")]
    Over2_5,
    #[strum(serialize = "Under 2.5")]
    Under2_5,
    #[strum(serialize = "BTTS (Yes)")]
    BothTeamsToScore,
    #[strum(serialize = "BTTS (No)")]
    NotBothTeamsToScore,
    #[strum(serialize = "Home to Score")]
    HomeToScore,
    #[strum(serialize = "Away to Score")]
    AwayToScore,
    #[strum(serialize = "Over 8.5 Corners")]
    OverCorners8_5,
    #[strum(serialize = "Under 10.5 Corners")]
    UnderCorners10_5,
}
impl Market {
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }
}

impl Serialize for Market {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// The outcome favoured by the win-side estimate.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum WinSide {
    Home,
    Away,
    HomeOrDraw,
}

impl From<WinSide> for Market {
    fn from(win_side: WinSide) -> Self {
        match win_side {
            WinSide::Home => Market::HomeWin,
            WinSide::Away => Market::AwayWin,
            WinSide::HomeOrDraw => Market::HomeOrDraw,
        }
    }
}

/// The side of the corners market favoured by the corners estimate. The two sides quote
/// different lines.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum CornersSide {
    Over8_5,
    Under10_5,
}

impl From<CornersSide> for Market {
    fn from(corners_side: CornersSide) -> Self {
        match corners_side {
            CornersSide::Over8_5 => Market::OverCorners8_5,
            CornersSide::Under10_5 => Market::UnderCorners10_5,
        }
    }
}

/// A market chosen by an estimator, along with its estimated probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pick<M> {
    pub market: M,
    pub probability: f64,
}
