//! Building soccer slips from analysed fixtures.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use chrono::NaiveDate;

use pundit::probs;
use pundit::slip::{Leg, Slip, SlipSummary};
use pundit::InvalidArgument;

use crate::analysis::Analysis;
use crate::domain::Market;

pub type SoccerLeg = Leg<Market>;
pub type SoccerSlip = Slip<Market>;

/// Takes the `market` on the analysed fixture at the quoted `odds`, using the analysis's own
/// table for the model probability.
pub fn select_leg(analysis: &Analysis, market: Market, odds: f64) -> Result<SoccerLeg, InvalidArgument> {
    Leg::new(
        &analysis.label,
        &analysis.league,
        market,
        odds,
        analysis.table.get(market),
    )
}

/// A leg requested on the command line, in the form `<index>:<market>@<odds>`, where the index
/// is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct LegSpec {
    pub index: usize,
    pub market: Market,
    pub odds: f64,
}

impl FromStr for LegSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let form = || anyhow!("leg should be in the form <index>:<market>@<odds>, got '{s}'");
        let (index, rest) = s.split_once(':').ok_or_else(form)?;
        let (market, odds) = rest.rsplit_once('@').ok_or_else(form)?;
        let index = usize::from_str(index.trim())
            .with_context(|| format!("invalid match index '{index}'"))?;
        if index == 0 {
            bail!("match index is 1-based");
        }
        let market = Market::from_str(market.trim())
            .with_context(|| format!("unknown market '{market}'"))?;
        let odds =
            f64::from_str(odds.trim()).with_context(|| format!("invalid odds '{odds}'"))?;
        Ok(Self {
            index,
            market,
            odds,
        })
    }
}

/// Renders the slip as plain text, one line per element, suitable for saving to a file.
pub fn export_lines(slip: &SoccerSlip, summary: &SlipSummary, date: NaiveDate) -> Vec<String> {
    let mut lines = vec![
        "Bet slip".to_string(),
        format!("Date: {}", date.format("%d/%m/%Y")),
        String::new(),
    ];
    for (index, leg) in slip.legs().iter().enumerate() {
        lines.push(format!(
            "{}. {} — {} @ {:.2}",
            index + 1,
            leg.label(),
            leg.selection(),
            leg.odds()
        ));
    }
    lines.extend([
        String::new(),
        format!("Total odds: {:.2}", summary.total_odds),
        format!("Stake: {:.2}", summary.stake),
        format!("Potential return: {:.2}", summary.potential_return),
        format!("Profit: {:.2}", summary.profit),
        String::new(),
        format!("Model probability: {:.1}%", probs::percentage(summary.model_prob)),
        format!("Implied probability: {:.1}%", probs::percentage(summary.implied_prob)),
        format!("Edge: {:.1}%", probs::percentage(summary.edge)),
        format!("Verdict: {} ({})", summary.verdict, summary.verdict.remark()),
    ]);
    lines
}
