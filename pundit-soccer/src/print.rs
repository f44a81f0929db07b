use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Cell, Col, Row, Table};

use pundit::probs;
use pundit::slip::SlipSummary;

use crate::analysis::{Analysis, Overview};
use crate::slip::SoccerSlip;
use crate::table::ProbabilityTable;

fn header(labels: &[&str]) -> Row {
    Row::new(
        Styles::default().with(Header(true)),
        labels.iter().map(|&label| Cell::from(label)).collect(),
    )
}

pub fn tabulate_overview(overview: &Overview) -> Table {
    let mut table = Table::default().with_cols(vec![
        Col::new(Styles::default().with(MinWidth(16)).with(Left)),
        Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
    ]);
    for (label, value) in [
        ("Matches", overview.count.to_string()),
        ("Avg confidence", format!("{:.1}%", overview.avg_confidence)),
        ("Strong picks", overview.strong.to_string()),
        ("Risky picks", overview.risky.to_string()),
    ] {
        table.push_row(Row::new(
            Styles::default(),
            vec![label.into(), value.into()],
        ));
    }
    table
}

pub fn tabulate_analyses(analyses: &[Analysis]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(3)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(14)).with(Left)),
            Col::new(Styles::default().with(MinWidth(5)).with(Left)),
            Col::new(Styles::default().with(MinWidth(24)).with(Left)),
            Col::new(Styles::default().with(MinWidth(5)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(18)).with(Left)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(Left)),
        ])
        .with_row(header(&[
            "#", "League", "Time", "Match", "xG", "Top bet", "Conf", "Risk",
        ]));
    for (index, analysis) in analyses.iter().enumerate() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}", index + 1).into(),
                analysis.league.clone().into(),
                analysis.kickoff.clone().into(),
                analysis.label.clone().into(),
                format!("{:.2}", analysis.expected_goals).into(),
                analysis.top_bet.label().into(),
                format!("{:.1}%", analysis.confidence).into(),
                analysis.risk.to_string().into(),
            ],
        ));
    }
    table
}

pub fn tabulate_shortlist(analysis: &Analysis) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(18)).with(Left)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
        ])
        .with_row(header(&["Market", "Conf"]));
    for ranked in &analysis.shortlist {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                ranked.market.label().into(),
                format!("{:.1}%", ranked.confidence).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_probabilities(probs: &ProbabilityTable) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(18)).with(Left)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
        ])
        .with_row(header(&["Market", "Prob", "Fair"]));
    for (market, prob) in probs.iter() {
        let fair_price = if prob > 0.0 {
            format!("{:.2}", 1.0 / prob)
        } else {
            "-".into()
        };
        table.push_row(Row::new(
            Styles::default(),
            vec![
                market.label().into(),
                format!("{prob:.3}").into(),
                fair_price.into(),
            ],
        ));
    }
    table
}

pub fn tabulate_slip(slip: &SoccerSlip) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(3)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(24)).with(Left)),
            Col::new(Styles::default().with(MinWidth(18)).with(Left)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
        ])
        .with_row(header(&["#", "Match", "Market", "Odds", "Model", "Implied"]));
    for (index, leg) in slip.legs().iter().enumerate() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}", index + 1).into(),
                leg.label().into(),
                leg.selection().label().into(),
                format!("{:.2}", leg.odds()).into(),
                format!("{:.1}%", probs::percentage(leg.model_prob())).into(),
                format!("{:.1}%", probs::percentage(leg.implied_prob())).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_summary(summary: &SlipSummary) -> Table {
    let mut table = Table::default().with_cols(vec![
        Col::new(Styles::default().with(MinWidth(20)).with(Left)),
        Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
    ]);
    for (label, value) in [
        ("Legs", summary.legs.to_string()),
        ("Total odds", format!("{:.2}", summary.total_odds)),
        ("Stake", format!("{:.2}", summary.stake)),
        ("Potential return", format!("{:.2}", summary.potential_return)),
        ("Profit", format!("{:.2}", summary.profit)),
        ("Model probability", format!("{:.1}%", probs::percentage(summary.model_prob))),
        ("Implied probability", format!("{:.1}%", probs::percentage(summary.implied_prob))),
        ("Edge", format!("{:+.1}%", probs::percentage(summary.edge))),
        ("Verdict", summary.verdict.to_string()),
    ] {
        table.push_row(Row::new(
            Styles::default(),
            vec![label.into(), value.into()],
        ));
    }
    table
}
