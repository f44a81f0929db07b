use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use chrono::Local;
use clap::Parser;
use rustc_hash::FxHashSet;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use pundit::file;
use pundit::timed::Timed;
use pundit_soccer::analysis::{Analyst, Filter, Overview};
use pundit_soccer::config::AnalystConfig;
use pundit_soccer::data::{DemoSource, FileSource, MatchSource, SourceKind};
use pundit_soccer::slip::{LegSpec, SoccerSlip};
use pundit_soccer::{print, slip};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// where to source today's matches from: demo or file
    #[clap(long, default_value = "demo")]
    source: SourceKind,

    /// JSON file to read the matches from, when sourcing from a file
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// JSON file containing the analyst configuration
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// only show matches in the given league (repeatable)
    #[clap(short = 'l', long)]
    league: Vec<String>,

    /// only show matches whose label contains the given text
    #[clap(short = 's', long)]
    search: Option<String>,

    /// add a leg to the slip, as <index>:<market>@<odds> (repeatable)
    #[clap(short = 'p', long = "pick")]
    picks: Vec<LegSpec>,

    /// amount staked on the slip
    #[clap(long, default_value_t = 20.0)]
    stake: f64,

    /// write the slip to a text file
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,

    /// write the analyses to a JSON file
    #[clap(short = 'j', long)]
    json: Option<PathBuf>,

    /// print the full probability table of every match
    #[clap(long)]
    verbose: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        match self.source {
            SourceKind::File if self.file.is_none() => {
                bail!("the -f flag must be specified when sourcing from a file")
            }
            SourceKind::Demo if self.file.is_some() => {
                bail!("the -f flag is only valid when sourcing from a file")
            }
            _ => {}
        }
        if !self.stake.is_finite() || self.stake <= 0.0 {
            bail!("stake must be a positive amount");
        }
        if self.output.is_some() && self.picks.is_empty() {
            bail!("at least one leg must be picked to write a slip");
        }
        Ok(())
    }

    fn source(&self) -> anyhow::Result<Box<dyn MatchSource>> {
        match self.source {
            SourceKind::Demo => Ok(Box::new(DemoSource)),
            SourceKind::File => {
                let path = self
                    .file
                    .as_ref()
                    .ok_or(anyhow!("no file to source matches from"))?;
                Ok(Box::new(FileSource::new(path)))
            }
        }
    }

    fn filter(&self) -> Filter {
        Filter {
            leagues: if self.league.is_empty() {
                None
            } else {
                Some(self.league.iter().cloned().collect::<FxHashSet<_>>())
            },
            search: self.search.clone(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let config = match &args.config {
        None => AnalystConfig::default(),
        Some(path) => AnalystConfig::read_json_file(path)
            .with_context(|| format!("reading config from {}", path.display()))?,
    };
    debug!("config: {config:?}");
    let analyst = Analyst::try_from(config)?;

    let matches = args.source()?.fetch_todays_matches()?;
    info!("sourced {} matches from {:?}", matches.len(), args.source);

    let analyses = Timed::result(|| analyst.analyse_all(&matches))?
        .map(|analyses| args.filter().apply(analyses));
    info!(
        "analysed {} matches in {:?}, {} shown",
        matches.len(),
        analyses.elapsed,
        analyses.value.len()
    );
    let analyses = analyses.value;
    if analyses.is_empty() {
        info!("no matches to show");
        return Ok(());
    }

    let overview = Overview::summarise(&analyses, &analyst.config().risk);
    info!(
        "Overview:\n{}",
        Console::default().render(&print::tabulate_overview(&overview))
    );
    info!(
        "Matches:\n{}",
        Console::default().render(&print::tabulate_analyses(&analyses))
    );
    for (index, analysis) in analyses.iter().enumerate() {
        info!(
            "{}. {} shortlist:\n{}",
            index + 1,
            analysis.label,
            Console::default().render(&print::tabulate_shortlist(analysis))
        );
        if args.verbose {
            info!(
                "{}. {} probabilities:\n{}",
                index + 1,
                analysis.label,
                Console::default().render(&print::tabulate_probabilities(&analysis.table))
            );
        }
    }

    if let Some(path) = &args.json {
        file::write_json(path, &analyses)?;
        info!("wrote analyses to {}", path.display());
    }

    if args.picks.is_empty() {
        return Ok(());
    }
    let mut slip = SoccerSlip::default();
    for pick in &args.picks {
        let analysis = analyses
            .get(pick.index - 1)
            .ok_or(anyhow!("no match numbered {} in the list", pick.index))?;
        slip.push(slip::select_leg(analysis, pick.market, pick.odds)?);
    }
    let summary = slip.summarise(args.stake, &analyst.config().edge)?;
    info!(
        "Slip:\n{}",
        Console::default().render(&print::tabulate_slip(&slip))
    );
    info!(
        "Summary:\n{}",
        Console::default().render(&print::tabulate_summary(&summary))
    );
    info!("verdict: {}", summary.verdict.remark());

    if let Some(path) = &args.output {
        file::write_lines(path, slip::export_lines(&slip, &summary, Local::now().date_naive()))?;
        info!("wrote slip to {}", path.display());
    }

    Ok(())
}
