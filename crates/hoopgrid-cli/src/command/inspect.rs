use std::path::PathBuf;

use hoopgrid_evaluator::{AchievementRegistry, EligibilityResolver};
use hoopgrid_game::{
    ProminenceTable, ProminenceWeights,
    generator::{CriterionPool, PoolEntry},
};

use crate::{
    schema::{CriterionUsage, LeagueSummary, PercentileValue, ProminenceDistribution},
    util::{GeneratorArg, Output, read_json_file, read_league_file},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct InspectArg {
    /// League document JSON
    #[arg(long)]
    league: PathBuf,
    #[clap(flatten)]
    generator: GeneratorArg,
    /// JSON file with prominence weights
    #[arg(long)]
    weights: Option<PathBuf>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &InspectArg) -> anyhow::Result<()> {
    let InspectArg {
        league,
        generator,
        weights,
        output,
    } = arg;
    let league = read_league_file(league)?;
    let registry = AchievementRegistry::standard();
    let weights: ProminenceWeights = match weights {
        Some(path) => read_json_file("prominence weights", path)?,
        None => ProminenceWeights::default(),
    };

    let resolver = EligibilityResolver::new(&league, &registry);
    let pool = CriterionPool::build(&resolver, &generator.config()?);
    let prominence = ProminenceTable::build(&league, &weights);

    let usage = |entry: &PoolEntry| CriterionUsage {
        criterion: entry.criterion.clone(),
        players: entry.players.len(),
    };
    let mut eligible_achievements = pool.achievements().iter().map(usage).collect::<Vec<_>>();
    eligible_achievements.sort_by(|a, b| b.players.cmp(&a.players));

    let summary = LeagueSummary {
        players: league.players().len(),
        teams: league.teams().len(),
        seasons: league.indices().seasons.seasons().len(),
        eligible_teams: pool.teams().len(),
        eligible_achievements,
        prominence: prominence.summary().map(|summary| ProminenceDistribution {
            min: summary.stats.min,
            median: summary.stats.median,
            mean: summary.stats.mean,
            max: summary.stats.max,
            std_dev: summary.stats.std_dev,
            percentiles: summary
                .percentiles
                .iter()
                .map(|(percentile, value)| PercentileValue { percentile, value })
                .collect(),
        }),
    };

    eprintln!("League summary");
    eprintln!("  Players: {}", summary.players);
    eprintln!("  Teams: {} ({} usable)", summary.teams, summary.eligible_teams);
    eprintln!("  Seasons: {}", summary.seasons);
    eprintln!(
        "  Achievements: {} of {} usable",
        summary.eligible_achievements.len(),
        registry.len()
    );
    if let Some(prominence) = &summary.prominence {
        eprintln!(
            "  Prominence: min {:.2}, median {:.2}, mean {:.2}, max {:.2}",
            prominence.min, prominence.median, prominence.mean, prominence.max
        );
    }

    Output::save_json(&summary, output.clone())?;
    Ok(())
}
