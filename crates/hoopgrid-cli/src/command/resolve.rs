use std::path::PathBuf;

use anyhow::Context as _;
use hoopgrid_evaluator::AchievementRegistry;
use hoopgrid_game::{Cell, GRID_SIZE, ProminenceTable, ProminenceWeights, rank_cell};

use crate::{
    schema::{CellReport, NamedAnswer},
    util::{GameArg, Output, read_league_file},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ResolveArg {
    /// League document JSON
    #[arg(long)]
    league: PathBuf,
    #[clap(flatten)]
    game: GameArg,
    /// Row index (0-2)
    #[arg(long)]
    row: usize,
    /// Column index (0-2)
    #[arg(long)]
    col: usize,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ResolveArg) -> anyhow::Result<()> {
    let ResolveArg {
        league,
        game,
        row,
        col,
        output,
    } = arg;
    let cell = Cell::new(*row, *col).with_context(|| {
        format!("Cell ({row}, {col}) is outside the {GRID_SIZE}x{GRID_SIZE} grid")
    })?;
    let league = read_league_file(league)?;
    let registry = AchievementRegistry::standard();
    let game = game.load(&league, &registry)?;
    let prominence = ProminenceTable::build(&league, &ProminenceWeights::default());

    let (row_criterion, col_criterion) = game.criteria(cell);
    let answers = rank_cell(game.eligible(cell), &prominence)
        .into_iter()
        .map(|answer| NamedAnswer {
            name: league
                .player(answer.player)
                .map_or_else(|| answer.player.to_string(), |player| player.name.clone()),
            answer,
        })
        .collect::<Vec<_>>();

    eprintln!("{row_criterion} x {col_criterion}: {} players", answers.len());
    for named in answers.iter().take(10) {
        eprintln!(
            "  #{:<3} {:<30} rarity {:>3}",
            named.answer.rank, named.name, named.answer.rarity
        );
    }

    let report = CellReport {
        game: game.id(),
        cell,
        row: row_criterion.clone(),
        col: col_criterion.clone(),
        answers,
    };
    Output::save_json(&report, output.clone())?;
    Ok(())
}
