use std::path::PathBuf;

use chrono::Utc;
use hoopgrid_evaluator::AchievementRegistry;

use crate::{
    schema::GeneratedGame,
    util::{GeneratorArg, Output, read_league_file},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// League document JSON
    #[arg(long)]
    league: PathBuf,
    #[clap(flatten)]
    generator: GeneratorArg,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let GenerateArg {
        league,
        generator,
        output,
    } = arg;
    let league = read_league_file(league)?;
    let registry = AchievementRegistry::standard();
    let game = generator.generate(&league, &registry)?;

    eprintln!("Generated game {} ({})", game.id(), game.shape());
    eprintln!("  Seed: {}", game.seed());
    for (i, row) in game.rows().iter().enumerate() {
        eprintln!("  Row {i}: {row}");
    }
    for (i, col) in game.cols().iter().enumerate() {
        eprintln!("  Col {i}: {col}");
    }

    let generated = GeneratedGame {
        generated_at: Utc::now(),
        game,
    };
    Output::save_json(&generated, output.clone())?;
    Ok(())
}
