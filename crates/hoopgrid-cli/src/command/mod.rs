use clap::{Parser, Subcommand};

use self::{generate::GenerateArg, inspect::InspectArg, play::PlayArg, resolve::ResolveArg};

mod generate;
mod inspect;
mod play;
mod resolve;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Generate a grid and print it as JSON
    Generate(#[clap(flatten)] GenerateArg),
    /// Summarize a league: sizes, usable criteria, prominence distribution
    Inspect(#[clap(flatten)] InspectArg),
    /// List the eligible players of one cell with rarity and rank
    Resolve(#[clap(flatten)] ResolveArg),
    /// Answer a grid from `row col playerId` lines on stdin
    Play(#[clap(flatten)] PlayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Generate(arg) => generate::run(&arg)?,
        Mode::Inspect(arg) => inspect::run(&arg)?,
        Mode::Resolve(arg) => resolve::run(&arg)?,
        Mode::Play(arg) => play::run(&arg)?,
    }
    Ok(())
}
