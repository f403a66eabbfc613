use std::{
    io::{self, BufRead as _},
    path::PathBuf,
};

use anyhow::Context as _;
use hoopgrid_evaluator::AchievementRegistry;
use hoopgrid_game::{GameSession, ProminenceTable, ProminenceWeights};
use hoopgrid_league::PlayerId;
use tracing::warn;

use crate::{
    schema::{PlayReport, RejectedAnswer},
    util::{GameArg, Output, read_league_file},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// League document JSON
    #[arg(long)]
    league: PathBuf,
    #[clap(flatten)]
    game: GameArg,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

/// One parsed stdin line: `row col playerId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Guess {
    row: usize,
    col: usize,
    player: PlayerId,
}

fn parse_guess(line: &str) -> Option<Guess> {
    let mut fields = line.split_whitespace();
    let guess = Guess {
        row: fields.next()?.parse().ok()?,
        col: fields.next()?.parse().ok()?,
        player: PlayerId(fields.next()?.parse().ok()?),
    };
    fields.next().is_none().then_some(guess)
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        league,
        game,
        output,
    } = arg;
    let league = read_league_file(league)?;
    let registry = AchievementRegistry::standard();
    let game = game.load(&league, &registry)?;
    let prominence = ProminenceTable::build(&league, &ProminenceWeights::default());
    let mut session = GameSession::new(&game, &league, &prominence);

    eprintln!("Game {} ({})", game.id(), game.shape());
    eprintln!("Enter one guess per line: `row col playerId`");

    let mut rejected = vec![];
    for (index, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("Failed to read guess from stdin")?;
        let input = line.trim();
        if input.is_empty() || input.starts_with('#') {
            continue;
        }
        let line_number = index + 1;
        let Some(guess) = parse_guess(input) else {
            warn!(line = line_number, input, "expected `row col playerId`");
            rejected.push(RejectedAnswer {
                line: line_number,
                input: input.to_owned(),
                player: None,
                reason: "expected `row col playerId`".to_owned(),
            });
            continue;
        };
        match session.answer_at(guess.row, guess.col, guess.player) {
            Ok(answer) => {
                let name = league
                    .player(answer.player)
                    .map_or("?", |player| player.name.as_str());
                if answer.score.is_correct {
                    eprintln!(
                        "  {}: {name} is correct, rarity {}",
                        answer.cell, answer.score.rarity
                    );
                } else {
                    eprintln!("  {}: {name} is wrong", answer.cell);
                }
            }
            Err(err) => {
                warn!(line = line_number, %err, "rejected guess");
                rejected.push(RejectedAnswer {
                    line: line_number,
                    input: input.to_owned(),
                    player: Some(guess.player),
                    reason: err.to_string(),
                });
            }
        }
        if session.is_complete() {
            break;
        }
    }

    let summary = session.summary();
    eprintln!(
        "Answered {} cells, {} correct, total rarity {}",
        summary.answered, summary.correct, summary.total_rarity
    );
    let report = PlayReport {
        game: game.id(),
        answers: session.answers().copied().collect(),
        rejected,
        summary,
    };
    Output::save_json(&report, output.clone())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_guess() {
        assert_eq!(
            parse_guess("1 2 345"),
            Some(Guess {
                row: 1,
                col: 2,
                player: PlayerId(345),
            })
        );
        assert_eq!(
            parse_guess("  0\t0   7 "),
            Some(Guess {
                row: 0,
                col: 0,
                player: PlayerId(7),
            })
        );
        assert_eq!(parse_guess("1 2"), None);
        assert_eq!(parse_guess("1 2 3 4"), None);
        assert_eq!(parse_guess("a 2 3"), None);
        assert_eq!(parse_guess("1 2 -3"), None);
    }
}
