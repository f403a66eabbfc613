use std::collections::{BTreeMap, BTreeSet};

use hoopgrid_league::{League, PlayerId};
use serde::Serialize;
use tracing::debug;

use crate::{AnswerScore, Cell, GRID_SIZE, Game, GameId, ProminenceTable, score_answer};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AnswerError {
    #[display("cell ({row}, {col}) is outside the 3x3 grid")]
    InvalidCell { row: usize, col: usize },
    #[display("cell {cell} has already been answered")]
    CellAlreadyAnswered { cell: Cell },
    #[display("player {player} is not in this league")]
    UnknownPlayer { player: PlayerId },
    #[display("player {player} was already used in this game")]
    PlayerAlreadyUsed { player: PlayerId },
    #[display("answer is for game {given}, but this session plays {expected}")]
    GameMismatch { expected: GameId, given: GameId },
}

/// The recorded outcome of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellAnswer {
    pub cell: Cell,
    pub player: PlayerId,
    #[serde(flatten)]
    pub score: AnswerScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub answered: usize,
    pub correct: usize,
    pub total_rarity: u32,
    pub is_complete: bool,
}

/// One player's run through a [`Game`].
///
/// Each cell takes exactly one guess, right or wrong, and a player can be
/// named only once per game. Rejected guesses leave the session unchanged.
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    game: &'a Game,
    league: &'a League,
    prominence: &'a ProminenceTable,
    answers: BTreeMap<Cell, CellAnswer>,
    used_players: BTreeSet<PlayerId>,
}

impl<'a> GameSession<'a> {
    #[must_use]
    pub fn new(game: &'a Game, league: &'a League, prominence: &'a ProminenceTable) -> Self {
        Self {
            game,
            league,
            prominence,
            answers: BTreeMap::new(),
            used_players: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn game(&self) -> &'a Game {
        self.game
    }

    /// Scores `player` for the cell at (`row`, `col`).
    pub fn answer_at(
        &mut self,
        row: usize,
        col: usize,
        player: PlayerId,
    ) -> Result<CellAnswer, AnswerError> {
        let cell = Cell::new(row, col).ok_or(AnswerError::InvalidCell { row, col })?;
        self.answer(cell, player)
    }

    /// Like [`Self::answer`], first checking that the guess targets this game.
    pub fn answer_for(
        &mut self,
        game: GameId,
        cell: Cell,
        player: PlayerId,
    ) -> Result<CellAnswer, AnswerError> {
        let expected = self.game.id();
        if game != expected {
            return Err(AnswerError::GameMismatch {
                expected,
                given: game,
            });
        }
        self.answer(cell, player)
    }

    pub fn answer(&mut self, cell: Cell, player: PlayerId) -> Result<CellAnswer, AnswerError> {
        if self.answers.contains_key(&cell) {
            return Err(AnswerError::CellAlreadyAnswered { cell });
        }
        if !self.league.contains_player(player) {
            return Err(AnswerError::UnknownPlayer { player });
        }
        if self.used_players.contains(&player) {
            return Err(AnswerError::PlayerAlreadyUsed { player });
        }

        let score = score_answer(self.game.eligible(cell), player, self.prominence);
        let answer = CellAnswer {
            cell,
            player,
            score,
        };
        debug!(
            game = %self.game.id(),
            %cell,
            %player,
            correct = score.is_correct,
            rarity = score.rarity,
            "scored answer"
        );
        self.answers.insert(cell, answer);
        self.used_players.insert(player);
        Ok(answer)
    }

    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&CellAnswer> {
        self.answers.get(&cell)
    }

    pub fn answers(&self) -> impl Iterator<Item = &CellAnswer> + '_ {
        self.answers.values()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.len() == GRID_SIZE * GRID_SIZE
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        let correct = self.answers.values().filter(|a| a.score.is_correct);
        SessionSummary {
            answered: self.answers.len(),
            correct: correct.clone().count(),
            total_rarity: correct.map(|a| u32::from(a.score.rarity)).sum(),
            is_complete: self.is_complete(),
        }
    }
}
