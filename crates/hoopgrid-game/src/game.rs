use std::collections::BTreeSet;

use hoopgrid_evaluator::{EligibilityResolver, GridCriterion};
use hoopgrid_league::PlayerId;
use serde::{Deserialize, Serialize};

use crate::{GameId, GridSeed, GridShape};

pub const GRID_SIZE: usize = 3;

/// A cell position; both coordinates are below [`GRID_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// All nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Cell { row, col }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    #[display("cell {cell} has no eligible player")]
    EmptyCell { cell: Cell },
    #[display("game id {given} does not belong to its seed (expected {expected})")]
    IdMismatch { expected: GameId, given: GameId },
    #[display(
        "cell {cell} does not match the league: {stored} stored, {resolved} resolved players"
    )]
    StaleCell {
        cell: Cell,
        stored: usize,
        resolved: usize,
    },
}

/// A committed grid: three row and three column criteria, and the eligible
/// players of every cell.
///
/// Every cell's eligible set is non-empty, also for games read back from
/// JSON. The value is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawGame")]
pub struct Game {
    id: GameId,
    seed: GridSeed,
    shape: GridShape,
    rows: [GridCriterion; GRID_SIZE],
    cols: [GridCriterion; GRID_SIZE],
    correct_answers: [[BTreeSet<PlayerId>; GRID_SIZE]; GRID_SIZE],
}

impl Game {
    pub(crate) fn new(
        seed: GridSeed,
        shape: GridShape,
        rows: [GridCriterion; GRID_SIZE],
        cols: [GridCriterion; GRID_SIZE],
        correct_answers: [[BTreeSet<PlayerId>; GRID_SIZE]; GRID_SIZE],
    ) -> Self {
        debug_assert!(correct_answers.iter().flatten().all(|cell| !cell.is_empty()));
        Self {
            id: seed.game_id(),
            seed,
            shape,
            rows,
            cols,
            correct_answers,
        }
    }

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn seed(&self) -> GridSeed {
        self.seed
    }

    #[must_use]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    #[must_use]
    pub fn rows(&self) -> &[GridCriterion; GRID_SIZE] {
        &self.rows
    }

    #[must_use]
    pub fn cols(&self) -> &[GridCriterion; GRID_SIZE] {
        &self.cols
    }

    #[must_use]
    pub fn criteria(&self, cell: Cell) -> (&GridCriterion, &GridCriterion) {
        (&self.rows[cell.row], &self.cols[cell.col])
    }

    #[must_use]
    pub fn eligible(&self, cell: Cell) -> &BTreeSet<PlayerId> {
        &self.correct_answers[cell.row][cell.col]
    }

    /// Checks every stored cell against a fresh resolution in `resolver`'s
    /// league, so a game saved against another document is rejected.
    pub fn verify(&self, resolver: &EligibilityResolver<'_>) -> Result<(), GameError> {
        for cell in Cell::all() {
            let (row, col) = self.criteria(cell);
            let resolved = resolver.resolve_cell(row, col);
            let stored = self.eligible(cell);
            if *stored != resolved {
                return Err(GameError::StaleCell {
                    cell,
                    stored: stored.len(),
                    resolved: resolved.len(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGame {
    id: GameId,
    seed: GridSeed,
    shape: GridShape,
    rows: [GridCriterion; GRID_SIZE],
    cols: [GridCriterion; GRID_SIZE],
    correct_answers: [[BTreeSet<PlayerId>; GRID_SIZE]; GRID_SIZE],
}

impl TryFrom<RawGame> for Game {
    type Error = GameError;

    fn try_from(raw: RawGame) -> Result<Self, Self::Error> {
        let expected = raw.seed.game_id();
        if raw.id != expected {
            return Err(GameError::IdMismatch {
                expected,
                given: raw.id,
            });
        }
        if let Some(cell) =
            Cell::all().find(|cell| raw.correct_answers[cell.row][cell.col].is_empty())
        {
            return Err(GameError::EmptyCell { cell });
        }
        Ok(Self {
            id: raw.id,
            seed: raw.seed,
            shape: raw.shape,
            rows: raw.rows,
            cols: raw.cols,
            correct_answers: raw.correct_answers,
        })
    }
}
