use chrono::{DateTime, Utc};
use hoopgrid_evaluator::GridCriterion;
use hoopgrid_game::{Cell, CellAnswer, Game, GameId, RankedAnswer, SessionSummary};
use hoopgrid_league::PlayerId;
use serde::Serialize;

/// A game as written by `generate`. Readable back as a plain [`Game`].
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedGame {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub game: Game,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeagueSummary {
    pub players: usize,
    pub teams: usize,
    pub seasons: usize,
    pub eligible_teams: usize,
    pub eligible_achievements: Vec<CriterionUsage>,
    pub prominence: Option<ProminenceDistribution>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CriterionUsage {
    pub criterion: GridCriterion,
    pub players: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProminenceDistribution {
    pub min: f64,
    pub median: f64,
    pub mean: f64,
    pub max: f64,
    pub std_dev: f64,
    pub percentiles: Vec<PercentileValue>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PercentileValue {
    pub percentile: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CellReport {
    pub game: GameId,
    pub cell: Cell,
    pub row: GridCriterion,
    pub col: GridCriterion,
    pub answers: Vec<NamedAnswer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NamedAnswer {
    pub name: String,
    #[serde(flatten)]
    pub answer: RankedAnswer,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayReport {
    pub game: GameId,
    pub answers: Vec<CellAnswer>,
    pub rejected: Vec<RejectedAnswer>,
    pub summary: SessionSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectedAnswer {
    pub line: usize,
    pub input: String,
    pub player: Option<PlayerId>,
    pub reason: String,
}
