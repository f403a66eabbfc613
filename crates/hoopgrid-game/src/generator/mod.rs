//! Randomized grid search.
//!
//! Each attempt draws a [`GridShape`] from the weighted table, samples teams
//! and achievements uniformly without replacement, shuffles each axis, and
//! accepts the grid only if all nine cells have at least one eligible player.
//! After [`GeneratorConfig::max_attempts`] failures it falls back to a pure
//! team grid when enough teams exist, and otherwise reports
//! [`GenerateError::InsufficientVariety`].
//!
//! Cell sets are intersections of per-criterion player sets computed once by
//! the [`EligibilityResolver`], so an attempt costs nine set intersections.

use std::{array, collections::BTreeSet};

use arrayvec::ArrayVec;
use hoopgrid_evaluator::{AchievementRegistry, EligibilityResolver, GridCriterion};
use hoopgrid_league::{League, PlayerId};
use rand::{
    Rng, SeedableRng as _,
    seq::{IndexedRandom as _, SliceRandom as _},
};
use rand_pcg::Pcg32;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{Cell, GRID_SIZE, Game, GridSeed};

pub use self::{
    config::GeneratorConfig,
    shape::{AxisMix, GridShape, SHAPE_WEIGHTS},
};

mod config;
mod shape;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    #[display(
        "not enough variety for a grid: {available_teams} eligible teams, \
         {available_achievements} eligible achievements"
    )]
    InsufficientVariety {
        available_teams: usize,
        available_achievements: usize,
    },
}

/// A usable criterion together with the players satisfying it.
#[derive(Debug, Clone)]
pub struct PoolEntry {
    pub criterion: GridCriterion,
    pub players: BTreeSet<PlayerId>,
}

/// Teams and achievements that pass the fairness floors.
#[derive(Debug, Clone, Default)]
pub struct CriterionPool {
    teams: Vec<PoolEntry>,
    achievements: Vec<PoolEntry>,
}

impl CriterionPool {
    #[must_use]
    pub fn build(resolver: &EligibilityResolver<'_>, config: &GeneratorConfig) -> Self {
        let entry = |criterion: GridCriterion| PoolEntry {
            players: resolver.criterion_players(&criterion),
            criterion,
        };
        let teams = resolver
            .league()
            .teams()
            .par_iter()
            .map(|team| entry(GridCriterion::team(team)))
            .filter(|entry| entry.players.len() >= config.min_team_players)
            .collect();
        let achievements = resolver
            .registry()
            .iter()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|achievement| entry(GridCriterion::achievement(achievement)))
            .filter(|entry| entry.players.len() >= config.min_achievement_players)
            .collect();
        Self {
            teams,
            achievements,
        }
    }

    #[must_use]
    pub fn teams(&self) -> &[PoolEntry] {
        &self.teams
    }

    #[must_use]
    pub fn achievements(&self) -> &[PoolEntry] {
        &self.achievements
    }
}

type Axis<'p> = [&'p PoolEntry; GRID_SIZE];

#[derive(Debug, Clone, Copy, derive_more::Display)]
enum Rejection {
    #[display("cell {_0} has no eligible player")]
    EmptyCell(Cell),
    #[display("axis is not fully populated")]
    IncompleteAxis,
}

#[derive(Debug, Clone)]
pub struct GridGenerator {
    config: GeneratorConfig,
    pool: CriterionPool,
}

impl GridGenerator {
    #[must_use]
    pub fn new(league: &League, registry: &AchievementRegistry, config: GeneratorConfig) -> Self {
        let resolver = EligibilityResolver::new(league, registry);
        let pool = CriterionPool::build(&resolver, &config);
        info!(
            teams = pool.teams.len(),
            achievements = pool.achievements.len(),
            "built criterion pool"
        );
        Self { config, pool }
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    #[must_use]
    pub fn pool(&self) -> &CriterionPool {
        &self.pool
    }

    /// Generates a grid reproducibly from `seed`.
    pub fn generate(&self, seed: GridSeed) -> Result<Game, GenerateError> {
        let mut rng = Pcg32::from_seed(seed.to_bytes());
        self.generate_with(seed, &mut rng)
    }

    /// Generates a grid with a fresh random seed.
    pub fn generate_random(&self) -> Result<Game, GenerateError> {
        self.generate(rand::rng().random())
    }

    /// Generates a grid drawing from `rng`; `seed` only names the game.
    pub fn generate_with<R>(&self, seed: GridSeed, rng: &mut R) -> Result<Game, GenerateError>
    where
        R: Rng + ?Sized,
    {
        let available_teams = self.pool.teams.len();
        let available_achievements = self.pool.achievements.len();
        if available_teams < self.config.min_teams {
            return Err(self.insufficient_variety());
        }

        let shapes = SHAPE_WEIGHTS
            .into_iter()
            .filter(|(shape, _)| shape.is_feasible(available_teams, available_achievements))
            .collect::<Vec<_>>();
        if shapes.is_empty() {
            warn!(
                available_teams,
                available_achievements, "no grid shape is feasible"
            );
        } else {
            for attempt in 1..=self.config.max_attempts {
                let Ok(&(shape, _)) = shapes.choose_weighted(rng, |(_, weight)| *weight) else {
                    break;
                };
                match self.attempt(shape, rng) {
                    Ok((rows, cols, answers)) => {
                        let game = commit(seed, shape, rows, cols, answers);
                        info!(game = %game.id(), attempt, %shape, "generated grid");
                        return Ok(game);
                    }
                    Err(rejection) => {
                        debug!(attempt, %shape, %rejection, "rejected grid attempt");
                    }
                }
            }
        }

        self.fallback(seed, rng)
    }

    fn fallback<R>(&self, seed: GridSeed, rng: &mut R) -> Result<Game, GenerateError>
    where
        R: Rng + ?Sized,
    {
        if self.pool.teams.len() < self.config.fallback_teams {
            return Err(self.insufficient_variety());
        }
        warn!(
            attempts = self.config.max_attempts,
            "random search exhausted; falling back to a team-only grid"
        );
        let shape = GridShape::PureTeams;
        for attempt in 1..=self.config.fallback_attempts {
            match self.attempt(shape, rng) {
                Ok((rows, cols, answers)) => {
                    let game = commit(seed, shape, rows, cols, answers);
                    info!(game = %game.id(), attempt, "generated fallback grid");
                    return Ok(game);
                }
                Err(rejection) => debug!(attempt, %rejection, "rejected fallback attempt"),
            }
        }
        Err(self.insufficient_variety())
    }

    fn insufficient_variety(&self) -> GenerateError {
        GenerateError::InsufficientVariety {
            available_teams: self.pool.teams.len(),
            available_achievements: self.pool.achievements.len(),
        }
    }

    fn attempt<R>(
        &self,
        shape: GridShape,
        rng: &mut R,
    ) -> Result<(Axis<'_>, Axis<'_>, CellSets), Rejection>
    where
        R: Rng + ?Sized,
    {
        let (row_mix, _) = shape.axes();
        let teams = &self.pool.teams;

        let (row_teams, col_teams) = if shape.shares_teams(teams.len()) {
            let (_, col_mix) = shape.axes();
            (
                sample(teams, row_mix.teams, rng),
                sample(teams, col_mix.teams, rng),
            )
        } else {
            let mut row_teams = sample(teams, shape.team_count(), rng);
            let col_teams = row_teams.split_off(row_mix.teams);
            (row_teams, col_teams)
        };
        let mut row_achievements =
            sample(&self.pool.achievements, shape.achievement_count(), rng);
        let col_achievements = row_achievements.split_off(row_mix.achievements);

        let rows = build_axis(row_teams, row_achievements, rng)?;
        let cols = build_axis(col_teams, col_achievements, rng)?;
        let answers = fill_cells(&rows, &cols)?;
        Ok((rows, cols, answers))
    }
}

type CellSets = [[BTreeSet<PlayerId>; GRID_SIZE]; GRID_SIZE];

fn sample<'p, R>(entries: &'p [PoolEntry], amount: usize, rng: &mut R) -> Vec<&'p PoolEntry>
where
    R: Rng + ?Sized,
{
    entries.choose_multiple(rng, amount).collect()
}

fn build_axis<'p, R>(
    teams: Vec<&'p PoolEntry>,
    achievements: Vec<&'p PoolEntry>,
    rng: &mut R,
) -> Result<Axis<'p>, Rejection>
where
    R: Rng + ?Sized,
{
    let mut axis = ArrayVec::<&PoolEntry, GRID_SIZE>::new();
    for entry in teams.into_iter().chain(achievements) {
        axis.try_push(entry).map_err(|_| Rejection::IncompleteAxis)?;
    }
    axis.shuffle(rng);
    axis.into_inner().map_err(|_| Rejection::IncompleteAxis)
}

fn fill_cells(rows: &Axis<'_>, cols: &Axis<'_>) -> Result<CellSets, Rejection> {
    let answers: CellSets = array::from_fn(|row| {
        array::from_fn(|col| {
            rows[row]
                .players
                .intersection(&cols[col].players)
                .copied()
                .collect()
        })
    });
    match Cell::all().find(|cell| answers[cell.row()][cell.col()].is_empty()) {
        Some(cell) => Err(Rejection::EmptyCell(cell)),
        None => Ok(answers),
    }
}

fn commit(
    seed: GridSeed,
    shape: GridShape,
    rows: Axis<'_>,
    cols: Axis<'_>,
    answers: CellSets,
) -> Game {
    Game::new(
        seed,
        shape,
        rows.map(|entry| entry.criterion.clone()),
        cols.map(|entry| entry.criterion.clone()),
        answers,
    )
}

/// Builds the criterion pool and generates one grid from `seed`.
pub fn generate_grid(
    league: &League,
    registry: &AchievementRegistry,
    config: GeneratorConfig,
    seed: GridSeed,
) -> Result<Game, GenerateError> {
    GridGenerator::new(league, registry, config).generate(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(team: u32, players: &[u32]) -> PoolEntry {
        PoolEntry {
            criterion: GridCriterion::Team {
                team_id: hoopgrid_league::TeamId(team),
                label: format!("T{team}"),
            },
            players: players.iter().copied().map(PlayerId).collect(),
        }
    }

    #[test]
    fn test_fill_cells_reports_first_empty_cell() {
        let a = entry(1, &[1, 2]);
        let b = entry(2, &[2, 3]);
        let c = entry(3, &[4]);
        let rows = [&a, &b, &a];
        let cols = [&b, &b, &c];
        match fill_cells(&rows, &cols) {
            Err(Rejection::EmptyCell(cell)) => assert_eq!(cell, Cell::new(0, 2).unwrap()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_build_axis_requires_three_entries() {
        let a = entry(1, &[1]);
        let b = entry(2, &[1]);
        let mut rng = Pcg32::from_seed([7; 16]);
        assert!(build_axis(vec![&a, &b], vec![], &mut rng).is_err());
        assert!(build_axis(vec![&a, &b], vec![&a, &b], &mut rng).is_err());
        let axis = build_axis(vec![&a, &b], vec![&a], &mut rng).unwrap();
        assert_eq!(axis.len(), GRID_SIZE);
    }
}
