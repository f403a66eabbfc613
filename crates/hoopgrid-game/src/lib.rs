//! Grid generation, rarity scoring and answer sessions.
//!
//! # Overview
//!
//! - [`generator`] - the randomized search that commits a [`Game`] whose nine
//!   cells all have eligible players, or fails with
//!   [`GenerateError::InsufficientVariety`]
//! - [`prominence`] - a single prominence score per player
//! - [`rarity`] - prominence normalized within one cell (`0..=100`, rarer is higher)
//! - [`session`] - one run through a game: one guess per cell, no player reuse
//!
//! # Example
//!
//! ```
//! use hoopgrid_evaluator::AchievementRegistry;
//! use hoopgrid_game::{GenerateError, GeneratorConfig, GridSeed, generator::generate_grid};
//! use hoopgrid_league::{League, LeagueDocument};
//!
//! let league = League::new(LeagueDocument::default());
//! let registry = AchievementRegistry::standard();
//! let seed = GridSeed::from_bytes([0; 16]);
//! let err = generate_grid(&league, &registry, GeneratorConfig::default(), seed).unwrap_err();
//! assert_eq!(
//!     err,
//!     GenerateError::InsufficientVariety {
//!         available_teams: 0,
//!         available_achievements: 0,
//!     }
//! );
//! ```

pub use self::{
    game::{Cell, GRID_SIZE, Game, GameError},
    generator::{GenerateError, GeneratorConfig, GridGenerator, GridShape},
    prominence::{ProminenceTable, ProminenceWeights},
    rarity::{AnswerScore, RankedAnswer, rank_cell, score_answer},
    seed::{GameId, GridSeed, ParseSeedError},
    session::{AnswerError, CellAnswer, GameSession, SessionSummary},
};

pub mod generator;
pub mod prominence;
pub mod rarity;
pub mod session;

mod game;
mod seed;
