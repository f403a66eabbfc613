//! Achievement predicates and cell eligibility for the hoopgrid trivia grid.
//!
//! # Layers
//!
//! 1. **Achievements** ([`achievement`]) - a fixed registry of named predicates
//!    `(player, indices) -> bool`, grouped by category. Each consumes only the
//!    derived [`LeagueIndices`](hoopgrid_league::LeagueIndices) and the player's
//!    structured record.
//!
//! 2. **Criteria** ([`GridCriterion`]) - a grid row or column: a team, or an
//!    achievement id, each with a display label.
//!
//! 3. **Resolver** ([`EligibilityResolver`]) - the set of players satisfying a
//!    criterion, and the AND of a (row, column) pair.
//!
//! # Example
//!
//! ```
//! use hoopgrid_evaluator::{AchievementRegistry, EligibilityResolver, GridCriterion};
//! use hoopgrid_league::{League, LeagueDocument};
//!
//! let league = League::new(LeagueDocument::default());
//! let registry = AchievementRegistry::standard();
//! let resolver = EligibilityResolver::new(&league, &registry);
//!
//! let mvp = GridCriterion::achievement(registry.get("mvp").unwrap());
//! assert!(resolver.criterion_players(&mvp).is_empty());
//! ```

pub use self::{
    achievement::{
        Achievement, AchievementCategory, AchievementId, AchievementInfo, AchievementRegistry,
        BoxedAchievement, EvaluationError,
    },
    criterion::GridCriterion,
    resolver::{EligibilityResolver, resolve_cell},
};

pub mod achievement;

mod criterion;
mod resolver;

#[cfg(test)]
mod testing;
