//! Historical-fact predicates ("achievements") evaluated against league indices.
//!
//! Every achievement answers one question about one player: did this player
//! reach 20,000 career points, lead the league in assists, play for a
//! champion, and so on. Answers are derived strictly from [`LeagueIndices`]
//! and the player's structured record. Free-text labels are never matched.
//!
//! # Categories
//!
//! - [`career`] - career totals thresholds
//! - [`season`] - single-season per-game rates and the 50/40/90 shooting club
//! - [`leaders`] - league leadership in a per-game category
//! - [`feats`] - single-game performances
//! - [`awards`] - individual awards and team honors
//! - [`special`] - All-Star, championship and Hall-of-Fame facts
//! - [`career_path`] - career length, draft slot and roster stability
//!
//! # Fault handling
//!
//! [`Achievement::check`] may fail, for instance when a birth year is needed
//! but absent. [`AchievementRegistry::evaluate`] absorbs such failures as
//! "not satisfied" and logs them; they never abort a batch.

use std::{collections::BTreeSet, fmt};

use hoopgrid_league::{LeagueIndices, Player, PlayerId};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod awards;
pub mod career;
pub mod career_path;
pub mod feats;
pub mod leaders;
pub mod season;
pub mod special;

/// Identifier of a registered achievement, e.g. `"career_20k_points"`.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct AchievementId(pub String);

impl From<&str> for AchievementId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    #[display("career")]
    Career,
    #[display("season")]
    Season,
    #[display("league leader")]
    Leadership,
    #[display("single game")]
    Feat,
    #[display("award")]
    Award,
    #[display("team honor")]
    TeamHonor,
    #[display("special")]
    Special,
    #[display("career path")]
    CareerPath,
    #[display("roster")]
    Roster,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EvaluationError {
    #[display("player {player} has no birth year")]
    MissingBirthYear { player: PlayerId },
    #[display("player {player} is missing from the {index} index")]
    MissingIndexEntry {
        player: PlayerId,
        index: &'static str,
    },
}

pub trait Achievement: fmt::Debug + Send + Sync {
    #[must_use]
    fn id(&self) -> &'static str;
    #[must_use]
    fn label(&self) -> &'static str;
    #[must_use]
    fn category(&self) -> AchievementCategory;
    #[must_use]
    fn clone_boxed(&self) -> BoxedAchievement;

    /// Decides whether `player` satisfies this achievement.
    fn check(&self, player: &Player, indices: &LeagueIndices) -> Result<bool, EvaluationError>;
}

pub type BoxedAchievement = Box<dyn Achievement>;

impl Clone for BoxedAchievement {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

impl Achievement for BoxedAchievement {
    fn id(&self) -> &'static str {
        self.as_ref().id()
    }

    fn label(&self) -> &'static str {
        self.as_ref().label()
    }

    fn category(&self) -> AchievementCategory {
        self.as_ref().category()
    }

    fn clone_boxed(&self) -> BoxedAchievement {
        self.as_ref().clone_boxed()
    }

    fn check(&self, player: &Player, indices: &LeagueIndices) -> Result<bool, EvaluationError> {
        self.as_ref().check(player, indices)
    }
}

/// Catalog entry describing one registered achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub category: AchievementCategory,
}

/// The fixed id → predicate table.
#[derive(Debug, Clone)]
pub struct AchievementRegistry {
    achievements: Vec<BoxedAchievement>,
}

impl Default for AchievementRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl AchievementRegistry {
    /// The standard table of achievements used for grid generation.
    #[must_use]
    pub fn standard() -> Self {
        let achievements = [
            career::all(),
            season::all(),
            leaders::all(),
            feats::all(),
            awards::all(),
            special::all(),
            career_path::all(),
        ]
        .into_iter()
        .flatten()
        .collect();
        Self { achievements }
    }

    #[must_use]
    pub fn from_achievements(achievements: Vec<BoxedAchievement>) -> Self {
        Self { achievements }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.achievements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.achievements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn Achievement + 'static)> + '_ {
        self.achievements.iter().map(|achievement| &**achievement)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&(dyn Achievement + 'static)> {
        self.iter().find(|achievement| achievement.id() == id)
    }

    #[must_use]
    pub fn catalog(&self) -> Vec<AchievementInfo> {
        self.iter()
            .map(|achievement| AchievementInfo {
                id: achievement.id(),
                label: achievement.label(),
                category: achievement.category(),
            })
            .collect()
    }

    /// Evaluates one achievement for one player, treating faults as "not satisfied".
    #[must_use]
    pub fn evaluate(
        &self,
        achievement: &dyn Achievement,
        player: &Player,
        indices: &LeagueIndices,
    ) -> bool {
        match achievement.check(player, indices) {
            Ok(satisfied) => satisfied,
            Err(err) => {
                debug!(
                    achievement = achievement.id(),
                    player = %player.id,
                    error = %err,
                    "achievement evaluation failed; treating as not satisfied"
                );
                false
            }
        }
    }

    /// All players satisfying `achievement`.
    #[must_use]
    pub fn satisfying_players(
        &self,
        achievement: &dyn Achievement,
        players: &[Player],
        indices: &LeagueIndices,
    ) -> BTreeSet<PlayerId> {
        players
            .iter()
            .filter(|player| self.evaluate(achievement, player, indices))
            .map(|player| player.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_standard_registry_ids_are_unique() {
        let registry = AchievementRegistry::standard();
        let ids = registry.iter().map(Achievement::id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn test_standard_registry_category_counts() {
        let registry = AchievementRegistry::standard();
        let count = |category| {
            registry
                .iter()
                .filter(|a| a.category() == category)
                .count()
        };
        assert_eq!(count(AchievementCategory::Career), 6);
        assert_eq!(count(AchievementCategory::Season), 6);
        assert_eq!(count(AchievementCategory::Leadership), 5);
        assert_eq!(count(AchievementCategory::Feat), 5);
        assert_eq!(count(AchievementCategory::Award), 6);
        assert_eq!(count(AchievementCategory::TeamHonor), 2);
        assert_eq!(count(AchievementCategory::Special), 5);
        assert_eq!(count(AchievementCategory::CareerPath), 5);
        assert_eq!(count(AchievementCategory::Roster), 1);
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = AchievementRegistry::standard();
        let achievement = registry.get("first_overall_pick").unwrap();
        assert_eq!(achievement.label(), "#1 Overall Draft Pick");
        assert!(registry.get("no_such_achievement").is_none());
    }
}
