use std::collections::BTreeSet;

use hoopgrid_league::{League, Player, PlayerId};
use tracing::warn;

use crate::{AchievementRegistry, GridCriterion};

/// Computes which players satisfy a criterion, or a (row, column) pair.
///
/// Pure and reentrant: the same resolver answers generation-time cell checks
/// and answer-time validation, and may be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityResolver<'a> {
    league: &'a League,
    registry: &'a AchievementRegistry,
}

impl<'a> EligibilityResolver<'a> {
    #[must_use]
    pub fn new(league: &'a League, registry: &'a AchievementRegistry) -> Self {
        Self { league, registry }
    }

    #[must_use]
    pub fn league(&self) -> &'a League {
        self.league
    }

    #[must_use]
    pub fn registry(&self) -> &'a AchievementRegistry {
        self.registry
    }

    /// Whether `player` satisfies `criterion`.
    ///
    /// A team criterion looks at every season row, so each stint of a
    /// mid-season trade counts for its own team. An unknown achievement id
    /// is satisfied by nobody.
    #[must_use]
    pub fn satisfies(&self, criterion: &GridCriterion, player: &Player) -> bool {
        match criterion {
            GridCriterion::Team { team_id, .. } => player.played_for(*team_id),
            GridCriterion::Achievement { id, .. } => self
                .registry
                .get(&id.0)
                .is_some_and(|achievement| {
                    self.registry
                        .evaluate(achievement, player, self.league.indices())
                }),
        }
    }

    /// Every player satisfying `criterion`.
    #[must_use]
    pub fn criterion_players(&self, criterion: &GridCriterion) -> BTreeSet<PlayerId> {
        if let GridCriterion::Achievement { id, .. } = criterion {
            if self.registry.get(&id.0).is_none() {
                warn!(achievement = %id, "unknown achievement in criterion");
                return BTreeSet::new();
            }
        }
        self.league
            .players()
            .iter()
            .filter(|player| self.satisfies(criterion, player))
            .map(|player| player.id)
            .collect()
    }

    /// Players satisfying both `row` and `col`.
    #[must_use]
    pub fn resolve_cell(&self, row: &GridCriterion, col: &GridCriterion) -> BTreeSet<PlayerId> {
        self.league
            .players()
            .iter()
            .filter(|player| self.satisfies(row, player) && self.satisfies(col, player))
            .map(|player| player.id)
            .collect()
    }
}

/// Shorthand for [`EligibilityResolver::resolve_cell`].
#[must_use]
pub fn resolve_cell(
    row: &GridCriterion,
    col: &GridCriterion,
    league: &League,
    registry: &AchievementRegistry,
) -> BTreeSet<PlayerId> {
    EligibilityResolver::new(league, registry).resolve_cell(row, col)
}

#[cfg(test)]
mod tests {
    use hoopgrid_league::{Team, TeamId};

    use super::*;
    use crate::{
        AchievementId,
        testing::{document, games, player, stint},
    };

    fn team(id: u32) -> GridCriterion {
        GridCriterion::team(&Team {
            id: TeamId(id),
            name: format!("Team {id}"),
            abbrev: String::new(),
        })
    }

    #[test]
    fn test_team_pair_intersects() {
        let mut both = player(1);
        both.seasons = vec![stint(2000, 1, games(10)), stint(2001, 2, games(10))];
        let mut one = player(2);
        one.seasons = vec![stint(2000, 1, games(10))];
        let league = League::new(document(vec![both, one]));
        let registry = AchievementRegistry::standard();
        let resolver = EligibilityResolver::new(&league, &registry);

        assert_eq!(
            resolver.resolve_cell(&team(1), &team(2)),
            BTreeSet::from([PlayerId(1)])
        );
        assert_eq!(
            resolver.criterion_players(&team(1)),
            BTreeSet::from([PlayerId(1), PlayerId(2)])
        );
    }

    #[test]
    fn test_zero_game_rows_do_not_count() {
        let mut listed = player(1);
        listed.seasons = vec![stint(2000, 1, games(0))];
        let league = League::new(document(vec![listed]));
        let registry = AchievementRegistry::standard();
        assert!(resolve_cell(&team(1), &team(1), &league, &registry).is_empty());
    }

    #[test]
    fn test_unknown_achievement_is_empty() {
        let mut p = player(1);
        p.seasons = vec![stint(2000, 1, games(10))];
        let league = League::new(document(vec![p]));
        let registry = AchievementRegistry::standard();
        let resolver = EligibilityResolver::new(&league, &registry);
        let unknown = GridCriterion::Achievement {
            id: AchievementId::from("no_such_thing"),
            label: "?".to_string(),
        };
        assert!(resolver.criterion_players(&unknown).is_empty());
        assert!(resolver.resolve_cell(&team(1), &unknown).is_empty());
    }
}
