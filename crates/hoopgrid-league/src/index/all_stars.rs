use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::{AllStarRoster, PlayerId, Season};

/// `AllStars[season]`, plus the reverse player → seasons lookup.
#[derive(Debug, Clone, Default)]
pub struct AllStarIndex {
    by_season: BTreeMap<Season, BTreeSet<PlayerId>>,
    by_player: HashMap<PlayerId, BTreeSet<Season>>,
}

impl AllStarIndex {
    #[must_use]
    pub fn build(rosters: &[AllStarRoster]) -> Self {
        let mut index = Self::default();
        for roster in rosters {
            for &player in &roster.player_ids {
                index
                    .by_season
                    .entry(roster.season)
                    .or_default()
                    .insert(player);
                index
                    .by_player
                    .entry(player)
                    .or_default()
                    .insert(roster.season);
            }
        }
        index
    }

    #[must_use]
    pub fn roster(&self, season: Season) -> Option<&BTreeSet<PlayerId>> {
        self.by_season.get(&season)
    }

    /// Seasons in which the player was selected, in ascending order.
    pub fn selections(&self, player: PlayerId) -> impl Iterator<Item = Season> + '_ {
        self.by_player
            .get(&player)
            .into_iter()
            .flat_map(|seasons| seasons.iter().copied())
    }

    #[must_use]
    pub fn selection_count(&self, player: PlayerId) -> usize {
        self.by_player.get(&player).map_or(0, BTreeSet::len)
    }
}
