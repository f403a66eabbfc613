use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{SeasonSchedule, seasons::combine_regular_season_stints};
use crate::{Player, PlayerId, Season, StatLine};

/// Rates within this distance of the season maximum count as tied for the lead.
pub const LEADER_TOLERANCE: f64 = 1e-9;

/// Per-game categories tracked in the league-leader tables.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum StatKey {
    #[display("points")]
    Points,
    #[display("rebounds")]
    Rebounds,
    #[display("assists")]
    Assists,
    #[display("steals")]
    Steals,
    #[display("blocks")]
    Blocks,
}

impl StatKey {
    pub const ALL: [StatKey; 5] = [
        StatKey::Points,
        StatKey::Rebounds,
        StatKey::Assists,
        StatKey::Steals,
        StatKey::Blocks,
    ];

    #[must_use]
    pub const fn total(self, stats: &StatLine) -> u32 {
        match self {
            StatKey::Points => stats.points,
            StatKey::Rebounds => stats.rebounds(),
            StatKey::Assists => stats.assists,
            StatKey::Steals => stats.steals,
            StatKey::Blocks => stats.blocks,
        }
    }

    #[must_use]
    pub fn per_game(self, stats: &StatLine) -> f64 {
        stats.per_game(self.total(stats))
    }
}

/// `SeasonLeaders[season][stat]`: every qualified player tied for the
/// season's per-game maximum.
///
/// Ties are inclusive. A category whose qualified maximum is zero has no
/// leader.
#[derive(Debug, Clone, Default)]
pub struct LeaderIndex {
    by_season: BTreeMap<Season, BTreeMap<StatKey, BTreeSet<PlayerId>>>,
}

impl LeaderIndex {
    #[must_use]
    pub fn build(players: &[Player], schedule: &SeasonSchedule) -> Self {
        let mut qualified = BTreeMap::<Season, Vec<(PlayerId, StatLine)>>::new();
        for player in players {
            for (season, stats) in combine_regular_season_stints(player) {
                if schedule.is_qualified(season, stats.games_played) {
                    qualified.entry(season).or_default().push((player.id, stats));
                }
            }
        }

        let by_season = qualified
            .into_iter()
            .map(|(season, lines)| {
                let leaders = StatKey::ALL
                    .into_iter()
                    .filter_map(|key| {
                        let leaders = season_leaders(&lines, key);
                        (!leaders.is_empty()).then_some((key, leaders))
                    })
                    .collect();
                (season, leaders)
            })
            .collect();
        Self { by_season }
    }

    #[must_use]
    pub fn leaders(&self, season: Season, key: StatKey) -> Option<&BTreeSet<PlayerId>> {
        self.by_season.get(&season)?.get(&key)
    }

    /// Returns `true` if the player led (or tied for the lead in) `key` in any season.
    #[must_use]
    pub fn has_led(&self, player: PlayerId, key: StatKey) -> bool {
        self.by_season
            .values()
            .any(|by_key| by_key.get(&key).is_some_and(|set| set.contains(&player)))
    }

    pub fn seasons(&self) -> impl Iterator<Item = Season> + '_ {
        self.by_season.keys().copied()
    }
}

fn season_leaders(lines: &[(PlayerId, StatLine)], key: StatKey) -> BTreeSet<PlayerId> {
    let max = lines
        .iter()
        .map(|(_, stats)| key.per_game(stats))
        .fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return BTreeSet::new();
    }
    lines
        .iter()
        .filter(|(_, stats)| key.per_game(stats) >= max - LEADER_TOLERANCE)
        .map(|(id, _)| *id)
        .collect()
}
