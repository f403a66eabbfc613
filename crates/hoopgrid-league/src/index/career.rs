use std::collections::{BTreeSet, HashMap};

use crate::{Player, PlayerId, StatLine};

/// Regular-season career totals for one player. Playoff rows are excluded.
#[derive(Debug, Clone, Default)]
pub struct CareerTotals {
    pub stats: StatLine,
    pub ows: f64,
    pub dws: f64,
    pub vorp: f64,
    /// Number of distinct seasons with at least one regular-season game.
    pub seasons_played: u32,
    per_minutes: f64,
}

impl CareerTotals {
    #[must_use]
    pub fn from_player(player: &Player) -> Self {
        let mut totals = Self::default();
        let mut seasons = BTreeSet::new();
        for row in player.regular_season_rows() {
            totals.stats += &row.stats;
            totals.ows += row.advanced.ows;
            totals.dws += row.advanced.dws;
            totals.vorp += row.advanced.vorp;
            totals.per_minutes += row.advanced.per * row.stats.minutes;
            if row.stats.games_played > 0 {
                seasons.insert(row.season);
            }
        }
        totals.seasons_played = u32::try_from(seasons.len()).unwrap_or(u32::MAX);
        totals
    }

    /// Minutes-weighted career player efficiency rating.
    #[must_use]
    pub fn per(&self) -> f64 {
        if self.stats.minutes > 0.0 {
            self.per_minutes / self.stats.minutes
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn win_shares(&self) -> f64 {
        self.ows + self.dws
    }
}

#[derive(Debug, Clone, Default)]
pub struct CareerIndex {
    totals: HashMap<PlayerId, CareerTotals>,
}

impl CareerIndex {
    #[must_use]
    pub fn build(players: &[Player]) -> Self {
        let totals = players
            .iter()
            .map(|player| (player.id, CareerTotals::from_player(player)))
            .collect();
        Self { totals }
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&CareerTotals> {
        self.totals.get(&player)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}
