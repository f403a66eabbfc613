use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::warn;

use crate::{Player, PlayerId, Season, SingleGameFeat, TeamId};

/// Threshold for a "double-digit" category in double/triple-double tests.
pub const DOUBLE_DIGITS: u32 = 10;

/// A normalized single-game performance line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatLine {
    pub season: Season,
    pub team_id: Option<TeamId>,
    pub playoffs: bool,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub threes: u32,
}

impl From<&SingleGameFeat> for FeatLine {
    fn from(feat: &SingleGameFeat) -> Self {
        Self {
            season: feat.season,
            team_id: feat.team_id,
            playoffs: feat.playoffs,
            points: feat.points,
            rebounds: feat.rebounds,
            assists: feat.assists,
            steals: feat.steals,
            blocks: feat.blocks,
            threes: feat.threes,
        }
    }
}

impl FeatLine {
    /// Number of categories (points, rebounds, assists, steals, blocks) in
    /// double digits.
    #[must_use]
    pub fn double_digit_categories(&self) -> usize {
        [
            self.points,
            self.rebounds,
            self.assists,
            self.steals,
            self.blocks,
        ]
        .into_iter()
        .filter(|&value| value >= DOUBLE_DIGITS)
        .count()
    }

    #[must_use]
    pub fn is_triple_double(&self) -> bool {
        self.double_digit_categories() >= 3
    }
}

/// `FeatsByPlayer[playerId]`.
#[derive(Debug, Clone, Default)]
pub struct FeatIndex {
    by_player: HashMap<PlayerId, Vec<FeatLine>>,
}

impl FeatIndex {
    #[must_use]
    pub fn build(players: &[Player], feats: &[SingleGameFeat]) -> Self {
        let known = players.iter().map(|p| p.id).collect::<HashSet<_>>();
        let mut by_player = HashMap::<PlayerId, Vec<FeatLine>>::new();
        let mut skipped = 0_usize;
        for feat in feats {
            if !known.contains(&feat.player_id) {
                skipped += 1;
                continue;
            }
            by_player
                .entry(feat.player_id)
                .or_default()
                .push(FeatLine::from(feat));
        }
        if skipped > 0 {
            warn!(skipped, "ignored single-game feats for unknown players");
        }
        Self { by_player }
    }

    #[must_use]
    pub fn lines(&self, player: PlayerId) -> &[FeatLine] {
        self.by_player
            .get(&player)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns `true` if any of the player's game lines satisfies `pred`.
    pub fn any<F>(&self, player: PlayerId, pred: F) -> bool
    where
        F: FnMut(&FeatLine) -> bool,
    {
        self.lines(player).iter().any(pred)
    }
}
