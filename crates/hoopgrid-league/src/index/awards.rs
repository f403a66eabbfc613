use std::collections::{BTreeSet, HashMap};

use crate::{AwardKind, Player, PlayerId, Season, SeasonAwards};

/// `Awards[kind]`: everyone who ever won an award kind, merged from player
/// award lists and league award tables (multi-player honors expanded per
/// player). Duplicate (kind, season) entries for one player count once.
#[derive(Debug, Clone, Default)]
pub struct AwardIndex {
    winners: HashMap<AwardKind, BTreeSet<PlayerId>>,
    by_player: HashMap<PlayerId, BTreeSet<(AwardKind, Season)>>,
}

impl AwardIndex {
    #[must_use]
    pub fn build(players: &[Player], awards_by_season: &[SeasonAwards]) -> Self {
        let mut index = Self::default();
        for player in players {
            for award in &player.awards {
                index.insert(player.id, award.kind, award.season);
            }
        }
        for awards in awards_by_season {
            let season = awards.season;
            let individual = [
                (AwardKind::Mvp, awards.mvp),
                (AwardKind::FinalsMvp, awards.finals_mvp),
                (AwardKind::Dpoy, awards.dpoy),
                (AwardKind::Roy, awards.roy),
                (AwardKind::Smoy, awards.smoy),
                (AwardKind::Mip, awards.mip),
            ];
            for (kind, winner) in individual {
                if let Some(winner) = winner {
                    index.insert(winner.player_id, kind, season);
                }
            }
            let team_honors = [
                (AwardKind::AllLeague, &awards.all_league),
                (AwardKind::AllDefensive, &awards.all_defensive),
                (AwardKind::AllRookie, &awards.all_rookie),
            ];
            for (kind, teams) in team_honors {
                for winner in teams.iter().flat_map(|team| &team.players) {
                    index.insert(winner.player_id, kind, season);
                }
            }
        }
        index
    }

    fn insert(&mut self, player: PlayerId, kind: AwardKind, season: Season) {
        if kind == AwardKind::Other {
            return;
        }
        self.winners.entry(kind).or_default().insert(player);
        self.by_player
            .entry(player)
            .or_default()
            .insert((kind, season));
    }

    #[must_use]
    pub fn has_won(&self, player: PlayerId, kind: AwardKind) -> bool {
        self.winners
            .get(&kind)
            .is_some_and(|winners| winners.contains(&player))
    }

    /// Number of distinct seasons in which the player won `kind`.
    #[must_use]
    pub fn count(&self, player: PlayerId, kind: AwardKind) -> usize {
        self.by_player.get(&player).map_or(0, |awards| {
            awards.iter().filter(|(k, _)| *k == kind).count()
        })
    }

    #[must_use]
    pub fn winners(&self, kind: AwardKind) -> Option<&BTreeSet<PlayerId>> {
        self.winners.get(&kind)
    }
}
