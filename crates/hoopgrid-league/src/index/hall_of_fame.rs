use std::collections::{BTreeSet, HashMap};

use crate::{HallOfFameEvent, Player, PlayerId, TeamSeason};

/// `HallOfFamers` and `HofTeamSeason`.
///
/// Membership comes from the player flag or an induction event. Every
/// (season, team) a member actually played a game for is indexed.
#[derive(Debug, Clone, Default)]
pub struct HallOfFameIndex {
    members: BTreeSet<PlayerId>,
    by_team_season: HashMap<TeamSeason, BTreeSet<PlayerId>>,
}

impl HallOfFameIndex {
    #[must_use]
    pub fn build(players: &[Player], events: &[HallOfFameEvent]) -> Self {
        let members = players
            .iter()
            .filter(|player| player.hall_of_fame)
            .map(|player| player.id)
            .chain(events.iter().map(|event| event.player_id))
            .collect::<BTreeSet<_>>();

        let mut by_team_season = HashMap::<TeamSeason, BTreeSet<PlayerId>>::new();
        for player in players.iter().filter(|p| members.contains(&p.id)) {
            for row in player.seasons.iter().filter(|r| r.stats.games_played > 0) {
                by_team_season
                    .entry(TeamSeason::new(row.season, row.team_id))
                    .or_default()
                    .insert(player.id);
            }
        }

        Self {
            members,
            by_team_season,
        }
    }

    #[must_use]
    pub fn is_member(&self, player: PlayerId) -> bool {
        self.members.contains(&player)
    }

    #[must_use]
    pub fn members(&self) -> &BTreeSet<PlayerId> {
        &self.members
    }

    #[must_use]
    pub fn members_in(&self, key: TeamSeason) -> Option<&BTreeSet<PlayerId>> {
        self.by_team_season.get(&key)
    }
}
