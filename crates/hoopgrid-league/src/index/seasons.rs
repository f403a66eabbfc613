use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::SeasonSchedule;
use crate::{Player, PlayerId, Season, StatLine, TeamId, TeamSeason};

/// A player's regular-season line for one season, with all stints combined.
#[derive(Debug, Clone, Copy)]
pub struct SeasonLine {
    pub season: Season,
    pub stats: StatLine,
    /// Whether games played meets the schedule's qualification threshold.
    pub qualified: bool,
}

/// Per-player season history.
#[derive(Debug, Clone, Default)]
pub struct PlayerSeasons {
    lines: BTreeMap<Season, SeasonLine>,
    team_seasons: BTreeSet<TeamSeason>,
}

impl PlayerSeasons {
    fn from_player(player: &Player, schedule: &SeasonSchedule) -> Self {
        let lines = combine_regular_season_stints(player)
            .into_iter()
            .map(|(season, stats)| {
                let qualified = schedule.is_qualified(season, stats.games_played);
                (
                    season,
                    SeasonLine {
                        season,
                        stats,
                        qualified,
                    },
                )
            })
            .collect();
        let team_seasons = player
            .seasons
            .iter()
            .filter(|row| row.stats.games_played > 0)
            .map(|row| TeamSeason::new(row.season, row.team_id))
            .collect();
        Self {
            lines,
            team_seasons,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &SeasonLine> + '_ {
        self.lines.values()
    }

    pub fn qualified_lines(&self) -> impl Iterator<Item = &SeasonLine> + '_ {
        self.lines.values().filter(|line| line.qualified)
    }

    /// Every (season, team) with at least one game, regular season or playoffs.
    #[must_use]
    pub fn team_seasons(&self) -> &BTreeSet<TeamSeason> {
        &self.team_seasons
    }

    #[must_use]
    pub fn teams(&self) -> BTreeSet<TeamId> {
        self.team_seasons.iter().map(|key| key.team).collect()
    }

    /// Distinct seasons with at least one regular-season game.
    #[must_use]
    pub fn played_seasons(&self) -> usize {
        self.lines
            .values()
            .filter(|line| line.stats.games_played > 0)
            .count()
    }

    #[must_use]
    pub fn played_for_in(&self, season: Season, team: TeamId) -> bool {
        self.team_seasons.contains(&TeamSeason::new(season, team))
    }
}

/// Sums a player's regular-season stints per season.
pub(crate) fn combine_regular_season_stints(player: &Player) -> BTreeMap<Season, StatLine> {
    let mut by_season = BTreeMap::<Season, StatLine>::new();
    for row in player.regular_season_rows() {
        *by_season.entry(row.season).or_default() += &row.stats;
    }
    by_season
}

#[derive(Debug, Clone, Default)]
pub struct SeasonIndex {
    players: HashMap<PlayerId, PlayerSeasons>,
}

impl SeasonIndex {
    #[must_use]
    pub fn build(players: &[Player], schedule: &SeasonSchedule) -> Self {
        let players = players
            .iter()
            .map(|player| (player.id, PlayerSeasons::from_player(player, schedule)))
            .collect();
        Self { players }
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&PlayerSeasons> {
        self.players.get(&player)
    }

    /// Distinct seasons appearing anywhere in the history.
    #[must_use]
    pub fn seasons(&self) -> BTreeSet<Season> {
        self.players
            .values()
            .flat_map(|history| history.team_seasons.iter().map(|key| key.season))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdvancedLine, Draft, SeasonRow};

    fn stint(season: Season, team: u32, playoffs: bool, games: u32) -> SeasonRow {
        SeasonRow {
            season,
            team_id: TeamId(team),
            playoffs,
            stats: StatLine {
                games_played: games,
                points: games * 10,
                ..StatLine::default()
            },
            advanced: AdvancedLine::default(),
        }
    }

    fn player(seasons: Vec<SeasonRow>) -> Player {
        Player {
            id: PlayerId(7),
            name: "Journeyman".to_string(),
            birth_year: Some(1970),
            draft: Draft::default(),
            hall_of_fame: false,
            seasons,
            awards: vec![],
        }
    }

    #[test]
    fn test_stints_combine_for_qualification() {
        // 30 + 20 games only qualifies once the two stints are combined.
        let player = player(vec![stint(1995, 1, false, 30), stint(1995, 2, false, 20)]);
        let history = PlayerSeasons::from_player(&player, &SeasonSchedule::default());
        let lines = history.qualified_lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].stats.games_played, 50);
        assert_eq!(lines[0].stats.points, 500);
        assert_eq!(history.teams().len(), 2);
    }

    #[test]
    fn test_zero_game_rows_do_not_count_as_stints() {
        let player = player(vec![stint(1995, 1, false, 60), stint(1995, 3, false, 0)]);
        let history = PlayerSeasons::from_player(&player, &SeasonSchedule::default());
        assert!(history.played_for_in(1995, TeamId(1)));
        assert!(!history.played_for_in(1995, TeamId(3)));
    }

    #[test]
    fn test_playoff_rows_count_for_team_seasons_only() {
        let player = player(vec![stint(1995, 1, false, 60), stint(1996, 1, true, 5)]);
        let history = PlayerSeasons::from_player(&player, &SeasonSchedule::default());
        assert!(history.played_for_in(1996, TeamId(1)));
        assert_eq!(history.played_seasons(), 1);
    }
}
