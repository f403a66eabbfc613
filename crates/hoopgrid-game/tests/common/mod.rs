use hoopgrid_league::{
    AdvancedLine, Draft, LeagueDocument, Player, PlayerId, SeasonRow, StatLine, Team, TeamId,
};

pub fn team(id: u32) -> Team {
    Team {
        id: TeamId(id),
        name: format!("City {id}"),
        abbrev: format!("T{id}"),
    }
}

/// A scoreless stint, so no statistical achievement is earned.
pub fn row(season: i32, team: u32) -> SeasonRow {
    SeasonRow {
        season,
        team_id: TeamId(team),
        playoffs: false,
        stats: StatLine {
            games_played: 40,
            minutes: 800.0,
            ..StatLine::default()
        },
        advanced: AdvancedLine::default(),
    }
}

/// Drafted in the third round: satisfies none of the draft achievements.
pub fn journeyman(id: u32, teams: &[u32]) -> Player {
    Player {
        id: PlayerId(id),
        name: format!("Player {id}"),
        birth_year: Some(1985),
        draft: Draft {
            round: 3,
            pick: 10,
            ..Draft::default()
        },
        hall_of_fame: false,
        seasons: teams
            .iter()
            .zip(2000..)
            .map(|(&team, season)| row(season, team))
            .collect(),
        awards: vec![],
    }
}

/// Eight teams; for every pair of teams, five players who played for both.
///
/// Draft slots and Hall-of-Fame flags vary with the player index so several
/// achievements are usable.
pub fn varied_league() -> LeagueDocument {
    let mut players = vec![];
    let mut next_id = 1;
    for a in 1..=8 {
        for b in (a + 1)..=8 {
            for _ in 0..5 {
                let mut player = journeyman(next_id, &[a, b]);
                player.draft = match next_id % 4 {
                    0 => Draft {
                        round: 1,
                        pick: 1 + next_id % 30,
                        ..Draft::default()
                    },
                    1 => Draft {
                        round: 2,
                        pick: 1 + next_id % 30,
                        ..Draft::default()
                    },
                    2 => Draft::default(),
                    _ => player.draft,
                };
                player.hall_of_fame = next_id % 7 == 0;
                players.push(player);
                next_id += 1;
            }
        }
    }
    LeagueDocument {
        players,
        teams: (1..=8).map(team).collect(),
        ..LeagueDocument::default()
    }
}
