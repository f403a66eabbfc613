use hoopgrid_league::{
    AdvancedLine, Draft, LeagueDocument, Player, PlayerId, Season, SeasonRow, StatLine, Team,
    TeamId,
};

pub fn player(id: u32, rows: Vec<SeasonRow>) -> Player {
    Player {
        id: PlayerId(id),
        name: format!("Player {id}"),
        birth_year: Some(1975),
        draft: Draft::default(),
        hall_of_fame: false,
        seasons: rows,
        awards: vec![],
    }
}

pub fn row(season: Season, team: u32, games_played: u32) -> SeasonRow {
    SeasonRow {
        season,
        team_id: TeamId(team),
        playoffs: false,
        stats: StatLine {
            games_played,
            minutes: f64::from(games_played) * 25.0,
            ..StatLine::default()
        },
        advanced: AdvancedLine::default(),
    }
}

pub fn team(id: u32) -> Team {
    Team {
        id: TeamId(id),
        name: format!("City {id}"),
        abbrev: format!("T{id}"),
    }
}

pub fn document(players: Vec<Player>, teams: &[u32]) -> LeagueDocument {
    LeagueDocument {
        players,
        teams: teams.iter().copied().map(team).collect(),
        ..LeagueDocument::default()
    }
}
