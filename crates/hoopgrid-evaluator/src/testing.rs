use hoopgrid_league::{
    AdvancedLine, Draft, LeagueDocument, LeagueIndices, Player, PlayerId, Season, SeasonRow,
    StatLine, TeamId,
};

pub(crate) fn player(id: u32) -> Player {
    Player {
        id: PlayerId(id),
        name: format!("Player {id}"),
        birth_year: Some(1980),
        draft: Draft::default(),
        hall_of_fame: false,
        seasons: vec![],
        awards: vec![],
    }
}

pub(crate) fn stint(season: Season, team: u32, stats: StatLine) -> SeasonRow {
    SeasonRow {
        season,
        team_id: TeamId(team),
        playoffs: false,
        stats,
        advanced: AdvancedLine::default(),
    }
}

pub(crate) fn games(games_played: u32) -> StatLine {
    StatLine {
        games_played,
        minutes: f64::from(games_played) * 30.0,
        ..StatLine::default()
    }
}

pub(crate) fn indices(document: &LeagueDocument) -> LeagueIndices {
    LeagueIndices::build(document)
}

pub(crate) fn document(players: Vec<Player>) -> LeagueDocument {
    LeagueDocument {
        players,
        ..LeagueDocument::default()
    }
}
