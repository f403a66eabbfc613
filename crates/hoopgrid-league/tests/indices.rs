use hoopgrid_league::{
    AdvancedLine, Draft, LeagueDocument, LeagueIndices, Player, PlayerId, SeasonGameCount,
    SeasonRow, StatLine, TeamId,
    index::{LEADER_TOLERANCE, StatKey},
};
use proptest::prelude::*;

fn player(id: u32, stints: Vec<(i32, u32, bool, u32, u32)>) -> Player {
    Player {
        id: PlayerId(id),
        name: format!("Player {id}"),
        birth_year: Some(1970),
        draft: Draft::default(),
        hall_of_fame: false,
        seasons: stints
            .into_iter()
            .map(|(season, team, playoffs, games, points)| SeasonRow {
                season,
                team_id: TeamId(team),
                playoffs,
                stats: StatLine {
                    games_played: games,
                    minutes: f64::from(games) * 30.0,
                    points,
                    ..StatLine::default()
                },
                advanced: AdvancedLine::default(),
            })
            .collect(),
        awards: vec![],
    }
}

#[test]
fn document_round_trip_through_json_builds_indices() {
    let json = r#"{
        "players": [
            {"pid": 1, "name": "Star", "hallOfFame": true,
             "seasons": [{"season": 2000, "tid": 1, "gp": 70, "pts": 2100},
                         {"season": 2000, "tid": 1, "playoffFlag": true, "gp": 12, "pts": 400}]},
            {"pid": 2, "name": "Sidekick",
             "seasons": [{"season": 2000, "tid": 1, "gp": 80, "pts": 800}]}
        ],
        "teams": [{"tid": 1, "region": "Boston", "abbrev": "BOS"}],
        "allStarRostersBySeason": [{"season": 2000, "players": [1]}],
        "playoffBracketsBySeason": [{"season": 2000, "rounds": [[{"home": {"tid": 1, "won": 4}, "away": {"tid": 2, "won": 2}}]]}],
        "singleGameFeats": [{"pid": 1, "season": 2000, "pts": 52}]
    }"#;
    let document = LeagueDocument::from_json(json).unwrap();
    let indices = LeagueIndices::build(&document);

    let career = indices.career.get(PlayerId(1)).unwrap();
    assert_eq!(career.stats.points, 2100);
    assert_eq!(indices.champions.champion(2000), Some(TeamId(1)));
    assert!(indices.hall_of_fame.is_member(PlayerId(1)));
    assert_eq!(indices.all_stars.selection_count(PlayerId(1)), 1);
    assert_eq!(indices.feats.lines(PlayerId(1))[0].points, 52);
    assert!(indices.leaders.has_led(PlayerId(1), StatKey::Points));
    assert!(!indices.leaders.has_led(PlayerId(2), StatKey::Points));
}

#[test]
fn shortened_season_uses_its_own_threshold() {
    let document = LeagueDocument {
        players: vec![
            player(1, vec![(1999, 1, false, 29, 900)]),
            player(2, vec![(1999, 1, false, 28, 1000)]),
        ],
        season_game_counts: vec![SeasonGameCount {
            season: 1999,
            games: 50,
        }],
        ..LeagueDocument::default()
    };
    let indices = LeagueIndices::build(&document);
    let leaders = indices.leaders.leaders(1999, StatKey::Points).unwrap();
    assert!(leaders.contains(&PlayerId(1)));
    assert!(!leaders.contains(&PlayerId(2)));
}

proptest! {
    #[test]
    fn leaders_are_qualified_and_tied_for_max(
        lines in prop::collection::vec((0_u32..=82, 0_u32..=3000, 1_u32..=3), 1..40)
    ) {
        let players = lines
            .iter()
            .enumerate()
            .map(|(i, &(games, points, team))| {
                let id = u32::try_from(i).unwrap();
                player(id, vec![(2005, team, false, games, points)])
            })
            .collect::<Vec<_>>();
        let document = LeagueDocument { players, ..LeagueDocument::default() };
        let indices = LeagueIndices::build(&document);
        let threshold = indices.schedule.qualifying_games(2005);

        let qualified = lines
            .iter()
            .enumerate()
            .filter(|(_, (games, _, _))| *games >= threshold)
            .map(|(i, &(games, points, _))| (i, f64::from(points) / f64::from(games)))
            .collect::<Vec<_>>();
        let max = qualified.iter().map(|(_, rate)| *rate).fold(0.0_f64, f64::max);

        match indices.leaders.leaders(2005, StatKey::Points) {
            None => prop_assert!(max <= 0.0),
            Some(leaders) => {
                for (i, rate) in &qualified {
                    let id = PlayerId(u32::try_from(*i).unwrap());
                    let tied = *rate >= max - LEADER_TOLERANCE;
                    prop_assert_eq!(leaders.contains(&id), tied);
                }
                for id in leaders {
                    let (games, _, _) = lines[id.0 as usize];
                    prop_assert!(games >= threshold);
                }
            }
        }
    }
}
