use std::collections::BTreeSet;

use hoopgrid_evaluator::{
    Achievement, AchievementCategory, AchievementRegistry, BoxedAchievement, EligibilityResolver,
    EvaluationError, GridCriterion, achievement::career_path::DraftSlot,
};
use hoopgrid_league::{Draft, League, LeagueIndices, Player, PlayerId, TeamId};
use proptest::prelude::*;

use self::common::{document, player, row, team};

mod common;

#[test]
fn traded_player_is_eligible_for_both_teams() {
    // Season summaries sometimes list only the final team; the rows keep both stints.
    let traded = player(1, vec![row(2004, 1, 30), row(2004, 2, 25)]);
    let stayed = player(2, vec![row(2004, 1, 82)]);
    let league = League::new(document(vec![traded, stayed], &[1, 2]));
    let registry = AchievementRegistry::standard();
    let resolver = EligibilityResolver::new(&league, &registry);

    let first = GridCriterion::team(&team(1));
    let second = GridCriterion::team(&team(2));
    assert_eq!(
        resolver.resolve_cell(&first, &second),
        BTreeSet::from([PlayerId(1)])
    );

    let one_team = GridCriterion::achievement(registry.get("one_team_player").unwrap());
    assert_eq!(
        resolver.resolve_cell(&first, &one_team),
        BTreeSet::from([PlayerId(2)])
    );
}

#[test]
fn resolved_cell_is_intersection_of_criterion_sets() {
    let mut players = (1..=12)
        .map(|id| player(id, vec![row(2000, id % 3, 40), row(2001, (id + 1) % 3, 40)]))
        .collect::<Vec<_>>();
    players[0].draft = Draft {
        round: 1,
        pick: 1,
        ..Draft::default()
    };
    players[4].draft = Draft {
        round: 1,
        pick: 9,
        ..Draft::default()
    };
    let league = League::new(document(players, &[0, 1, 2]));
    let registry = AchievementRegistry::standard();
    let resolver = EligibilityResolver::new(&league, &registry);

    let criteria = [
        GridCriterion::team(&team(0)),
        GridCriterion::team(&team(1)),
        GridCriterion::achievement(registry.get("first_round_pick").unwrap()),
        GridCriterion::achievement(registry.get("undrafted").unwrap()),
    ];
    for row in &criteria {
        for col in &criteria {
            let expected = resolver
                .criterion_players(row)
                .intersection(&resolver.criterion_players(col))
                .copied()
                .collect::<BTreeSet<_>>();
            assert_eq!(resolver.resolve_cell(row, col), expected, "{row} x {col}");
        }
    }
}

/// Always fails, to check that faults are contained.
#[derive(Debug, Clone)]
struct Faulty;

impl Achievement for Faulty {
    fn id(&self) -> &'static str {
        "faulty"
    }

    fn label(&self) -> &'static str {
        "Faulty"
    }

    fn category(&self) -> AchievementCategory {
        AchievementCategory::Special
    }

    fn clone_boxed(&self) -> BoxedAchievement {
        Box::new(self.clone())
    }

    fn check(&self, player: &Player, _indices: &LeagueIndices) -> Result<bool, EvaluationError> {
        if player.id == PlayerId(2) {
            Err(EvaluationError::MissingBirthYear { player: player.id })
        } else {
            Ok(true)
        }
    }
}

#[test]
fn evaluation_faults_are_absorbed_per_player() {
    let players = (1..=3).map(|id| player(id, vec![row(2000, 1, 10)])).collect();
    let league = League::new(document(players, &[1]));
    let registry = AchievementRegistry::from_achievements(vec![Box::new(Faulty)]);
    let resolver = EligibilityResolver::new(&league, &registry);

    let criterion = GridCriterion::achievement(&Faulty);
    assert_eq!(
        resolver.criterion_players(&criterion),
        BTreeSet::from([PlayerId(1), PlayerId(3)])
    );
    assert_eq!(
        resolver.resolve_cell(&GridCriterion::team(&team(1)), &criterion),
        BTreeSet::from([PlayerId(1), PlayerId(3)])
    );
}

#[test]
fn catalog_lists_every_registered_achievement() {
    let registry = AchievementRegistry::standard();
    let catalog = registry.catalog();
    assert_eq!(catalog.len(), registry.len());
    assert!((35..=41).contains(&catalog.len()));
    assert!(
        catalog
            .iter()
            .any(|info| info.id == "season_50_40_90" && info.category == AchievementCategory::Season)
    );
}

#[test]
fn team_criterion_ignores_teams_without_games() {
    let league = League::new(document(vec![player(1, vec![row(2000, 1, 5)])], &[1, 2]));
    let registry = AchievementRegistry::standard();
    let resolver = EligibilityResolver::new(&league, &registry);
    let criterion = GridCriterion::Team {
        team_id: TeamId(2),
        label: "T2 City 2".to_string(),
    };
    assert!(resolver.criterion_players(&criterion).is_empty());
}

proptest! {
    #[test]
    fn draft_slot_implications_hold(round in 0_u32..=3, pick in 0_u32..=61) {
        let draft = Draft { round, pick, ..Draft::default() };
        if DraftSlot::FirstOverall.matches(&draft) {
            prop_assert!(DraftSlot::FirstRound.matches(&draft));
        }
        prop_assert!(!(DraftSlot::Undrafted.matches(&draft) && DraftSlot::FirstRound.matches(&draft)));
        prop_assert!(!(DraftSlot::Undrafted.matches(&draft) && DraftSlot::SecondRound.matches(&draft)));
    }

    #[test]
    fn draft_implications_hold_through_registry(round in 0_u32..=3, pick in 0_u32..=61) {
        let mut p = player(1, vec![row(2000, 1, 10)]);
        p.draft = Draft { round, pick, ..Draft::default() };
        let league = League::new(document(vec![p], &[1]));
        let registry = AchievementRegistry::standard();
        let resolver = EligibilityResolver::new(&league, &registry);
        let holds = |id: &str| {
            let criterion = GridCriterion::achievement(registry.get(id).unwrap());
            resolver.criterion_players(&criterion).contains(&PlayerId(1))
        };
        if holds("first_overall_pick") {
            prop_assert!(holds("first_round_pick"));
        }
        prop_assert!(!(holds("undrafted") && holds("first_round_pick")));
    }
}
