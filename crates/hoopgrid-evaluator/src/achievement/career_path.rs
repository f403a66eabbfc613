//! Career length, draft slot and roster stability.

use hoopgrid_league::{Draft, LeagueIndices, Player};

use super::{Achievement, AchievementCategory, BoxedAchievement, EvaluationError};

pub const LONG_CAREER_SEASONS: usize = 15;

#[must_use]
pub fn all() -> Vec<BoxedAchievement> {
    vec![
        Box::new(LongCareer),
        Box::new(DraftSlot::FirstOverall),
        Box::new(DraftSlot::FirstRound),
        Box::new(DraftSlot::SecondRound),
        Box::new(DraftSlot::Undrafted),
        Box::new(OneTeam),
    ]
}

/// At least [`LONG_CAREER_SEASONS`] distinct seasons with a regular-season game.
#[derive(Debug, Clone)]
pub struct LongCareer;

impl Achievement for LongCareer {
    fn id(&self) -> &'static str {
        "played_15_seasons"
    }

    fn label(&self) -> &'static str {
        "Played 15+ Seasons"
    }

    fn category(&self) -> AchievementCategory {
        AchievementCategory::CareerPath
    }

    fn clone_boxed(&self) -> BoxedAchievement {
        Box::new(self.clone())
    }

    fn check(&self, player: &Player, indices: &LeagueIndices) -> Result<bool, EvaluationError> {
        Ok(indices
            .seasons
            .get(player.id)
            .is_some_and(|history| history.played_seasons() >= LONG_CAREER_SEASONS))
    }
}

/// Draft position predicates.
///
/// Round 0 means undrafted, so `FirstOverall` implies `FirstRound` and
/// `Undrafted` excludes every drafted slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftSlot {
    FirstOverall,
    FirstRound,
    SecondRound,
    Undrafted,
}

impl DraftSlot {
    #[must_use]
    pub const fn matches(self, draft: &Draft) -> bool {
        match self {
            DraftSlot::FirstOverall => draft.is_first_overall(),
            DraftSlot::FirstRound => draft.round == 1,
            DraftSlot::SecondRound => draft.round == 2,
            DraftSlot::Undrafted => draft.is_undrafted(),
        }
    }
}

impl Achievement for DraftSlot {
    fn id(&self) -> &'static str {
        match self {
            DraftSlot::FirstOverall => "first_overall_pick",
            DraftSlot::FirstRound => "first_round_pick",
            DraftSlot::SecondRound => "second_round_pick",
            DraftSlot::Undrafted => "undrafted",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DraftSlot::FirstOverall => "#1 Overall Draft Pick",
            DraftSlot::FirstRound => "First Round Pick",
            DraftSlot::SecondRound => "Second Round Pick",
            DraftSlot::Undrafted => "Undrafted Player",
        }
    }

    fn category(&self) -> AchievementCategory {
        AchievementCategory::CareerPath
    }

    fn clone_boxed(&self) -> BoxedAchievement {
        Box::new(*self)
    }

    fn check(&self, player: &Player, _indices: &LeagueIndices) -> Result<bool, EvaluationError> {
        Ok(self.matches(&player.draft))
    }
}

/// Exactly one distinct team across every recorded game.
#[derive(Debug, Clone)]
pub struct OneTeam;

impl Achievement for OneTeam {
    fn id(&self) -> &'static str {
        "one_team_player"
    }

    fn label(&self) -> &'static str {
        "Played for Only One Team"
    }

    fn category(&self) -> AchievementCategory {
        AchievementCategory::Roster
    }

    fn clone_boxed(&self) -> BoxedAchievement {
        Box::new(self.clone())
    }

    fn check(&self, player: &Player, indices: &LeagueIndices) -> Result<bool, EvaluationError> {
        Ok(indices
            .seasons
            .get(player.id)
            .is_some_and(|history| history.teams().len() == 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{document, games, indices, player, stint};

    fn draft(round: u32, pick: u32) -> Draft {
        Draft {
            round,
            pick,
            ..Draft::default()
        }
    }

    #[test]
    fn test_draft_slots() {
        assert!(DraftSlot::FirstOverall.matches(&draft(1, 1)));
        assert!(DraftSlot::FirstRound.matches(&draft(1, 1)));
        assert!(!DraftSlot::FirstOverall.matches(&draft(1, 2)));
        assert!(!DraftSlot::FirstOverall.matches(&draft(2, 1)));
        assert!(DraftSlot::SecondRound.matches(&draft(2, 1)));
        assert!(DraftSlot::Undrafted.matches(&Draft::default()));
        assert!(!DraftSlot::FirstRound.matches(&Draft::default()));
    }

    #[test]
    fn test_long_career_counts_distinct_seasons() {
        let mut veteran = player(1);
        veteran.seasons = (2000..2015).map(|s| stint(s, 1, games(50))).collect();
        let mut traded_often = player(2);
        traded_often.seasons = (2000..2014)
            .flat_map(|s| [stint(s, 1, games(20)), stint(s, 2, games(20))])
            .collect();
        let document = document(vec![veteran, traded_often]);
        let indices = indices(&document);
        assert!(LongCareer.check(&document.players[0], &indices).unwrap());
        assert!(!LongCareer.check(&document.players[1], &indices).unwrap());
        assert!(OneTeam.check(&document.players[0], &indices).unwrap());
        assert!(!OneTeam.check(&document.players[1], &indices).unwrap());
    }
}
