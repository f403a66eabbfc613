//! All-Star, championship and Hall-of-Fame facts.

use hoopgrid_league::{LeagueIndices, Player, index::PlayerSeasons};

use super::{Achievement, AchievementCategory, BoxedAchievement, EvaluationError};

/// Age (season year minus birth year) from which an All-Star selection
/// counts as a veteran selection.
pub const VETERAN_AGE: i32 = 35;

#[must_use]
pub fn all() -> Vec<BoxedAchievement> {
    vec![
        Box::new(AllStar),
        Box::new(VeteranAllStar),
        Box::new(Champion),
        Box::new(TeammateOfGreat),
        Box::new(HallOfFamer),
    ]
}

fn season_history<'a>(
    player: &Player,
    indices: &'a LeagueIndices,
) -> Result<&'a PlayerSeasons, EvaluationError> {
    indices
        .seasons
        .get(player.id)
        .ok_or(EvaluationError::MissingIndexEntry {
            player: player.id,
            index: "seasons",
        })
}

#[derive(Debug, Clone)]
pub struct AllStar;

impl Achievement for AllStar {
    fn id(&self) -> &'static str {
        "all_star"
    }

    fn label(&self) -> &'static str {
        "All-Star"
    }

    fn category(&self) -> AchievementCategory {
        AchievementCategory::Special
    }

    fn clone_boxed(&self) -> BoxedAchievement {
        Box::new(self.clone())
    }

    fn check(&self, player: &Player, indices: &LeagueIndices) -> Result<bool, EvaluationError> {
        Ok(indices.all_stars.selection_count(player.id) > 0)
    }
}

/// All-Star selection in a season where the player was at least [`VETERAN_AGE`].
///
/// Players never selected are rejected before the birth year is consulted,
/// so a missing birth year is only a fault for actual All-Stars.
#[derive(Debug, Clone)]
pub struct VeteranAllStar;

impl Achievement for VeteranAllStar {
    fn id(&self) -> &'static str {
        "all_star_age_35"
    }

    fn label(&self) -> &'static str {
        "All-Star at Age 35+"
    }

    fn category(&self) -> AchievementCategory {
        AchievementCategory::Special
    }

    fn clone_boxed(&self) -> BoxedAchievement {
        Box::new(self.clone())
    }

    fn check(&self, player: &Player, indices: &LeagueIndices) -> Result<bool, EvaluationError> {
        let mut selections = indices.all_stars.selections(player.id).peekable();
        if selections.peek().is_none() {
            return Ok(false);
        }
        let birth_year = player
            .birth_year
            .ok_or(EvaluationError::MissingBirthYear { player: player.id })?;
        Ok(selections.any(|season| season - birth_year >= VETERAN_AGE))
    }
}

/// Played at least one game, regular season or playoffs, for a season's champion.
#[derive(Debug, Clone)]
pub struct Champion;

impl Achievement for Champion {
    fn id(&self) -> &'static str {
        "champion"
    }

    fn label(&self) -> &'static str {
        "Won a Championship"
    }

    fn category(&self) -> AchievementCategory {
        AchievementCategory::Special
    }

    fn clone_boxed(&self) -> BoxedAchievement {
        Box::new(self.clone())
    }

    fn check(&self, player: &Player, indices: &LeagueIndices) -> Result<bool, EvaluationError> {
        let history = season_history(player, indices)?;
        Ok(indices
            .champions
            .iter()
            .any(|(season, team)| history.played_for_in(season, team)))
    }
}

/// Shared a team-season with a different Hall-of-Famer.
#[derive(Debug, Clone)]
pub struct TeammateOfGreat;

impl Achievement for TeammateOfGreat {
    fn id(&self) -> &'static str {
        "teammate_of_hall_of_famer"
    }

    fn label(&self) -> &'static str {
        "Teammate of a Hall of Famer"
    }

    fn category(&self) -> AchievementCategory {
        AchievementCategory::Special
    }

    fn clone_boxed(&self) -> BoxedAchievement {
        Box::new(self.clone())
    }

    fn check(&self, player: &Player, indices: &LeagueIndices) -> Result<bool, EvaluationError> {
        let history = season_history(player, indices)?;
        Ok(history.team_seasons().iter().any(|&key| {
            indices
                .hall_of_fame
                .members_in(key)
                .is_some_and(|members| members.iter().any(|&member| member != player.id))
        }))
    }
}

#[derive(Debug, Clone)]
pub struct HallOfFamer;

impl Achievement for HallOfFamer {
    fn id(&self) -> &'static str {
        "hall_of_fame"
    }

    fn label(&self) -> &'static str {
        "Hall of Famer"
    }

    fn category(&self) -> AchievementCategory {
        AchievementCategory::Special
    }

    fn clone_boxed(&self) -> BoxedAchievement {
        Box::new(self.clone())
    }

    fn check(&self, player: &Player, indices: &LeagueIndices) -> Result<bool, EvaluationError> {
        Ok(indices.hall_of_fame.is_member(player.id))
    }
}
