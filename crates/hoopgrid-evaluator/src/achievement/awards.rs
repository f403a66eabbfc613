use hoopgrid_league::{AwardKind, LeagueIndices, Player};

use super::{Achievement, AchievementCategory, BoxedAchievement, EvaluationError};

#[must_use]
pub fn all() -> Vec<BoxedAchievement> {
    vec![
        // individual awards
        Box::new(WonAward::individual("mvp", "MVP", AwardKind::Mvp)),
        Box::new(WonAward::individual(
            "finals_mvp",
            "Finals MVP",
            AwardKind::FinalsMvp,
        )),
        Box::new(WonAward::individual(
            "dpoy",
            "Defensive Player of the Year",
            AwardKind::Dpoy,
        )),
        Box::new(WonAward::individual(
            "roy",
            "Rookie of the Year",
            AwardKind::Roy,
        )),
        Box::new(WonAward::individual(
            "smoy",
            "Sixth Man of the Year",
            AwardKind::Smoy,
        )),
        Box::new(WonAward::individual(
            "mip",
            "Most Improved Player",
            AwardKind::Mip,
        )),
        // team honors
        Box::new(WonAward::team_honor(
            "all_league",
            "All-League Team",
            AwardKind::AllLeague,
        )),
        Box::new(WonAward::team_honor(
            "all_defensive",
            "All-Defensive Team",
            AwardKind::AllDefensive,
        )),
    ]
}

/// Won `kind` at least once.
#[derive(Debug, Clone)]
pub struct WonAward {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: AwardKind,
    pub category: AchievementCategory,
}

impl WonAward {
    #[must_use]
    pub const fn individual(id: &'static str, label: &'static str, kind: AwardKind) -> Self {
        Self {
            id,
            label,
            kind,
            category: AchievementCategory::Award,
        }
    }

    #[must_use]
    pub const fn team_honor(id: &'static str, label: &'static str, kind: AwardKind) -> Self {
        Self {
            id,
            label,
            kind,
            category: AchievementCategory::TeamHonor,
        }
    }
}

impl Achievement for WonAward {
    fn id(&self) -> &'static str {
        self.id
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn category(&self) -> AchievementCategory {
        self.category
    }

    fn clone_boxed(&self) -> BoxedAchievement {
        Box::new(self.clone())
    }

    fn check(&self, player: &Player, indices: &LeagueIndices) -> Result<bool, EvaluationError> {
        Ok(indices.awards.has_won(player.id, self.kind))
    }
}

#[cfg(test)]
mod tests {
    use hoopgrid_league::{Award, AwardTeam, AwardWinner, LeagueDocument, PlayerId, SeasonAwards};

    use super::*;
    use crate::testing::{indices, player};

    #[test]
    fn test_award_tables_and_player_lists_both_count() {
        let mut listed = player(1);
        listed.awards = vec![Award {
            kind: AwardKind::Mvp,
            season: 2001,
        }];
        let document = LeagueDocument {
            players: vec![listed, player(2), player(3)],
            awards_by_season: vec![SeasonAwards {
                season: 2002,
                mvp: Some(AwardWinner {
                    player_id: PlayerId(2),
                    team_id: None,
                }),
                all_defensive: vec![AwardTeam {
                    title: "First Team All-Defensive".to_string(),
                    players: vec![AwardWinner {
                        player_id: PlayerId(3),
                        team_id: None,
                    }],
                }],
                ..SeasonAwards::default()
            }],
            ..LeagueDocument::default()
        };
        let indices = indices(&document);
        let achievements = all();
        let mvp = &achievements[0];
        let all_defensive = achievements
            .iter()
            .find(|a| a.id() == "all_defensive")
            .unwrap();

        assert!(mvp.check(&document.players[0], &indices).unwrap());
        assert!(mvp.check(&document.players[1], &indices).unwrap());
        assert!(!mvp.check(&document.players[2], &indices).unwrap());
        assert!(all_defensive.check(&document.players[2], &indices).unwrap());
        assert_eq!(all_defensive.category(), AchievementCategory::TeamHonor);
    }
}
