//! Single-season thresholds.
//!
//! Only qualified seasons count: games played must meet the 58% share of that
//! season's schedule. A traded player's stints are combined into one season
//! line before any rate is computed.

use hoopgrid_league::{
    LeagueIndices, Player, StatLine,
    index::{LEADER_TOLERANCE, SeasonLine, StatKey},
};

use super::{Achievement, AchievementCategory, BoxedAchievement, EvaluationError};

/// Minimum attempt volumes for the 50/40/90 club.
pub const MIN_FIELD_GOAL_ATTEMPTS: u32 = 300;
pub const MIN_THREE_POINT_ATTEMPTS: u32 = 82;
pub const MIN_FREE_THROW_ATTEMPTS: u32 = 125;

#[must_use]
pub fn all() -> Vec<BoxedAchievement> {
    vec![
        Box::new(SeasonRate {
            id: "season_30_ppg",
            label: "30+ PPG in a Season",
            stat: StatKey::Points,
            per_game: 30.0,
        }),
        Box::new(SeasonRate {
            id: "season_10_apg",
            label: "10+ APG in a Season",
            stat: StatKey::Assists,
            per_game: 10.0,
        }),
        Box::new(SeasonRate {
            id: "season_15_rpg",
            label: "15+ RPG in a Season",
            stat: StatKey::Rebounds,
            per_game: 15.0,
        }),
        Box::new(SeasonRate {
            id: "season_2_5_spg",
            label: "2.5+ SPG in a Season",
            stat: StatKey::Steals,
            per_game: 2.5,
        }),
        Box::new(SeasonRate {
            id: "season_3_bpg",
            label: "3+ BPG in a Season",
            stat: StatKey::Blocks,
            per_game: 3.0,
        }),
        Box::new(FiftyFortyNinety),
    ]
}

/// Per-game average of `stat` reaches `per_game` in some qualified season.
#[derive(Debug, Clone)]
pub struct SeasonRate {
    pub id: &'static str,
    pub label: &'static str,
    pub stat: StatKey,
    pub per_game: f64,
}

impl Achievement for SeasonRate {
    fn id(&self) -> &'static str {
        self.id
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn category(&self) -> AchievementCategory {
        AchievementCategory::Season
    }

    fn clone_boxed(&self) -> BoxedAchievement {
        Box::new(self.clone())
    }

    fn check(&self, player: &Player, indices: &LeagueIndices) -> Result<bool, EvaluationError> {
        Ok(any_qualified_line(player, indices, |line| {
            self.stat.per_game(&line.stats) >= self.per_game - LEADER_TOLERANCE
        }))
    }
}

/// 50% field goals, 40% threes and 90% free throws in one qualified season,
/// on enough attempts of each kind.
#[derive(Debug, Clone)]
pub struct FiftyFortyNinety;

impl FiftyFortyNinety {
    #[must_use]
    pub fn is_member_season(stats: &StatLine) -> bool {
        stats.fg_attempts >= MIN_FIELD_GOAL_ATTEMPTS
            && stats.three_attempts >= MIN_THREE_POINT_ATTEMPTS
            && stats.ft_attempts >= MIN_FREE_THROW_ATTEMPTS
            && stats.fg_pct() >= 0.5 - LEADER_TOLERANCE
            && stats.three_pct() >= 0.4 - LEADER_TOLERANCE
            && stats.ft_pct() >= 0.9 - LEADER_TOLERANCE
    }
}

impl Achievement for FiftyFortyNinety {
    fn id(&self) -> &'static str {
        "season_50_40_90"
    }

    fn label(&self) -> &'static str {
        "50/40/90 Club"
    }

    fn category(&self) -> AchievementCategory {
        AchievementCategory::Season
    }

    fn clone_boxed(&self) -> BoxedAchievement {
        Box::new(self.clone())
    }

    fn check(&self, player: &Player, indices: &LeagueIndices) -> Result<bool, EvaluationError> {
        Ok(any_qualified_line(player, indices, |line| {
            Self::is_member_season(&line.stats)
        }))
    }
}

fn any_qualified_line<F>(player: &Player, indices: &LeagueIndices, mut pred: F) -> bool
where
    F: FnMut(&SeasonLine) -> bool,
{
    indices
        .seasons
        .get(player.id)
        .is_some_and(|history| history.qualified_lines().any(|line| pred(line)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{document, games, indices, player, stint};

    fn shooter(fga: u32, tpa: u32, fta: u32) -> StatLine {
        StatLine {
            fg_attempts: fga,
            fg_made: fga / 2,
            three_attempts: tpa,
            made_threes: (tpa * 2).div_ceil(5),
            ft_attempts: fta,
            ft_made: (fta * 9).div_ceil(10),
            ..games(70)
        }
    }

    #[test]
    fn test_rate_needs_qualified_season() {
        let mut short = player(1);
        short.seasons = vec![stint(
            2000,
            1,
            StatLine {
                points: 40 * 30,
                ..games(40)
            },
        )];
        let mut full = player(2);
        full.seasons = vec![stint(
            2000,
            1,
            StatLine {
                points: 60 * 30,
                ..games(60)
            },
        )];
        let document = document(vec![short, full]);
        let indices = indices(&document);
        let ppg = &all()[0];
        assert!(!ppg.check(&document.players[0], &indices).unwrap());
        assert!(ppg.check(&document.players[1], &indices).unwrap());
    }

    #[test]
    fn test_traded_player_stints_combine_for_qualification() {
        let mut traded = player(1);
        traded.seasons = vec![
            stint(
                2000,
                1,
                StatLine {
                    blocks: 30 * 3,
                    ..games(30)
                },
            ),
            stint(
                2000,
                2,
                StatLine {
                    blocks: 30 * 3,
                    ..games(30)
                },
            ),
        ];
        let document = document(vec![traded]);
        let indices = indices(&document);
        let bpg = all().into_iter().find(|a| a.id() == "season_3_bpg").unwrap();
        assert!(bpg.check(&document.players[0], &indices).unwrap());
    }

    #[test]
    fn test_fifty_forty_ninety_requires_volume() {
        assert!(FiftyFortyNinety::is_member_season(&shooter(300, 82, 125)));
        assert!(!FiftyFortyNinety::is_member_season(&shooter(299, 82, 125)));
        assert!(!FiftyFortyNinety::is_member_season(&shooter(300, 81, 125)));
        assert!(!FiftyFortyNinety::is_member_season(&shooter(300, 82, 124)));
    }

    #[test]
    fn test_fifty_forty_ninety_rejects_low_percentages() {
        let stats = StatLine {
            ft_made: 100,
            ..shooter(400, 100, 125)
        };
        assert!(!FiftyFortyNinety::is_member_season(&stats));
    }
}
