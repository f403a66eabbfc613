//! Career-total thresholds over regular-season [`CareerTotals`](hoopgrid_league::index::CareerTotals).

use hoopgrid_league::{LeagueIndices, Player, StatLine};

use super::{Achievement, AchievementCategory, BoxedAchievement, EvaluationError};

#[must_use]
pub fn all() -> Vec<BoxedAchievement> {
    vec![
        Box::new(CareerThreshold {
            id: "career_20k_points",
            label: "20,000+ Career Points",
            stat: CareerStat::Points,
            threshold: 20_000,
        }),
        Box::new(CareerThreshold {
            id: "career_10k_rebounds",
            label: "10,000+ Career Rebounds",
            stat: CareerStat::Rebounds,
            threshold: 10_000,
        }),
        Box::new(CareerThreshold {
            id: "career_5k_assists",
            label: "5,000+ Career Assists",
            stat: CareerStat::Assists,
            threshold: 5_000,
        }),
        Box::new(CareerThreshold {
            id: "career_2k_steals",
            label: "2,000+ Career Steals",
            stat: CareerStat::Steals,
            threshold: 2_000,
        }),
        Box::new(CareerThreshold {
            id: "career_1500_blocks",
            label: "1,500+ Career Blocks",
            stat: CareerStat::Blocks,
            threshold: 1_500,
        }),
        Box::new(CareerThreshold {
            id: "career_2k_threes",
            label: "2,000+ Made Threes",
            stat: CareerStat::MadeThrees,
            threshold: 2_000,
        }),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareerStat {
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    MadeThrees,
}

impl CareerStat {
    #[must_use]
    pub const fn total(self, stats: &StatLine) -> u32 {
        match self {
            CareerStat::Points => stats.points,
            CareerStat::Rebounds => stats.rebounds(),
            CareerStat::Assists => stats.assists,
            CareerStat::Steals => stats.steals,
            CareerStat::Blocks => stats.blocks,
            CareerStat::MadeThrees => stats.made_threes,
        }
    }
}

/// Career total of `stat` reaches `threshold`.
///
/// A player absent from the career index (no regular-season rows) has a
/// zero total and fails every threshold.
#[derive(Debug, Clone)]
pub struct CareerThreshold {
    pub id: &'static str,
    pub label: &'static str,
    pub stat: CareerStat,
    pub threshold: u32,
}

impl Achievement for CareerThreshold {
    fn id(&self) -> &'static str {
        self.id
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn category(&self) -> AchievementCategory {
        AchievementCategory::Career
    }

    fn clone_boxed(&self) -> BoxedAchievement {
        Box::new(self.clone())
    }

    fn check(&self, player: &Player, indices: &LeagueIndices) -> Result<bool, EvaluationError> {
        let total = indices
            .career
            .get(player.id)
            .map_or(0, |career| self.stat.total(&career.stats));
        Ok(total >= self.threshold)
    }
}
