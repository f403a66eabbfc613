use serde::{Deserialize, Serialize};

use crate::GRID_SIZE;

/// How many teams and achievements one axis (rows or columns) carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisMix {
    pub teams: usize,
    pub achievements: usize,
}

impl AxisMix {
    const fn new(teams: usize, achievements: usize) -> Self {
        debug_assert!(teams + achievements == GRID_SIZE);
        Self {
            teams,
            achievements,
        }
    }
}

/// Grid templates, named `<rows>_by_<cols>`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum GridShape {
    /// 3 teams × 3 teams.
    #[display("teams x teams")]
    PureTeams,
    /// 2 teams + 1 achievement on both axes.
    #[display("2T1A x 2T1A")]
    Mixed,
    /// 1 team + 2 achievements × 3 teams.
    #[display("1T2A x teams")]
    AchievementRows,
    /// 3 teams × 1 team + 2 achievements.
    #[display("teams x 1T2A")]
    AchievementCols,
    /// 1 team + 2 achievements on both axes.
    #[display("1T2A x 1T2A")]
    AchievementHeavy,
    /// 3 teams × 3 achievements.
    #[display("teams x achievements")]
    Generic,
}

/// Draw weights, in percent.
pub const SHAPE_WEIGHTS: [(GridShape, u32); 6] = [
    (GridShape::PureTeams, 2),
    (GridShape::Mixed, 23),
    (GridShape::AchievementRows, 25),
    (GridShape::AchievementCols, 25),
    (GridShape::AchievementHeavy, 23),
    (GridShape::Generic, 2),
];

impl GridShape {
    /// `(rows, cols)` composition.
    #[must_use]
    pub const fn axes(self) -> (AxisMix, AxisMix) {
        match self {
            GridShape::PureTeams => (AxisMix::new(3, 0), AxisMix::new(3, 0)),
            GridShape::Mixed => (AxisMix::new(2, 1), AxisMix::new(2, 1)),
            GridShape::AchievementRows => (AxisMix::new(1, 2), AxisMix::new(3, 0)),
            GridShape::AchievementCols => (AxisMix::new(3, 0), AxisMix::new(1, 2)),
            GridShape::AchievementHeavy => (AxisMix::new(1, 2), AxisMix::new(1, 2)),
            GridShape::Generic => (AxisMix::new(3, 0), AxisMix::new(0, 3)),
        }
    }

    #[must_use]
    pub const fn team_count(self) -> usize {
        let (rows, cols) = self.axes();
        rows.teams + cols.teams
    }

    #[must_use]
    pub const fn achievement_count(self) -> usize {
        let (rows, cols) = self.axes();
        rows.achievements + cols.achievements
    }

    /// Whether the shape can be filled from the available criteria.
    ///
    /// Achievements are never repeated. Teams are distinct when enough exist;
    /// otherwise each axis draws its teams independently, which needs at
    /// least as many teams as the larger axis.
    #[must_use]
    pub const fn is_feasible(self, teams: usize, achievements: usize) -> bool {
        let (rows, cols) = self.axes();
        let max_axis_teams = if rows.teams > cols.teams {
            rows.teams
        } else {
            cols.teams
        };
        achievements >= self.achievement_count() && teams >= max_axis_teams
    }

    /// Whether teams may appear on both axes for the given team count.
    #[must_use]
    pub const fn shares_teams(self, teams: usize) -> bool {
        teams < self.team_count()
    }
}
