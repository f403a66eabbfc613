use hoopgrid_league::{Team, TeamId};
use serde::{Deserialize, Serialize};

use crate::{Achievement, AchievementId};

/// A row or column constraint of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GridCriterion {
    /// Played at least one game for the team.
    Team { team_id: TeamId, label: String },
    /// Satisfies the registered achievement.
    Achievement { id: AchievementId, label: String },
}

impl GridCriterion {
    #[must_use]
    pub fn team(team: &Team) -> Self {
        Self::Team {
            team_id: team.id,
            label: team.label(),
        }
    }

    #[must_use]
    pub fn achievement(achievement: &dyn Achievement) -> Self {
        Self::Achievement {
            id: AchievementId::from(achievement.id()),
            label: achievement.label().to_owned(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Team { label, .. } | Self::Achievement { label, .. } => label,
        }
    }
}

impl std::fmt::Display for GridCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
