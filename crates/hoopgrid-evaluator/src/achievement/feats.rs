use hoopgrid_league::{LeagueIndices, Player, index::FeatLine};

use super::{Achievement, AchievementCategory, BoxedAchievement, EvaluationError};

#[must_use]
pub fn all() -> Vec<BoxedAchievement> {
    vec![
        Box::new(GameFeat {
            id: "game_50_points",
            label: "50+ Points in a Game",
            test: |line| line.points >= 50,
        }),
        Box::new(GameFeat {
            id: "game_20_rebounds",
            label: "20+ Rebounds in a Game",
            test: |line| line.rebounds >= 20,
        }),
        Box::new(GameFeat {
            id: "game_20_assists",
            label: "20+ Assists in a Game",
            test: |line| line.assists >= 20,
        }),
        Box::new(GameFeat {
            id: "game_10_blocks",
            label: "10+ Blocks in a Game",
            test: |line| line.blocks >= 10,
        }),
        Box::new(GameFeat {
            id: "game_triple_double",
            label: "Triple-Double",
            test: FeatLine::is_triple_double,
        }),
    ]
}

/// Some recorded single-game line (regular season or playoffs) passes `test`.
#[derive(Debug, Clone)]
pub struct GameFeat {
    pub id: &'static str,
    pub label: &'static str,
    pub test: fn(&FeatLine) -> bool,
}

impl Achievement for GameFeat {
    fn id(&self) -> &'static str {
        self.id
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn category(&self) -> AchievementCategory {
        AchievementCategory::Feat
    }

    fn clone_boxed(&self) -> BoxedAchievement {
        Box::new(self.clone())
    }

    fn check(&self, player: &Player, indices: &LeagueIndices) -> Result<bool, EvaluationError> {
        Ok(indices.feats.any(player.id, self.test))
    }
}
