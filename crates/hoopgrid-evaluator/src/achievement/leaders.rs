use hoopgrid_league::{LeagueIndices, Player, index::StatKey};

use super::{Achievement, AchievementCategory, BoxedAchievement, EvaluationError};

#[must_use]
pub fn all() -> Vec<BoxedAchievement> {
    vec![
        Box::new(LedLeague {
            id: "led_league_points",
            label: "Led League in Scoring",
            stat: StatKey::Points,
        }),
        Box::new(LedLeague {
            id: "led_league_rebounds",
            label: "Led League in Rebounds",
            stat: StatKey::Rebounds,
        }),
        Box::new(LedLeague {
            id: "led_league_assists",
            label: "Led League in Assists",
            stat: StatKey::Assists,
        }),
        Box::new(LedLeague {
            id: "led_league_steals",
            label: "Led League in Steals",
            stat: StatKey::Steals,
        }),
        Box::new(LedLeague {
            id: "led_league_blocks",
            label: "Led League in Blocks",
            stat: StatKey::Blocks,
        }),
    ]
}

/// Member of the season leader set for `stat` in at least one season.
///
/// Leader sets are tie-inclusive, so co-leaders all satisfy this.
#[derive(Debug, Clone)]
pub struct LedLeague {
    pub id: &'static str,
    pub label: &'static str,
    pub stat: StatKey,
}

impl Achievement for LedLeague {
    fn id(&self) -> &'static str {
        self.id
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn category(&self) -> AchievementCategory {
        AchievementCategory::Leadership
    }

    fn clone_boxed(&self) -> BoxedAchievement {
        Box::new(self.clone())
    }

    fn check(&self, player: &Player, indices: &LeagueIndices) -> Result<bool, EvaluationError> {
        Ok(indices.leaders.has_led(player.id, self.stat))
    }
}

#[cfg(test)]
mod tests {
    use hoopgrid_league::StatLine;

    use super::*;
    use crate::testing::{document, games, indices, player, stint};

    #[test]
    fn test_co_leaders_both_satisfy() {
        let players = (1..=3)
            .map(|id| {
                let mut p = player(id);
                let assists = if id == 3 { 500 } else { 700 };
                p.seasons = vec![stint(
                    2010,
                    id,
                    StatLine {
                        assists,
                        ..games(70)
                    },
                )];
                p
            })
            .collect();
        let document = document(players);
        let indices = indices(&document);
        let led = all()
            .into_iter()
            .find(|a| a.id() == "led_league_assists")
            .unwrap();
        let results = document
            .players
            .iter()
            .map(|p| led.check(p, &indices).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(results, [true, true, false]);
    }
}
