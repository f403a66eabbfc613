use std::collections::BTreeMap;

use crate::{LeagueDocument, Season};

/// Games per regular season when the document does not say otherwise.
pub const DEFAULT_SEASON_GAMES: u32 = 82;

/// Share of the schedule (in percent) a player must appear in for a season to
/// count toward rate achievements and league-leader tables.
pub const QUALIFYING_PERCENT: u32 = 58;

/// Season length lookup feeding every rate threshold.
#[derive(Debug, Clone, Default)]
pub struct SeasonSchedule {
    games: BTreeMap<Season, u32>,
}

impl SeasonSchedule {
    #[must_use]
    pub fn from_document(document: &LeagueDocument) -> Self {
        let games = document
            .season_game_counts
            .iter()
            .filter(|count| count.games > 0)
            .map(|count| (count.season, count.games))
            .collect();
        Self { games }
    }

    #[must_use]
    pub fn games_in_season(&self, season: Season) -> u32 {
        self.games
            .get(&season)
            .copied()
            .unwrap_or(DEFAULT_SEASON_GAMES)
    }

    /// `ceil(0.58 × games_in_season)`, computed in integers. Saturates for
    /// absurd game counts.
    #[must_use]
    pub fn qualifying_games(&self, season: Season) -> u32 {
        self.games_in_season(season)
            .saturating_mul(QUALIFYING_PERCENT)
            .div_ceil(100)
    }

    #[must_use]
    pub fn is_qualified(&self, season: Season, games_played: u32) -> bool {
        games_played >= self.qualifying_games(season)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeasonGameCount;

    #[test]
    fn test_default_schedule() {
        let schedule = SeasonSchedule::default();
        assert_eq!(schedule.games_in_season(1990), 82);
        // 0.58 * 82 = 47.56
        assert_eq!(schedule.qualifying_games(1990), 48);
        assert!(schedule.is_qualified(1990, 48));
        assert!(!schedule.is_qualified(1990, 47));
    }

    #[test]
    fn test_shortened_season() {
        let document = LeagueDocument {
            season_game_counts: vec![
                SeasonGameCount {
                    season: 1999,
                    games: 50,
                },
                SeasonGameCount {
                    season: 2012,
                    games: 66,
                },
            ],
            ..LeagueDocument::default()
        };
        let schedule = SeasonSchedule::from_document(&document);
        assert_eq!(schedule.qualifying_games(1999), 29);
        // 0.58 * 66 = 38.28
        assert_eq!(schedule.qualifying_games(2012), 39);
        assert_eq!(schedule.qualifying_games(2013), 48);
    }

    #[test]
    fn test_oversized_game_count_saturates() {
        let document = LeagueDocument {
            season_game_counts: vec![SeasonGameCount {
                season: 2001,
                games: u32::MAX,
            }],
            ..LeagueDocument::default()
        };
        let schedule = SeasonSchedule::from_document(&document);
        assert_eq!(schedule.qualifying_games(2001), u32::MAX.div_ceil(100));
        assert!(!schedule.is_qualified(2001, 82));
    }
}
