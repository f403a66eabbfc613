use serde::{Deserialize, Serialize};

/// Tunables for [`GridGenerator`](super::GridGenerator).
///
/// Missing fields in a JSON config take their default values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Random attempts before falling back to a pure team grid.
    pub max_attempts: usize,
    /// A team is usable only with at least this many players who played for it.
    pub min_team_players: usize,
    /// An achievement is usable only with at least this many satisfying players.
    pub min_achievement_players: usize,
    /// Fewer usable teams than this fails immediately.
    pub min_teams: usize,
    /// Usable teams needed for the pure-team fallback.
    pub fallback_teams: usize,
    pub fallback_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 200,
            min_team_players: 10,
            min_achievement_players: 2,
            min_teams: 3,
            fallback_teams: 6,
            fallback_attempts: 50,
        }
    }
}
