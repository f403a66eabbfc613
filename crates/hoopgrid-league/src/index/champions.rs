use std::collections::BTreeMap;

use tracing::warn;

use crate::{PlayoffBracket, PlayoffSeries, Season, TeamId};

/// Wins needed to take a playoff series.
pub const SERIES_WINS_TO_CLINCH: u32 = 4;

/// `Champions[season]`: the title winner of each season with a resolvable bracket.
#[derive(Debug, Clone, Default)]
pub struct ChampionIndex {
    by_season: BTreeMap<Season, TeamId>,
}

impl ChampionIndex {
    #[must_use]
    pub fn build(brackets: &[PlayoffBracket]) -> Self {
        let mut by_season = BTreeMap::new();
        for bracket in brackets {
            match resolve_champion(bracket) {
                Some(team) => {
                    by_season.insert(bracket.season, team);
                }
                None => warn!(season = bracket.season, "could not resolve champion"),
            }
        }
        Self { by_season }
    }

    #[must_use]
    pub fn champion(&self, season: Season) -> Option<TeamId> {
        self.by_season.get(&season).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Season, TeamId)> + '_ {
        self.by_season.iter().map(|(season, team)| (*season, *team))
    }
}

/// Resolves the champion from the final round: the first series in which a
/// side reached [`SERIES_WINS_TO_CLINCH`]. When no side clinched and the final
/// round holds a lone series, the side with more wins takes it.
#[must_use]
pub fn resolve_champion(bracket: &PlayoffBracket) -> Option<TeamId> {
    let final_round = bracket.rounds.iter().rev().find(|round| !round.is_empty())?;
    if let Some(team) = final_round.iter().find_map(clinched_by) {
        return Some(team);
    }
    match final_round.as_slice() {
        [series] => leader_of(series),
        _ => None,
    }
}

fn clinched_by(series: &PlayoffSeries) -> Option<TeamId> {
    if series.home.wins >= SERIES_WINS_TO_CLINCH {
        Some(series.home.team_id)
    } else if series.away.wins >= SERIES_WINS_TO_CLINCH {
        Some(series.away.team_id)
    } else {
        None
    }
}

fn leader_of(series: &PlayoffSeries) -> Option<TeamId> {
    match series.home.wins.cmp(&series.away.wins) {
        std::cmp::Ordering::Greater => Some(series.home.team_id),
        std::cmp::Ordering::Less => Some(series.away.team_id),
        std::cmp::Ordering::Equal => None,
    }
}
