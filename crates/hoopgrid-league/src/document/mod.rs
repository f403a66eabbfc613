//! Canonical in-memory league document.
//!
//! The document is produced by an upstream normalizer; this crate never sniffs
//! raw export formats. Deserialization is lenient about missing numeric fields
//! (they read as zero) but strict about the top-level `players` array, whose
//! absence is reported as [`DocumentError::MissingPlayers`].

use std::io::Read;

use serde::{Deserialize, Serialize};

pub use self::{history::*, player::*};

use crate::TeamId;

mod history;
mod player;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DocumentError {
    #[display("failed to parse league document: {_0}")]
    Parse(serde_json::Error),
    #[display("league document has no `players` array")]
    MissingPlayers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(alias = "tid")]
    pub id: TeamId,
    #[serde(default, alias = "region")]
    pub name: String,
    #[serde(default, alias = "abbreviation")]
    pub abbrev: String,
}

impl Team {
    /// Label shown on a grid axis, e.g. `"BOS Boston"`.
    #[must_use]
    pub fn label(&self) -> String {
        match (self.abbrev.is_empty(), self.name.is_empty()) {
            (false, false) => format!("{} {}", self.abbrev, self.name),
            (false, true) => self.abbrev.clone(),
            (true, false) => self.name.clone(),
            (true, true) => format!("Team {}", self.id),
        }
    }
}

/// The complete league history the core operates on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawLeagueDocument")]
pub struct LeagueDocument {
    pub players: Vec<Player>,
    pub teams: Vec<Team>,
    pub awards_by_season: Vec<SeasonAwards>,
    pub all_star_rosters_by_season: Vec<AllStarRoster>,
    pub playoff_brackets_by_season: Vec<PlayoffBracket>,
    pub hall_of_fame_events: Vec<HallOfFameEvent>,
    pub single_game_feats: Vec<SingleGameFeat>,
    pub season_game_counts: Vec<SeasonGameCount>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLeagueDocument {
    players: Option<Vec<Player>>,
    #[serde(default)]
    teams: Vec<Team>,
    #[serde(default, alias = "awards")]
    awards_by_season: Vec<SeasonAwards>,
    #[serde(default, alias = "allStars")]
    all_star_rosters_by_season: Vec<AllStarRoster>,
    #[serde(default, alias = "playoffSeries")]
    playoff_brackets_by_season: Vec<PlayoffBracket>,
    #[serde(default)]
    hall_of_fame_events: Vec<HallOfFameEvent>,
    #[serde(default)]
    single_game_feats: Vec<SingleGameFeat>,
    #[serde(default)]
    season_game_counts: Vec<SeasonGameCount>,
}

impl TryFrom<RawLeagueDocument> for LeagueDocument {
    type Error = DocumentError;

    fn try_from(raw: RawLeagueDocument) -> Result<Self, Self::Error> {
        let players = raw.players.ok_or(DocumentError::MissingPlayers)?;
        Ok(Self {
            players,
            teams: raw.teams,
            awards_by_season: raw.awards_by_season,
            all_star_rosters_by_season: raw.all_star_rosters_by_season,
            playoff_brackets_by_season: raw.playoff_brackets_by_season,
            hall_of_fame_events: raw.hall_of_fame_events,
            single_game_feats: raw.single_game_feats,
            season_game_counts: raw.season_game_counts,
        })
    }
}

impl LeagueDocument {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let raw: RawLeagueDocument = serde_json::from_str(json).map_err(DocumentError::Parse)?;
        raw.try_into()
    }

    pub fn from_reader<R>(reader: R) -> Result<Self, DocumentError>
    where
        R: Read,
    {
        let raw: RawLeagueDocument =
            serde_json::from_reader(reader).map_err(DocumentError::Parse)?;
        raw.try_into()
    }

    #[must_use]
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_players_is_fatal() {
        let err = LeagueDocument::from_json(r#"{"teams": []}"#).unwrap_err();
        assert!(matches!(err, DocumentError::MissingPlayers));
    }

    #[test]
    fn test_empty_players_is_accepted() {
        let doc = LeagueDocument::from_json(r#"{"players": []}"#).unwrap();
        assert!(doc.players.is_empty());
        assert!(doc.teams.is_empty());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = LeagueDocument::from_json("{").unwrap_err();
        assert!(matches!(err, DocumentError::Parse(_)));
    }

    #[test]
    fn test_serde_path_also_rejects_missing_players() {
        let result: Result<LeagueDocument, _> = serde_json::from_str(r#"{"teams": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_team_label() {
        let team = Team {
            id: TeamId(1),
            name: "Boston".to_string(),
            abbrev: "BOS".to_string(),
        };
        assert_eq!(team.label(), "BOS Boston");
    }
}
