use serde::{Deserialize, Serialize};

use crate::{PlayerId, Season, TeamId};

/// League-wide award results for one season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonAwards {
    pub season: Season,
    #[serde(default)]
    pub mvp: Option<AwardWinner>,
    #[serde(default)]
    pub finals_mvp: Option<AwardWinner>,
    #[serde(default)]
    pub dpoy: Option<AwardWinner>,
    #[serde(default)]
    pub roy: Option<AwardWinner>,
    #[serde(default)]
    pub smoy: Option<AwardWinner>,
    #[serde(default)]
    pub mip: Option<AwardWinner>,
    #[serde(default)]
    pub all_league: Vec<AwardTeam>,
    #[serde(default)]
    pub all_defensive: Vec<AwardTeam>,
    #[serde(default)]
    pub all_rookie: Vec<AwardTeam>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardWinner {
    #[serde(alias = "pid")]
    pub player_id: PlayerId,
    #[serde(default, alias = "tid")]
    pub team_id: Option<TeamId>,
}

/// A multi-player honor such as "First Team All-League".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardTeam {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub players: Vec<AwardWinner>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllStarRoster {
    pub season: Season,
    #[serde(default, alias = "players")]
    pub player_ids: Vec<PlayerId>,
}

/// Playoff bracket for one season. `rounds[i]` lists the series of round `i`;
/// the last round is the finals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoffBracket {
    pub season: Season,
    #[serde(default, alias = "series")]
    pub rounds: Vec<Vec<PlayoffSeries>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoffSeries {
    pub home: SeriesSide,
    pub away: SeriesSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSide {
    #[serde(alias = "tid")]
    pub team_id: TeamId,
    #[serde(default, alias = "won")]
    pub wins: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HallOfFameEvent {
    #[serde(alias = "pid")]
    pub player_id: PlayerId,
    #[serde(default)]
    pub season: Option<Season>,
}

/// A single-game performance line.
///
/// Sources disagree on field names; the aliases cover the spellings seen in
/// box-score exports and event logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleGameFeat {
    #[serde(alias = "pid")]
    pub player_id: PlayerId,
    #[serde(default)]
    pub season: Season,
    #[serde(default, alias = "tid")]
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub playoffs: bool,
    #[serde(default, alias = "pts")]
    pub points: u32,
    #[serde(default, alias = "trb", alias = "reb")]
    pub rebounds: u32,
    #[serde(default, alias = "ast")]
    pub assists: u32,
    #[serde(default, alias = "stl")]
    pub steals: u32,
    #[serde(default, alias = "blk")]
    pub blocks: u32,
    #[serde(default, alias = "tp", alias = "madeThrees")]
    pub threes: u32,
}

/// Number of regular-season games scheduled in a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonGameCount {
    pub season: Season,
    #[serde(alias = "numGames")]
    pub games: u32,
}
