use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::{PlayerId, Season, TeamId};

/// A player record as produced by the upstream normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(alias = "pid")]
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub draft: Draft,
    #[serde(default)]
    pub hall_of_fame: bool,
    /// Season rows in league order; a traded player has one row per stint.
    #[serde(default, alias = "stats")]
    pub seasons: Vec<SeasonRow>,
    #[serde(default)]
    pub awards: Vec<Award>,
}

impl Player {
    /// Returns `true` if the player appeared in at least one game for `team`,
    /// counting every stint (regular season or playoffs).
    #[must_use]
    pub fn played_for(&self, team: TeamId) -> bool {
        self.seasons
            .iter()
            .any(|row| row.team_id == team && row.stats.games_played > 0)
    }

    /// Regular-season rows only.
    pub fn regular_season_rows(&self) -> impl Iterator<Item = &SeasonRow> + '_ {
        self.seasons.iter().filter(|row| !row.playoffs)
    }
}

/// Draft record. `round == 0` means the player went undrafted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub round: u32,
    pub pick: u32,
    pub team_id: Option<TeamId>,
    pub year: Option<Season>,
}

impl Draft {
    #[must_use]
    pub const fn is_undrafted(&self) -> bool {
        self.round == 0
    }

    #[must_use]
    pub const fn is_first_overall(&self) -> bool {
        self.round == 1 && self.pick == 1
    }
}

/// One stint: a (season, team, regular/playoff) line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRow {
    pub season: Season,
    #[serde(alias = "tid")]
    pub team_id: TeamId,
    #[serde(default, alias = "playoffFlag")]
    pub playoffs: bool,
    #[serde(flatten)]
    pub stats: StatLine,
    #[serde(flatten)]
    pub advanced: AdvancedLine,
}

/// Counting stats and shooting splits. Missing fields read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatLine {
    #[serde(alias = "gp")]
    pub games_played: u32,
    #[serde(alias = "min")]
    pub minutes: f64,
    #[serde(alias = "pts")]
    pub points: u32,
    #[serde(alias = "orb")]
    pub offensive_rebounds: u32,
    #[serde(alias = "drb")]
    pub defensive_rebounds: u32,
    #[serde(alias = "ast")]
    pub assists: u32,
    #[serde(alias = "stl")]
    pub steals: u32,
    #[serde(alias = "blk")]
    pub blocks: u32,
    #[serde(alias = "tp")]
    pub made_threes: u32,
    #[serde(alias = "tpa")]
    pub three_attempts: u32,
    #[serde(alias = "fg")]
    pub fg_made: u32,
    #[serde(alias = "fga")]
    pub fg_attempts: u32,
    #[serde(alias = "ft")]
    pub ft_made: u32,
    #[serde(alias = "fta")]
    pub ft_attempts: u32,
}

impl StatLine {
    #[must_use]
    pub const fn rebounds(&self) -> u32 {
        self.offensive_rebounds + self.defensive_rebounds
    }

    /// Per-game average of `total`; zero when no games were played.
    #[must_use]
    pub fn per_game(&self, total: u32) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(total) / f64::from(self.games_played)
        }
    }

    #[must_use]
    pub fn fg_pct(&self) -> f64 {
        ratio(self.fg_made, self.fg_attempts)
    }

    #[must_use]
    pub fn three_pct(&self) -> f64 {
        ratio(self.made_threes, self.three_attempts)
    }

    #[must_use]
    pub fn ft_pct(&self) -> f64 {
        ratio(self.ft_made, self.ft_attempts)
    }
}

fn ratio(made: u32, attempts: u32) -> f64 {
    if attempts == 0 {
        0.0
    } else {
        f64::from(made) / f64::from(attempts)
    }
}

impl AddAssign<&StatLine> for StatLine {
    fn add_assign(&mut self, rhs: &StatLine) {
        self.games_played += rhs.games_played;
        self.minutes += rhs.minutes;
        self.points += rhs.points;
        self.offensive_rebounds += rhs.offensive_rebounds;
        self.defensive_rebounds += rhs.defensive_rebounds;
        self.assists += rhs.assists;
        self.steals += rhs.steals;
        self.blocks += rhs.blocks;
        self.made_threes += rhs.made_threes;
        self.three_attempts += rhs.three_attempts;
        self.fg_made += rhs.fg_made;
        self.fg_attempts += rhs.fg_attempts;
        self.ft_made += rhs.ft_made;
        self.ft_attempts += rhs.ft_attempts;
    }
}

/// Advanced per-season value metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedLine {
    /// Player efficiency rating (league average is 15).
    pub per: f64,
    /// Offensive win shares.
    pub ows: f64,
    /// Defensive win shares.
    pub dws: f64,
    /// Value over replacement player.
    pub vorp: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub kind: AwardKind,
    pub season: Season,
}

/// Closed set of award kinds the registry understands.
///
/// Source labels are matched exactly (including the aliases below), never by
/// substring. Anything else deserializes to [`AwardKind::Other`] and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AwardKind {
    #[serde(alias = "Most Valuable Player")]
    Mvp,
    #[serde(alias = "Finals MVP")]
    FinalsMvp,
    #[serde(alias = "Defensive Player of the Year")]
    Dpoy,
    #[serde(alias = "Rookie of the Year")]
    Roy,
    #[serde(alias = "Sixth Man of the Year")]
    Smoy,
    #[serde(alias = "Most Improved Player")]
    Mip,
    #[serde(alias = "All-League Team")]
    AllLeague,
    #[serde(alias = "All-Defensive Team")]
    AllDefensive,
    #[serde(alias = "All-Rookie Team")]
    AllRookie,
    #[serde(alias = "Conference Finals MVP")]
    ConferenceFinalsMvp,
    #[serde(alias = "Won Championship")]
    Champion,
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_numeric_fields_read_as_zero() {
        let row: SeasonRow =
            serde_json::from_str(r#"{"season": 2001, "teamId": 3, "points": 120}"#).unwrap();
        assert_eq!(row.stats.points, 120);
        assert_eq!(row.stats.games_played, 0);
        assert_eq!(row.stats.rebounds(), 0);
        assert!(!row.playoffs);
        assert!(row.advanced.vorp.abs() < f64::EPSILON);
    }

    #[test]
    fn test_short_field_names_are_accepted() {
        let row: SeasonRow = serde_json::from_str(
            r#"{"season": 2001, "tid": 3, "playoffFlag": true, "gp": 4, "orb": 3, "drb": 5}"#,
        )
        .unwrap();
        assert!(row.playoffs);
        assert_eq!(row.stats.games_played, 4);
        assert_eq!(row.stats.rebounds(), 8);
    }

    #[test]
    fn test_award_kind_labels() {
        let kind: AwardKind = serde_json::from_str(r#""Most Valuable Player""#).unwrap();
        assert_eq!(kind, AwardKind::Mvp);
        let kind: AwardKind = serde_json::from_str(r#""finalsMvp""#).unwrap();
        assert_eq!(kind, AwardKind::FinalsMvp);
        let kind: AwardKind = serde_json::from_str(r#""Most Valuable Player Runner-Up""#).unwrap();
        assert_eq!(kind, AwardKind::Other);
    }

    #[test]
    fn test_draft_defaults_to_undrafted() {
        let player: Player = serde_json::from_str(r#"{"pid": 1, "name": "A"}"#).unwrap();
        assert!(player.draft.is_undrafted());
        assert!(!player.draft.is_first_overall());
    }

    #[test]
    fn test_per_game_with_zero_games() {
        let line = StatLine::default();
        assert!(line.per_game(10).abs() < f64::EPSILON);
        assert!(line.fg_pct().abs() < f64::EPSILON);
    }
}
