use serde::{Deserialize, Serialize};

/// A league season, identified by the calendar year in which it ends.
pub type Season = i32;

/// Stable identifier of a player inside one league document.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

/// Stable identifier of a team inside one league document.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct TeamId(pub u32);

/// A (season, team) pair, displayed as `"season:teamId"`.
///
/// Used as the co-membership key: two players who share a `TeamSeason` were
/// on the same roster for at least one game that season.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, derive_more::Display,
)]
#[display("{season}:{team}")]
pub struct TeamSeason {
    pub season: Season,
    pub team: TeamId,
}

impl TeamSeason {
    #[must_use]
    pub const fn new(season: Season, team: TeamId) -> Self {
        Self { season, team }
    }
}
