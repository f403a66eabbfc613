//! Derived lookup indices.
//!
//! [`LeagueIndices::build`] is a one-time pure transform of a [`LeagueDocument`].
//! The result is an immutable value passed by reference to everything
//! downstream; nothing here is global or incrementally updated.
//!
//! # Sub-indices
//!
//! - [`CareerIndex`] - regular-season career totals (`CareerTotals[playerId]`)
//! - [`SeasonIndex`] - per-player season lines (stints combined) and team-seasons
//! - [`LeaderIndex`] - qualified, tie-inclusive league leaders (`SeasonLeaders[season][stat]`)
//! - [`AwardIndex`] - award winners by kind (`Awards[kind]`)
//! - [`AllStarIndex`] - All-Star rosters (`AllStars[season]`)
//! - [`ChampionIndex`] - title winners (`Champions[season]`)
//! - [`HallOfFameIndex`] - Hall-of-Famers and their team-seasons (`HofTeamSeason`)
//! - [`FeatIndex`] - single-game lines (`FeatsByPlayer[playerId]`)
//!
//! The sub-builders only read the document, so they run as a fork-join on the
//! rayon pool.

use tracing::info;

use crate::LeagueDocument;

pub use self::{
    all_stars::AllStarIndex,
    awards::AwardIndex,
    career::{CareerIndex, CareerTotals},
    champions::{ChampionIndex, SERIES_WINS_TO_CLINCH, resolve_champion},
    feats::{DOUBLE_DIGITS, FeatIndex, FeatLine},
    hall_of_fame::HallOfFameIndex,
    leaders::{LEADER_TOLERANCE, LeaderIndex, StatKey},
    schedule::{DEFAULT_SEASON_GAMES, QUALIFYING_PERCENT, SeasonSchedule},
    seasons::{PlayerSeasons, SeasonIndex, SeasonLine},
};

mod all_stars;
mod awards;
mod career;
mod champions;
mod feats;
mod hall_of_fame;
mod leaders;
mod schedule;
mod seasons;

#[derive(Debug, Clone, Default)]
pub struct LeagueIndices {
    pub schedule: SeasonSchedule,
    pub career: CareerIndex,
    pub seasons: SeasonIndex,
    pub leaders: LeaderIndex,
    pub awards: AwardIndex,
    pub all_stars: AllStarIndex,
    pub champions: ChampionIndex,
    pub hall_of_fame: HallOfFameIndex,
    pub feats: FeatIndex,
}

impl LeagueIndices {
    #[must_use]
    pub fn build(document: &LeagueDocument) -> Self {
        let players = document.players.as_slice();
        let schedule = SeasonSchedule::from_document(document);

        let (((career, seasons), (leaders, awards)), ((all_stars, champions), (hall_of_fame, feats))) =
            rayon::join(
                || {
                    rayon::join(
                        || {
                            rayon::join(
                                || CareerIndex::build(players),
                                || SeasonIndex::build(players, &schedule),
                            )
                        },
                        || {
                            rayon::join(
                                || LeaderIndex::build(players, &schedule),
                                || AwardIndex::build(players, &document.awards_by_season),
                            )
                        },
                    )
                },
                || {
                    rayon::join(
                        || {
                            rayon::join(
                                || AllStarIndex::build(&document.all_star_rosters_by_season),
                                || ChampionIndex::build(&document.playoff_brackets_by_season),
                            )
                        },
                        || {
                            rayon::join(
                                || {
                                    HallOfFameIndex::build(
                                        players,
                                        &document.hall_of_fame_events,
                                    )
                                },
                                || FeatIndex::build(players, &document.single_game_feats),
                            )
                        },
                    )
                },
            );

        info!(
            players = career.len(),
            seasons = seasons.seasons().len(),
            hall_of_famers = hall_of_fame.members().len(),
            "built league indices"
        );

        Self {
            schedule,
            career,
            seasons,
            leaders,
            awards,
            all_stars,
            champions,
            hall_of_fame,
            feats,
        }
    }
}
