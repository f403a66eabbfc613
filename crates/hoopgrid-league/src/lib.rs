//! League history model and derived indices for the hoopgrid trivia grid.
//!
//! This crate is the bottom layer of the workspace:
//!
//! - [`document`] - the canonical league document (players, teams, award tables,
//!   All-Star rosters, playoff brackets, Hall-of-Fame events, single-game feats)
//! - [`index`] - the Index Builder, turning a document into [`LeagueIndices`]
//! - [`League`] - a loaded document paired with its indices and a player lookup
//!
//! # Example
//!
//! ```
//! use hoopgrid_league::{League, LeagueDocument};
//!
//! let document = LeagueDocument::from_json(r#"{"players": [], "teams": []}"#).unwrap();
//! let league = League::new(document);
//! assert!(league.players().is_empty());
//! ```

use std::collections::HashMap;

pub use self::{document::*, id::*, index::LeagueIndices};

pub mod document;
pub mod index;

mod id;

/// A league document together with the indices derived from it.
///
/// Construction builds the indices once; the value is read-only afterwards
/// and safe to share across threads.
#[derive(Debug, Clone)]
pub struct League {
    document: LeagueDocument,
    indices: LeagueIndices,
    player_lookup: HashMap<PlayerId, usize>,
}

impl League {
    #[must_use]
    pub fn new(document: LeagueDocument) -> Self {
        let indices = LeagueIndices::build(&document);
        let player_lookup = document
            .players
            .iter()
            .enumerate()
            .map(|(i, player)| (player.id, i))
            .collect();
        Self {
            document,
            indices,
            player_lookup,
        }
    }

    #[must_use]
    pub fn document(&self) -> &LeagueDocument {
        &self.document
    }

    #[must_use]
    pub fn indices(&self) -> &LeagueIndices {
        &self.indices
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.document.players
    }

    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.document.teams
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.player_lookup
            .get(&id)
            .map(|&i| &self.document.players[i])
    }

    #[must_use]
    pub fn contains_player(&self, id: PlayerId) -> bool {
        self.player_lookup.contains_key(&id)
    }

    #[must_use]
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.document.team(id)
    }
}
