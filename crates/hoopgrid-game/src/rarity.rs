//! Per-cell rarity: prominence normalized within one cell's eligible set.
//!
//! The least prominent eligible player scores 100, the most prominent 0,
//! linearly in between. A lone eligible player scores 50. When every
//! eligible player is equally prominent the spread is zero and
//! [`MIN_PROMINENCE_RANGE`] stands in for it, so all of them score 0.

use std::{cmp::Ordering, collections::BTreeSet};

use hoopgrid_league::PlayerId;
use serde::{Deserialize, Serialize};

use crate::ProminenceTable;

pub const MAX_RARITY: u8 = 100;
pub const SINGLETON_RARITY: u8 = 50;
pub const MIN_PROMINENCE_RANGE: f64 = 1.0;

/// Outcome of one guess against one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerScore {
    pub is_correct: bool,
    /// `0..=100`; zero for a wrong guess.
    pub rarity: u8,
    /// 1 = most prominent eligible player; `None` for a wrong guess.
    pub rank: Option<usize>,
    pub eligible_count: usize,
}

/// One eligible player with its cell-relative scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedAnswer {
    pub player: PlayerId,
    pub prominence: f64,
    pub rarity: u8,
    pub rank: usize,
}

/// Ranks every eligible player, most prominent first. Ties are broken by
/// player id so the order is deterministic.
#[must_use]
pub fn rank_cell(eligible: &BTreeSet<PlayerId>, prominence: &ProminenceTable) -> Vec<RankedAnswer> {
    let mut scored = eligible
        .iter()
        .map(|&player| (player, prominence.get(player)))
        .collect::<Vec<_>>();
    scored.sort_by(|(a_id, a), (b_id, b)| match b.total_cmp(a) {
        Ordering::Equal => a_id.cmp(b_id),
        ord => ord,
    });

    let max = scored.first().map_or(0.0, |(_, p)| *p);
    let min = scored.last().map_or(0.0, |(_, p)| *p);
    let single = scored.len() == 1;
    scored
        .into_iter()
        .enumerate()
        .map(|(i, (player, prominence))| RankedAnswer {
            player,
            prominence,
            rarity: if single {
                SINGLETON_RARITY
            } else {
                normalize(prominence, min, max)
            },
            rank: i + 1,
        })
        .collect()
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn normalize(prominence: f64, min: f64, max: f64) -> u8 {
    let spread = max - min;
    let range = if spread <= f64::EPSILON {
        MIN_PROMINENCE_RANGE
    } else {
        spread
    };
    let rarity = f64::from(MAX_RARITY) * (max - prominence) / range;
    rarity.round().clamp(0.0, f64::from(MAX_RARITY)) as u8
}

/// Scores `guess` against a cell's eligible set.
#[must_use]
pub fn score_answer(
    eligible: &BTreeSet<PlayerId>,
    guess: PlayerId,
    prominence: &ProminenceTable,
) -> AnswerScore {
    let eligible_count = eligible.len();
    if !eligible.contains(&guess) {
        return AnswerScore {
            is_correct: false,
            rarity: 0,
            rank: None,
            eligible_count,
        };
    }
    let ranked = rank_cell(eligible, prominence);
    let entry = ranked.iter().find(|answer| answer.player == guess);
    AnswerScore {
        is_correct: true,
        rarity: entry.map_or(0, |answer| answer.rarity),
        rank: entry.map(|answer| answer.rank),
        eligible_count,
    }
}
