//! Player prominence: how well known a player is, as a single number.
//!
//! Rarity inverts prominence within a cell, so an obscure but correct answer
//! scores high. The score blends four components:
//!
//! - **accolades**: weighted award counts plus All-Star selections
//! - **career value**: `0.6·max(0, VORP) + 0.4·(OWS + DWS)`, damped by a
//!   saturating function of career minutes
//! - **rate talent**: PER above the league baseline, scaled by reliability
//!   (games played and seasons)
//! - **longevity**: `0.5·ln(1 + games) + 0.5·seasons`

use std::collections::HashMap;

use hoopgrid_league::{AwardKind, League, Player, PlayerId, index::CareerTotals};
use hoopgrid_stats::{descriptive::DescriptiveStats, percentiles::Percentiles};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// League-average player efficiency rating.
pub const PER_BASELINE: f64 = 15.0;
/// Career minutes at which the career-value damping reaches `1 - 1/e`.
pub const MINUTES_SCALE: f64 = 10_000.0;
/// Games-played half-saturation point for the rate-talent reliability factor.
pub const RELIABILITY_GAMES: f64 = 200.0;
/// Seasons after which rate talent is fully trusted.
pub const RELIABILITY_SEASONS: f64 = 3.0;

const ALL_STAR_WEIGHT: f64 = 1.5;

const ACCOLADE_WEIGHTS: [(AwardKind, f64); 10] = [
    (AwardKind::Mvp, 10.0),
    (AwardKind::FinalsMvp, 6.0),
    (AwardKind::Dpoy, 5.0),
    (AwardKind::Roy, 3.0),
    (AwardKind::Smoy, 2.0),
    (AwardKind::Mip, 2.0),
    (AwardKind::AllLeague, 3.0),
    (AwardKind::AllDefensive, 1.5),
    (AwardKind::AllRookie, 0.5),
    (AwardKind::ConferenceFinalsMvp, 1.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProminenceWeights {
    pub accolades: f64,
    pub career_value: f64,
    pub rate_talent: f64,
    pub longevity: f64,
}

impl Default for ProminenceWeights {
    fn default() -> Self {
        Self {
            accolades: 0.45,
            career_value: 0.25,
            rate_talent: 0.20,
            longevity: 0.10,
        }
    }
}

/// Unweighted prominence components of one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ProminenceComponents {
    pub accolades: f64,
    pub career_value: f64,
    pub rate_talent: f64,
    pub longevity: f64,
}

impl ProminenceComponents {
    #[must_use]
    pub fn compute(player: &Player, league: &League) -> Self {
        let indices = league.indices();
        let career = indices.career.get(player.id).cloned().unwrap_or_default();

        let awards = ACCOLADE_WEIGHTS
            .iter()
            .map(|&(kind, weight)| count_f64(indices.awards.count(player.id, kind)) * weight)
            .sum::<f64>();
        let all_stars = count_f64(indices.all_stars.selection_count(player.id)) * ALL_STAR_WEIGHT;

        Self {
            accolades: awards + all_stars,
            career_value: career_value(&career),
            rate_talent: rate_talent(&career),
            longevity: longevity(&career),
        }
    }

    #[must_use]
    pub fn weighted(&self, weights: &ProminenceWeights) -> f64 {
        weights.accolades * self.accolades
            + weights.career_value * self.career_value
            + weights.rate_talent * self.rate_talent
            + weights.longevity * self.longevity
    }
}

#[expect(clippy::cast_precision_loss)]
fn count_f64(count: usize) -> f64 {
    count as f64
}

fn career_value(career: &CareerTotals) -> f64 {
    let raw = 0.6 * career.vorp.max(0.0) + 0.4 * career.win_shares();
    raw * (1.0 - (-career.stats.minutes / MINUTES_SCALE).exp())
}

fn rate_talent(career: &CareerTotals) -> f64 {
    let games = f64::from(career.stats.games_played);
    let seasons = f64::from(career.seasons_played);
    let reliability = games / (games + RELIABILITY_GAMES) * (seasons / RELIABILITY_SEASONS).min(1.0);
    (career.per() - PER_BASELINE).max(0.0) * reliability
}

fn longevity(career: &CareerTotals) -> f64 {
    let games = f64::from(career.stats.games_played);
    0.5 * games.ln_1p() + 0.5 * f64::from(career.seasons_played)
}

/// Prominence score of every player in a league.
#[derive(Debug, Clone, Default)]
pub struct ProminenceTable {
    scores: HashMap<PlayerId, f64>,
}

impl ProminenceTable {
    #[must_use]
    pub fn build(league: &League, weights: &ProminenceWeights) -> Self {
        let scores = league
            .players()
            .par_iter()
            .map(|player| {
                let score = ProminenceComponents::compute(player, league).weighted(weights);
                (player.id, score)
            })
            .collect();
        Self { scores }
    }

    #[must_use]
    pub fn from_scores(scores: HashMap<PlayerId, f64>) -> Self {
        Self { scores }
    }

    /// Prominence of `player`; zero for players outside the table.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> f64 {
        self.scores.get(&player).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Distribution of prominence across the league, or `None` when empty.
    #[must_use]
    pub fn summary(&self) -> Option<ProminenceSummary> {
        let mut values = self.scores.values().copied().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        let stats = DescriptiveStats::from_sorted(&values)?;
        let percentiles = Percentiles::from_sorted(&values, &ProminenceSummary::PERCENTILES);
        Some(ProminenceSummary { stats, percentiles })
    }
}

#[derive(Debug, Clone)]
pub struct ProminenceSummary {
    pub stats: DescriptiveStats,
    pub percentiles: Percentiles,
}

impl ProminenceSummary {
    pub const PERCENTILES: [f64; 3] = [50.0, 90.0, 99.0];
}
