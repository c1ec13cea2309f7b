//! Valley detection on a normalized histogram.
//!
//! Detection runs in two passes over the interior bins `1..=M-2`:
//!
//! 1. every bin gets a valley weight from the shape it forms with its two
//!    neighbours ([`BinShape`]); flat runs inherit the weight of their left
//!    edge, so this pass must go strictly left to right;
//! 2. a bin with nonzero weight is flagged as a valley when the weights of
//!    the bin and its two neighbours add up to at least one.
//!
//! The end bins never carry weight and are never flagged.

use crate::NormalizedHistogram;
use log::debug;
use std::cmp::Ordering;

/// Weight of a bin standing above at least one neighbour.
pub const ELEVATED_WEIGHT: f64 = 0.0;
/// Weight of a bin below its left neighbour and level with its right one.
pub const FALLING_SHOULDER_WEIGHT: f64 = 0.25;
/// Weight of a bin level with its left neighbour and below its right one.
pub const RISING_SHOULDER_WEIGHT: f64 = 0.75;
/// Weight of a strict local minimum.
pub const TROUGH_WEIGHT: f64 = 1.0;

/// Summed neighbourhood weight a bin needs to be flagged as a valley.
pub const VALLEY_SUPPORT: f64 = 1.0;

/// Local shape of a bin relative to its immediate neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinShape {
    /// Higher than the left or the right neighbour.
    Elevated,
    /// Lower than the left neighbour, level with the right one.
    FallingShoulder,
    /// Level with the left neighbour, lower than the right one.
    RisingShoulder,
    /// Lower than both neighbours.
    Trough,
    /// Level with both neighbours.
    Plateau,
}

impl BinShape {
    pub fn classify(prev: f64, curr: f64, next: f64) -> Self {
        use Ordering::*;
        match (curr.total_cmp(&prev), curr.total_cmp(&next)) {
            (Greater, _) | (_, Greater) => Self::Elevated,
            (Less, Equal) => Self::FallingShoulder,
            (Equal, Less) => Self::RisingShoulder,
            (Less, Less) => Self::Trough,
            (Equal, Equal) => Self::Plateau,
        }
    }

    /// Resolve the weight of this shape; plateaus take `left_weight`.
    #[inline]
    pub fn weight(self, left_weight: f64) -> f64 {
        match self {
            Self::Elevated => ELEVATED_WEIGHT,
            Self::FallingShoulder => FALLING_SHOULDER_WEIGHT,
            Self::RisingShoulder => RISING_SHOULDER_WEIGHT,
            Self::Trough => TROUGH_WEIGHT,
            Self::Plateau => left_weight,
        }
    }
}

/// Per-bin valley weights (first pass).
///
/// Slices shorter than three bins have no interior and score all zeros.
pub fn score_bins(values: &[f64]) -> Vec<f64> {
    let mut scores = vec![0.0f64; values.len()];
    if values.len() < 3 {
        return scores;
    }

    let mut left = scores[0];
    for i in 1..values.len() - 1 {
        let shape = BinShape::classify(values[i - 1], values[i], values[i + 1]);
        left = shape.weight(left);
        scores[i] = left;
    }
    scores
}

/// Indices of bins whose neighbourhood weight reaches [`VALLEY_SUPPORT`]
/// (second pass). Reads only first-pass weights.
pub fn flag_valleys(scores: &[f64]) -> Vec<usize> {
    if scores.len() < 3 {
        return Vec::new();
    }

    scores
        .windows(3)
        .enumerate()
        .filter(|(_, w)| w[1] != 0.0 && w[0] + w[1] + w[2] >= VALLEY_SUPPORT)
        .map(|(i, _)| i + 1)
        .collect()
}

/// Locate cluster-separating bins, in increasing order.
pub fn find_valleys(norm: &NormalizedHistogram) -> Vec<usize> {
    let scores = score_bins(norm.values());
    let valleys = flag_valleys(&scores);
    debug!("valley weights {scores:?} -> valleys {valleys:?}");
    valleys
}
