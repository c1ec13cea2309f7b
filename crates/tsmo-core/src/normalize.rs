//! Coarse binning of a raw histogram into a 0–100 percentage scale.
//!
//! Grouping `N` neighbouring levels into one bin acts as a box filter on the
//! histogram, which keeps the valley search from reacting to single-level
//! noise.

use crate::{Histogram, ThresholdError, ThresholdParams};
use log::debug;
use serde::{Deserialize, Serialize};

/// Bin values as a percentage of the heaviest bin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedHistogram {
    values: Vec<f64>,
    bin_width: usize,
}

impl NormalizedHistogram {
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Raw levels aggregated per bin.
    #[inline]
    pub fn bin_width(&self) -> usize {
        self.bin_width
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Sum `params.bin_width()` consecutive levels per bin and rescale so the
/// largest bin reads exactly 100.
pub fn normalize_histogram(
    hist: &Histogram,
    params: &ThresholdParams,
) -> Result<NormalizedHistogram, ThresholdError> {
    params.validate()?;
    if hist.len() != params.levels {
        return Err(ThresholdError::Config {
            bins: params.bins,
            levels: params.levels,
            reason: "histogram length differs from level count",
        });
    }

    let bin_width = params.bin_width();
    let sums: Vec<u64> = hist
        .counts()
        .chunks_exact(bin_width)
        .map(|chunk| chunk.iter().sum())
        .collect();

    let max = sums.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return Err(ThresholdError::EmptyHistogram);
    }

    let max = max as f64;
    let values: Vec<f64> = sums.iter().map(|&s| s as f64 / max * 100.0).collect();
    debug!(
        "normalized {} levels into {} bins of width {bin_width}",
        params.levels,
        values.len()
    );

    Ok(NormalizedHistogram { values, bin_width })
}
