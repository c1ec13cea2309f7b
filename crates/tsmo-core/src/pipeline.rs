//! End-to-end multilevel thresholding.
//!
//! This module wires together histogram construction, coarse
//! normalization, valley detection, and the per-valley Otsu search.

use crate::{
    find_valleys, normalize_histogram, threshold_window, valley_windows, GrayImageView, Histogram,
    NormalizedHistogram, ThresholdError, ThresholdParams, Window,
};
use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Output of one thresholding run, with every intermediate product.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThresholdResult {
    pub histogram: Histogram,
    pub normalized: NormalizedHistogram,
    /// Valley bin indices, increasing.
    pub valleys: Vec<usize>,
    /// Search window of each valley, same order as `valleys`.
    pub windows: Vec<Window>,
    /// Absolute thresholds, same order as `valleys`.
    pub thresholds: Vec<usize>,
}

/// Two-stage multilevel Otsu thresholder.
#[derive(Clone, Debug)]
pub struct MultilevelThresholder {
    params: ThresholdParams,
}

impl MultilevelThresholder {
    /// Create a thresholder, rejecting invalid bin/level combinations up front.
    pub fn new(params: ThresholdParams) -> Result<Self, ThresholdError> {
        params.validate()?;
        Ok(Self { params })
    }

    #[inline]
    pub fn params(&self) -> &ThresholdParams {
        &self.params
    }

    /// Run the full pipeline on a grayscale image.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "info",
            skip(self, img),
            fields(width = img.width, height = img.height)
        )
    )]
    pub fn run(&self, img: &GrayImageView<'_>) -> Result<ThresholdResult, ThresholdError> {
        let histogram = Histogram::from_image(img, &self.params)?;
        self.run_histogram(histogram)
    }

    /// Run every stage after histogram construction.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip_all))]
    pub fn run_histogram(&self, histogram: Histogram) -> Result<ThresholdResult, ThresholdError> {
        let normalized = normalize_histogram(&histogram, &self.params)?;
        let valleys = find_valleys(&normalized);
        let windows = valley_windows(&valleys, &self.params);
        let thresholds = windows
            .iter()
            .map(|w| threshold_window(&histogram, w))
            .collect::<Result<Vec<usize>, _>>()?;

        debug!(
            "{} samples -> valleys {valleys:?} -> thresholds {thresholds:?}",
            histogram.total()
        );

        Ok(ThresholdResult {
            histogram,
            normalized,
            valleys,
            windows,
            thresholds,
        })
    }

    /// Convenience wrapper returning only the thresholds.
    pub fn thresholds(&self, img: &GrayImageView<'_>) -> Result<Vec<usize>, ThresholdError> {
        Ok(self.run(img)?.thresholds)
    }
}

/// One-shot helper: validate `params` and threshold `img`.
pub fn multilevel_thresholds(
    img: &GrayImageView<'_>,
    params: &ThresholdParams,
) -> Result<Vec<usize>, ThresholdError> {
    MultilevelThresholder::new(*params)?.thresholds(img)
}
