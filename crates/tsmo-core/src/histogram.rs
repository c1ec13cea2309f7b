//! Raw intensity histograms.

use crate::{GrayImageView, InvalidImageKind, ThresholdError, ThresholdParams};
use serde::{Deserialize, Serialize};

/// Per-level sample counts of one image.
///
/// The sum of all counts equals the number of sampled pixels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Histogram {
    counts: Vec<u64>,
}

impl Histogram {
    /// Count every sample of `img` once.
    ///
    /// Fails when the grid is empty, the buffer does not match its
    /// dimensions, or a sample is not below `params.levels`.
    pub fn from_image(
        img: &GrayImageView<'_>,
        params: &ThresholdParams,
    ) -> Result<Self, ThresholdError> {
        img.validate()?;

        let levels = params.levels;
        let mut counts = vec![0u64; levels];
        for row in img.rows() {
            for &v in row {
                let slot = counts
                    .get_mut(v as usize)
                    .ok_or(InvalidImageKind::SampleOutOfRange { value: v, levels })?;
                *slot += 1;
            }
        }

        Ok(Self { counts })
    }

    /// Wrap precomputed counts.
    pub fn from_counts(counts: Vec<u64>) -> Self {
        Self { counts }
    }

    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn into_counts(self) -> Vec<u64> {
        self.counts
    }
}
