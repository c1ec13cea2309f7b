use crate::ThresholdError;
use serde::{Deserialize, Serialize};

fn default_bins() -> usize {
    32
}

fn default_levels() -> usize {
    256
}

/// Configuration for the multilevel thresholder.
///
/// `levels` must be a multiple of `bins`; each coarse bin then aggregates
/// `levels / bins` consecutive raw intensity levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdParams {
    /// Number of coarse bins in the normalized histogram (`M`).
    #[serde(default = "default_bins")]
    pub bins: usize,
    /// Number of raw intensity levels (`L`). At most 256 for 8-bit input.
    #[serde(default = "default_levels")]
    pub levels: usize,
}

impl Default for ThresholdParams {
    fn default() -> Self {
        Self {
            bins: default_bins(),
            levels: default_levels(),
        }
    }
}

impl ThresholdParams {
    pub fn new(bins: usize, levels: usize) -> Self {
        Self { bins, levels }
    }

    /// Reject configurations with undefined bin boundaries.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        let reason = if self.bins == 0 {
            Some("bin count must be positive")
        } else if self.levels == 0 || self.levels > 256 {
            Some("level count must be in 1..=256")
        } else if self.bins > self.levels {
            Some("bin count exceeds level count")
        } else if self.levels % self.bins != 0 {
            Some("level count is not divisible by bin count")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ThresholdError::Config {
                bins: self.bins,
                levels: self.levels,
                reason,
            }),
            None => Ok(()),
        }
    }

    /// Raw levels per coarse bin (`N = L / M`).
    ///
    /// Only meaningful for validated parameters.
    #[inline]
    pub fn bin_width(&self) -> usize {
        self.levels / self.bins.max(1)
    }
}
