//! Raw-level search windows around valley bins.

use crate::ThresholdError;
use serde::{Deserialize, Serialize};

/// Half-open range `[start, end)` of raw intensity levels.
///
/// Always satisfies `start <= end <= levels` for the level count it was
/// built against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    /// Unclamped bounds for `valley`: one bin to the left through one bin
    /// to the right, i.e. `[v*N - N, (v+2)*N)`.
    fn raw_bounds(valley: usize, bin_width: usize) -> (isize, isize) {
        let v = valley as isize;
        let n = bin_width as isize;
        (v * n - n, (v + 2) * n)
    }

    /// Window for `valley`, failing when it reaches outside `[0, levels)`.
    pub fn checked(valley: usize, bin_width: usize, levels: usize) -> Result<Self, ThresholdError> {
        let (start, end) = Self::raw_bounds(valley, bin_width);
        if start < 0 || end > levels as isize || start >= end {
            return Err(ThresholdError::IndexOutOfRange { start, end, levels });
        }
        Ok(Self {
            start: start as usize,
            end: end as usize,
        })
    }

    /// Window for `valley`, clamped to `[0, levels)`.
    pub fn for_valley(valley: usize, bin_width: usize, levels: usize) -> Self {
        let (start, end) = Self::raw_bounds(valley, bin_width);
        let clamp = |x: isize| x.clamp(0, levels as isize) as usize;
        let start = clamp(start);
        let end = clamp(end).max(start);
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrow the part of `counts` covered by this window, or `None` when
    /// `counts` is too short to hold it.
    pub fn slice<'a>(&self, counts: &'a [u64]) -> Option<&'a [u64]> {
        counts.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_valley_spans_three_bins() {
        let w = Window::checked(8, 8, 256).unwrap();
        assert_eq!(w, Window { start: 56, end: 80 });
        assert_eq!(w.len(), 24);
        assert_eq!(Window::for_valley(8, 8, 256), w);
    }

    #[test]
    fn first_bin_is_clamped_at_zero() {
        assert!(matches!(
            Window::checked(0, 8, 256),
            Err(ThresholdError::IndexOutOfRange { start: -8, end: 16, .. })
        ));
        assert_eq!(Window::for_valley(0, 8, 256), Window { start: 0, end: 16 });
    }

    #[test]
    fn last_bin_is_clamped_at_level_count() {
        assert!(Window::checked(31, 8, 256).is_err());
        assert_eq!(
            Window::for_valley(31, 8, 256),
            Window {
                start: 240,
                end: 256
            }
        );
        // Last interior bin still fits exactly.
        assert_eq!(
            Window::checked(30, 8, 256).unwrap(),
            Window {
                start: 232,
                end: 256
            }
        );
    }

    #[test]
    fn far_out_valley_yields_empty_window() {
        let w = Window::for_valley(100, 8, 256);
        assert!(w.is_empty());
        assert_eq!(w.slice(&[1; 256]), Some(&[][..]));
    }

    #[test]
    fn slice_refuses_short_counts() {
        let w = Window::for_valley(8, 8, 256);
        assert_eq!(w.slice(&[1; 80]).map(<[u64]>::len), Some(24));
        assert_eq!(w.slice(&[1; 64]), None);
    }
}
