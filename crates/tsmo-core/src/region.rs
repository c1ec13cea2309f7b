//! Resolve valley bins into absolute thresholds.

use crate::{otsu_index, Histogram, ThresholdError, ThresholdParams, Window};
use log::warn;

/// Clamped search window for every valley, in input order.
pub fn valley_windows(valleys: &[usize], params: &ThresholdParams) -> Vec<Window> {
    let bin_width = params.bin_width();
    valleys
        .iter()
        .map(|&v| match Window::checked(v, bin_width, params.levels) {
            Ok(w) => w,
            Err(err) => {
                warn!("valley {v}: {err}; clamping");
                Window::for_valley(v, bin_width, params.levels)
            }
        })
        .collect()
}

/// Run a bilevel Otsu search inside `window` and return the absolute level.
///
/// Fails with [`ThresholdError::IndexOutOfRange`] when `window` reaches past
/// the end of `hist`.
pub fn threshold_window(hist: &Histogram, window: &Window) -> Result<usize, ThresholdError> {
    let counts = window
        .slice(hist.counts())
        .ok_or(ThresholdError::IndexOutOfRange {
            start: window.start as isize,
            end: window.end as isize,
            levels: hist.len(),
        })?;
    Ok(window.start + otsu_index(counts))
}

/// One threshold per valley, in the same order as `valleys`.
///
/// `hist` must hold exactly `params.levels` counts.
pub fn threshold_valley_regions(
    hist: &Histogram,
    valleys: &[usize],
    params: &ThresholdParams,
) -> Result<Vec<usize>, ThresholdError> {
    params.validate()?;
    if hist.len() != params.levels {
        return Err(ThresholdError::Config {
            bins: params.bins,
            levels: params.levels,
            reason: "histogram length differs from level count",
        });
    }
    valley_windows(valleys, params)
        .iter()
        .map(|w| threshold_window(hist, w))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::otsu::otsu_index_brute_force;

    fn two_cluster_counts() -> Vec<u64> {
        let mut counts = vec![0u64; 256];
        for (i, c) in counts.iter_mut().enumerate() {
            *c = match i {
                40..=60 => 50,
                100..=120 => 80,
                _ => 1,
            };
        }
        counts
    }

    #[test]
    fn threshold_is_window_start_plus_local_optimum() {
        let hist = Histogram::from_counts(two_cluster_counts());
        let params = ThresholdParams::default();
        let windows = valley_windows(&[10], &params);
        assert_eq!(windows, vec![Window { start: 72, end: 96 }]);

        let local = otsu_index_brute_force(&hist.counts()[72..96]);
        assert_eq!(
            threshold_valley_regions(&hist, &[10], &params).unwrap(),
            vec![72 + local]
        );
    }

    #[test]
    fn preserves_valley_order() {
        let hist = Histogram::from_counts(two_cluster_counts());
        let params = ThresholdParams::default();
        let thresholds = threshold_valley_regions(&hist, &[4, 10, 20], &params).unwrap();
        assert_eq!(thresholds.len(), 3);
        assert!(thresholds.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn boundary_valleys_are_clamped_not_rejected() {
        let hist = Histogram::from_counts(two_cluster_counts());
        let params = ThresholdParams::default();
        let windows = valley_windows(&[0, 31], &params);
        assert_eq!(windows[0], Window { start: 0, end: 16 });
        assert_eq!(
            windows[1],
            Window {
                start: 240,
                end: 256
            }
        );
        let thresholds = threshold_valley_regions(&hist, &[0, 31], &params).unwrap();
        assert!(thresholds.iter().all(|&t| t < 256));
    }

    #[test]
    fn short_histogram_is_a_config_error() {
        let hist = Histogram::from_counts(vec![5; 128]);
        let err = threshold_valley_regions(&hist, &[10], &ThresholdParams::default()).unwrap_err();
        assert!(matches!(
            err,
            ThresholdError::Config {
                bins: 32,
                levels: 256,
                ..
            }
        ));
    }

    #[test]
    fn window_past_histogram_end_is_out_of_range() {
        let hist = Histogram::from_counts(vec![5; 64]);
        let window = Window { start: 56, end: 80 };
        assert_eq!(
            threshold_window(&hist, &window),
            Err(ThresholdError::IndexOutOfRange {
                start: 56,
                end: 80,
                levels: 64
            })
        );
    }
}
