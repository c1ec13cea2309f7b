//! Bilevel Otsu search over a histogram window.

/// Index of the split maximizing between-class variance.
///
/// The window is split into a background `[0, i]` and a foreground
/// `(i, len)`; splits leaving either class empty are skipped. Ties keep the
/// first index. A window whose mass never splits into two nonempty classes
/// (all-zero, or all samples in one level) yields 0.
pub fn otsu_index(hist: &[u64]) -> usize {
    let mut total = 0f64;
    let mut sum_total = 0f64;
    for (i, &h) in hist.iter().enumerate() {
        total += h as f64;
        sum_total += (i as f64) * (h as f64);
    }

    let mut w_b = 0f64;
    let mut sum_b = 0f64;
    let mut best_var = 0f64;
    let mut best_t = 0usize;

    for (t, &h) in hist.iter().enumerate() {
        w_b += h as f64;
        if w_b == 0.0 {
            continue;
        }
        let w_f = total - w_b;
        if w_f == 0.0 {
            break;
        }

        sum_b += (t as f64) * (h as f64);
        let m_b = sum_b / w_b;
        let m_f = (sum_total - sum_b) / w_f;

        let var_between = w_b * w_f * (m_b - m_f) * (m_b - m_f);
        if var_between > best_var {
            best_var = var_between;
            best_t = t;
        }
    }

    best_t
}

#[cfg(test)]
pub(crate) fn otsu_index_brute_force(hist: &[u64]) -> usize {
    let mut best = (0usize, 0f64);
    for split in 0..hist.len() {
        let (bg, fg) = hist.split_at(split + 1);
        let stats = |part: &[u64], offset: usize| {
            let w: f64 = part.iter().map(|&h| h as f64).sum();
            let s: f64 = part
                .iter()
                .enumerate()
                .map(|(i, &h)| (i + offset) as f64 * h as f64)
                .sum();
            (w, if w > 0.0 { s / w } else { 0.0 })
        };
        let (w_b, m_b) = stats(bg, 0);
        let (w_f, m_f) = stats(fg, split + 1);
        if w_b == 0.0 || w_f == 0.0 {
            continue;
        }
        let var = w_b * w_f * (m_b - m_f).powi(2);
        if var > best.1 {
            best = (split, var);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_extremes_keep_first_split() {
        let hist = [100, 0, 0, 100];
        assert_eq!(otsu_index_brute_force(&hist), 0);
        assert_eq!(otsu_index(&hist), 0);
    }

    #[test]
    fn splits_between_two_clusters() {
        let hist = [0, 5, 9, 5, 0, 0, 0, 4, 8, 4, 0];
        let t = otsu_index(&hist);
        assert!((3..7).contains(&t), "t = {t}");
        assert_eq!(t, otsu_index_brute_force(&hist));
    }

    #[test]
    fn matches_brute_force_on_irregular_windows() {
        let windows: [&[u64]; 4] = [
            &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9],
            &[0, 0, 12, 0, 0, 0, 1],
            &[7, 7, 7, 7, 7, 7],
            &[1, 0, 0, 0, 0, 0, 0, 0, 0, 1000],
        ];
        for w in windows {
            assert_eq!(otsu_index(w), otsu_index_brute_force(w), "window {w:?}");
        }
    }

    #[test]
    fn degenerate_windows_return_zero() {
        assert_eq!(otsu_index(&[]), 0);
        assert_eq!(otsu_index(&[0, 0, 0, 0]), 0);
        assert_eq!(otsu_index(&[0, 0, 42, 0]), 0);
    }
}
