use crate::domain::model::{ExclusionMask, HOLES};

pub const SCORE_MULTIPLIER: f64 = 1.5;
pub const DIFFERENTIAL_ADJUSTMENT: f64 = 0.8;

/// Zeroes every score whose hole is excluded in `mask`. Only the zero pattern
/// of the mask matters, not its par values.
pub fn mask_scores(scores: &[u32; HOLES], mask: &ExclusionMask) -> [u32; HOLES] {
    let mut masked = *scores;
    for (i, score) in masked.iter_mut().enumerate() {
        if mask.is_excluded(i) {
            *score = 0;
        }
    }
    masked
}

/// `(sum(masked scores) * 1.5 - total_par) * 0.8`
///
/// `total_par` is the unmodified course total; excluded holes reduce the
/// score sum but not the par.
pub fn compute_differential(scores: &[u32; HOLES], mask: &ExclusionMask, total_par: u32) -> f64 {
    let sum_scores: f64 = mask_scores(scores, mask).iter().map(|&s| f64::from(s)).sum();
    (sum_scores * SCORE_MULTIPLIER - f64::from(total_par)) * DIFFERENTIAL_ADJUSTMENT
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARS: [u8; 18] = [4, 3, 5, 4, 6, 4, 5, 4, 5, 3, 6, 4, 5, 5, 4, 3, 5, 5];

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mask_scores_follows_zero_pattern() {
        let mut mask = ExclusionMask::from_pars(&PARS);
        mask.exclude(0);
        mask.exclude(17);

        let masked = mask_scores(&[7; 18], &mask);
        assert_eq!(masked[0], 0);
        assert_eq!(masked[17], 0);
        assert_eq!(masked[1..17], [7; 16]);
    }

    #[test]
    fn test_differential_without_exclusions() {
        let mask = ExclusionMask::from_pars(&PARS);
        // 72 * 1.5 = 108; (108 - 80) * 0.8 = 22.4
        let d = compute_differential(&[4; 18], &mask, 80);
        assert!(close(d, 22.4), "got {}", d);
    }

    #[test]
    fn test_total_par_is_not_reduced_by_exclusions() {
        let mut mask = ExclusionMask::from_pars(&PARS);
        for i in [2, 0, 1, 12, 11, 9] {
            mask.exclude(i);
        }
        let scores: [u32; 18] = PARS.map(u32::from);
        // 80 - (5+4+3) - (5+4+3) = 56; (84 - 80) * 0.8 = 3.2
        let d = compute_differential(&scores, &mask, 80);
        assert!(close(d, 3.2), "got {}", d);
    }

    #[test]
    fn test_large_scores_do_not_overflow() {
        let mask = ExclusionMask::from_pars(&PARS);
        let d = compute_differential(&[u32::MAX; 18], &mask, 80);
        let expected = (f64::from(u32::MAX) * 18.0 * 1.5 - 80.0) * 0.8;
        assert!(d.is_finite());
        assert!((d - expected).abs() / expected < 1e-12, "got {}", d);
    }

    #[test]
    fn test_negative_differential() {
        let mask = ExclusionMask::from_pars(&PARS);
        let d = compute_differential(&[2; 18], &mask, 80);
        // (54 - 80) * 0.8 = -20.8
        assert!(close(d, -20.8), "got {}", d);
    }
}
