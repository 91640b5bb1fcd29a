//! Integer factorizations of an image count near a target grid aspect.
//!
//! A count of `n` images fills a `cols × rows` grid exactly when
//! `cols * rows == n`, so candidate grid shapes are divisor pairs of the
//! count. With 3:4 portrait cells tiling a square canvas, the ideal shape has
//! `cols / rows ≈ 4/3`; pairs far outside that ratio make degenerate strips
//! and are filtered out before ranking.

use serde::{Deserialize, Serialize};

/// `cols / rows` ratio that tiles a square with 3:4 portrait cells.
pub const DEFAULT_TARGET_RATIO: f64 = 4.0 / 3.0;

/// Ratio window and ranking parameters for [`find_factorizations`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorizationParams {
    /// Ideal `cols / rows` ratio; pairs are ranked by distance from it.
    pub target_ratio: f64,
    /// Reject shapes taller than this (0.5 = twice as tall as wide).
    pub min_ratio: f64,
    /// Reject shapes wider than this (2.0 = twice as wide as tall).
    pub max_ratio: f64,
    /// Keep at most this many shapes after ranking.
    pub max_candidates: usize,
}

impl Default for FactorizationParams {
    fn default() -> Self {
        Self {
            target_ratio: DEFAULT_TARGET_RATIO,
            min_ratio: 0.5,
            max_ratio: 2.0,
            max_candidates: 8,
        }
    }
}

/// Enumerate `(cols, rows)` divisor pairs of `count` inside the ratio window,
/// best ratio match first.
///
/// Pairs with equal ratio error keep enumeration order (smaller `rows`
/// first); the sort is stable.
///
/// ```
/// use collage_layout::{FactorizationParams, find_factorizations};
///
/// let params = FactorizationParams::default();
/// // 12 images: 4×3 (ratio exactly 4/3) is the only shape in the window.
/// assert_eq!(find_factorizations(12, &params), vec![(4, 3)]);
/// // A single image always yields the 1×1 grid.
/// assert_eq!(find_factorizations(1, &params), vec![(1, 1)]);
/// ```
pub fn find_factorizations(count: u32, params: &FactorizationParams) -> Vec<(u32, u32)> {
    let mut found: Vec<(u32, u32, f64)> = Vec::new();

    for rows in 1..=count.isqrt() {
        if count % rows != 0 {
            continue;
        }
        let cols = count / rows;
        let ratio = cols as f64 / rows as f64;

        if ratio < params.min_ratio || ratio > params.max_ratio {
            continue;
        }

        found.push((cols, rows, (ratio - params.target_ratio).abs()));
    }

    found.sort_by(|a, b| a.2.total_cmp(&b.2));
    found.truncate(params.max_candidates);
    found.into_iter().map(|(cols, rows, _)| (cols, rows)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> FactorizationParams {
        FactorizationParams::default()
    }

    #[test]
    fn twelve_has_one_shape_in_window() {
        // 12×1, 6×2 and 8×... strips fall outside [0.5, 2.0].
        assert_eq!(find_factorizations(12, &params()), vec![(4, 3)]);
    }

    #[test]
    fn two_hundred_sixty_six_factors_to_nineteen_by_fourteen() {
        // 266 = 2·7·19; 19/14 ≈ 1.357 is the only divisor ratio in range.
        assert_eq!(find_factorizations(266, &params()), vec![(19, 14)]);
    }

    #[test]
    fn shapes_ranked_by_ratio_error() {
        // 72: 9×8 (ratio 1.125, err 0.208) beats 12×6 (ratio 2.0, err 0.667).
        assert_eq!(find_factorizations(72, &params()), vec![(9, 8), (12, 6)]);
    }

    #[test]
    fn max_candidates_truncates_after_ranking() {
        let limited = FactorizationParams {
            max_candidates: 1,
            ..params()
        };
        assert_eq!(find_factorizations(72, &limited), vec![(9, 8)]);
    }

    #[test]
    fn ratio_window_excludes_strips() {
        // 36: every divisor pair except 6×6 is wider than 2:1.
        assert_eq!(find_factorizations(36, &params()), vec![(6, 6)]);
    }

    #[test]
    fn equal_error_keeps_enumeration_order() {
        // 16 with target 2.5: 8×2 (ratio 4) and 4×4 (ratio 1) are both
        // 1.5 away; the stable sort keeps the smaller-rows pair first.
        let wide = FactorizationParams {
            target_ratio: 2.5,
            min_ratio: 0.1,
            max_ratio: 10.0,
            max_candidates: 8,
        };
        assert_eq!(find_factorizations(16, &wide), vec![(8, 2), (4, 4)]);
    }

    #[test]
    fn primes_above_two_have_no_shape() {
        // 97×1 is the only factorization and sits far outside the window.
        assert!(find_factorizations(97, &params()).is_empty());
    }
}
