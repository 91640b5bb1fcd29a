//! Cell-scale sweep for one grid shape.
//!
//! For a fixed `cols × rows` shape the collage grows monotonically with the
//! scale `k`, moving strictly from "pads both axes" through "clips one axis"
//! to "clips both axes". The interesting `k` values sit in a narrow window
//! around the exact-fit scales for each axis; everything below the pad-both
//! band is strictly dominated and pruned before costs are compared.

use crate::config::CostWeights;
use crate::fit::{CellFit, FitStrategy, evaluate_cell_fit};

/// Inclusive `k` window spanning the pad-both → clip-both transition for one
/// shape: two steps either side of the per-axis exact-fit scales, floored
/// at 1.
pub fn scale_window(cols: u32, rows: u32, target_size: u32) -> (u32, u32) {
    let k_width_exact = target_size as f64 / (cols as f64 * 3.0);
    let k_height_exact = target_size as f64 / (rows as f64 * 4.0);

    let k_min = k_width_exact.min(k_height_exact) as i64 - 2;
    let k_max = k_width_exact.max(k_height_exact) as i64 + 2;

    (k_min.max(1) as u32, k_max.max(1) as u32)
}

/// Drop fits strictly dominated inside the pad-both band.
///
/// Padding grows monotonically as `k` shrinks for a fixed shape, so among
/// pad-both fits only the largest `k` can win; everything at or above that
/// `k` (the mixed and clip-both regimes) still has to be compared on cost.
/// With no pad-both fit the whole window is already in a clip regime and
/// nothing is dominated.
pub fn prune_dominated(fits: Vec<CellFit>) -> Vec<CellFit> {
    let largest_pad_both = fits
        .iter()
        .filter(|fit| fit.strategy == FitStrategy::PadBoth)
        .map(|fit| fit.k)
        .max();

    match largest_pad_both {
        Some(k) => fits.into_iter().filter(|fit| fit.k >= k).collect(),
        None => fits,
    }
}

/// Evaluate every `k` in the shape's [`scale_window`] and keep the feasible,
/// non-dominated fits.
pub fn explore_scale_range(
    cols: u32,
    rows: u32,
    target_size: u32,
    weights: &CostWeights,
) -> Vec<CellFit> {
    let (k_min, k_max) = scale_window(cols, rows, target_size);

    let feasible: Vec<CellFit> = (k_min..=k_max)
        .filter_map(|k| evaluate_cell_fit(cols, rows, k, target_size, weights))
        .collect();

    prune_dominated(feasible)
}
