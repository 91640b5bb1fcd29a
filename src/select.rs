//! Ranking and custom-grid entry points over the search.
//!
//! [`top_layouts`] is the main consumer-facing call: run the full search,
//! rank, truncate. [`evaluate_custom_grid`] bypasses factorization for a
//! caller-chosen shape — the web form's "I want 5×4" path — and reports
//! infeasibility as an absent value, not an error.

use crate::candidate::{LayoutCandidate, Usage};
use crate::config::CostWeights;
use crate::explore::explore_scale_range;
use crate::search::{SearchError, optimize_for_count, validate_inputs};

/// How many ranked layouts callers usually want.
pub const DEFAULT_TOP_N: usize = 3;

/// Sort ascending by total score. Ties are broken by smaller grid (fewer
/// slots), then smaller cell scale, so equal-cost runs rank deterministically.
fn rank(candidates: &mut [LayoutCandidate]) {
    candidates.sort_by(|a, b| {
        a.total_score
            .total_cmp(&b.total_score)
            .then_with(|| a.grid_slots.cmp(&b.grid_slots))
            .then_with(|| a.k.cmp(&b.k))
    });
}

/// The `top_n` cheapest layouts for `requested_images` images on a square
/// `target_size` canvas, best first.
///
/// ```
/// use collage_layout::{CostWeights, top_layouts};
///
/// let top = top_layouts(12, 4096, 3, &CostWeights::default()).unwrap();
/// assert_eq!((top[0].cols, top[0].rows), (4, 3));
/// assert_eq!(top[0].omitted_images, 0);
/// ```
pub fn top_layouts(
    requested_images: u32,
    target_size: u32,
    top_n: usize,
    weights: &CostWeights,
) -> Result<Vec<LayoutCandidate>, SearchError> {
    let mut all = optimize_for_count(requested_images, target_size, weights)?;
    rank(&mut all);
    all.truncate(top_n);
    Ok(all)
}

/// Evaluate one caller-supplied `cols × rows` shape.
///
/// Uses as many of the requested images as the grid holds, sweeps the cell
/// scale for this shape only, and returns the fit with the lowest cost
/// (ties go to the smaller scale). `Ok(None)` means every scale in the
/// window clips past the configured limit — this grid does not work for
/// this canvas, which is an answer, not a failure.
pub fn evaluate_custom_grid(
    cols: u32,
    rows: u32,
    requested_images: u32,
    target_size: u32,
    weights: &CostWeights,
) -> Result<Option<LayoutCandidate>, SearchError> {
    if cols == 0 || rows == 0 {
        return Err(SearchError::DegenerateGrid);
    }
    validate_inputs(requested_images, target_size)?;

    let grid_slots = cols * rows;
    let used = grid_slots.min(requested_images);
    let usage = Usage::new(used, requested_images, weights);

    let best_fit = explore_scale_range(cols, rows, target_size, weights)
        .into_iter()
        .min_by(|a, b| a.fit_cost.total_cmp(&b.fit_cost));

    Ok(best_fit.map(|fit| LayoutCandidate::compose(cols, rows, usage, fit)))
}
