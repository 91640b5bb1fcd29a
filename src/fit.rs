//! Pixel-exact fit of one grid shape at one cell scale.
//!
//! Cells are always exact 3:4 portrait rectangles sized `(3k, 4k)` for an
//! integer scale `k`, so the tiled collage is `(cols·3k, rows·4k)` with no
//! fractional pixels anywhere. Reaching the square target canvas then means
//! padding the axes that fall short and clipping the axes that overshoot,
//! always split evenly across both edges of the axis.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::CostWeights;

/// Which padding/clipping combination reaches the square canvas.
///
/// Exactly one state holds per candidate: padding and clipping on the same
/// axis are mutually exclusive by construction (one of them is zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitStrategy {
    /// Collage fits inside the canvas on both axes; transparent border only.
    PadBoth,
    /// Too wide, too short: clip horizontally, pad vertically.
    ClipHPadV,
    /// Too tall, too narrow: clip vertically, pad horizontally.
    ClipVPadH,
    /// Collage overshoots the canvas on both axes; crop only.
    ClipBoth,
}

impl fmt::Display for FitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FitStrategy::PadBoth => "pad_both",
            FitStrategy::ClipHPadV => "clip_h_pad_v",
            FitStrategy::ClipVPadH => "clip_v_pad_h",
            FitStrategy::ClipBoth => "clip_both",
        };
        f.write_str(name)
    }
}

/// Geometry and fit cost of one `(cols, rows)` shape at one scale `k`.
///
/// All pixel amounts are totals across the axis; renderers split them evenly
/// across both edges (`padding_h / 2` per side, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellFit {
    pub k: u32,
    pub strategy: FitStrategy,
    pub cell_width: u32,
    pub cell_height: u32,
    pub collage_width: u32,
    pub collage_height: u32,
    pub padding_h: u32,
    pub padding_v: u32,
    pub clip_h: u32,
    pub clip_v: u32,
    /// Fraction of an edge cell's width clipped away on one side (0 when not
    /// clipping horizontally).
    pub clip_fraction_h: f64,
    /// Fraction of an edge cell's height clipped away on one side.
    pub clip_fraction_v: f64,
    pub fit_cost: f64,
}

/// Evaluate a `cols × rows` grid with `(3k, 4k)` cells against a square
/// canvas of `target_size` pixels.
///
/// Returns `None` when clipping would eat more than
/// [`max_clip_fraction`](CostWeights::max_clip_fraction) of an edge cell on
/// either axis. That is an expected, frequent outcome of the scale sweep, not
/// an error.
///
/// ```
/// use collage_layout::{CostWeights, FitStrategy, evaluate_cell_fit};
///
/// // 4×3 grid at k = 100 tiles a 1200px square exactly: no padding, no clip.
/// let fit = evaluate_cell_fit(4, 3, 100, 1200, &CostWeights::default()).unwrap();
/// assert_eq!(fit.strategy, FitStrategy::PadBoth);
/// assert_eq!(fit.fit_cost, 0.0);
/// ```
pub fn evaluate_cell_fit(
    cols: u32,
    rows: u32,
    k: u32,
    target_size: u32,
    weights: &CostWeights,
) -> Option<CellFit> {
    let cell_width = 3 * k;
    let cell_height = 4 * k;

    let collage_width = cols * cell_width;
    let collage_height = rows * cell_height;

    let padding_h = target_size.saturating_sub(collage_width);
    let padding_v = target_size.saturating_sub(collage_height);

    let clip_h = collage_width.saturating_sub(target_size);
    let clip_v = collage_height.saturating_sub(target_size);

    // Clip is split across both edges, so one side loses clip/2 of a cell.
    let clip_fraction_h = if clip_h > 0 {
        clip_h as f64 / 2.0 / cell_width as f64
    } else {
        0.0
    };
    let clip_fraction_v = if clip_v > 0 {
        clip_v as f64 / 2.0 / cell_height as f64
    } else {
        0.0
    };

    if clip_fraction_h > weights.max_clip_fraction || clip_fraction_v > weights.max_clip_fraction {
        return None;
    }

    let strategy = match (clip_h > 0, clip_v > 0) {
        (true, true) => FitStrategy::ClipBoth,
        (true, false) => FitStrategy::ClipHPadV,
        (false, true) => FitStrategy::ClipVPadH,
        (false, false) => FitStrategy::PadBoth,
    };

    let fit_cost = (padding_h + padding_v) as f64 * weights.pad_cost
        + (clip_h + clip_v) as f64 * weights.clip_cost;

    Some(CellFit {
        k,
        strategy,
        cell_width,
        cell_height,
        collage_width,
        collage_height,
        padding_h,
        padding_v,
        clip_h,
        clip_v,
        clip_fraction_h,
        clip_fraction_v,
        fit_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights() -> CostWeights {
        CostWeights::default()
    }

    #[test]
    fn cells_are_exact_three_by_four() {
        let fit = evaluate_cell_fit(5, 3, 80, 1200, &weights()).unwrap();
        assert_eq!(fit.cell_width, 240);
        assert_eq!(fit.cell_height, 320);
        assert_eq!(fit.collage_width, 1200);
        assert_eq!(fit.collage_height, 960);
    }

    #[test]
    fn undersized_collage_pads_both_axes() {
        // 4×3 at k=341 → 4092×4092 inside a 4096 canvas.
        let fit = evaluate_cell_fit(4, 3, 341, 4096, &weights()).unwrap();
        assert_eq!(fit.strategy, FitStrategy::PadBoth);
        assert_eq!((fit.padding_h, fit.padding_v), (4, 4));
        assert_eq!((fit.clip_h, fit.clip_v), (0, 0));
        assert_eq!(fit.fit_cost, 8.0);
    }

    #[test]
    fn wide_collage_clips_h_pads_v() {
        // 5×3 at k=81 → 1215×972 against a 1200 canvas.
        let fit = evaluate_cell_fit(5, 3, 81, 1200, &weights()).unwrap();
        assert_eq!(fit.strategy, FitStrategy::ClipHPadV);
        assert_eq!(fit.clip_h, 15);
        assert_eq!(fit.padding_v, 228);
        assert_eq!(fit.padding_h, 0);
        assert_eq!(fit.clip_v, 0);
        // 228px padding at cost 1 plus 15px clipping at cost 2.
        assert_eq!(fit.fit_cost, 258.0);
    }

    #[test]
    fn tall_collage_clips_v_pads_h() {
        // 5×4 at k=257 → 3855×4112 against a 4096 canvas.
        let fit = evaluate_cell_fit(5, 4, 257, 4096, &weights()).unwrap();
        assert_eq!(fit.strategy, FitStrategy::ClipVPadH);
        assert_eq!(fit.padding_h, 241);
        assert_eq!(fit.clip_v, 16);
    }

    #[test]
    fn oversized_collage_clips_both_axes() {
        let fit = evaluate_cell_fit(4, 3, 342, 4096, &weights()).unwrap();
        assert_eq!(fit.strategy, FitStrategy::ClipBoth);
        assert_eq!((fit.clip_h, fit.clip_v), (8, 8));
        assert_eq!(fit.fit_cost, 32.0);
    }

    #[test]
    fn clip_fractions_are_per_edge() {
        let fit = evaluate_cell_fit(4, 3, 342, 4096, &weights()).unwrap();
        // 8px total clip, 4px per edge, over a 1026px-wide cell.
        assert!((fit.clip_fraction_h - 4.0 / 1026.0).abs() < 1e-12);
        assert!((fit.clip_fraction_v - 4.0 / 1368.0).abs() < 1e-12);
    }

    #[test]
    fn clip_fraction_zero_without_clipping() {
        let fit = evaluate_cell_fit(4, 3, 341, 4096, &weights()).unwrap();
        assert_eq!(fit.clip_fraction_h, 0.0);
        assert_eq!(fit.clip_fraction_v, 0.0);
    }

    #[test]
    fn excessive_clip_is_infeasible() {
        // 1×1 at k=80 against a 100px canvas: 320px tall, 220px clipped,
        // 110/320 ≈ 34% per edge — past the 33% limit.
        assert!(evaluate_cell_fit(1, 1, 80, 100, &weights()).is_none());
        // k=67 stays under the limit on both axes.
        assert!(evaluate_cell_fit(1, 1, 67, 100, &weights()).is_some());
    }

    #[test]
    fn weights_scale_the_fit_cost() {
        let custom = CostWeights {
            pad_cost: 2.0,
            clip_cost: 5.0,
            ..CostWeights::default()
        };
        let fit = evaluate_cell_fit(5, 3, 81, 1200, &custom).unwrap();
        assert_eq!(fit.fit_cost, 228.0 * 2.0 + 15.0 * 5.0);
    }

    #[test]
    fn strategy_serializes_as_snake_case() {
        let json = serde_json::to_string(&FitStrategy::ClipHPadV).unwrap();
        assert_eq!(json, "\"clip_h_pad_v\"");
        assert_eq!(FitStrategy::ClipHPadV.to_string(), "clip_h_pad_v");
    }
}
