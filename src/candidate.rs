//! Value types returned to callers of the layout search.
//!
//! A [`LayoutCandidate`] is composed exactly once — geometry from the cell
//! fit, omission bookkeeping from the search — and never mutated afterwards.
//! The struct is flat and serde-serializable so downstream collaborators
//! (render pipeline, manifest writer, human-facing summaries) can read every
//! field they need without reaching back into the optimizer.

use serde::{Deserialize, Serialize};

use crate::config::CostWeights;
use crate::fit::{CellFit, FitStrategy};

/// Omission bookkeeping for one choice of `used_images`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub used_images: u32,
    pub omitted_images: u32,
    /// `omitted / requested`, in `[0, 1)`.
    pub omit_fraction: f64,
    /// `omit_base_cost * omit_fraction`.
    pub omit_cost: f64,
}

impl Usage {
    /// Omission cost for keeping `used` of `requested` available images.
    ///
    /// Callers guarantee `1 <= used <= requested`.
    pub fn new(used: u32, requested: u32, weights: &CostWeights) -> Self {
        let omitted = requested - used;
        let omit_fraction = omitted as f64 / requested as f64;
        Self {
            used_images: used,
            omitted_images: omitted,
            omit_fraction,
            omit_cost: weights.omit_base_cost * omit_fraction,
        }
    }
}

/// One fully-scored grid layout: shape, cell geometry, padding/clipping, and
/// the cost breakdown that ranked it.
///
/// Invariants for every candidate the search returns:
/// - `grid_slots == cols * rows` and `grid_slots >= used_images`
/// - `cell_width == 3k`, `cell_height == 4k` (exact 3:4 aspect)
/// - `clip_fraction_h` and `clip_fraction_v` never exceed the configured
///   `max_clip_fraction`
/// - `total_score == omit_cost + fit_cost`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutCandidate {
    pub cols: u32,
    pub rows: u32,
    pub grid_slots: u32,
    pub used_images: u32,
    pub omitted_images: u32,
    pub omit_fraction: f64,
    pub omit_cost: f64,
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
    pub clip_fraction_h: f64,
    pub clip_fraction_v: f64,
    pub fit_cost: f64,
    pub total_score: f64,
}

impl LayoutCandidate {
    /// Combine a shape, its omission bookkeeping, and one cell fit into a
    /// scored candidate.
    pub fn compose(cols: u32, rows: u32, usage: Usage, fit: CellFit) -> Self {
        Self {
            cols,
            rows,
            grid_slots: cols * rows,
            used_images: usage.used_images,
            omitted_images: usage.omitted_images,
            omit_fraction: usage.omit_fraction,
            omit_cost: usage.omit_cost,
            k: fit.k,
            strategy: fit.strategy,
            cell_width: fit.cell_width,
            cell_height: fit.cell_height,
            collage_width: fit.collage_width,
            collage_height: fit.collage_height,
            padding_h: fit.padding_h,
            padding_v: fit.padding_v,
            clip_h: fit.clip_h,
            clip_v: fit.clip_v,
            clip_fraction_h: fit.clip_fraction_h,
            clip_fraction_v: fit.clip_fraction_v,
            fit_cost: fit.fit_cost,
            total_score: usage.omit_cost + fit.fit_cost,
        }
    }

    /// Grid positions left unfilled (`grid_slots - used_images`). Nonzero
    /// only for caller-supplied custom grids; the factorization search fills
    /// every slot.
    pub fn empty_slots(&self) -> u32 {
        self.grid_slots - self.used_images
    }
}
