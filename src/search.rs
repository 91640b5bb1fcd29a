//! Omission-bounded search across image counts and grid shapes.
//!
//! The orchestrator walks `used_images` from the full count down to one,
//! factorizes each count into near-square-friendly shapes, and sweeps cell
//! scales per shape. Omission cost only grows as fewer images are used, so
//! the walk stops as soon as omission alone costs more than the best total
//! score seen — no smaller count can win from there.
//!
//! Both pruning heuristics (this global bound and the per-shape dominance
//! prune in [`explore`](crate::explore)) are independently sound but not
//! proven jointly optimal: in rare edge cases a larger omission paired with a
//! much better fit could be missed. That is a deliberate "smart search"
//! trade-off, not a bug to fix silently.

use rayon::prelude::*;
use thiserror::Error;

use crate::candidate::{LayoutCandidate, Usage};
use crate::config::CostWeights;
use crate::explore::explore_scale_range;
use crate::factorize::{FactorizationParams, find_factorizations};

/// Square canvas edge the render pipeline publishes at.
pub const DEFAULT_TARGET_SIZE: u32 = 4096;

/// Grid shapes considered per image count.
const SHAPES_PER_COUNT: usize = 5;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Requested image count must be at least 1")]
    NoImages,

    #[error("Target size must be at least 1 pixel")]
    ZeroTarget,

    #[error("Grid shape must have at least one column and one row")]
    DegenerateGrid,
}

pub(crate) fn validate_inputs(requested_images: u32, target_size: u32) -> Result<(), SearchError> {
    if requested_images == 0 {
        return Err(SearchError::NoImages);
    }
    if target_size == 0 {
        return Err(SearchError::ZeroTarget);
    }
    Ok(())
}

fn shape_params() -> FactorizationParams {
    FactorizationParams {
        max_candidates: SHAPES_PER_COUNT,
        ..FactorizationParams::default()
    }
}

/// All viable candidates for one `used` count.
fn candidates_for_usage(
    used: u32,
    requested: u32,
    target_size: u32,
    weights: &CostWeights,
) -> Vec<LayoutCandidate> {
    let usage = Usage::new(used, requested, weights);
    let mut candidates = Vec::new();

    for (cols, rows) in find_factorizations(used, &shape_params()) {
        for fit in explore_scale_range(cols, rows, target_size, weights) {
            candidates.push(LayoutCandidate::compose(cols, rows, usage, fit));
        }
    }

    candidates
}

/// Explore every viable `(used_images, shape, k)` configuration for
/// `requested_images` available images.
///
/// Returns the full, unsorted candidate set; [`top_layouts`](crate::select::top_layouts)
/// ranks it. At least one candidate always exists: the walk never stops
/// before the first candidate is found, and `used = 1` always factors
/// into 1×1.
pub fn optimize_for_count(
    requested_images: u32,
    target_size: u32,
    weights: &CostWeights,
) -> Result<Vec<LayoutCandidate>, SearchError> {
    validate_inputs(requested_images, target_size)?;

    let mut all = Vec::new();
    let mut best_score = f64::INFINITY;

    for used in (1..=requested_images).rev() {
        let omitted = requested_images - used;
        let omit_cost = weights.omit_base_cost * omitted as f64 / requested_images as f64;

        // Omission cost only grows from here; once it alone beats the best
        // total, nothing below this count can improve on it.
        if omit_cost > best_score {
            break;
        }

        for candidate in candidates_for_usage(used, requested_images, target_size, weights) {
            if candidate.total_score < best_score {
                best_score = candidate.total_score;
            }
            all.push(candidate);
        }
    }

    Ok(all)
}

/// Parallel variant of [`optimize_for_count`] for very large image counts.
///
/// The full-usage count is evaluated first to seed the omission bound, then
/// the remaining counts are filtered against that seed and evaluated with
/// rayon. Because the seed never tightens mid-search the bound is relaxed:
/// the result is a superset of the serial candidate set (same candidates in
/// the same order, possibly followed by extra tail entries the serial walk
/// stopped before), so the ranked top layouts are identical.
pub fn optimize_for_count_par(
    requested_images: u32,
    target_size: u32,
    weights: &CostWeights,
) -> Result<Vec<LayoutCandidate>, SearchError> {
    validate_inputs(requested_images, target_size)?;

    let mut all = candidates_for_usage(requested_images, requested_images, target_size, weights);
    let seed_score = all
        .iter()
        .map(|c| c.total_score)
        .fold(f64::INFINITY, f64::min);

    let counts: Vec<u32> = (1..requested_images).rev().collect();
    let rest: Vec<LayoutCandidate> = counts
        .into_par_iter()
        .filter(|&used| {
            let omitted = requested_images - used;
            weights.omit_base_cost * omitted as f64 / requested_images as f64 <= seed_score
        })
        .flat_map_iter(|used| candidates_for_usage(used, requested_images, target_size, weights))
        .collect();

    all.extend(rest);
    Ok(all)
}
