//! # Collage Layout
//!
//! Grid-layout optimizer for photo collages: given a count of 3:4 portrait
//! tiles and a square canvas size, find the `cols × rows` grid and integer
//! cell scale that best balance leaving images out, wasting canvas on
//! transparent padding, and cropping into photos.
//!
//! The whole crate is a pure function of `(count, target size, cost
//! weights)` to a ranked set of candidate geometries. It never touches
//! pixels, files, or the network — the render pipeline, manifest writer, and
//! upload steps are separate consumers of the [`LayoutCandidate`] values
//! produced here.
//!
//! # Architecture: A Pruned Two-Dimensional Search
//!
//! Cells are exact `(3k, 4k)` rectangles for an integer scale `k`, so the
//! search space is (grid shape × cell scale):
//!
//! | Module | Role |
//! |--------|------|
//! | [`factorize`] | divisor pairs of an image count near the 4/3 grid ratio |
//! | [`fit`] | pixel-exact geometry + cost of one shape at one scale |
//! | [`explore`] | per-shape scale sweep with dominance pruning |
//! | [`search`] | omission-bounded walk across image counts |
//! | [`select`] | ranking, truncation, and caller-chosen custom grids |
//! | [`candidate`] | the immutable [`LayoutCandidate`] value type |
//! | [`config`] | explicit [`CostWeights`] — no global tuning state |
//! | [`output`] | plain-text summary at the human-facing boundary |
//!
//! # Design Decisions
//!
//! ## Integer-Exact Geometry
//!
//! The scale `k` stays integral so every cell, collage, padding, and clip
//! amount is a whole pixel count. Nothing downstream ever rounds: the
//! renderer tiles `(3k, 4k)` cells and applies the per-axis padding/clipping
//! exactly as reported.
//!
//! ## Two Independent Pruning Arguments
//!
//! The search leans on two monotonicity facts, kept in separate functions so
//! a regression in one cannot hide behind the other:
//!
//! - **Omission bound** ([`search::optimize_for_count`]): omission cost only
//!   grows as fewer images are used, so once it alone exceeds the best total
//!   score the walk stops.
//! - **Dominance prune** ([`explore::prune_dominated`]): for a fixed shape,
//!   padding only grows as `k` shrinks, so inside the pad-both band only the
//!   largest scale can win.
//!
//! Each is sound on its own; jointly they are a heuristic, not an exhaustive
//! guarantee. In rare edge cases a larger omission paired with a much better
//! fit may be missed. This is a documented limitation of the smart search,
//! accepted for its tiny search space.
//!
//! ## Explicit Cost Weights
//!
//! All tunables travel in one immutable [`CostWeights`] value passed into
//! every entry point. Comparing layouts under different weight profiles is a
//! matter of calling twice with two values — no globals to swap.
//!
//! # Example
//!
//! ```
//! use collage_layout::{CostWeights, describe_layout, top_layouts};
//!
//! let weights = CostWeights::default();
//! let top = top_layouts(266, 4096, 3, &weights).unwrap();
//!
//! // 266 = 19 × 14, ratio ≈ 1.357 — close enough to 4/3 to use every image.
//! assert_eq!((top[0].cols, top[0].rows), (19, 14));
//! assert_eq!(top[0].omitted_images, 0);
//! println!("{}", describe_layout(&top[0]));
//! ```

pub mod candidate;
pub mod config;
pub mod explore;
pub mod factorize;
pub mod fit;
pub mod output;
pub mod search;
pub mod select;

pub use candidate::{LayoutCandidate, Usage};
pub use config::{ConfigError, CostWeights};
pub use explore::{explore_scale_range, prune_dominated, scale_window};
pub use factorize::{DEFAULT_TARGET_RATIO, FactorizationParams, find_factorizations};
pub use fit::{CellFit, FitStrategy, evaluate_cell_fit};
pub use output::describe_layout;
pub use search::{
    DEFAULT_TARGET_SIZE, SearchError, optimize_for_count, optimize_for_count_par,
};
pub use select::{DEFAULT_TOP_N, evaluate_custom_grid, top_layouts};
