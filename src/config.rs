//! Cost-weight configuration for the layout search.
//!
//! Every entry point takes an explicit, immutable [`CostWeights`] value —
//! there is no ambient/global tuning state, so two searches with different
//! weight profiles can run side by side and compare results.
//!
//! Weights can be loaded from a TOML profile where only the fields being
//! tuned need to appear:
//!
//! ```
//! use collage_layout::CostWeights;
//!
//! let weights = CostWeights::from_toml_str("clip_cost = 4.0").unwrap();
//! assert_eq!(weights.clip_cost, 4.0);
//! assert_eq!(weights.pad_cost, 1.0); // untouched fields keep their defaults
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse weight profile: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid weights: {0}")]
    Validation(String),
}

/// Tunable cost weights for ranking layout candidates.
///
/// Lower total score is better. The defaults are calibrated so that omitting
/// every image costs `omit_base_cost` (1500), one pixel of padding costs 1,
/// and one pixel of clipping costs 2 — cropping into photos is twice as bad
/// as wasting transparent canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostWeights {
    /// Penalty per unfilled grid slot. The factorization search always fills
    /// every slot (`used_images == cols * rows`), so this weight is carried
    /// for profile compatibility and reporting; it does not enter scoring.
    pub empty_slot_cost: f64,
    /// Base cost for omitting images, scaled by the fraction omitted.
    pub omit_base_cost: f64,
    /// Cost per pixel of transparent padding (total across an axis).
    pub pad_cost: f64,
    /// Cost per pixel of clipping (total across an axis).
    pub clip_cost: f64,
    /// Maximum fraction of a cell's edge that may be clipped away on one
    /// side. Candidates past this are discarded, not scored.
    pub max_clip_fraction: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            empty_slot_cost: 100_000.0,
            omit_base_cost: 1500.0,
            pad_cost: 1.0,
            clip_cost: 2.0,
            max_clip_fraction: 0.33,
        }
    }
}

impl CostWeights {
    /// Parse a (possibly partial) TOML weight profile and validate it.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let weights: CostWeights = toml::from_str(s)?;
        weights.validate()?;
        Ok(weights)
    }

    /// Check that all weights are finite and non-negative and that the clip
    /// limit is a sensible fraction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let costs = [
            ("empty_slot_cost", self.empty_slot_cost),
            ("omit_base_cost", self.omit_base_cost),
            ("pad_cost", self.pad_cost),
            ("clip_cost", self.clip_cost),
        ];
        for (name, value) in costs {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a non-negative finite number, got {value}"
                )));
            }
        }
        if !self.max_clip_fraction.is_finite() || !(0.0..1.0).contains(&self.max_clip_fraction) {
            return Err(ConfigError::Validation(format!(
                "max_clip_fraction must be in [0, 1), got {}",
                self.max_clip_fraction
            )));
        }
        Ok(())
    }
}
