//! Plain-text formatting of layout candidates.
//!
//! The one formatter here turns a candidate into the multi-line summary
//! shown wherever a human picks between layouts (CLI prompt, approval
//! email, web form). Geometry lines always appear; omission, padding and
//! clipping lines only when they apply, with per-edge amounts since that is
//! what a person checking "how much gets cropped" actually wants to know.
//!
//! ```text
//! 19×14 grid (266 images, 216×288px cells)
//!   Collage: 4104×4032px
//!   Strategy: clip_h_pad_v
//!   Padding V: 32px per edge
//!   Clipping H: 4px per edge (1.9% of cell)
//!   Score: 80.0
//! ```

use crate::candidate::LayoutCandidate;

/// Multi-line human-readable description of one layout.
pub fn describe_layout(layout: &LayoutCandidate) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{}×{} grid ({} images, {}×{}px cells)",
        layout.cols, layout.rows, layout.used_images, layout.cell_width, layout.cell_height
    ));
    lines.push(format!(
        "  Collage: {}×{}px",
        layout.collage_width, layout.collage_height
    ));
    lines.push(format!("  Strategy: {}", layout.strategy));

    if layout.omitted_images > 0 {
        lines.push(format!(
            "  Omitted: {} images ({:.1}%)",
            layout.omitted_images,
            100.0 * layout.omit_fraction
        ));
    }

    if layout.padding_h > 0 {
        lines.push(format!("  Padding H: {}px per edge", layout.padding_h / 2));
    }
    if layout.padding_v > 0 {
        lines.push(format!("  Padding V: {}px per edge", layout.padding_v / 2));
    }

    if layout.clip_h > 0 {
        lines.push(format!(
            "  Clipping H: {}px per edge ({:.1}% of cell)",
            layout.clip_h / 2,
            100.0 * layout.clip_fraction_h
        ));
    }
    if layout.clip_v > 0 {
        lines.push(format!(
            "  Clipping V: {}px per edge ({:.1}% of cell)",
            layout.clip_v / 2,
            100.0 * layout.clip_fraction_v
        ));
    }

    lines.push(format!("  Score: {:.1}", layout.total_score));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CostWeights;
    use crate::select::{evaluate_custom_grid, top_layouts};

    #[test]
    fn describes_geometry_strategy_and_score() {
        let top = top_layouts(266, 4096, 1, &CostWeights::default()).unwrap();
        let text = describe_layout(&top[0]);

        assert!(text.starts_with("19×14 grid (266 images, 216×288px cells)"));
        assert!(text.contains("Collage: 4104×4032px"));
        assert!(text.contains("Strategy: clip_h_pad_v"));
        assert!(text.contains("Padding V: 32px per edge"));
        assert!(text.contains("Clipping H: 4px per edge (1.9% of cell)"));
        assert!(text.ends_with("Score: 80.0"));
    }

    #[test]
    fn omission_line_only_when_images_are_dropped() {
        let weights = CostWeights::default();
        let full = evaluate_custom_grid(4, 3, 12, 4096, &weights)
            .unwrap()
            .unwrap();
        assert!(!describe_layout(&full).contains("Omitted:"));

        let dropping = evaluate_custom_grid(2, 2, 10, 4096, &weights)
            .unwrap()
            .unwrap();
        assert!(describe_layout(&dropping).contains("Omitted: 6 images (60.0%)"));
    }

    #[test]
    fn padding_and_clipping_lines_match_strategy() {
        let weights = CostWeights::default();
        // 5×4 at its best scale pads width only.
        let cand = evaluate_custom_grid(5, 4, 20, 4096, &weights)
            .unwrap()
            .unwrap();
        let text = describe_layout(&cand);
        assert!(text.contains("Padding H: 128px per edge"));
        assert!(!text.contains("Padding V:"));
        assert!(!text.contains("Clipping"));
    }
}
