//! Arrow endpoint distribution and high-fan-out condensation.

use crate::geometry::centered_region;

/// Small fan-outs sit inside a centered share of the rectangle width.
pub const CENTERED_FRACTION: f32 = 0.6;
/// Up to this many arrows use the centered region; beyond it the full width.
pub const CENTERED_MAX: usize = 4;
/// Above this total, only the first/last two arrows render around an "…".
pub const CONDENSE_THRESHOLD: usize = 8;
/// Arrows rendered on each side of the ellipsis marker.
pub const EDGE_ARROWS: usize = 2;
/// Minimum gap between the two arrows of a condensed half-region.
pub const MIN_SPACING: f32 = 14.0;

/// Rendered endpoint positions for one node's output arrows.
///
/// `full_count` is always the logical stream count; `positions` may be
/// reduced to 4 by condensation, in which case `ellipsis_x` marks where the
/// "…" goes.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowSpan {
    pub positions: Vec<f32>,
    pub full_count: usize,
    pub ellipsis_x: Option<f32>,
}

impl ArrowSpan {
    pub fn empty() -> Self {
        Self {
            positions: Vec::new(),
            full_count: 0,
            ellipsis_x: None,
        }
    }

    pub fn condensed(&self) -> bool {
        self.ellipsis_x.is_some()
    }
}

/// Evenly distributes `count` x-positions across `[x, x + width]`, using the
/// centered sub-region for small counts so the drawing stays balanced.
pub fn distribute(count: usize, x: f32, width: f32) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    let (region_x, region_width) = if count <= CENTERED_MAX {
        centered_region(x, width, CENTERED_FRACTION)
    } else {
        (x, width)
    };
    let step = region_width / (count as f32 + 1.0);
    (0..count)
        .map(|index| region_x + step * (index as f32 + 1.0))
        .collect()
}

/// Output endpoint positions for a node of the given width, applying
/// first/ellipsis/last condensation above the threshold.
pub fn output_positions(count: usize, x: f32, width: f32) -> ArrowSpan {
    if count == 0 {
        return ArrowSpan::empty();
    }
    if count <= CONDENSE_THRESHOLD {
        return ArrowSpan {
            positions: distribute(count, x, width),
            full_count: count,
            ellipsis_x: None,
        };
    }

    let (region_x, region_width) = centered_region(x, width, CENTERED_FRACTION);
    let half_width = region_width / 2.0;
    let positions = if MIN_SPACING * EDGE_ARROWS as f32 <= half_width {
        // Two arrows per half-region, pinched around each half's center.
        let mut placed = Vec::with_capacity(EDGE_ARROWS * 2);
        for half in 0..2 {
            let center = region_x + half_width * (half as f32 + 0.5);
            placed.push(center - MIN_SPACING / 2.0);
            placed.push(center + MIN_SPACING / 2.0);
        }
        placed
    } else {
        distribute(EDGE_ARROWS * 2, x, width)
    };

    ArrowSpan {
        positions,
        full_count: count,
        ellipsis_x: Some(region_x + region_width / 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_is_empty() {
        let span = output_positions(0, 0.0, 240.0);
        assert!(span.positions.is_empty());
        assert_eq!(span.full_count, 0);
        assert!(!span.condensed());
    }

    #[test]
    fn small_counts_use_centered_region() {
        let span = output_positions(2, 100.0, 200.0);
        assert_eq!(span.positions.len(), 2);
        // Centered region is [160, 280]; both endpoints must stay inside it.
        for position in &span.positions {
            assert!(*position > 160.0 && *position < 280.0);
        }
    }

    #[test]
    fn larger_counts_use_full_width() {
        let positions = distribute(6, 0.0, 240.0);
        assert_eq!(positions.len(), 6);
        assert!(positions[0] < 240.0 * 0.2, "expected spill outside centered region");
    }

    #[test]
    fn up_to_threshold_renders_every_arrow() {
        for count in 1..=CONDENSE_THRESHOLD {
            let span = output_positions(count, 0.0, 240.0);
            assert_eq!(span.positions.len(), count);
            assert_eq!(span.full_count, count);
            assert!(span.ellipsis_x.is_none());
        }
    }

    #[test]
    fn above_threshold_condenses_to_four() {
        let span = output_positions(20, 0.0, 240.0);
        assert_eq!(span.positions.len(), 4);
        assert_eq!(span.full_count, 20);
        let ellipsis = span.ellipsis_x.expect("ellipsis marker");
        assert!(span.positions[1] < ellipsis && ellipsis < span.positions[2]);
    }

    #[test]
    fn condensed_positions_are_increasing() {
        let span = output_positions(32, 50.0, 240.0);
        for pair in span.positions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn narrow_node_falls_back_to_even_spacing() {
        // Centered half-region of a 40px node is 12px, below the minimum
        // spacing for two arrows, so spacing falls back to an even spread.
        let span = output_positions(12, 0.0, 40.0);
        assert_eq!(span.positions.len(), 4);
        assert_eq!(span.full_count, 12);
        for pair in span.positions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
