//! Viewport layout math for a carousel track.
//!
//! Pure functions deriving how many cards are visible and the furthest
//! valid scroll index from live measurements. Recomputed on mount and on
//! every terminal-resize event.

/// Derived layout parameters for one carousel track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Rendered width of a single item (0.0 when the track is empty)
    pub item_width: f64,
    /// Spacing between adjacent items
    pub gap: f64,
    /// Number of items simultaneously visible
    pub items_per_view: usize,
    /// Highest valid scroll index
    pub max_index: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            item_width: 0.0,
            gap: 0.0,
            items_per_view: 1,
            max_index: 0,
        }
    }
}

impl Layout {
    /// Compute layout parameters from live measurements.
    ///
    /// `items_per_view` rounds the viewport/item ratio rather than
    /// flooring it, so a fractional fit counts the partially cropped
    /// trailing item as visible. `gap` falls back to `fallback_gap` when
    /// the layout provides no measured value.
    pub fn compute(
        item_count: usize,
        item_width: f64,
        gap: Option<f64>,
        viewport_width: f64,
        fallback_gap: f64,
    ) -> Self {
        let gap = gap.unwrap_or(fallback_gap);
        let divisor = if item_width > 0.0 { item_width } else { 1.0 };
        let per_view = (viewport_width / divisor).round().max(1.0) as usize;
        let items_per_view = per_view.min(item_count.max(1));
        let max_index = item_count.saturating_sub(items_per_view);
        Self {
            item_width,
            gap,
            items_per_view,
            max_index,
        }
    }

    /// Horizontal distance between the leading edges of adjacent items
    #[inline]
    pub fn stride(&self) -> f64 {
        self.item_width + self.gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit() {
        let layout = Layout::compute(6, 30.0, Some(2.0), 90.0, 20.0);
        assert_eq!(layout.items_per_view, 3);
        assert_eq!(layout.max_index, 3);
        assert!((layout.stride() - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rounding_counts_partial_item() {
        // 105 / 30 = 3.5 rounds up: the cropped fourth card counts as visible
        let layout = Layout::compute(6, 30.0, Some(2.0), 105.0, 20.0);
        assert_eq!(layout.items_per_view, 4);
        assert_eq!(layout.max_index, 2);

        // 100 / 30 = 3.33 rounds down
        let layout = Layout::compute(6, 30.0, Some(2.0), 100.0, 20.0);
        assert_eq!(layout.items_per_view, 3);
    }

    #[test]
    fn test_clamped_to_item_count() {
        let layout = Layout::compute(2, 10.0, Some(2.0), 500.0, 20.0);
        assert_eq!(layout.items_per_view, 2);
        assert_eq!(layout.max_index, 0);
    }

    #[test]
    fn test_narrow_viewport_floors_to_one() {
        let layout = Layout::compute(5, 30.0, Some(2.0), 10.0, 20.0);
        assert_eq!(layout.items_per_view, 1);
        assert_eq!(layout.max_index, 4);
    }

    #[test]
    fn test_zero_items() {
        let layout = Layout::compute(0, 0.0, None, 120.0, 20.0);
        assert_eq!(layout.items_per_view, 1);
        assert_eq!(layout.max_index, 0);
        assert!((layout.item_width - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_item_width_does_not_divide_by_zero() {
        let layout = Layout::compute(4, 0.0, Some(2.0), 120.0, 20.0);
        // viewport / 1 clamped to item count
        assert_eq!(layout.items_per_view, 4);
        assert_eq!(layout.max_index, 0);
    }

    #[test]
    fn test_gap_fallback() {
        let layout = Layout::compute(3, 30.0, None, 90.0, 20.0);
        assert!((layout.gap - 20.0).abs() < f64::EPSILON);

        let layout = Layout::compute(3, 30.0, Some(4.0), 90.0, 20.0);
        assert!((layout.gap - 4.0).abs() < f64::EPSILON);
    }
}
