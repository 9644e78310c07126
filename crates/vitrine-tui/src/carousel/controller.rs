//! Carousel controller.
//!
//! Owns the single piece of mutable state (the current index) and composes
//! the layout calculator, indicator row, and autoplay timer. One instance
//! per showcase section; instances are fully independent.

use std::time::{Duration, Instant};

use vitrine_core::config::CarouselConfig;

use super::autoplay::AutoplayTimer;
use super::indicator::DotRow;
use super::layout::Layout;

/// Looping carousel over a fixed set of items.
///
/// Navigation wraps at both ends: stepping past the last valid index
/// returns to the start, stepping before the first returns to the end.
/// Dropping the controller cancels its autoplay timer with it.
#[derive(Debug, Clone)]
pub struct Carousel {
    item_count: usize,
    layout: Layout,
    current: usize,
    dots: DotRow,
    autoplay: AutoplayTimer,
    fallback_gap: f64,
    hovered: bool,
}

impl Carousel {
    pub fn new(item_count: usize, config: &CarouselConfig) -> Self {
        let mut dots = DotRow::default();
        dots.rebuild(0);
        dots.highlight(0);
        Self {
            item_count,
            layout: Layout::default(),
            current: 0,
            dots,
            autoplay: AutoplayTimer::new(Duration::from_millis(config.autoplay_interval_ms)),
            fallback_gap: config.fallback_gap,
            hovered: false,
        }
    }

    /// Recompute the layout from live measurements, rebuild the dot row,
    /// and re-apply the current position. Called on mount and on every
    /// terminal-resize event.
    ///
    /// A shrink that invalidates the current index snaps back to the
    /// start, not to the nearest valid index.
    pub fn remeasure(&mut self, item_width: f64, gap: Option<f64>, viewport_width: f64) {
        self.layout = Layout::compute(
            self.item_count,
            item_width,
            gap,
            viewport_width,
            self.fallback_gap,
        );
        self.dots.rebuild(self.layout.max_index);
        if self.current > self.layout.max_index {
            self.current = 0;
        }
        self.go_to(self.current as isize);
    }

    /// Move to the requested index, wrapping out-of-range requests by a
    /// single step: below zero lands on the last valid index, past the
    /// end lands on the first. Returns the applied index.
    pub fn go_to(&mut self, requested: isize) -> usize {
        self.current = if requested < 0 {
            self.layout.max_index
        } else if requested as usize > self.layout.max_index {
            0
        } else {
            requested as usize
        };
        self.dots.highlight(self.current);
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.current as isize + 1)
    }

    pub fn previous(&mut self) -> usize {
        self.go_to(self.current as isize - 1)
    }

    /// Track offset for an index: the distance from the start of the
    /// track to that item's leading edge.
    #[inline]
    pub fn offset_for(&self, index: usize) -> f64 {
        index as f64 * self.layout.stride()
    }

    /// Track offset for the current index
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset_for(self.current)
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn dots(&self) -> &DotRow {
        &self.dots
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[inline]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Arm the autoplay timer (replacing any prior deadline)
    pub fn start_autoplay(&mut self, now: Instant) {
        self.autoplay.start(now);
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop();
    }

    /// Pointer entered the track: suspend autoplay
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.autoplay.stop();
    }

    /// Pointer left the track: resume autoplay with the same interval
    pub fn pointer_leave(&mut self, now: Instant) {
        self.hovered = false;
        self.autoplay.start(now);
    }

    /// Advance one step if the autoplay interval has elapsed. Returns
    /// true when an advance happened.
    pub fn poll_autoplay(&mut self, now: Instant) -> bool {
        if self.autoplay.tick(now) {
            self.next();
            true
        } else {
            false
        }
    }
}
