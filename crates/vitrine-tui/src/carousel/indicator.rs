//! Indicator dots for a carousel track.
//!
//! One dot per valid scroll position. The row is rebuilt whenever the
//! layout changes (the dot count follows `max_index`) and re-highlighted
//! after every index change.

/// A single indicator dot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub active: bool,
}

/// The row of indicator dots under one carousel
#[derive(Debug, Clone, Default)]
pub struct DotRow {
    dots: Vec<Dot>,
}

impl DotRow {
    /// Discard all dots and create exactly `max_index + 1` fresh ones,
    /// one per valid scroll position.
    pub fn rebuild(&mut self, max_index: usize) {
        self.dots.clear();
        self.dots.resize(max_index + 1, Dot { active: false });
    }

    /// Mark the dot at `current` active and every other dot inactive.
    /// Out-of-range indices leave every dot inactive.
    pub fn highlight(&mut self, current: usize) {
        for (i, dot) in self.dots.iter_mut().enumerate() {
            dot.active = i == current;
        }
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dot> {
        self.dots.iter()
    }

    /// Index of the active dot, if any
    pub fn active_index(&self) -> Option<usize> {
        self.dots.iter().position(|d| d.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebuild_creates_max_index_plus_one() {
        let mut row = DotRow::default();
        row.rebuild(3);
        assert_eq!(row.len(), 4);

        row.rebuild(0);
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn test_highlight_marks_exactly_one() {
        let mut row = DotRow::default();
        row.rebuild(4);
        row.highlight(2);

        let active: Vec<usize> = row
            .iter()
            .enumerate()
            .filter(|(_, d)| d.active)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, vec![2]);
        assert_eq!(row.active_index(), Some(2));
    }

    #[test]
    fn test_highlight_moves() {
        let mut row = DotRow::default();
        row.rebuild(2);
        row.highlight(0);
        row.highlight(2);
        assert_eq!(row.active_index(), Some(2));
        assert_eq!(row.iter().filter(|d| d.active).count(), 1);
    }

    #[test]
    fn test_rebuild_discards_highlight() {
        let mut row = DotRow::default();
        row.rebuild(4);
        row.highlight(3);
        row.rebuild(1);
        assert_eq!(row.len(), 2);
        assert_eq!(row.active_index(), None);
    }
}
