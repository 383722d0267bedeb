//! Bars of icons counted in half units, like a health bar of hearts.
//!
//! Each cell of the bar holds two half units. A group whose value is odd
//! ends in a trailing half icon. When the next group is added, its leading
//! half icon is layered into that open cell so the two groups share it.

use crate::error::LayoutError;
use crate::grid::{GridConfig, GridLayout};
use crate::layered::LayeredLayout;
use crate::layout::Layout;
use gooey_core::Direction;

/// The three pieces a group of icons is drawn with.
#[derive(Debug, Clone)]
pub struct IconGroup<T> {
    /// Right half of an icon, layered into a cell left open by the
    /// previous group. `None` leaves that half empty.
    pub leading: Option<T>,
    /// A whole icon filling a cell.
    pub full: T,
    /// Left half of an icon, closing an odd group.
    pub trailing: T,
}

impl<T> IconGroup<T> {
    /// A group without a leading half.
    pub const fn new(full: T, trailing: T) -> Self {
        Self {
            leading: None,
            full,
            trailing,
        }
    }

    #[must_use]
    pub fn with_leading(mut self, leading: T) -> Self {
        self.leading = Some(leading);
        self
    }
}

/// Accumulates icon groups into layered cells.
#[derive(Debug, Clone)]
pub struct IconBar<T> {
    cells: Vec<LayeredLayout<T>>,
    half_points: usize,
    open_half: bool,
}

impl<T> Default for IconBar<T> {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            half_points: 0,
            open_half: false,
        }
    }
}

impl<T: Layout + Clone> IconBar<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Half units filled so far.
    #[must_use]
    pub const fn total_half_points(&self) -> usize {
        self.half_points
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn cells(&self) -> &[LayeredLayout<T>] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.half_points = 0;
        self.open_half = false;
    }

    /// Append a whole cell outside the half-unit count.
    pub fn push(&mut self, icon: T) {
        self.cells.push(cell(icon));
        self.open_half = false;
        self.half_points = self.cells.len() * 2;
    }

    /// Append `half_points` half units drawn with `group`.
    pub fn add_group(&mut self, group: &IconGroup<T>, half_points: usize) {
        self.sync_half_points();
        self.fill_to(group, self.half_points + half_points);
    }

    /// Append half units drawn with `group` until the bar holds `total`.
    /// Does nothing if it already holds that many.
    pub fn fill_group(&mut self, group: &IconGroup<T>, total: usize) {
        self.sync_half_points();
        self.fill_to(group, total);
    }

    /// Arrange the cells in a grid.
    pub fn build(self, config: GridConfig) -> Result<GridLayout<LayeredLayout<T>>, LayoutError> {
        GridLayout::new(config, self.cells)
    }

    /// An odd count only survives while the last cell is still the open
    /// trailing half.
    fn sync_half_points(&mut self) {
        if self.half_points % 2 == 0 || self.cells.is_empty() || !self.open_half {
            self.half_points = self.cells.len() * 2;
        }
    }

    fn fill_to(&mut self, group: &IconGroup<T>, total: usize) {
        if total <= self.half_points {
            return;
        }

        if self.half_points % 2 == 1 {
            if let (Some(leading), Some(last)) = (&group.leading, self.cells.last_mut()) {
                last.push(leading.clone());
            }
            self.half_points += 1;
        }

        let whole = (total - self.half_points) / 2;
        self.cells
            .extend(std::iter::repeat_with(|| cell(group.full.clone())).take(whole));
        self.half_points += whole * 2;

        self.open_half = self.half_points != total;
        if self.open_half {
            self.cells.push(cell(group.trailing.clone()));
            self.half_points += 1;
        }

        tracing::trace!(
            cells = self.cells.len(),
            half_points = self.half_points,
            "icon group filled"
        );
    }
}

fn cell<T: Layout>(icon: T) -> LayeredLayout<T> {
    LayeredLayout::new(Direction::Center, vec![icon])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::static_layout::StaticLayout;
    use gooey_core::{Rect, Vector};

    /// Icons are told apart by width.
    fn icon(width: i32) -> StaticLayout {
        StaticLayout::fixed(Vector::new(width, 9)).unwrap()
    }

    const FULL: i32 = 9;
    const TRAILING: i32 = 5;
    const LEADING: i32 = 4;

    fn hearts() -> IconGroup<StaticLayout> {
        IconGroup::new(icon(FULL), icon(TRAILING)).with_leading(icon(LEADING))
    }

    fn armor() -> IconGroup<StaticLayout> {
        IconGroup::new(icon(FULL + 1), icon(TRAILING + 1)).with_leading(icon(LEADING + 1))
    }

    /// Widths of each cell's layers, bottom first.
    fn layout(bar: &IconBar<StaticLayout>) -> Vec<Vec<i32>> {
        bar.cells()
            .iter()
            .map(|cell| cell.layers().iter().map(|l| l.size_hint().x).collect())
            .collect()
    }

    // =========================================================================
    // Half Unit Tests
    // =========================================================================

    #[test]
    fn test_even_group_is_whole_cells() {
        let mut bar = IconBar::new();
        bar.add_group(&hearts(), 6);
        assert_eq!(bar.total_half_points(), 6);
        assert_eq!(layout(&bar), vec![vec![FULL]; 3]);
    }

    #[test]
    fn test_odd_group_ends_with_trailing_half() {
        let mut bar = IconBar::new();
        bar.add_group(&hearts(), 5);
        assert_eq!(bar.total_half_points(), 5);
        assert_eq!(layout(&bar), vec![vec![FULL], vec![FULL], vec![TRAILING]]);
    }

    #[test]
    fn test_leading_half_shares_open_cell() {
        let mut bar = IconBar::new();
        bar.add_group(&hearts(), 3);
        bar.add_group(&armor(), 3);
        assert_eq!(bar.total_half_points(), 6);
        assert_eq!(
            layout(&bar),
            vec![vec![FULL], vec![TRAILING, LEADING + 1], vec![FULL + 1]]
        );
    }

    #[test]
    fn test_missing_leading_half_leaves_gap() {
        let mut bar = IconBar::new();
        bar.add_group(&hearts(), 1);
        bar.add_group(&IconGroup::new(icon(FULL + 1), icon(TRAILING + 1)), 1);
        assert_eq!(bar.total_half_points(), 2);
        assert_eq!(layout(&bar), vec![vec![TRAILING]]);
    }

    #[test]
    fn test_fill_group_tops_up() {
        let mut bar = IconBar::new();
        bar.add_group(&hearts(), 3);
        bar.fill_group(&armor(), 8);
        assert_eq!(bar.total_half_points(), 8);
        assert_eq!(bar.len(), 4);

        bar.fill_group(&armor(), 4);
        assert_eq!(bar.total_half_points(), 8);
        assert_eq!(bar.len(), 4);
    }

    #[test]
    fn test_push_closes_open_half() {
        let mut bar = IconBar::new();
        bar.add_group(&hearts(), 1);
        bar.push(icon(2));
        assert_eq!(bar.total_half_points(), 4);

        bar.add_group(&armor(), 1);
        assert_eq!(layout(&bar), vec![vec![TRAILING], vec![2], vec![TRAILING + 1]]);
        assert_eq!(bar.total_half_points(), 5);
    }

    #[test]
    fn test_clear() {
        let mut bar = IconBar::new();
        bar.add_group(&hearts(), 7);
        bar.clear();
        assert!(bar.is_empty());
        assert_eq!(bar.total_half_points(), 0);
    }

    // =========================================================================
    // Build Tests
    // =========================================================================

    #[test]
    fn test_build_rows_of_ten() {
        let mut bar = IconBar::new();
        bar.add_group(&hearts(), 25);
        let config = GridConfig::new().with_line_size(10);
        let mut grid = bar.build(config).unwrap();
        assert_eq!(grid.len(), 13);
        assert_eq!(grid.size_hint(), Vector::new(90, 18));

        grid.set_bounds(Rect::new(0, 0, 90, 18).unwrap()).unwrap();
        let last = grid.children()[12].layers()[0].bounds().unwrap();
        assert_eq!(last, Rect::new(20, 9, 5, 9).unwrap());
    }
}
