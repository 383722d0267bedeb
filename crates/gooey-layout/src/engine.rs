//! Layout engine implementation.

use crate::error::LayoutError;
use crate::layout::Layout;
use gooey_core::{Direction, Rect};

/// Drives layout passes over a root layout.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    passes: u64,
    last_bounds: Option<Rect>,
}

impl LayoutEngine {
    /// Create a new layout engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out `root` inside `available`.
    ///
    /// The root is asked for the size closest to `available`, placed by
    /// `alignment` and committed. The root may end up larger than
    /// `available` if it cannot shrink that far.
    pub fn layout<L: Layout + ?Sized>(
        &mut self,
        root: &mut L,
        available: Rect,
        alignment: Direction,
    ) -> Result<Rect, LayoutError> {
        let size = root.request_size(available.size());
        let bounds = Rect::sized(size)?.anchor(&available, alignment);
        root.set_bounds(bounds)?;

        self.passes += 1;
        self.last_bounds = Some(bounds);
        tracing::debug!(
            pass = self.passes,
            ?available,
            ?bounds,
            %alignment,
            "layout pass complete"
        );
        Ok(bounds)
    }

    /// Completed passes.
    #[must_use]
    pub const fn passes(&self) -> u64 {
        self.passes
    }

    /// Root bounds from the last completed pass.
    #[must_use]
    pub const fn last_bounds(&self) -> Option<Rect> {
        self.last_bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::static_layout::StaticLayout;
    use gooey_core::Vector;

    #[test]
    fn test_layout_engine_new() {
        let engine = LayoutEngine::new();
        assert_eq!(engine.passes(), 0);
        assert_eq!(engine.last_bounds(), None);
    }

    #[test]
    fn test_fixed_root_anchored() {
        let mut engine = LayoutEngine::new();
        let mut root = StaticLayout::fixed(Vector::new(20, 10)).unwrap();
        let screen = Rect::new(0, 0, 100, 100).unwrap();

        let bounds = engine.layout(&mut root, screen, Direction::SouthEast).unwrap();
        assert_eq!(bounds, Rect::new(80, 90, 20, 10).unwrap());
        assert_eq!(root.bounds(), Ok(bounds));
        assert_eq!(engine.passes(), 1);
        assert_eq!(engine.last_bounds(), Some(bounds));
    }

    #[test]
    fn test_flexible_root_fills_available() {
        let mut engine = LayoutEngine::new();
        let mut root = StaticLayout::any_size(Vector::new(1, 1)).unwrap();
        let screen = Rect::new(5, 5, 60, 40).unwrap();
        assert_eq!(engine.layout(&mut root, screen, Direction::Center), Ok(screen));
    }

    #[test]
    fn test_oversized_root_overflows() {
        let mut engine = LayoutEngine::new();
        let mut root = StaticLayout::fixed(Vector::new(30, 30)).unwrap();
        let screen = Rect::new(0, 0, 10, 10).unwrap();
        let bounds = engine.layout(&mut root, screen, Direction::Center).unwrap();
        assert_eq!(bounds, Rect::new(-10, -10, 30, 30).unwrap());
    }

    #[test]
    fn test_dyn_root() {
        let mut engine = LayoutEngine::new();
        let mut root: Box<dyn Layout> = Box::new(StaticLayout::fixed(Vector::new(4, 4)).unwrap());
        let screen = Rect::new(0, 0, 8, 8).unwrap();
        engine.layout(root.as_mut(), screen, Direction::NorthWest).unwrap();
        assert_eq!(root.bounds().unwrap().position(), Vector::ZERO);
    }
}
