//! Gooey: anchor-based integer layout for game HUDs and overlays.
//!
//! Re-exports the geometry of `gooey-core` at the root and the layout
//! engine under [`layout`]. Most callers only need the [`prelude`].
//!
//! ```
//! use gooey::prelude::*;
//!
//! let mut bar = IconBar::new();
//! let hearts = IconGroup::new(
//!     StaticLayout::fixed(Vector::new(9, 9))?,
//!     StaticLayout::fixed(Vector::new(5, 9))?,
//! );
//! bar.add_group(&hearts, 20);
//!
//! let mut grid = bar.build(GridConfig::new().with_line_size(10))?;
//! let screen = Rect::new(0, 0, 320, 240)?;
//! let placed = LayoutEngine::new().layout(&mut grid, screen, Direction::SouthWest)?;
//! assert_eq!(placed, screen);
//! # Ok::<(), LayoutError>(())
//! ```

pub use gooey_core::*;
pub use gooey_layout as layout;

/// Everything needed to build and lay out a tree.
pub mod prelude {
    pub use gooey_core::{Direction, DirectionOptions, Rect, Vector};
    pub use gooey_layout::{
        GridConfig, GridLayout, GroupConfig, GroupLayout, IconBar, IconGroup, LayeredLayout,
        Layout, LayoutEngine, LayoutError, SizeRange, Spacing, StaticLayout,
    };
}
