#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
//! Layout engine for Gooey.
//!
//! Layouts negotiate their size in two phases: a parent asks each child
//! for its preferred size, then commits bounds the child has agreed to.
//!
//! - **Leaves**: [`StaticLayout`] with per-axis [`SizeRange`]s
//! - **Composites**: [`GridLayout`], [`GroupLayout`] and [`LayeredLayout`]
//! - **Icon bars**: [`IconBar`] fills grid cells in half units
//! - **Driver**: [`LayoutEngine`] lays out a root inside a screen rectangle
//!
//! ```
//! use gooey_core::{Direction, Rect, Vector};
//! use gooey_layout::{GridConfig, GridLayout, Layout, LayoutEngine, StaticLayout};
//!
//! let icons = (0..5)
//!     .map(|_| StaticLayout::fixed(Vector::new(10, 10)))
//!     .collect::<Result<Vec<_>, _>>()?;
//! let mut grid = GridLayout::new(GridConfig::new().with_line_size(3), icons)?;
//! assert_eq!(grid.size_hint(), Vector::new(30, 20));
//!
//! let screen = Rect::new(0, 0, 320, 240)?;
//! let placed = LayoutEngine::new().layout(&mut grid, screen, Direction::Center)?;
//! assert_eq!(placed, screen);
//! assert_eq!(grid.children()[4].bounds()?.position(), Vector::new(10, 10));
//! # Ok::<(), gooey_layout::LayoutError>(())
//! ```

mod engine;
mod error;
mod grid;
mod group;
mod icon_bar;
mod layered;
mod layout;
mod range;
mod static_layout;

pub use engine::LayoutEngine;
pub use error::LayoutError;
pub use grid::{GridConfig, GridLayout, Spacing};
pub use group::{GroupConfig, GroupLayout};
pub use icon_bar::{IconBar, IconGroup};
pub use layered::LayeredLayout;
pub use layout::Layout;
pub use range::SizeRange;
pub use static_layout::StaticLayout;
