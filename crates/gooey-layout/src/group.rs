//! Single-line groups, a convenience over [`GridLayout`].

use crate::error::LayoutError;
use crate::grid::{GridConfig, GridLayout, Spacing};
use crate::layout::Layout;
use gooey_core::{Direction, DirectionOptions, Rect, Vector};
use serde::{Deserialize, Serialize};

/// Group configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Side the group grows towards.
    pub direction: Direction,
    /// Where each child sits inside its cell.
    pub cell_alignment: Direction,
    /// Lower bound for the distance between cell origins on the group axis.
    pub min_pitch: i32,
    /// Gap between cells on the group axis.
    pub min_gutter: i32,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            direction: Direction::East,
            cell_alignment: Direction::Center,
            min_pitch: 0,
            min_gutter: 0,
        }
    }
}

impl GroupConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub const fn with_cell_alignment(mut self, alignment: Direction) -> Self {
        self.cell_alignment = alignment;
        self
    }

    #[must_use]
    pub const fn with_min_pitch(mut self, min_pitch: i32) -> Self {
        self.min_pitch = min_pitch;
        self
    }

    #[must_use]
    pub const fn with_min_gutter(mut self, min_gutter: i32) -> Self {
        self.min_gutter = min_gutter;
        self
    }

    /// Check the direction is one of the four sides.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !DirectionOptions::Sides.contains(self.direction) {
            return Err(LayoutError::NonSideDirection(self.direction));
        }
        self.spacing().validate()
    }

    /// Grid flow and transpose flag for the group direction.
    const fn flow(&self) -> (Direction, bool) {
        match self.direction {
            Direction::West => (Direction::SouthWest, false),
            Direction::South => (Direction::SouthEast, true),
            Direction::North => (Direction::NorthEast, true),
            _ => (Direction::SouthEast, false),
        }
    }

    /// Gutter and pitch placed on the group axis.
    fn spacing(&self) -> Spacing {
        let (_, transpose) = self.flow();
        let on_axis = |value: i32| {
            if transpose {
                Vector::new(0, value)
            } else {
                Vector::new(value, 0)
            }
        };
        Spacing {
            gutter: on_axis(self.min_gutter),
            min_pitch: on_axis(self.min_pitch),
        }
    }

    /// The equivalent single-line grid configuration.
    pub fn to_grid_config(&self) -> Result<GridConfig, LayoutError> {
        self.validate()?;
        let (flow, transpose) = self.flow();
        Ok(GridConfig {
            flow,
            line_size: None,
            transpose,
            cell_alignment: self.cell_alignment,
            spacing: self.spacing(),
        })
    }
}

/// Children in a single row or column.
#[derive(Debug, Clone)]
pub struct GroupLayout<L> {
    config: GroupConfig,
    grid: GridLayout<L>,
}

impl<L: Layout> GroupLayout<L> {
    /// Create a group, validating `config`.
    pub fn new(config: GroupConfig, children: Vec<L>) -> Result<Self, LayoutError> {
        let grid = GridLayout::new(config.to_grid_config()?, children)?;
        Ok(Self { config, grid })
    }

    #[must_use]
    pub const fn config(&self) -> &GroupConfig {
        &self.config
    }

    #[must_use]
    pub fn children(&self) -> &[L] {
        self.grid.children()
    }

    /// Unwrap the underlying grid.
    #[must_use]
    pub fn into_grid(self) -> GridLayout<L> {
        self.grid
    }
}

impl<L: Layout> Layout for GroupLayout<L> {
    fn request_size(&self, candidate: Vector) -> Vector {
        self.grid.request_size(candidate)
    }

    fn size_hint(&self) -> Vector {
        self.grid.size_hint()
    }

    fn set_bounds(&mut self, bounds: Rect) -> Result<(), LayoutError> {
        self.grid.set_bounds(bounds)
    }

    fn bounds(&self) -> Result<Rect, LayoutError> {
        self.grid.bounds()
    }
}
