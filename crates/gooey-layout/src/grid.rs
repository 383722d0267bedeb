//! Uniform grid arrangement.
//!
//! Every child gets a cell of the same size: the component-wise maximum
//! of all children's size hints. Cells are placed at a fixed pitch in
//! lines, starting from the corner opposite the flow direction. A flow of
//! [`Direction::SouthEast`] fills left to right, then top to bottom.

use crate::error::LayoutError;
use crate::layout::{commit_children, ensure_accepted, stored, Layout};
use gooey_core::{Direction, Rect, Vector};
use serde::{Deserialize, Serialize};

/// Gaps and minimum pitch between neighbouring cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    /// Added to the cell size on each axis.
    pub gutter: Vector,
    /// Lower bound for the distance between cell origins.
    pub min_pitch: Vector,
}

impl Spacing {
    /// Uniform gutter on both axes.
    #[must_use]
    pub const fn gutter(gutter: i32) -> Self {
        Self {
            gutter: Vector::new(gutter, gutter),
            min_pitch: Vector::ZERO,
        }
    }

    /// Check no component is negative. A negative gutter or pitch would
    /// let neighbouring cells overlap.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.gutter.x < 0 || self.gutter.y < 0 || self.min_pitch.x < 0 || self.min_pitch.y < 0 {
            Err(LayoutError::NegativeSpacing(*self))
        } else {
            Ok(())
        }
    }
}

/// Grid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Diagonal direction the grid grows towards.
    pub flow: Direction,
    /// Cells per line, `None` for a single line.
    pub line_size: Option<usize>,
    /// Lines run along the vertical axis instead of the horizontal one.
    pub transpose: bool,
    /// Where each child sits inside its cell.
    pub cell_alignment: Direction,
    pub spacing: Spacing,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            flow: Direction::SouthEast,
            line_size: None,
            transpose: false,
            cell_alignment: Direction::Center,
            spacing: Spacing::default(),
        }
    }
}

impl GridConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_flow(mut self, flow: Direction) -> Self {
        self.flow = flow;
        self
    }

    #[must_use]
    pub const fn with_line_size(mut self, line_size: usize) -> Self {
        self.line_size = Some(line_size);
        self
    }

    #[must_use]
    pub const fn with_transpose(mut self, transpose: bool) -> Self {
        self.transpose = transpose;
        self
    }

    #[must_use]
    pub const fn with_cell_alignment(mut self, alignment: Direction) -> Self {
        self.cell_alignment = alignment;
        self
    }

    #[must_use]
    pub const fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Check the configuration can drive a grid.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.line_size == Some(0) {
            return Err(LayoutError::ZeroLineSize);
        }
        if !self.flow.is_diagonal() {
            return Err(LayoutError::NonDiagonalFlow(self.flow));
        }
        self.spacing.validate()
    }
}

/// Children arranged in equally sized cells.
#[derive(Debug, Clone)]
pub struct GridLayout<L> {
    config: GridConfig,
    children: Vec<L>,
    bounds: Option<Rect>,
}

impl<L: Layout> GridLayout<L> {
    /// Create a grid, validating `config`.
    pub fn new(config: GridConfig, children: Vec<L>) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self {
            config,
            children,
            bounds: None,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    #[must_use]
    pub fn children(&self) -> &[L] {
        &self.children
    }

    /// Give back the children, dropping any computed bounds.
    #[must_use]
    pub fn into_children(self) -> Vec<L> {
        self.children
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Component-wise maximum of the children's size hints.
    #[must_use]
    pub fn cell_size(&self) -> Vector {
        self.children
            .iter()
            .map(Layout::size_hint)
            .fold(Vector::ZERO, Vector::max)
    }

    /// Distance between the origins of neighbouring cells.
    #[must_use]
    pub fn pitch(&self) -> Vector {
        (self.cell_size() + self.config.spacing.gutter).max(self.config.spacing.min_pitch)
    }

    fn line_size(&self) -> usize {
        self.config
            .line_size
            .unwrap_or(self.children.len())
            .max(1)
    }

    /// Cells along each axis, `(columns, rows)`.
    #[must_use]
    pub fn shape(&self) -> Vector {
        let count = self.children.len();
        let line = self.line_size();
        let shape = Vector::new(line.min(count) as i32, count.div_ceil(line) as i32);
        if self.config.transpose {
            Vector::new(shape.y, shape.x)
        } else {
            shape
        }
    }

    /// Smallest size holding every cell.
    #[must_use]
    pub fn minimum_size(&self) -> Vector {
        if self.children.is_empty() {
            Vector::ZERO
        } else {
            self.pitch().scale_by(self.shape())
        }
    }

    /// Offsets between consecutive cells in a line and between lines.
    fn steps(&self, pitch: Vector) -> (Vector, Vector) {
        let unit = self.config.flow.unit();
        let along = pitch.scale_by(unit.with_y(0));
        let across = pitch.scale_by(unit.with_x(0));
        if self.config.transpose {
            (across, along)
        } else {
            (along, across)
        }
    }

    /// Cell rectangles for `bounds`, one per child.
    pub fn cells(&self, bounds: Rect) -> Result<Vec<Rect>, LayoutError> {
        let pitch = self.pitch();
        let line = self.line_size();
        let (along, across) = self.steps(pitch);
        let first = Rect::sized(self.cell_size())?.anchor(&bounds, self.config.flow.mirror());

        tracing::trace!(
            children = self.children.len(),
            ?pitch,
            first = ?first.position(),
            "grid cells computed"
        );

        Ok((0..self.children.len())
            .map(|i| first.translate(repeat(along, i % line) + repeat(across, i / line)))
            .collect())
    }
}

fn repeat(step: Vector, count: usize) -> Vector {
    let count = count as i32;
    Vector::new(step.x * count, step.y * count)
}

impl<L: Layout> Layout for GridLayout<L> {
    fn request_size(&self, candidate: Vector) -> Vector {
        candidate.max(self.minimum_size())
    }

    fn set_bounds(&mut self, bounds: Rect) -> Result<(), LayoutError> {
        ensure_accepted(self, bounds)?;
        let alignment = self.config.cell_alignment;
        let placements = self
            .cells(bounds)?
            .iter()
            .zip(&self.children)
            .map(|(cell, child)| -> Result<Rect, LayoutError> {
                Ok(Rect::sized(child.size_hint())?.anchor(cell, alignment))
            })
            .collect::<Result<Vec<_>, _>>()?;

        commit_children(&mut self.children, &placements)?;
        self.bounds = Some(bounds);
        Ok(())
    }

    fn bounds(&self) -> Result<Rect, LayoutError> {
        stored(self.bounds)
    }
}
