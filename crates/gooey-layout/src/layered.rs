//! Children stacked on top of each other in the same rectangle.

use crate::error::LayoutError;
use crate::layout::{commit_children, ensure_accepted, stored, Layout};
use gooey_core::{Direction, Rect, Vector};

/// Stacks children, each anchored inside the shared bounds.
///
/// Children are kept in paint order: the first one is the bottom layer.
#[derive(Debug, Clone)]
pub struct LayeredLayout<L> {
    alignment: Direction,
    layers: Vec<L>,
    bounds: Option<Rect>,
}

impl<L: Layout> LayeredLayout<L> {
    #[must_use]
    pub const fn new(alignment: Direction, layers: Vec<L>) -> Self {
        Self {
            alignment,
            layers,
            bounds: None,
        }
    }

    /// Add a layer on top.
    pub fn push(&mut self, layer: L) {
        self.layers.push(layer);
    }

    #[must_use]
    pub const fn alignment(&self) -> Direction {
        self.alignment
    }

    #[must_use]
    pub fn layers(&self) -> &[L] {
        &self.layers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Component-wise maximum of the layers' size hints.
    #[must_use]
    pub fn minimum_size(&self) -> Vector {
        self.layers
            .iter()
            .map(Layout::size_hint)
            .fold(Vector::ZERO, Vector::max)
    }
}

impl<L: Layout> Layout for LayeredLayout<L> {
    fn request_size(&self, candidate: Vector) -> Vector {
        candidate.max(self.minimum_size())
    }

    fn set_bounds(&mut self, bounds: Rect) -> Result<(), LayoutError> {
        ensure_accepted(self, bounds)?;
        let placements = self
            .layers
            .iter()
            .map(|layer| -> Result<Rect, LayoutError> {
                Ok(Rect::sized(layer.size_hint())?.anchor(&bounds, self.alignment))
            })
            .collect::<Result<Vec<_>, _>>()?;

        commit_children(&mut self.layers, &placements)?;
        self.bounds = Some(bounds);
        Ok(())
    }

    fn bounds(&self) -> Result<Rect, LayoutError> {
        stored(self.bounds)
    }
}
