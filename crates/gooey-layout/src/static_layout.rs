//! Leaf layouts with a fixed or ranged size.

use crate::error::LayoutError;
use crate::layout::{ensure_accepted, stored, Layout};
use crate::range::SizeRange;
use gooey_core::{Rect, Vector};

/// A leaf whose accepted sizes are an independent range per axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLayout {
    width: SizeRange,
    height: SizeRange,
    hint: Vector,
    bounds: Option<Rect>,
}

impl StaticLayout {
    /// A leaf that only accepts `size`.
    pub fn fixed(size: Vector) -> Result<Self, LayoutError> {
        check_hint(size)?;
        Self::ranged(size, SizeRange::exact(size.x)?, SizeRange::exact(size.y)?)
    }

    /// A leaf that accepts any non-negative size and prefers `hint`.
    pub fn any_size(hint: Vector) -> Result<Self, LayoutError> {
        Self::ranged(hint, SizeRange::unbounded(), SizeRange::unbounded())
    }

    /// A leaf that clamps each axis into its own range.
    pub fn ranged(hint: Vector, width: SizeRange, height: SizeRange) -> Result<Self, LayoutError> {
        check_hint(hint)?;
        if !width.contains(hint.x) || !height.contains(hint.y) {
            return Err(LayoutError::SizeHintOutOfRange { hint });
        }
        Ok(Self {
            width,
            height,
            hint,
            bounds: None,
        })
    }

    #[must_use]
    pub const fn width_range(&self) -> SizeRange {
        self.width
    }

    #[must_use]
    pub const fn height_range(&self) -> SizeRange {
        self.height
    }
}

fn check_hint(hint: Vector) -> Result<(), LayoutError> {
    if hint.x < 0 || hint.y < 0 {
        Err(LayoutError::NegativeSizeHint { hint })
    } else {
        Ok(())
    }
}

impl Layout for StaticLayout {
    fn request_size(&self, candidate: Vector) -> Vector {
        Vector::new(self.width.clamp(candidate.x), self.height.clamp(candidate.y))
    }

    fn size_hint(&self) -> Vector {
        self.hint
    }

    fn set_bounds(&mut self, bounds: Rect) -> Result<(), LayoutError> {
        ensure_accepted(self, bounds)?;
        self.bounds = Some(bounds);
        Ok(())
    }

    fn bounds(&self) -> Result<Rect, LayoutError> {
        stored(self.bounds)
    }
}
