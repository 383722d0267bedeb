//! Error types for gooey-layout.

use crate::grid::Spacing;
use gooey_core::{Direction, GeometryError, Vector};
use thiserror::Error;

/// Errors raised while building or laying out a layout tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Invalid geometry reached a layout.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// A size range has no members.
    #[error("empty size range: {min}..={max}")]
    EmptyRange {
        /// Inclusive lower bound.
        min: i32,
        /// Inclusive upper bound.
        max: i32,
    },

    /// A size range starts below zero.
    #[error("size range starts below zero: {min}")]
    NegativeRange {
        /// Inclusive lower bound.
        min: i32,
    },

    /// A declared size hint has a negative component.
    #[error("negative size hint: {hint:?}")]
    NegativeSizeHint {
        /// The rejected hint.
        hint: Vector,
    },

    /// A declared size hint falls outside the layout's own ranges.
    #[error("size hint {hint:?} is outside the allowed ranges")]
    SizeHintOutOfRange {
        /// The rejected hint.
        hint: Vector,
    },

    /// A grid was configured with zero cells per line.
    #[error("grid line size must be at least 1")]
    ZeroLineSize,

    /// A gutter or minimum pitch component is below zero.
    #[error("grid spacing must be non-negative, got {0:?}")]
    NegativeSpacing(Spacing),

    /// A grid flow direction must be one of the four corners.
    #[error("grid flow must be diagonal, got {0}")]
    NonDiagonalFlow(Direction),

    /// A group direction must be one of the four sides.
    #[error("group direction must be a side, got {0}")]
    NonSideDirection(Direction),

    /// Bounds were offered whose size the layout does not accept.
    #[error("layout rejected size {requested:?}, closest accepted is {accepted:?}")]
    RejectedSize {
        /// Size of the offered bounds.
        requested: Vector,
        /// What `request_size` returned for it.
        accepted: Vector,
    },

    /// Bounds were read before the first successful `set_bounds`.
    #[error("layout has not been laid out yet")]
    NotLaidOut,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_error_converts() {
        let err: LayoutError = GeometryError::NegativeDimension {
            width: -1,
            height: 0,
        }
        .into();
        assert!(matches!(err, LayoutError::Geometry(_)));
        assert_eq!(err.to_string(), "negative rectangle dimensions: -1x0");
    }

    #[test]
    fn test_direction_in_message() {
        let err = LayoutError::NonDiagonalFlow(Direction::East);
        assert_eq!(err.to_string(), "grid flow must be diagonal, got east");
    }

    #[test]
    fn test_negative_spacing_message() {
        let err = LayoutError::NegativeSpacing(Spacing::gutter(-2));
        assert!(err.to_string().starts_with("grid spacing must be non-negative"));
    }

    #[test]
    fn test_rejected_size_message() {
        let err = LayoutError::RejectedSize {
            requested: Vector::new(5, 5),
            accepted: Vector::new(10, 5),
        };
        assert!(err.to_string().contains("rejected size"));
    }
}
