//! Error types for gooey-core.

use thiserror::Error;

/// Errors raised while constructing geometry values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A rectangle would have a negative width or height.
    #[error("negative rectangle dimensions: {width}x{height}")]
    NegativeDimension {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },

    /// A rectangle corner, or the span between two corners, falls outside
    /// the `i32` range.
    #[error("rectangle corner out of i32 range")]
    Overflow,

    /// A direction name did not match any of the nine directions.
    #[error("unknown direction: {0:?}")]
    UnknownDirection(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_dimension_display() {
        let err = GeometryError::NegativeDimension {
            width: -3,
            height: 4,
        };
        assert_eq!(err.to_string(), "negative rectangle dimensions: -3x4");
    }

    #[test]
    fn test_overflow_display() {
        assert_eq!(
            GeometryError::Overflow.to_string(),
            "rectangle corner out of i32 range"
        );
    }

    #[test]
    fn test_unknown_direction_display() {
        let err = GeometryError::UnknownDirection("up".to_string());
        assert!(err.to_string().contains("\"up\""));
    }
}
