//! Inclusive integer size ranges.

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};
use std::ops::{Bound, RangeBounds};

/// A non-empty inclusive range of sizes, `min..=max` or `min..`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SizeRangeRepr", into = "SizeRangeRepr")]
pub struct SizeRange {
    min: i32,
    max: Option<i32>,
}

#[derive(Serialize, Deserialize)]
struct SizeRangeRepr {
    #[serde(default)]
    min: i32,
    #[serde(default)]
    max: Option<i32>,
}

impl TryFrom<SizeRangeRepr> for SizeRange {
    type Error = LayoutError;

    fn try_from(repr: SizeRangeRepr) -> Result<Self, Self::Error> {
        match repr.max {
            Some(max) => Self::new(repr.min..=max),
            None => Self::new(repr.min..),
        }
    }
}

impl From<SizeRange> for SizeRangeRepr {
    fn from(range: SizeRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
        }
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl SizeRange {
    /// Build from any integer range expression.
    ///
    /// ```
    /// use gooey_layout::SizeRange;
    ///
    /// let range = SizeRange::new(10..50).unwrap();
    /// assert_eq!(range.max(), Some(49));
    /// assert_eq!(SizeRange::new(..=8).unwrap().min(), 0);
    /// assert!(SizeRange::new(5..5).is_err());
    /// ```
    pub fn new(range: impl RangeBounds<i32>) -> Result<Self, LayoutError> {
        let min = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let max = match range.end_bound() {
            Bound::Included(&end) => Some(end),
            Bound::Excluded(&end) => Some(end.saturating_sub(1)),
            Bound::Unbounded => None,
        };

        if min < 0 {
            return Err(LayoutError::NegativeRange { min });
        }
        match max {
            Some(max) if max < min => Err(LayoutError::EmptyRange { min, max }),
            _ => Ok(Self { min, max }),
        }
    }

    /// The single-value range `value..=value`.
    pub fn exact(value: i32) -> Result<Self, LayoutError> {
        Self::new(value..=value)
    }

    /// The open range `min..`.
    pub fn at_least(min: i32) -> Result<Self, LayoutError> {
        Self::new(min..)
    }

    /// Every non-negative size.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { min: 0, max: None }
    }

    #[must_use]
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Inclusive upper bound, `None` when open.
    #[must_use]
    pub const fn max(&self) -> Option<i32> {
        self.max
    }

    /// Closest member to `value`.
    #[must_use]
    pub fn clamp(&self, value: i32) -> i32 {
        let value = value.max(self.min);
        self.max.map_or(value, |max| value.min(max))
    }

    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.clamp(value) == value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_end_becomes_inclusive() {
        let range = SizeRange::new(10..51).unwrap();
        assert_eq!((range.min(), range.max()), (10, Some(50)));
    }

    #[test]
    fn test_missing_start_is_zero() {
        assert_eq!(SizeRange::new(..).unwrap(), SizeRange::unbounded());
        assert_eq!(SizeRange::new(..10).unwrap().min(), 0);
    }

    #[test]
    fn test_excluded_start() {
        let range = SizeRange::new((Bound::Excluded(4), Bound::Included(6))).unwrap();
        assert_eq!((range.min(), range.max()), (5, Some(6)));
    }

    #[test]
    fn test_negative_range() {
        assert_eq!(
            SizeRange::new(-1..=5),
            Err(LayoutError::NegativeRange { min: -1 })
        );
        assert!(SizeRange::exact(-3).is_err());
    }

    #[test]
    fn test_empty_range() {
        assert_eq!(
            SizeRange::new(5..=4),
            Err(LayoutError::EmptyRange { min: 5, max: 4 })
        );
        assert!(SizeRange::new(..0).is_err());
    }

    #[test]
    fn test_clamp() {
        let range = SizeRange::new(10..=50).unwrap();
        assert_eq!(range.clamp(5), 10);
        assert_eq!(range.clamp(100), 50);
        assert_eq!(range.clamp(30), 30);
        assert_eq!(SizeRange::at_least(3).unwrap().clamp(1_000), 1_000);
    }

    #[test]
    fn test_contains() {
        let range = SizeRange::exact(7).unwrap();
        assert!(range.contains(7));
        assert!(!range.contains(6));
        assert!(!range.contains(8));
    }

    #[test]
    fn test_serde_validates() {
        let range: SizeRange = serde_json::from_str(r#"{"min":2,"max":4}"#).unwrap();
        assert_eq!(range, SizeRange::new(2..=4).unwrap());
        let open: SizeRange = serde_json::from_str(r#"{"min":2}"#).unwrap();
        assert_eq!(open.max(), None);
        assert!(serde_json::from_str::<SizeRange>(r#"{"min":4,"max":2}"#).is_err());
    }
}
