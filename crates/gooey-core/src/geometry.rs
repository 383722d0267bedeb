//! Geometric primitives: [`Vector`] and [`Rect`].
//!
//! Everything is integer pixel space. Wherever a fractional factor is
//! involved the result is rounded to the nearest integer with ties away
//! from zero, so `2.5` becomes `3` and `-2.5` becomes `-3`. Interpolation
//! rounds the offset from the minimum corner, never the absolute
//! coordinate, so results do not depend on where a rectangle sits.

use crate::direction::Direction;
use crate::error::GeometryError;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

/// Multiply and round, ties away from zero.
/// Clamp a minimum edge so that `min + extent` stays in range.
const fn clamp_min(min: i32, extent: i32) -> i32 {
    let limit = i32::MAX - extent;
    if min > limit {
        limit
    } else {
        min
    }
}

fn round_mul(value: i32, factor: f32) -> i32 {
    (f64::from(value) * f64::from(factor)).round() as i32
}

/// An integer 2D vector, used for positions, sizes and offsets alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vector {
    /// X component
    pub x: i32,
    /// Y component
    pub y: i32,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new vector.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Copy with a new X component.
    #[must_use]
    pub const fn with_x(self, x: i32) -> Self {
        Self::new(x, self.y)
    }

    /// Copy with a new Y component.
    #[must_use]
    pub const fn with_y(self, y: i32) -> Self {
        Self::new(self.x, y)
    }

    /// Offset by separate components.
    #[must_use]
    pub const fn add_xy(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Negate both components.
    #[must_use]
    pub const fn negate(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Scale each component by a factor, rounding the result.
    #[must_use]
    pub fn scale(self, fx: f32, fy: f32) -> Self {
        Self::new(round_mul(self.x, fx), round_mul(self.y, fy))
    }

    /// Scale about `pivot` instead of the origin.
    ///
    /// Computes `round((self - pivot) * f) + pivot`.
    #[must_use]
    pub fn scale_about(self, fx: f32, fy: f32, pivot: Self) -> Self {
        (self - pivot).scale(fx, fy) + pivot
    }

    /// Component-wise integer product.
    #[must_use]
    pub const fn scale_by(self, factors: Self) -> Self {
        Self::new(self.x * factors.x, self.y * factors.y)
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise minimum.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Move `distance` steps along `direction`'s unit vector.
    #[must_use]
    pub const fn directional_offset(self, direction: Direction, distance: i32) -> Self {
        let unit = direction.unit();
        self.add_xy(unit.x * distance, unit.y * distance)
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_xy(rhs.x, rhs.y)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl From<(i32, i32)> for Vector {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned rectangle with non-negative width and height.
///
/// The minimum corner is inside the rectangle, the maximum corner is just
/// outside it. Both corners are representable as `i32`. Every operation
/// that could change the size or the maximum corner checks this and returns
/// [`GeometryError::NegativeDimension`] or [`GeometryError::Overflow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RectRepr", into = "RectRepr")]
pub struct Rect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

/// Unchecked wire form of [`Rect`].
#[derive(Serialize, Deserialize)]
struct RectRepr {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl TryFrom<RectRepr> for Rect {
    type Error = GeometryError;

    fn try_from(repr: RectRepr) -> Result<Self, Self::Error> {
        Self::new(repr.x, repr.y, repr.width, repr.height)
    }
}

impl From<Rect> for RectRepr {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Create a rectangle from position and size components.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, GeometryError> {
        if width < 0 || height < 0 {
            return Err(GeometryError::NegativeDimension { width, height });
        }
        if x.checked_add(width).is_none() || y.checked_add(height).is_none() {
            return Err(GeometryError::Overflow);
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Create a rectangle from its minimum corner and size.
    pub const fn from_position_size(position: Vector, size: Vector) -> Result<Self, GeometryError> {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Create a rectangle from its minimum and maximum corners.
    pub const fn from_corners(min: Vector, max: Vector) -> Result<Self, GeometryError> {
        match (max.x.checked_sub(min.x), max.y.checked_sub(min.y)) {
            (Some(width), Some(height)) => Self::new(min.x, min.y, width, height),
            _ => Err(GeometryError::Overflow),
        }
    }

    /// Create a rectangle of `size` at the origin.
    pub const fn sized(size: Vector) -> Result<Self, GeometryError> {
        Self::from_position_size(Vector::ZERO, size)
    }

    // =========================================================================
    // Position-size view
    // =========================================================================

    /// Same as [`Rect::min_x`].
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Same as [`Rect::min_y`].
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Same as [`Rect::min`].
    #[must_use]
    pub const fn position(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    #[must_use]
    pub const fn size(&self) -> Vector {
        Vector::new(self.width, self.height)
    }

    /// Copy with a new X position. The width is kept.
    #[must_use]
    pub const fn with_x(&self, x: i32) -> Self {
        self.with_position(Vector::new(x, self.y))
    }

    /// Copy with a new Y position. The height is kept.
    #[must_use]
    pub const fn with_y(&self, y: i32) -> Self {
        self.with_position(Vector::new(self.x, y))
    }

    /// Copy with a new position. The size is kept.
    ///
    /// A position whose maximum corner would leave the `i32` range is
    /// clamped back so the far edge lands on `i32::MAX`.
    #[must_use]
    pub const fn with_position(&self, position: Vector) -> Self {
        Self {
            x: clamp_min(position.x, self.width),
            y: clamp_min(position.y, self.height),
            ..*self
        }
    }

    /// Copy with a new width.
    pub const fn with_width(&self, width: i32) -> Result<Self, GeometryError> {
        Self::new(self.x, self.y, width, self.height)
    }

    /// Copy with a new height.
    pub const fn with_height(&self, height: i32) -> Result<Self, GeometryError> {
        Self::new(self.x, self.y, self.width, height)
    }

    /// Copy with a new size. The position is kept.
    pub const fn with_size(&self, size: Vector) -> Result<Self, GeometryError> {
        Self::new(self.x, self.y, size.x, size.y)
    }

    // =========================================================================
    // Min-max view
    // =========================================================================

    #[must_use]
    pub const fn min_x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn min_y(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub const fn max_x(&self) -> i32 {
        self.x + self.width
    }

    #[must_use]
    pub const fn max_y(&self) -> i32 {
        self.y + self.height
    }

    /// Minimum corner, inside the rectangle.
    #[must_use]
    pub const fn min(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    /// Maximum corner, outside the rectangle.
    #[must_use]
    pub const fn max(&self) -> Vector {
        Vector::new(self.max_x(), self.max_y())
    }

    /// Move the minimum X edge, keeping the maximum X edge.
    pub const fn with_min_x(&self, min_x: i32) -> Result<Self, GeometryError> {
        Self::from_corners(Vector::new(min_x, self.y), self.max())
    }

    /// Move the minimum Y edge, keeping the maximum Y edge.
    pub const fn with_min_y(&self, min_y: i32) -> Result<Self, GeometryError> {
        Self::from_corners(Vector::new(self.x, min_y), self.max())
    }

    /// Move the maximum X edge, keeping the minimum X edge.
    pub const fn with_max_x(&self, max_x: i32) -> Result<Self, GeometryError> {
        Self::from_corners(self.min(), Vector::new(max_x, self.max_y()))
    }

    /// Move the maximum Y edge, keeping the minimum Y edge.
    pub const fn with_max_y(&self, max_y: i32) -> Result<Self, GeometryError> {
        Self::from_corners(self.min(), Vector::new(self.max_x(), max_y))
    }

    /// Move the minimum corner, keeping the maximum corner.
    pub const fn with_min(&self, min: Vector) -> Result<Self, GeometryError> {
        Self::from_corners(min, self.max())
    }

    /// Move the maximum corner, keeping the minimum corner.
    pub const fn with_max(&self, max: Vector) -> Result<Self, GeometryError> {
        Self::from_corners(self.min(), max)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    #[must_use]
    pub const fn translate(&self, offset: Vector) -> Self {
        self.translate_xy(offset.x, offset.y)
    }

    /// Saturates at the ends of the `i32` range, like [`Rect::with_position`].
    #[must_use]
    pub const fn translate_xy(&self, dx: i32, dy: i32) -> Self {
        self.with_position(Vector::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
        ))
    }

    /// Translate `distance` steps along `direction`.
    #[must_use]
    pub const fn translate_toward(&self, direction: Direction, distance: i32) -> Self {
        self.with_position(self.position().directional_offset(direction, distance))
    }

    /// Pad by `padding` on every side. Negative padding shrinks.
    pub const fn grow(&self, padding: i32) -> Result<Self, GeometryError> {
        match (
            self.x.checked_sub(padding),
            self.y.checked_sub(padding),
            self.max_x().checked_add(padding),
            self.max_y().checked_add(padding),
        ) {
            (Some(min_x), Some(min_y), Some(max_x), Some(max_y)) => {
                Self::from_corners(Vector::new(min_x, min_y), Vector::new(max_x, max_y))
            }
            _ => Err(GeometryError::Overflow),
        }
    }

    /// Locate a point proportionally: `(0, 0)` is the minimum corner,
    /// `(1, 1)` the maximum corner. Factors outside `0..=1` extrapolate.
    #[must_use]
    pub fn interpolate(&self, tx: f32, ty: f32) -> Vector {
        self.position() + self.size().scale(tx, ty)
    }

    /// The point identified by `direction`, e.g. the bottom-right corner
    /// for [`Direction::SouthEast`].
    #[must_use]
    pub fn anchor_point(&self, direction: Direction) -> Vector {
        let (tx, ty) = direction.factors();
        self.interpolate(tx, ty)
    }

    /// Move so the point at `(tx, ty)` inside `self` lands on `anchor`.
    #[must_use]
    pub fn align_around(&self, anchor: Vector, tx: f32, ty: f32) -> Self {
        self.with_position(anchor - self.size().scale(tx, ty))
    }

    /// Move so the points at `(tx, ty)` inside `self` and `container`
    /// coincide.
    #[must_use]
    pub fn align_inside(&self, container: &Self, tx: f32, ty: f32) -> Self {
        self.align_around(container.interpolate(tx, ty), tx, ty)
    }

    /// Align to `container` by `direction`: corner to corner, edge to
    /// edge or center to center. The size is kept.
    ///
    /// ```
    /// use gooey_core::{Direction, Rect};
    ///
    /// let container = Rect::new(0, 0, 100, 100).unwrap();
    /// let moved = Rect::new(0, 0, 20, 10).unwrap().anchor(&container, Direction::SouthEast);
    /// assert_eq!((moved.x(), moved.y()), (80, 90));
    /// ```
    #[must_use]
    pub fn anchor(&self, container: &Self, direction: Direction) -> Self {
        let (tx, ty) = direction.factors();
        self.align_inside(container, tx, ty)
    }

    /// Attach to the outside of `container` at `direction`, so the two
    /// rectangles touch without overlapping. For [`Direction::Center`]
    /// this is the same as [`Rect::anchor`].
    #[must_use]
    pub fn anchor_outside(&self, container: &Self, direction: Direction) -> Self {
        let (tx, ty) = direction.mirror().factors();
        self.align_around(container.anchor_point(direction), tx, ty)
    }

    /// Smallest rectangle containing both.
    ///
    /// A span wider than `i32::MAX` saturates, so the result then stops
    /// short of the far edge.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let min = self.min().min(other.min());
        let max = self.max().max(other.max());
        Self {
            x: min.x,
            y: min.y,
            width: max.x.saturating_sub(min.x),
            height: max.y.saturating_sub(min.y),
        }
    }

    /// Largest rectangle inside both.
    ///
    /// Returns `None` when the inputs are disjoint on either axis. Inputs
    /// that only share an edge produce an empty rectangle.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let min = self.min().max(other.min());
        let max = self.max().min(other.max());
        Self::from_corners(min, max).ok()
    }

    // =========================================================================
    // Conditionals
    // =========================================================================

    /// True if either dimension is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside. Minimum edges are inclusive, maximum
    /// edges exclusive.
    #[must_use]
    pub const fn contains(&self, point: Vector) -> bool {
        point.x >= self.x && point.x < self.max_x() && point.y >= self.y && point.y < self.max_y()
    }
}
