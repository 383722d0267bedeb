//! Anchor directions: eight compass points plus [`Direction::Center`].
//!
//! Directions are laid out on a 3x3 grid in row-major order. Row 0 is
//! north, column 0 is west. The center cell is the null direction: it
//! anchors to the middle of a rectangle and has a zero unit vector.
//!
//! # Examples
//!
//! ```
//! use gooey_core::{Direction, DirectionOptions, Vector};
//!
//! assert_eq!(Direction::SouthEast.unit(), Vector::new(1, 1));
//! assert_eq!(Direction::NorthEast.mirror(), Direction::SouthWest);
//!
//! // Snap a free-form request onto the corners
//! let snapped = DirectionOptions::Corners.normalize(Some(Direction::East));
//! assert_eq!(snapped, Some(Direction::NorthEast));
//! ```

use crate::error::GeometryError;
use crate::geometry::Vector;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of eight compass directions or the central null direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum Direction {
    /// Row 0, column 0.
    NorthWest = 0,
    /// Row 0, column 1.
    North = 1,
    /// Row 0, column 2.
    NorthEast = 2,
    /// Row 1, column 0.
    West = 3,
    /// Row 1, column 1. The null direction.
    #[default]
    Center = 4,
    /// Row 1, column 2.
    East = 5,
    /// Row 2, column 0.
    SouthWest = 6,
    /// Row 2, column 1.
    South = 7,
    /// Row 2, column 2.
    SouthEast = 8,
}

impl Direction {
    /// All nine directions in row-major order.
    pub const ALL: [Self; 9] = [
        Self::NorthWest,
        Self::North,
        Self::NorthEast,
        Self::West,
        Self::Center,
        Self::East,
        Self::SouthWest,
        Self::South,
        Self::SouthEast,
    ];

    /// Look up a direction by grid cell.
    ///
    /// Returns `None` if either index is outside `0..=2`.
    #[must_use]
    pub const fn from_row_column(row: u8, column: u8) -> Option<Self> {
        if row > 2 || column > 2 {
            None
        } else {
            Some(Self::ALL[(row * 3 + column) as usize])
        }
    }

    /// Grid lookup with both indices saturated to `2`.
    pub(crate) const fn at(row: u8, column: u8) -> Self {
        let row = if row > 2 { 2 } else { row };
        let column = if column > 2 { 2 } else { column };
        Self::ALL[(row * 3 + column) as usize]
    }

    /// Grid row, `0` (north) to `2` (south).
    #[must_use]
    pub const fn row(self) -> u8 {
        self as u8 / 3
    }

    /// Grid column, `0` (west) to `2` (east).
    #[must_use]
    pub const fn column(self) -> u8 {
        self as u8 % 3
    }

    /// Replace the row, keeping the column.
    #[must_use]
    pub const fn with_row(self, row: u8) -> Option<Self> {
        Self::from_row_column(row, self.column())
    }

    /// Replace the column, keeping the row.
    #[must_use]
    pub const fn with_column(self, column: u8) -> Option<Self> {
        Self::from_row_column(self.row(), column)
    }

    /// Reflect north/south.
    #[must_use]
    pub const fn mirror_row(self) -> Self {
        Self::at(2 - self.row(), self.column())
    }

    /// Reflect west/east.
    #[must_use]
    pub const fn mirror_column(self) -> Self {
        Self::at(self.row(), 2 - self.column())
    }

    /// Reflect through the center.
    #[must_use]
    pub const fn mirror(self) -> Self {
        Self::at(2 - self.row(), 2 - self.column())
    }

    /// Normalized offset `(column - 1, row - 1)`, each component in `-1..=1`.
    #[must_use]
    pub const fn unit(self) -> Vector {
        Vector::new(self.column() as i32 - 1, self.row() as i32 - 1)
    }

    /// Interpolation factors `(column / 2, row / 2)`: 0, 0.5 or 1 per axis.
    #[must_use]
    pub fn factors(self) -> (f32, f32) {
        (f32::from(self.column()) / 2.0, f32::from(self.row()) / 2.0)
    }

    /// True for the four corner directions.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        self.row() != 1 && self.column() != 1
    }

    /// The single-member set containing this direction.
    #[must_use]
    pub const fn flag(self) -> DirectionSet {
        DirectionSet::from_bits_retain(1 << self as u8)
    }

    /// Camel-case name, e.g. `"northWest"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NorthWest => "northWest",
            Self::North => "north",
            Self::NorthEast => "northEast",
            Self::West => "west",
            Self::Center => "center",
            Self::East => "east",
            Self::SouthWest => "southWest",
            Self::South => "south",
            Self::SouthEast => "southEast",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = GeometryError;

    /// Parse a camel-case name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GeometryError::UnknownDirection(s.to_string()))
    }
}

bitflags! {
    /// A set of directions, one bit per grid cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirectionSet: u16 {
        const NORTH_WEST = 1 << 0;
        const NORTH = 1 << 1;
        const NORTH_EAST = 1 << 2;
        const WEST = 1 << 3;
        const CENTER = 1 << 4;
        const EAST = 1 << 5;
        const SOUTH_WEST = 1 << 6;
        const SOUTH = 1 << 7;
        const SOUTH_EAST = 1 << 8;
    }
}

impl DirectionSet {
    /// Check membership of a single direction.
    #[must_use]
    pub const fn has(self, direction: Direction) -> bool {
        self.contains(direction.flag())
    }

    /// Iterate members in row-major order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.has(*direction))
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        direction.flag()
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, direction| set | direction.flag())
    }
}

const CORNERS: DirectionSet = DirectionSet::NORTH_WEST
    .union(DirectionSet::NORTH_EAST)
    .union(DirectionSet::SOUTH_WEST)
    .union(DirectionSet::SOUTH_EAST);

const SIDES: DirectionSet = DirectionSet::NORTH
    .union(DirectionSet::EAST)
    .union(DirectionSet::SOUTH)
    .union(DirectionSet::WEST);

const TOP_ROW: DirectionSet = DirectionSet::NORTH_WEST
    .union(DirectionSet::NORTH)
    .union(DirectionSet::NORTH_EAST);

const BOTTOM_ROW: DirectionSet = DirectionSet::SOUTH_WEST
    .union(DirectionSet::SOUTH)
    .union(DirectionSet::SOUTH_EAST);

const LEFT_COLUMN: DirectionSet = DirectionSet::NORTH_WEST
    .union(DirectionSet::WEST)
    .union(DirectionSet::SOUTH_WEST);

const RIGHT_COLUMN: DirectionSet = DirectionSet::NORTH_EAST
    .union(DirectionSet::EAST)
    .union(DirectionSet::SOUTH_EAST);

/// Named subsets of directions that a context accepts.
///
/// Each mask pairs a member set with a total normalization function that
/// snaps any direction (or its absence) onto the nearest member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DirectionOptions {
    /// Every direction.
    All,
    /// The four diagonal directions.
    Corners,
    /// North, east, south and west.
    Sides,
    /// West and east.
    WestEast,
    /// North and south.
    NorthSouth,
    /// The middle row: west, center, east.
    Horizontal,
    /// The middle column: north, center, south.
    Vertical,
    /// Everything except west and east.
    I,
    /// Corners plus south.
    Bar,
    /// Corners plus center.
    X,
    /// Top and bottom rows.
    TopBottom,
    /// Left and right columns.
    LeftRight,
    /// No direction at all.
    None,
}

impl DirectionOptions {
    /// Every mask.
    pub const ALL: [Self; 13] = [
        Self::All,
        Self::Corners,
        Self::Sides,
        Self::WestEast,
        Self::NorthSouth,
        Self::Horizontal,
        Self::Vertical,
        Self::I,
        Self::Bar,
        Self::X,
        Self::TopBottom,
        Self::LeftRight,
        Self::None,
    ];

    /// The member set.
    #[must_use]
    pub const fn directions(self) -> DirectionSet {
        match self {
            Self::All => DirectionSet::all(),
            Self::Corners => CORNERS,
            Self::Sides => SIDES,
            Self::WestEast => DirectionSet::WEST.union(DirectionSet::EAST),
            Self::NorthSouth => DirectionSet::NORTH.union(DirectionSet::SOUTH),
            Self::Horizontal => DirectionSet::WEST
                .union(DirectionSet::CENTER)
                .union(DirectionSet::EAST),
            Self::Vertical => DirectionSet::NORTH
                .union(DirectionSet::CENTER)
                .union(DirectionSet::SOUTH),
            Self::I => TOP_ROW.union(DirectionSet::CENTER).union(BOTTOM_ROW),
            Self::Bar => CORNERS.union(DirectionSet::SOUTH),
            Self::X => CORNERS.union(DirectionSet::CENTER),
            Self::TopBottom => TOP_ROW.union(BOTTOM_ROW),
            Self::LeftRight => LEFT_COLUMN.union(RIGHT_COLUMN),
            Self::None => DirectionSet::empty(),
        }
    }

    /// Check whether `direction` is a member.
    #[must_use]
    pub const fn contains(self, direction: Direction) -> bool {
        self.directions().has(direction)
    }

    /// Snap `direction` onto the nearest member.
    ///
    /// Members are returned unchanged. Only [`DirectionOptions::None`]
    /// ever returns `None`.
    #[must_use]
    pub fn normalize(self, direction: Option<Direction>) -> Option<Direction> {
        match self {
            Self::All => Some(direction.unwrap_or(Direction::NorthWest)),
            Self::Corners => Some(direction.map_or(Direction::NorthWest, |d| {
                Direction::at(
                    if d.row() > 1 { 2 } else { 0 },
                    if d.column() > 1 { 2 } else { 0 },
                )
            })),
            Self::Sides => Some(match direction {
                None | Some(Direction::Center) => Direction::North,
                Some(d) if d.row() == 1 => d,
                Some(d) => Direction::at(d.row(), 1),
            }),
            Self::WestEast => Some(match direction {
                Some(d) if d.column() >= 2 => Direction::East,
                _ => Direction::West,
            }),
            Self::NorthSouth => Some(match direction {
                Some(d) if d.row() >= 2 => Direction::South,
                _ => Direction::North,
            }),
            Self::Horizontal => {
                Some(direction.map_or(Direction::West, |d| Direction::at(1, d.column())))
            }
            Self::Vertical => {
                Some(direction.map_or(Direction::North, |d| Direction::at(d.row(), 1)))
            }
            Self::I => Some(match direction {
                Some(Direction::West) => Direction::NorthWest,
                Some(Direction::East) => Direction::NorthEast,
                Some(d) => d,
                None => Direction::NorthWest,
            }),
            Self::Bar => match direction {
                Some(Direction::South) => direction,
                _ => Self::Corners.normalize(direction),
            },
            Self::X => match direction {
                Some(Direction::Center) => direction,
                _ => Self::Corners.normalize(direction),
            },
            Self::TopBottom => Some(match direction {
                None => Direction::NorthWest,
                Some(d) if d.row() == 1 => Direction::at(0, d.column()),
                Some(d) => d,
            }),
            Self::LeftRight => Some(match direction {
                None => Direction::NorthWest,
                Some(d) if d.column() == 1 => Direction::at(d.row(), 0),
                Some(d) => d,
            }),
            Self::None => None,
        }
    }
}
