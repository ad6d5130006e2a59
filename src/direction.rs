use std::str::FromStr;

use strum::{Display, EnumString, VariantArray};

use crate::error::InvalidArgument;
use crate::location::Location;

/// One of the four sides of a square tile.
///
/// The declaration order is the canonical traversal order, `North, East, South, West`.
/// Every search over a tile's sides walks them in this order, which is what makes tie-breaking in
/// [`farthest_from`](crate::topology::farthest_from) deterministic.
///
/// Directions parse case-insensitively from their names or from the arrow-key style aliases
/// `up`, `right`, `down`, `left` (and `top`, `bottom`).
#[derive(Copy, Clone, VariantArray, EnumString, Display, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "north", serialize = "up", serialize = "top")]
    North,
    #[strum(to_string = "east", serialize = "right")]
    East,
    #[strum(to_string = "south", serialize = "down", serialize = "bottom")]
    South,
    #[strum(to_string = "west", serialize = "left")]
    West,
}

impl Direction {
    /// The directions along which each grid edge is enumerated exactly once.
    ///
    /// Stepping forward from a location always lands on a location with a larger column or row.
    pub const FORWARD_VARIANTS: &'static [Self] = &[Self::East, Self::South];

    /// Parse a direction token supplied by an input layer.
    pub fn parse(token: &str) -> Result<Self, InvalidArgument> {
        Self::from_str(token.trim()).map_err(|_| InvalidArgument::UnknownDirection(token.to_owned()))
    }

    /// Attempt the step from `location` in this direction and return the resultant [`Location`].
    ///
    /// Steps off the top or left edge wrap around to huge coordinates, which every board lookup rejects.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::North => location.offset_by((0, -1)),
            Self::East => location.offset_by((1, 0)),
            Self::South => location.offset_by((0, 1)),
            Self::West => location.offset_by((-1, 0)),
        }
    }

    /// The opposite side.
    pub fn invert(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Convert to a forward direction if this is not one already.
    pub fn ensure_forward(&self) -> Self {
        match Self::FORWARD_VARIANTS.contains(self) {
            true => *self,
            false => self.invert(),
        }
    }

    /// Determine the direction from `a` to `b`, if they are orthogonally adjacent.
    pub fn between(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }

    #[inline]
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}
