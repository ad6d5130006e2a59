use std::num::NonZero;

use ndarray::Ix;

pub(crate) type Coord = usize;
/// A board dimension; boards are never empty along either axis.
pub type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(x, y)`, i.e. `(column, row)`, on a board. The top left corner is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// The origin tile, where the power station starts.
    pub const ORIGIN: Self = Self(0, 0);

    /// Column of this location.
    #[inline]
    pub fn col(&self) -> Coord {
        self.0
    }

    /// Row of this location.
    #[inline]
    pub fn row(&self) -> Coord {
        self.1
    }

    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    pub(crate) fn within(&self, dims: (Dimension, Dimension)) -> bool {
        self.0 < dims.0.get() && self.1 < dims.1.get()
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
