use thiserror::Error;

use crate::builder::BuilderInvalidReason;
use crate::location::Location;

/// Bad input from a caller. These are reported straight back and never retried.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InvalidArgument {
    /// A direction token did not name one of the four sides.
    #[error("`{0}` is not a direction")]
    UnknownDirection(String),
    /// A location lies outside the board.
    #[error("{location:?} is outside a {width}x{height} board")]
    OutOfBounds {
        location: Location,
        width: usize,
        height: usize,
    },
}

/// Broken structural guarantees. Any of these means board generation itself is wrong.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InvariantViolation {
    /// A key was looked up in a [`UnionFind`](crate::union_find::UnionFind) it was never added to.
    #[error("no representative recorded for {0}")]
    MissingRepresentative(String),
    /// A search from one tile failed to reach the whole board.
    #[error("wiring is disconnected: reached {reached} of {expected} tiles")]
    Disconnected { reached: usize, expected: usize },
    /// Spanning tree selection accepted the wrong number of edges.
    #[error("spanning tree has {actual} edges, expected {expected}")]
    WrongEdgeCount { actual: usize, expected: usize },
    /// A tree edge ends on a location that is not on the board being wired.
    #[error("tree edge touches {0:?}, which is off the board")]
    StrayEdge(Location),
}

/// Reasons a board could not be generated.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum GenerationError {
    /// The [`BoardBuilder`](crate::builder::BoardBuilder) was configured with unusable settings.
    #[error("invalid board settings: {0:?}")]
    InvalidBuilder(Vec<BuilderInvalidReason>),
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
    #[error(transparent)]
    Argument(#[from] InvalidArgument),
}
