#![warn(missing_docs)]

//! # `powergrid`
//!
//! Generation and simulation for a tile-rotation wiring puzzle.
//! A rectangular board of tiles is wired along a random spanning tree, so there is exactly one path of wires between any
//! two tiles, and every tile is then turned a random number of quarter turns. The player rotates tiles back into alignment
//! until power from a movable station reaches the whole board.
//!
//! Start with [`new_board`] or a [`BoardBuilder`], which yield a [`Session`]. A host drives the session with
//! [`rotate_tile_left`](Session::rotate_tile_left), [`rotate_tile_right`](Session::rotate_tile_right),
//! [`move_power_station`](Session::move_power_station), [`tick`](Session::tick) and [`reset`](Session::reset), and reads
//! [`Session::board`] to draw a frame. Drawing and input handling are left to the host.
//!
//! # Internals
//! A board is generated in four steps:
//!
//! 1. Every pair of adjacent tiles becomes a candidate edge with a random weight.
//! Horizontal edges draw from `0..250` and vertical edges from `100..350`; the offset biases the tree toward long horizontal runs.
//! 2. Kruskal's algorithm, backed by a [`UnionFind`](union_find::UnionFind), picks the minimum spanning tree, and each chosen
//! edge sets the facing connectors on its two tiles.
//! 3. Two breadth-first sweeps measure the tree's diameter `d`, and the station's power radius becomes `d / 2 + 2`.
//! 4. Each tile is rotated counterclockwise zero to two times and the station is placed on the top left tile.
//!
//! Power then spreads breadth-first from the station across connections wired on both sides, losing one level per hop.
//! The puzzle is solved once every tile has power.
//!
//! All randomness comes from one seedable [`ChaCha8Rng`](rand_chacha::ChaCha8Rng) per session, so a seeded session,
//! resets included, is fully reproducible.

pub use board::Board;
pub use builder::{BoardBuilder, BuilderInvalidReason};
pub use direction::Direction;
pub use error::{GenerationError, InvalidArgument, InvariantViolation};
pub use location::{Dimension, Location};
pub use session::{new_board, Session, TickReport};
pub use tile::{PowerLevel, PowerTier, Tile};

pub(crate) mod board;
pub mod builder;
pub(crate) mod direction;
pub(crate) mod error;
pub(crate) mod location;
pub mod power;
pub(crate) mod session;
pub mod spanning;
pub(crate) mod tile;
pub mod topology;
pub mod union_find;
