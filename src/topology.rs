use std::collections::VecDeque;

use ndarray::Array2;
use strum::VariantArray;

use crate::board::Board;
use crate::direction::Direction;
use crate::error::InvariantViolation;
use crate::location::Location;
use crate::tile::PowerLevel;

/// Outcome of a breadth-first sweep over aligned connections.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchResult {
    /// The last tile discovered.
    pub location: Location,
    /// Hops from the start to [`Self::location`].
    pub depth: usize,
    /// Tiles reached, the start included.
    pub reached: usize,
}

/// Breadth-first search from `start` along currently aligned connections.
///
/// Sides are tried in canonical order, so among tiles at the greatest depth the one discovered last wins.
/// A `start` off the board reaches nothing.
pub fn farthest_from(board: &Board, start: Location) -> SearchResult {
    if board.tile(start).is_err() {
        return SearchResult { location: start, depth: 0, reached: 0 };
    }

    let mut visited = Array2::from_elem(board.tiles.raw_dim(), false);
    let mut worklist = VecDeque::with_capacity(board.tile_count());
    let mut last = SearchResult { location: start, depth: 0, reached: 1 };

    visited[start.as_index()] = true;
    worklist.push_back((start, 0));

    while let Some((current, depth)) = worklist.pop_front() {
        for direction in Direction::VARIANTS {
            if !board.is_linked(current, *direction) {
                continue;
            }

            let next = direction.attempt_from(current);
            if !visited[next.as_index()] {
                visited[next.as_index()] = true;
                worklist.push_back((next, depth + 1));
                last = SearchResult { location: next, depth: depth + 1, reached: last.reached + 1 };
            }
        }
    }

    last
}

/// Size the power radius from the diameter of the wiring reachable from `start`.
///
/// Two sweeps: the farthest tile from `start` is one end of a longest path, and the farthest tile from it
/// gives the diameter. The radius is `diameter / 2 + 2`. Only meaningful on an unscrambled board; both
/// sweeps must reach every tile.
pub fn compute_radius(board: &Board, start: Location) -> Result<PowerLevel, InvariantViolation> {
    let mut diameter = 0;
    let mut from = start;

    for _ in 0..2 {
        let sweep = farthest_from(board, from);
        if sweep.reached != board.tile_count() {
            return Err(InvariantViolation::Disconnected { reached: sweep.reached, expected: board.tile_count() });
        }
        diameter = sweep.depth;
        from = sweep.location;
    }

    Ok((diameter / 2 + 2) as PowerLevel)
}
