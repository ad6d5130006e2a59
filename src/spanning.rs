use std::ops::Range;

use itertools::Itertools;
use rand::Rng;
use tracing::debug;

use crate::board::Board;
use crate::direction::Direction;
use crate::error::InvariantViolation;
use crate::location::{Dimension, Location};
use crate::union_find::UnionFind;

/// Weight range for edges joining horizontally adjacent tiles.
pub const HORIZONTAL_WEIGHTS: Range<u32> = 0..250;
/// Weight range for edges joining vertically adjacent tiles.
///
/// Offset above [`HORIZONTAL_WEIGHTS`] so that horizontal edges tend to be picked first, giving boards long
/// horizontal runs.
pub const VERTICAL_WEIGHTS: Range<u32> = 100..350;

/// A candidate link between two adjacent tiles.
///
/// `from` is always the tile with the lower column or row; `direction` points from it toward `to`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Edge {
    pub from: Location,
    pub to: Location,
    pub direction: Direction,
    pub weight: u32,
}

/// Every pair of adjacent tiles on a `dims` board with a freshly drawn weight, in enumeration order.
///
/// Horizontal pairs come first, column by column, then vertical pairs, column by column.
pub fn weighted_edges<R: Rng>(dims: (Dimension, Dimension), rng: &mut R) -> Vec<Edge> {
    let (width, height) = (dims.0.get(), dims.1.get());
    let mut edges = Vec::with_capacity((width - 1) * height + (height - 1) * width);

    for x in 0..width - 1 {
        for y in 0..height {
            let from = Location(x, y);
            edges.push(Edge {
                from,
                to: Direction::East.attempt_from(from),
                direction: Direction::East,
                weight: rng.gen_range(HORIZONTAL_WEIGHTS),
            });
        }
    }

    for x in 0..width {
        for y in 0..height - 1 {
            let from = Location(x, y);
            edges.push(Edge {
                from,
                to: Direction::South.attempt_from(from),
                direction: Direction::South,
                weight: rng.gen_range(VERTICAL_WEIGHTS),
            });
        }
    }

    edges
}

/// Stable sort by ascending weight; equal weights keep enumeration order.
pub fn sort_edges(edges: Vec<Edge>) -> Vec<Edge> {
    edges.into_iter().sorted_by_key(|edge| edge.weight).collect_vec()
}

/// Select a minimum spanning tree from `edges` with Kruskal's algorithm.
///
/// `edges` must already be sorted. An edge is accepted when its endpoints are not yet in the same set.
pub fn select_tree(
    locations: impl IntoIterator<Item = Location>,
    edges: &[Edge],
) -> Result<Vec<Edge>, InvariantViolation> {
    let mut sets = UnionFind::new(locations);
    let mut tree = Vec::with_capacity(sets.len().saturating_sub(1));

    for edge in edges {
        if sets.union(edge.from, edge.to)? {
            tree.push(*edge);
        }
    }

    let expected = sets.len().saturating_sub(1);
    if tree.len() != expected {
        return Err(InvariantViolation::WrongEdgeCount { actual: tree.len(), expected });
    }

    Ok(tree)
}

/// Draw weights for every edge of `dims` and pick a random spanning tree from them.
pub fn kruskal<R: Rng>(dims: (Dimension, Dimension), rng: &mut R) -> Result<Vec<Edge>, InvariantViolation> {
    let edges = sort_edges(weighted_edges(dims, rng));
    let locations = (0..dims.0.get()).cartesian_product(0..dims.1.get()).map(|(x, y)| Location(x, y));
    let tree = select_tree(locations, &edges)?;

    debug!(candidates = edges.len(), accepted = tree.len(), "selected spanning tree");
    Ok(tree)
}

/// Wire `board` along `tree`, setting the facing connector on both endpoints of every edge.
pub fn materialize(board: &mut Board, tree: &[Edge]) -> Result<(), InvariantViolation> {
    for edge in tree {
        for (location, direction) in [(edge.from, edge.direction), (edge.to, edge.direction.invert())] {
            board
                .tile_mut(location)
                .map_err(|_| InvariantViolation::StrayEdge(location))?
                .set_connector(direction);
        }
    }

    Ok(())
}
