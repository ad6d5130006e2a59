use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;
use rand::Rng;
use unordered_pair::UnorderedPair;

use crate::direction::Direction;
use crate::error::{InvalidArgument, InvariantViolation};
use crate::location::{Dimension, Location};
use crate::tile::Tile;

/// A rectangular grid of [`Tile`]s.
///
/// Tiles are stored row-major in an [`Array2`] but every public iteration walks them column by column,
/// which is the order generation consumes random numbers in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub(crate) tiles: Array2<Tile>,
    pub(crate) dims: (Dimension, Dimension),
}

impl Board {
    /// A board of unwired tiles. `dims` is `(width, height)`.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            tiles: Array2::from_shape_fn((dims.1.get(), dims.0.get()), |ind| Tile::blank(Location::from(ind))),
            dims,
        }
    }

    /// `(width, height)`.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    pub fn width(&self) -> usize {
        self.dims.0.get()
    }

    pub fn height(&self) -> usize {
        self.dims.1.get()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    fn out_of_bounds(&self, location: Location) -> InvalidArgument {
        InvalidArgument::OutOfBounds { location, width: self.width(), height: self.height() }
    }

    pub fn tile(&self, location: Location) -> Result<&Tile, InvalidArgument> {
        self.tiles.get(location.as_index()).ok_or_else(|| self.out_of_bounds(location))
    }

    pub fn tile_mut(&mut self, location: Location) -> Result<&mut Tile, InvalidArgument> {
        if !location.within(self.dims) {
            return Err(self.out_of_bounds(location));
        }
        Ok(&mut self.tiles[location.as_index()])
    }

    /// The tile adjacent to `location` on `direction`'s side, or `None` past the edge of the board.
    pub fn neighbor(&self, location: Location, direction: Direction) -> Option<&Tile> {
        self.tiles.get(direction.attempt_from(location).as_index())
    }

    /// Whether the tiles at `location` and across its `direction` side are wired to each other.
    pub fn is_linked(&self, location: Location, direction: Direction) -> bool {
        match (self.tiles.get(location.as_index()), self.neighbor(location, direction)) {
            (Some(tile), Some(neighbor)) => tile.connected_toward(direction, neighbor),
            _ => false,
        }
    }

    /// Every tile, column by column.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.t().into_iter()
    }

    /// Every tile mutably, column by column.
    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.view_mut().reversed_axes().into_iter()
    }

    /// Every location, column by column.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.tiles().map(Tile::location)
    }

    pub fn clear_connectors(&mut self) {
        self.tiles.iter_mut().for_each(Tile::clear_all_connectors);
    }

    pub fn clear_power(&mut self) {
        self.tiles.iter_mut().for_each(Tile::unpower);
    }

    /// Turn every tile counterclockwise zero, one or two times, drawing one count per tile column by column.
    pub fn scramble<R: Rng>(&mut self, rng: &mut R) {
        for tile in self.tiles_mut() {
            let turns = rng.gen_range(0..3u8);
            for _ in 0..turns {
                tile.rotate_left();
            }
        }
    }

    /// Whether every tile has a nonzero power level.
    pub fn is_fully_powered(&self) -> bool {
        self.tiles.iter().all(Tile::is_powered)
    }

    /// All currently aligned connections, each listed once.
    pub fn live_links(&self) -> HashSet<UnorderedPair<Location>> {
        let mut links = HashSet::with_capacity(self.tile_count());
        for location in self.locations() {
            for direction in Direction::FORWARD_VARIANTS {
                if self.is_linked(location, *direction) {
                    links.insert(UnorderedPair::from((location, direction.attempt_from(location))));
                }
            }
        }

        links
    }

    /// The aligned connections as a graph over locations.
    ///
    /// Each edge weight is the direction from the lower indexed endpoint toward the other.
    pub fn wire_graph(&self) -> UnGraphMap<Location, Direction> {
        let mut graph = UnGraphMap::with_capacity(
            self.tile_count(),
            // "horizontal" and "vertical" edges of a fully linked grid
            (self.width() - 1) * self.height() + (self.height() - 1) * self.width(),
        );

        for location in self.locations() {
            graph.add_node(location);
            for direction in Direction::FORWARD_VARIANTS {
                if self.is_linked(location, *direction) {
                    graph.add_edge(location, direction.attempt_from(location), *direction);
                }
            }
        }

        graph
    }

    /// Confirm the aligned connections form a single tree covering the whole board.
    pub fn check_spanning_tree(&self) -> Result<(), InvariantViolation> {
        let graph = self.wire_graph();

        let mut bfs = Bfs::new(&graph, Location::ORIGIN);
        let mut reached = 0;
        while bfs.next(&graph).is_some() {
            reached += 1;
        }
        if reached != self.tile_count() {
            return Err(InvariantViolation::Disconnected { reached, expected: self.tile_count() });
        }

        // connected with n - 1 edges means acyclic as well
        let expected = self.tile_count() - 1;
        if graph.edge_count() != expected {
            return Err(InvariantViolation::WrongEdgeCount { actual: graph.edge_count(), expected });
        }

        Ok(())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.height() * (self.width() * 3 + 1));

        for row in self.tiles.rows() {
            for tile in row {
                out.push(tile.glyph());
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
