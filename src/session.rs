use ndarray::Array2;
use rand_chacha::ChaCha8Rng;
use tracing::{info, trace};

use crate::board::Board;
use crate::builder::BoardBuilder;
use crate::direction::Direction;
use crate::error::GenerationError;
use crate::location::{Dimension, Location};
use crate::power::PowerStation;
use crate::spanning::{kruskal, materialize, Edge};
use crate::tile::{PowerLevel, Tile};
use crate::topology::compute_radius;

/// Settings that survive a [`Session::reset`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SessionSettings {
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) radius: Option<PowerLevel>,
    pub(crate) scramble: bool,
    pub(crate) seeded: bool,
}

/// Power levels after one tick.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TickReport {
    /// One level per tile, indexed `(row, col)`.
    pub levels: Array2<PowerLevel>,
    /// Every tile is powered.
    pub is_won: bool,
}

/// One puzzle in play: a generated board, its power station, and the random stream that made it.
///
/// This is the surface an input or rendering layer drives. All operations are synchronous and run to
/// completion.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    station: PowerStation,
    tree: Vec<Edge>,
    rng: ChaCha8Rng,
    settings: SessionSettings,
    ticks: u64,
}

/// A scrambled `width` by `height` board, reproducible when `seed` is given.
pub fn new_board(width: usize, height: usize, seed: Option<u64>) -> Result<Session, GenerationError> {
    let mut builder = BoardBuilder::with_size(width, height);
    if let Some(seed) = seed {
        builder.seed(seed);
    }

    builder.build()
}

/// Wire a fresh board along a random spanning tree, size the radius, scramble, and place the station.
fn generate(settings: &SessionSettings, rng: &mut ChaCha8Rng) -> Result<(Board, PowerStation, Vec<Edge>), GenerationError> {
    let mut board = Board::with_dims(settings.dims);
    let tree = kruskal(settings.dims, rng)?;
    materialize(&mut board, &tree)?;
    board.check_spanning_tree()?;

    // the radius belongs to the tree's shape, so measure it before scrambling
    let radius = match settings.radius {
        Some(radius) => radius,
        None => compute_radius(&board, Location::ORIGIN)?,
    };

    if settings.scramble {
        board.scramble(rng);
    }

    let station = PowerStation::place(&mut board, Location::ORIGIN, radius)?;
    Ok((board, station, tree))
}

impl Session {
    pub(crate) fn generate(settings: SessionSettings, mut rng: ChaCha8Rng) -> Result<Self, GenerationError> {
        let (board, station, tree) = generate(&settings, &mut rng)?;
        info!(
            width = settings.dims.0.get(),
            height = settings.dims.1.get(),
            radius = station.radius(),
            seeded = settings.seeded,
            "generated board"
        );

        Ok(Self { board, station, tree, rng, settings, ticks: 0 })
    }

    /// Throw the board away and generate a new one of the same size from the next stretch of this
    /// session's random stream. The station returns to the origin and the radius is re-derived.
    ///
    /// If generation fails the current board is kept untouched.
    pub fn reset(&mut self) -> Result<(), GenerationError> {
        let (board, station, tree) = generate(&self.settings, &mut self.rng)?;
        self.board = board;
        self.station = station;
        self.tree = tree;

        info!(radius = self.station.radius(), "board reset");
        Ok(())
    }

    /// Rotate the tile at `(row, col)` counterclockwise. Returns `false` if there is no such tile.
    pub fn rotate_tile_left(&mut self, row: usize, col: usize) -> bool {
        self.rotate_tile(Location(col, row), Tile::rotate_left)
    }

    /// Rotate the tile at `(row, col)` clockwise. Returns `false` if there is no such tile.
    pub fn rotate_tile_right(&mut self, row: usize, col: usize) -> bool {
        self.rotate_tile(Location(col, row), Tile::rotate_right)
    }

    fn rotate_tile(&mut self, location: Location, rotate: fn(&mut Tile)) -> bool {
        match self.board.tile_mut(location) {
            Ok(tile) => {
                rotate(tile);
                trace!(?location, glyph = %tile.glyph(), "rotated tile");
                true
            }
            Err(_) => false,
        }
    }

    /// Move the power station one tile along an aligned connection. Returns whether it moved.
    pub fn move_power_station(&mut self, direction: Direction) -> bool {
        self.station.try_move(&mut self.board, direction)
    }

    /// Re-power the board from the station and report the result.
    pub fn tick(&mut self) -> TickReport {
        self.station.propagate(&mut self.board);
        self.ticks += 1;

        TickReport {
            levels: self.board.tiles.map(Tile::power_level),
            is_won: self.board.is_fully_powered(),
        }
    }

    /// Whether every tile was powered as of the last tick.
    pub fn is_won(&self) -> bool {
        self.board.is_fully_powered()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dims(&self) -> (Dimension, Dimension) {
        self.settings.dims
    }

    pub fn radius(&self) -> PowerLevel {
        self.station.radius()
    }

    /// Where the power station currently sits.
    pub fn station(&self) -> Location {
        self.station.location()
    }

    /// The spanning tree the current board was wired from.
    pub fn tree(&self) -> &[Edge] {
        &self.tree
    }

    /// Ticks run since the session was created.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
