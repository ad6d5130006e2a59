use std::collections::VecDeque;

use strum::VariantArray;
use tracing::trace;

use crate::board::Board;
use crate::direction::Direction;
use crate::error::InvalidArgument;
use crate::location::Location;
use crate::tile::PowerLevel;

/// The single power source on a board and how far its power reaches.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PowerStation {
    location: Location,
    radius: PowerLevel,
}

impl PowerStation {
    /// Put the station on `location`, flagging that tile.
    ///
    /// The caller is responsible for clearing any station flag already on the board.
    pub fn place(board: &mut Board, location: Location, radius: PowerLevel) -> Result<Self, InvalidArgument> {
        board.tile_mut(location)?.power_station = true;
        Ok(Self { location, radius })
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn radius(&self) -> PowerLevel {
        self.radius
    }

    /// Recompute every tile's power level from scratch.
    ///
    /// The station tile gets [`Self::radius`] and each aligned hop away loses one level. A tile is only
    /// assigned while its level is still `0`, and the worklist is breadth-first, so every tile ends up with
    /// `radius` minus its shortest hop distance even when rotations have closed a loop of wires. Tiles
    /// that would receive `0` stay unpowered and propagate nothing.
    pub fn propagate(&self, board: &mut Board) {
        board.clear_power();

        let Ok(station) = board.tile_mut(self.location) else {
            return;
        };
        station.set_power_level(self.radius);

        let mut worklist = VecDeque::from([(self.location, self.radius)]);
        while let Some((current, level)) = worklist.pop_front() {
            for direction in Direction::VARIANTS {
                if !board.is_linked(current, *direction) {
                    continue;
                }

                let next = direction.attempt_from(current);
                if let Ok(neighbor) = board.tile_mut(next) {
                    // a neighbor that would get 0 is out of range
                    if neighbor.power_level == 0 && level > 1 {
                        neighbor.set_power_level(level - 1);
                        worklist.push_back((next, level - 1));
                    }
                }
            }
        }
    }

    /// Slide the station one tile along `direction`.
    ///
    /// Only possible across a currently aligned connection, which also keeps the station on the board.
    /// Returns whether the station moved. The radius is unchanged.
    pub fn try_move(&mut self, board: &mut Board, direction: Direction) -> bool {
        if !board.is_linked(self.location, direction) {
            trace!(from = ?self.location, %direction, "station move blocked");
            return false;
        }

        let destination = direction.attempt_from(self.location);
        if let Ok(old) = board.tile_mut(self.location) {
            old.power_station = false;
        }
        if let Ok(new) = board.tile_mut(destination) {
            new.power_station = true;
        }

        trace!(from = ?self.location, to = ?destination, "station moved");
        self.location = destination;
        true
    }
}
