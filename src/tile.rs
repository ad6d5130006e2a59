use strum::VariantArray;

use crate::direction::Direction;
use crate::location::Location;

/// Hop budget of the power station; `0` means unpowered.
pub type PowerLevel = u32;

/// Coarse brightness band of a tile's power level, relative to the station radius.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PowerTier {
    Unpowered,
    Faint,
    Low,
    High,
    Full,
}

/// One square of the board.
///
/// A tile knows its own location but not its neighbors; adjacency is always resolved through the
/// [`Board`](crate::Board).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Tile {
    location: Location,
    // indexed by `Direction as usize`, i.e. N, E, S, W
    connectors: [bool; 4],
    pub(crate) power_level: PowerLevel,
    pub(crate) power_station: bool,
}

impl Tile {
    /// A tile with no wires at `location`.
    pub fn blank(location: Location) -> Self {
        Self {
            location,
            connectors: [false; 4],
            power_level: 0,
            power_station: false,
        }
    }

    /// Where this tile sits on its board.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Whether a wire leaves this tile on `direction`'s side.
    pub fn connector(&self, direction: Direction) -> bool {
        self.connectors[direction.index()]
    }

    /// Every side with a wire, in canonical order.
    pub fn exits(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::VARIANTS.iter().copied().filter(|dir| self.connector(*dir))
    }

    pub fn set_connector(&mut self, direction: Direction) {
        self.connectors[direction.index()] = true;
    }

    pub fn clear_all_connectors(&mut self) {
        self.connectors = [false; 4];
    }

    /// Turn the tile a quarter counterclockwise: north takes east's wire, east takes south's, and so on.
    pub fn rotate_left(&mut self) {
        self.connectors.rotate_left(1);
    }

    /// Turn the tile a quarter clockwise: north takes west's wire, west takes south's, and so on.
    pub fn rotate_right(&mut self) {
        self.connectors.rotate_right(1);
    }

    /// Whether this tile and `neighbor` both carry a wire on the shared side in `direction`.
    ///
    /// A wire on only one side never conducts.
    pub fn connected_toward(&self, direction: Direction, neighbor: &Tile) -> bool {
        self.connector(direction) && neighbor.connector(direction.invert())
    }

    /// Current power level, `0` when unpowered.
    pub fn power_level(&self) -> PowerLevel {
        self.power_level
    }

    pub fn is_powered(&self) -> bool {
        self.power_level > 0
    }

    pub(crate) fn set_power_level(&mut self, level: PowerLevel) {
        self.power_level = level;
    }

    pub(crate) fn unpower(&mut self) {
        self.power_level = 0;
    }

    /// Whether the power station currently sits on this tile.
    pub fn is_power_station(&self) -> bool {
        self.power_station
    }

    /// Classify this tile's level against `radius` for drawing.
    pub fn power_tier(&self, radius: PowerLevel) -> PowerTier {
        // compare in quarters to stay in integers: level >= radius * k / 4
        let quarters = self.power_level as u64 * 4;
        let radius = radius as u64;
        if self.power_level == 0 {
            PowerTier::Unpowered
        } else if quarters >= radius * 3 {
            PowerTier::Full
        } else if quarters >= radius * 2 {
            PowerTier::High
        } else if quarters >= radius {
            PowerTier::Low
        } else {
            PowerTier::Faint
        }
    }

    /// A box-drawing character showing the wires on this tile.
    pub fn glyph(&self) -> char {
        let mask = self.exits().fold(0usize, |acc, dir| acc | 1 << dir.index());
        // bits: north 1, east 2, south 4, west 8
        const GLYPHS: [char; 16] = [
            ' ', '╵', '╶', '└', '╷', '│', '┌', '├',
            '╴', '┘', '─', '┴', '┐', '┤', '┬', '┼',
        ];
        GLYPHS[mask]
    }
}
