//! Common types for the arena: coordinates, cell states, shot outcomes and
//! the error enums shared by the board and the match controller.

use core::fmt;

use crate::config::BOARD_SIZE;

const GRID: usize = BOARD_SIZE as usize;

/// A cell position, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` when the coordinate lies on the `BOARD_SIZE`×`BOARD_SIZE` grid.
    pub fn in_bounds(&self) -> bool {
        self.row < GRID && self.col < GRID
    }

    /// One step along `dir`, or `None` when that would leave the grid.
    pub fn step(&self, dir: Direction) -> Option<Coord> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Coord::new(row, col);
        next.in_bounds().then_some(next)
    }

    /// In-bounds orthogonal neighbours, in `Direction::ALL` order.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        Direction::ALL.into_iter().filter_map(move |d| self.step(d))
    }

    /// Every coordinate of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..GRID).flat_map(|row| (0..GRID).map(move |col| Coord::new(row, col)))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal unit step on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// `(row, col)` delta of one step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
        }
    }

    pub const fn reversed(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    /// Glyph used by text renderings of a board.
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Ship => 'S',
            Cell::Hit => 'X',
            Cell::Miss => 'O',
        }
    }
}

/// Result of a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    Hit,
    Miss,
}

impl ShotOutcome {
    pub fn is_hit(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

impl From<bool> for ShotOutcome {
    fn from(hit: bool) -> Self {
        if hit {
            ShotOutcome::Hit
        } else {
            ShotOutcome::Miss
        }
    }
}

/// One entry of a shooter's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotRecord {
    pub target: Coord,
    pub outcome: ShotOutcome,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds(Coord),
    /// Ship would leave the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement touches another ship where a buffer is required.
    ShipAdjacent,
    /// Ships may only be placed before the first shot lands.
    PlacementClosed,
    /// Cell was already shot.
    AlreadyShot(Coord),
    /// Random placement ran out of attempts for a ship of this length.
    UnableToPlaceShip { length: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => write!(f, "Coordinate {} is out of bounds", c),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipAdjacent => write!(f, "Ship placement touches another ship"),
            BoardError::PlacementClosed => write!(f, "Ships cannot be placed once play has begun"),
            BoardError::AlreadyShot(c) => write!(f, "Cell {} was already shot", c),
            BoardError::UnableToPlaceShip { length } => {
                write!(f, "Unable to place ship of length {}", length)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors that end a match early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A player's fleet could not be placed.
    Placement { player: usize, source: BoardError },
    /// A player's board does not hold the fleet manifest after placement.
    InvalidFleet { player: usize, ship_cells: usize },
    /// The agent reported that it has nothing left to shoot at.
    NoTarget { player: usize },
    /// The agent kept proposing invalid targets.
    TargetAttemptsExhausted { player: usize, attempts: usize },
    /// Applying a validated shot failed on the opponent board.
    Board(BoardError),
    /// The match has already ended.
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Placement { player, source } => {
                write!(f, "Player {} could not place its fleet: {}", player, source)
            }
            GameError::InvalidFleet { player, ship_cells } => write!(
                f,
                "Player {} placed {} ship cells, expected {}",
                player,
                ship_cells,
                crate::config::TOTAL_SHIP_CELLS
            ),
            GameError::NoTarget { player } => write!(f, "Player {} has no target left", player),
            GameError::TargetAttemptsExhausted { player, attempts } => write!(
                f,
                "Player {} proposed {} invalid targets in a row",
                player, attempts
            ),
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::GameOver => write!(f, "The match is already over"),
        }
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Placement { source, .. } => Some(source),
            GameError::Board(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stays_on_grid() {
        assert_eq!(Coord::new(0, 0).step(Direction::Up), None);
        assert_eq!(Coord::new(0, 0).step(Direction::Left), None);
        assert_eq!(Coord::new(9, 9).step(Direction::Down), None);
        assert_eq!(Coord::new(9, 9).step(Direction::Right), None);
        assert_eq!(Coord::new(4, 4).step(Direction::Up), Some(Coord::new(3, 4)));
    }

    #[test]
    fn corner_has_two_neighbors() {
        let n: Vec<_> = Coord::new(0, 9).neighbors().collect();
        assert_eq!(n, vec![Coord::new(1, 9), Coord::new(0, 8)]);
    }

    #[test]
    fn reversed_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.reversed().reversed(), d);
            let (r, c) = d.delta();
            assert_eq!(d.reversed().delta(), (-r, -c));
        }
    }

    #[test]
    fn all_is_row_major() {
        let cells: Vec<_> = Coord::all().take(12).collect();
        assert_eq!(cells[0], Coord::new(0, 0));
        assert_eq!(cells[1], Coord::new(0, 1));
        assert_eq!(cells[10], Coord::new(1, 0));
        assert_eq!(Coord::all().count(), 100);
    }
}
