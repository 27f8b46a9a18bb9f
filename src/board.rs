//! Game board: a fixed grid of cell states plus placement validity checks.

use core::fmt;
use rand::{rngs::SmallRng, Rng};

use crate::common::{BoardError, Cell, Coord, ShotOutcome};
use crate::config::{ship_name_for, BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Placement};

const GRID: usize = BOARD_SIZE as usize;

/// How close a new ship may sit to ships already on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementRule {
    /// Ships may touch; only overlap is forbidden.
    Touching,
    /// No existing ship cell may be orthogonally adjacent to the new ship.
    Buffered,
}

/// One player's grid.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; GRID]; GRID],
    shots_received: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (every cell `Empty`).
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; GRID]; GRID],
            shots_received: 0,
        }
    }

    /// State of the cell at `coord`.
    pub fn cell(&self, coord: Coord) -> Result<Cell, BoardError> {
        if !coord.in_bounds() {
            return Err(BoardError::OutOfBounds(coord));
        }
        Ok(self.cells[coord.row][coord.col])
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID]> {
        self.cells.iter()
    }

    /// Number of cells currently in the given state.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == state).count()
    }

    /// Unhit ship segments left on the board.
    pub fn ship_cells_remaining(&self) -> usize {
        self.count(Cell::Ship)
    }

    /// `true` when no unhit ship segment remains.
    pub fn all_sunk(&self) -> bool {
        self.ship_cells_remaining() == 0
    }

    /// Number of shots this board has absorbed.
    pub fn shots_received(&self) -> usize {
        self.shots_received
    }

    fn is_ship(&self, coord: Coord) -> bool {
        matches!(self.cell(coord), Ok(Cell::Ship))
    }

    /// Check a placement against the board without mutating it.
    pub fn check_placement(
        &self,
        placement: &Placement,
        rule: PlacementRule,
    ) -> Result<(), BoardError> {
        if self.shots_received > 0 {
            return Err(BoardError::PlacementClosed);
        }
        for cell in placement.cells()? {
            if self.cells[cell.row][cell.col] != Cell::Empty {
                return Err(BoardError::ShipOverlaps);
            }
            // neighbours come from Coord::neighbors, which never leaves the grid
            if rule == PlacementRule::Buffered && cell.neighbors().any(|n| self.is_ship(n)) {
                return Err(BoardError::ShipAdjacent);
            }
        }
        Ok(())
    }

    /// `true` when `placement` may be added under `rule`.
    pub fn can_place(&self, placement: &Placement, rule: PlacementRule) -> bool {
        self.check_placement(placement, rule).is_ok()
    }

    /// Mark every cell of `placement` as `Ship`.
    pub fn place_ship(
        &mut self,
        placement: &Placement,
        rule: PlacementRule,
    ) -> Result<(), BoardError> {
        self.check_placement(placement, rule)?;
        for cell in placement.cells()? {
            self.cells[cell.row][cell.col] = Cell::Ship;
        }
        Ok(())
    }

    /// Sample origins and orientations until one is legal under `rule`.
    ///
    /// Origins are drawn from the whole grid, so ships near the far edges are
    /// rejected and resampled rather than clamped.
    pub fn random_placement(
        &self,
        rng: &mut SmallRng,
        length: usize,
        rule: PlacementRule,
    ) -> Result<Placement, BoardError> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let origin = Coord::new(rng.random_range(0..GRID), rng.random_range(0..GRID));
            let orientation = if rng.random() {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            let candidate = Placement::new(origin, orientation, length);
            if self.can_place(&candidate, rule) {
                return Ok(candidate);
            }
        }
        Err(BoardError::UnableToPlaceShip { length })
    }

    /// Randomly place every ship of `fleet`, in manifest order.
    pub fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        fleet: &[usize],
        rule: PlacementRule,
    ) -> Result<(), BoardError> {
        for (i, &length) in fleet.iter().enumerate() {
            let placement = self.random_placement(rng, length, rule)?;
            self.place_ship(&placement, rule)?;
            log::trace!(
                "{} placed at {} {:?}",
                ship_name_for(i, length),
                placement.origin(),
                placement.orientation()
            );
        }
        Ok(())
    }

    /// Apply an incoming shot: `Ship` becomes `Hit`, `Empty` becomes `Miss`.
    pub fn receive_shot(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        let cell = self.cell(coord)?;
        let (next, outcome) = match cell {
            Cell::Ship => (Cell::Hit, ShotOutcome::Hit),
            Cell::Empty => (Cell::Miss, ShotOutcome::Miss),
            Cell::Hit | Cell::Miss => return Err(BoardError::AlreadyShot(coord)),
        };
        self.cells[coord.row][coord.col] = next;
        self.shots_received += 1;
        Ok(outcome)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.glyph())?;
            }
            if r + 1 < GRID {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ ships: {}, hits: {}, misses: {} }}",
            self.count(Cell::Ship),
            self.count(Cell::Hit),
            self.count(Cell::Miss)
        )?;
        write!(f, "{}", self)
    }
}
