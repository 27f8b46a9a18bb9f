//! Ship definitions and placement footprints.

use crate::common::{BoardError, Coord, Direction};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Direction in which the ship extends from its origin.
    pub fn direction(self) -> Direction {
        match self {
            Orientation::Horizontal => Direction::Right,
            Orientation::Vertical => Direction::Down,
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A candidate position for a straight ship: origin, orientation and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    origin: Coord,
    orientation: Orientation,
    length: usize,
}

impl Placement {
    pub fn new(origin: Coord, orientation: Orientation, length: usize) -> Self {
        Self {
            origin,
            orientation,
            length,
        }
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Cell `i` of the ship, or `None` when it falls off the grid.
    fn segment(&self, i: usize) -> Option<Coord> {
        let c = match self.orientation {
            Orientation::Horizontal => Coord::new(self.origin.row, self.origin.col + i),
            Orientation::Vertical => Coord::new(self.origin.row + i, self.origin.col),
        };
        c.in_bounds().then_some(c)
    }

    /// `true` when every segment lies on the grid.
    pub fn in_bounds(&self) -> bool {
        self.length > 0 && (0..self.length).all(|i| self.segment(i).is_some())
    }

    /// Occupied cells, origin first. Fails if any segment leaves the grid.
    pub fn cells(&self) -> Result<impl Iterator<Item = Coord> + '_, BoardError> {
        if !self.in_bounds() {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok((0..self.length).filter_map(move |i| self.segment(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_cells() {
        let p = Placement::new(Coord::new(0, 0), Orientation::Vertical, 4);
        let cells: Vec<_> = p.cells().unwrap().collect();
        assert_eq!(
            cells,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(2, 0),
                Coord::new(3, 0)
            ]
        );
    }

    #[test]
    fn overhanging_ship_rejected() {
        let p = Placement::new(Coord::new(3, 7), Orientation::Horizontal, 4);
        assert!(!p.in_bounds());
        assert_eq!(p.cells().err(), Some(BoardError::ShipOutOfBounds));

        let edge = Placement::new(Coord::new(3, 6), Orientation::Horizontal, 4);
        assert!(edge.in_bounds());
    }
}
