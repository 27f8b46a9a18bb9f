//! Append-only, duplicate-free record of one shooter's shots.

use alloc::vec::Vec;

use crate::bitboard::BitBoard;
use crate::common::{Coord, ShotOutcome, ShotRecord};
use crate::config::BOARD_SIZE;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShotHistory {
    records: Vec<ShotRecord>,
    taken: BB,
}

impl ShotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if `coord` has already been fired at.
    pub fn contains(&self, coord: Coord) -> bool {
        self.taken.contains(coord)
    }

    /// Append a shot. Returns `false` and leaves the history untouched when
    /// the coordinate is off-grid or was already recorded.
    pub fn record(&mut self, target: Coord, outcome: ShotOutcome) -> bool {
        if !self.taken.insert(target) {
            return false;
        }
        self.records.push(ShotRecord { target, outcome });
        true
    }

    /// Shots in the order they were taken.
    pub fn records(&self) -> &[ShotRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_hit()).count()
    }

    /// `true` once every cell of the grid has been fired at.
    pub fn is_exhausted(&self) -> bool {
        self.taken.is_full()
    }

    /// First never-fired cell in row-major order.
    pub fn first_unshot(&self) -> Option<Coord> {
        Coord::all().find(|&c| !self.contains(c))
    }
}
