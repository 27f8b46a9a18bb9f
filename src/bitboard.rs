//! Fixed-size occupancy set packed into an unsigned integer.
//!
//! Used for O(1) membership checks of shot coordinates. An `N×N` grid maps
//! onto the low `N*N` bits of `T`, row-major.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coord;

/// A set of coordinates on an `N×N` grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CAPACITY_OK: () = assert!(N * N <= core::mem::size_of::<T>() * 8);

    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        let () = Self::CAPACITY_OK;
        BitBoard { bits: T::zero() }
    }

    #[inline]
    fn index(coord: Coord) -> Option<usize> {
        (coord.row < N && coord.col < N).then(|| coord.row * N + coord.col)
    }

    /// Number of coordinates in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// `true` when every cell of the grid is in the set.
    pub fn is_full(&self) -> bool {
        self.count_ones() == N * N
    }

    /// Membership test; off-grid coordinates are never members.
    pub fn contains(&self, coord: Coord) -> bool {
        match Self::index(coord) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Add `coord`. Returns `false` if it was already present or off-grid.
    pub fn insert(&mut self, coord: Coord) -> bool {
        let Some(idx) = Self::index(coord) else {
            return false;
        };
        let bit = T::one() << idx;
        if (self.bits & bit) != T::zero() {
            return false;
        }
        self.bits = self.bits | bit;
        true
    }

    /// Iterate members in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..N * N)
            .filter(move |&idx| ((self.bits >> idx) & T::one()) != T::zero())
            .map(|idx| Coord::new(idx / N, idx % N))
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let bit = if self.contains(Coord::new(r, c)) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
