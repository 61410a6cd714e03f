//! Fixed 8×8 cell masks packed into a `u64`.
//!
//! The board state is expressed as a handful of these masks (ship cells per
//! owner, hits, misses), so set operations on whole boards are single integer
//! instructions. The type is `no_std` friendly and `Copy`.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::config::BOARD_SIZE;

/// A coordinate outside `[0, BOARD_SIZE)` on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "coordinate ({}, {}) is off the board", self.row, self.col)
    }
}

/// An 8×8 cell set stored row-major in a `u64`.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Mask {
    bits: u64,
}

impl Mask {
    /// Create an empty mask (no cells set).
    #[inline]
    pub const fn new() -> Self {
        Mask { bits: 0 }
    }

    /// Number of set cells.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cells are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Gets the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, OutOfBounds> {
        let idx = Self::index(row, col)?;
        Ok((self.bits >> idx) & 1 != 0)
    }

    /// Sets the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), OutOfBounds> {
        let idx = Self::index(row, col)?;
        self.bits |= 1 << idx;
        Ok(())
    }

    /// Clears the cell at (row, col).
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), OutOfBounds> {
        let idx = Self::index(row, col)?;
        self.bits &= !(1 << idx);
        Ok(())
    }

    /// Returns true if every cell of `other` is also set in `self`.
    #[inline]
    pub fn contains(&self, other: Mask) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Consumes the mask and returns the raw integer.
    #[inline]
    pub fn into_raw(self) -> u64 {
        self.bits
    }

    /// Creates a mask from the raw integer.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Mask { bits: raw }
    }

    /// Creates a mask from an iterator over `(row, col)` cells.
    pub fn from_cells<I>(iter: I) -> Result<Self, OutOfBounds>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut mask = Self::new();
        for (r, c) in iter {
            mask.set(r, c)?;
        }
        Ok(mask)
    }

    /// Iterator over the set cells in row-major order.
    #[inline]
    pub fn iter_set_cells(&self) -> SetCells {
        SetCells { bits: self.bits }
    }

    #[inline]
    fn index(row: usize, col: usize) -> Result<usize, OutOfBounds> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            Err(OutOfBounds { row, col })
        } else {
            Ok(row * BOARD_SIZE + col)
        }
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mask:")?;
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let cell = if (self.bits >> (r * BOARD_SIZE + c)) & 1 != 0 {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set cells of a mask.
#[derive(Clone, Copy)]
pub struct SetCells {
    bits: u64,
}

impl Iterator for SetCells {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some((idx / BOARD_SIZE, idx % BOARD_SIZE))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SetCells {}

impl BitAnd for Mask {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Mask::from_raw(self.bits & rhs.bits)
    }
}

impl BitOr for Mask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Mask::from_raw(self.bits | rhs.bits)
    }
}

impl BitXor for Mask {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Mask::from_raw(self.bits ^ rhs.bits)
    }
}

impl Not for Mask {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Mask::from_raw(!self.bits)
    }
}

impl BitAndAssign for Mask {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitOrAssign for Mask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitXorAssign for Mask {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.bits ^= rhs.bits;
    }
}
