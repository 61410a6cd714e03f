//! Ship records: owner, length, anchor and the cell mask they occupy.

use core::fmt;

use crate::common::{Owner, PlacementError};
use crate::config::BOARD_SIZE;
use crate::mask::Mask;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship placed on the shared board.
///
/// Whether the ship is sunk is never stored; it is derived from the board's
/// hit mask, which the caller passes in explicitly.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    owner: Owner,
    size: usize,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: Mask,
}

impl Ship {
    /// Build a ship of `size` cells anchored at (`row`, `col`), running along
    /// `orientation`. Fails if any cell would fall off the board.
    pub fn new(
        owner: Owner,
        size: usize,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, PlacementError> {
        match orientation {
            Orientation::Horizontal => {
                if col + size > BOARD_SIZE {
                    return Err(PlacementError::OutOfBounds);
                }
            }
            Orientation::Vertical => {
                if row + size > BOARD_SIZE {
                    return Err(PlacementError::OutOfBounds);
                }
            }
        }

        let mut mask = Mask::new();
        for i in 0..size {
            let (r, c) = match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            };
            mask.set(r, c)?;
        }

        Ok(Ship {
            owner,
            size,
            orientation,
            row,
            col,
            mask,
        })
    }

    /// True once every cell of the ship appears in `hits`.
    #[inline]
    pub fn is_sunk(&self, hits: Mask) -> bool {
        hits.contains(self.mask)
    }

    /// True if the ship occupies (`row`, `col`).
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    /// Owning player.
    pub fn owner(&self) -> Owner {
        self.owner
    }

    /// Length in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Anchor of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> Mask {
        self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ owner: {:?}, size: {}, origin: ({}, {}), orientation: {:?} }}",
            self.owner, self.size, self.row, self.col, self.orientation,
        )
    }
}
