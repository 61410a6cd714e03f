//! The single shared board holding ground truth for both fleets.
//!
//! One coordinate space carries both owners' ship cells plus the global hit
//! and miss masks, so the no-overlap check at placement time is the same
//! whether two ships belong to one owner or to different owners.

use rand::Rng;

use crate::common::{CellState, MoveError, Owner, PlacementError};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::mask::Mask;
use crate::ship::{Orientation, Ship};

/// Shared board state: per-owner ship masks, hits and misses.
///
/// Invariants: the two ship masks are disjoint, `hits` is a subset of the
/// ship masks' union, and `misses` is disjoint from it. A cell's
/// [`CellState`] is derived with precedence Hit > Miss > Ship > Empty.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    ships: [Mask; 2],
    hits: Mask,
    misses: Mask,
}

impl Board {
    /// Create an empty board (no ships placed, nothing resolved).
    pub fn new() -> Self {
        Board {
            ships: [Mask::new(); 2],
            hits: Mask::new(),
            misses: Mask::new(),
        }
    }

    /// Cells occupied by either owner's ships.
    #[inline]
    pub fn occupied(&self) -> Mask {
        self.ships[0] | self.ships[1]
    }

    /// Cells already resolved as a hit or a miss.
    #[inline]
    pub fn resolved(&self) -> Mask {
        self.hits | self.misses
    }

    /// Ship cells belonging to `owner`.
    pub fn ship_map(&self, owner: Owner) -> Mask {
        self.ships[owner.index()]
    }

    /// All hit cells.
    pub fn hits(&self) -> Mask {
        self.hits
    }

    /// All miss cells.
    pub fn misses(&self) -> Mask {
        self.misses
    }

    /// Derive the ground-truth state of one cell.
    pub fn cell(&self, row: usize, col: usize) -> Result<CellState, MoveError> {
        if self.hits.get(row, col)? {
            Ok(CellState::Hit)
        } else if self.misses.get(row, col)? {
            Ok(CellState::Miss)
        } else if self.ships[Owner::Player1.index()].get(row, col)? {
            Ok(CellState::Ship(Owner::Player1))
        } else if self.ships[Owner::Player2.index()].get(row, col)? {
            Ok(CellState::Ship(Owner::Player2))
        } else {
            Ok(CellState::Empty)
        }
    }

    /// Put a constructed ship onto the board, rejecting any overlap with
    /// already placed ships of either owner and any cell already resolved
    /// as a hit or a miss. A ship over a missed cell could never be sunk,
    /// since resolved cells reject every further shot.
    pub fn place(&mut self, ship: &Ship) -> Result<(), PlacementError> {
        if !(self.occupied() & ship.mask()).is_empty() {
            return Err(PlacementError::Overlap);
        }
        if !(self.resolved() & ship.mask()).is_empty() {
            return Err(PlacementError::ResolvedCell);
        }
        self.ships[ship.owner().index()] |= ship.mask();
        Ok(())
    }

    /// Find a random non-overlapping placement for a ship of `size` cells.
    ///
    /// Rejection sampling: orientation uniform, anchor uniform over the
    /// subrange that keeps the ship on the board, resample when any cell is
    /// occupied or already resolved.
    /// Attempts are capped so a crowded board reports
    /// [`PlacementError::Exhausted`] instead of looping forever.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        owner: Owner,
        size: usize,
    ) -> Result<Ship, PlacementError> {
        if size == 0 || size > BOARD_SIZE {
            return Err(PlacementError::OutOfBounds);
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_row, max_col) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - size),
                Orientation::Vertical => (BOARD_SIZE - size, BOARD_SIZE - 1),
            };
            let row = rng.random_range(0..=max_row);
            let col = rng.random_range(0..=max_col);
            let ship = Ship::new(owner, size, orientation, row, col)?;
            if ((self.occupied() | self.resolved()) & ship.mask()).is_empty() {
                return Ok(ship);
            }
        }
        Err(PlacementError::Exhausted { size })
    }

    /// Mark a ship cell as hit. The caller has already derived the cell state.
    pub(crate) fn mark_hit(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        self.hits.set(row, col)?;
        Ok(())
    }

    /// Mark an empty cell as missed.
    pub(crate) fn mark_miss(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        self.misses.set(row, col)?;
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
