//! Shared domain types: owners, cell states, shot results and error kinds.

use core::fmt;

use crate::mask::OutOfBounds;

/// One of the two players. Every ship and every turn belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Owner {
    Player1,
    Player2,
}

impl Owner {
    /// Both owners in placement order: Player1's fleet goes down first.
    pub const ALL: [Owner; 2] = [Owner::Player1, Owner::Player2];

    /// The other owner.
    #[inline]
    pub fn opponent(self) -> Owner {
        match self {
            Owner::Player1 => Owner::Player2,
            Owner::Player2 => Owner::Player1,
        }
    }

    /// Index into per-owner arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Owner::Player1 => 0,
            Owner::Player2 => 1,
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Player1 => write!(f, "Player 1"),
            Owner::Player2 => write!(f, "Player 2"),
        }
    }
}

/// Ground-truth state of a single board cell. Exactly one at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Ship(Owner),
    Hit,
    Miss,
}

/// A cell as seen by one viewer. Opponent ship cells that have not been hit
/// render as `Empty` (fog of war); the viewer's own ships show as `Ship`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleCell {
    Empty,
    Ship,
    Hit,
    Miss,
}

/// What a successful move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// The move resolved an empty cell.
    Miss,
    /// The move hit an opponent ship segment.
    Hit,
    /// The move hit the last intact segment of a ship, carrying its length.
    Sunk { size: usize },
}

/// Reasons a move is rejected. Rejected moves never mutate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinate outside the board on either axis.
    OutOfBounds { row: usize, col: usize },
    /// A winner is already decided.
    GameOver,
    /// The acting player is not the current player.
    NotYourTurn,
    /// The cell was already resolved as a hit or a miss.
    CellAlreadyResolved,
    /// The cell holds one of the acting player's own ships.
    OwnShip,
}

impl From<OutOfBounds> for MoveError {
    fn from(err: OutOfBounds) -> Self {
        MoveError::OutOfBounds {
            row: err.row,
            col: err.col,
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { row, col } => {
                write!(f, "coordinate ({}, {}) is off the board", row, col)
            }
            MoveError::GameOver => write!(f, "the game is already over"),
            MoveError::NotYourTurn => write!(f, "it is not this player's turn"),
            MoveError::CellAlreadyResolved => {
                write!(f, "cell was already resolved as a hit or miss")
            }
            MoveError::OwnShip => write!(f, "cannot target a cell of your own fleet"),
        }
    }
}

/// Errors returned by ship placement, random or manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ship would extend past the board edge.
    OutOfBounds,
    /// Ship would share a cell with an already placed ship of either owner.
    Overlap,
    /// Ship would cover a cell already resolved as a hit or a miss.
    ResolvedCell,
    /// Ship index outside the fleet.
    InvalidIndex,
    /// The fleet slot is already filled.
    AlreadyPlaced,
    /// Random placement gave up after the attempt cap, carrying the ship
    /// length that could not be placed.
    Exhausted { size: usize },
}

impl From<OutOfBounds> for PlacementError {
    fn from(_: OutOfBounds) -> Self {
        PlacementError::OutOfBounds
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "ship placement is out of bounds"),
            PlacementError::Overlap => write!(f, "ship placement overlaps another ship"),
            PlacementError::ResolvedCell => {
                write!(f, "ship placement covers an already resolved cell")
            }
            PlacementError::InvalidIndex => write!(f, "ship index is out of range"),
            PlacementError::AlreadyPlaced => write!(f, "ship is already placed on the board"),
            PlacementError::Exhausted { size } => {
                write!(f, "no open placement found for ship of length {}", size)
            }
        }
    }
}
