//! The rules engine: fleets, turn alternation, move resolution and win
//! detection over the shared board.

use rand::Rng;

use crate::board::Board;
use crate::common::{CellState, MoveError, Owner, PlacementError, ShotResult, VisibleCell};
use crate::config::{BOARD_SIZE, NUM_SHIPS, SHIP_SIZES};
use crate::mask::Mask;
use crate::ship::{Orientation, Ship};

/// A full per-viewer board view, row-major.
pub type VisibleGrid = [[VisibleCell; BOARD_SIZE]; BOARD_SIZE];

/// Snapshot of one placed ship, with its derived sunk flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipState {
    pub size: usize,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub sunk: bool,
}

/// Snapshot of one owner's fleet slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetState {
    pub ships: [Option<ShipState>; NUM_SHIPS],
}

/// Snapshot of the raw board masks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub ships: [Mask; 2],
    pub hits: Mask,
    pub misses: Mask,
}

/// Published state of the whole game, returned after every successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: BoardState,
    pub fleets: [FleetState; 2],
    pub current_player: Owner,
    pub game_over: bool,
    pub winner: Option<Owner>,
}

/// Result of a successful move: what the shot did plus the updated state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub shot: ShotResult,
    pub state: GameState,
}

/// One owner's fleet slots, filled during setup or manual placement.
#[derive(Clone, Copy, Debug)]
struct Fleet {
    ships: [Option<Ship>; NUM_SHIPS],
}

impl Fleet {
    fn empty() -> Self {
        Fleet {
            ships: [None; NUM_SHIPS],
        }
    }

    fn ship_at(&self, row: usize, col: usize) -> Option<&Ship> {
        self.ships.iter().flatten().find(|s| s.covers(row, col))
    }

    /// True when the fleet has at least one ship and every ship is sunk.
    /// An unplaced fleet is never counted as sunk, so partial setups cannot
    /// produce vacuous wins.
    fn all_sunk(&self, hits: Mask) -> bool {
        let mut any = false;
        for ship in self.ships.iter().flatten() {
            if !ship.is_sunk(hits) {
                return false;
            }
            any = true;
        }
        any
    }

    fn state(&self, hits: Mask) -> FleetState {
        let mut ships = [None; NUM_SHIPS];
        for (slot, ship) in ships.iter_mut().zip(self.ships.iter()) {
            *slot = ship.map(|s| {
                let (row, col) = s.origin();
                ShipState {
                    size: s.size(),
                    row,
                    col,
                    orientation: s.orientation(),
                    sunk: s.is_sunk(hits),
                }
            });
        }
        FleetState { ships }
    }
}

/// Core rules engine. Owns all game state exclusively; callers mutate it
/// only through [`GameEngine::setup`], [`GameEngine::reset`],
/// [`GameEngine::place_ship`] and [`GameEngine::submit_move`].
pub struct GameEngine {
    board: Board,
    fleets: [Fleet; 2],
    current: Owner,
    winner: Option<Owner>,
}

impl GameEngine {
    /// Create an engine with an empty board and no ships placed.
    /// Player 1 moves first.
    pub fn new() -> Self {
        GameEngine {
            board: Board::new(),
            fleets: [Fleet::empty(), Fleet::empty()],
            current: Owner::Player1,
            winner: None,
        }
    }

    /// Randomize a fresh game: clear everything, place Player 1's full fleet
    /// and then Player 2's on the shared board, reset the turn to Player 1.
    ///
    /// The new layout is built off to the side and committed only on
    /// success, so a placement failure leaves the previous game intact.
    pub fn setup<R: Rng>(&mut self, rng: &mut R) -> Result<(), PlacementError> {
        let mut board = Board::new();
        let mut fleets = [Fleet::empty(), Fleet::empty()];

        for owner in Owner::ALL {
            for (i, &size) in SHIP_SIZES.iter().enumerate() {
                let ship = board.random_placement(rng, owner, size)?;
                board.place(&ship)?;
                fleets[owner.index()].ships[i] = Some(ship);
            }
        }

        self.board = board;
        self.fleets = fleets;
        self.current = Owner::Player1;
        self.winner = None;
        log::debug!("setup complete, {} to move", self.current);
        Ok(())
    }

    /// Discard the current game and randomize a new one. Alias of
    /// [`GameEngine::setup`].
    pub fn reset<R: Rng>(&mut self, rng: &mut R) -> Result<(), PlacementError> {
        self.setup(rng)
    }

    /// Fill one fleet slot manually. `ship_index` selects the slot and fixes
    /// the length from [`SHIP_SIZES`]. Used for scripted layouts and tests;
    /// [`GameEngine::setup`] is the normal path.
    pub fn place_ship(
        &mut self,
        owner: Owner,
        ship_index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        if ship_index >= NUM_SHIPS {
            return Err(PlacementError::InvalidIndex);
        }
        if self.fleets[owner.index()].ships[ship_index].is_some() {
            return Err(PlacementError::AlreadyPlaced);
        }
        let ship = Ship::new(owner, SHIP_SIZES[ship_index], orientation, row, col)?;
        self.board.place(&ship)?;
        self.fleets[owner.index()].ships[ship_index] = Some(ship);
        Ok(())
    }

    /// Resolve one move by `actor` at (`row`, `col`).
    ///
    /// Precondition checks run in order and reject without mutating
    /// anything: game over, wrong turn, off-board coordinate, already
    /// resolved cell, own ship cell. A legal shot marks the cell hit or
    /// missed, evaluates the win condition and, if the game continues,
    /// passes the turn to the opponent. After a winning move the turn does
    /// not flip; the engine is terminal.
    pub fn submit_move(
        &mut self,
        actor: Owner,
        row: usize,
        col: usize,
    ) -> Result<MoveOutcome, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        if actor != self.current {
            return Err(MoveError::NotYourTurn);
        }

        let shot = match self.board.cell(row, col)? {
            CellState::Hit | CellState::Miss => return Err(MoveError::CellAlreadyResolved),
            CellState::Ship(owner) if owner == actor => return Err(MoveError::OwnShip),
            CellState::Ship(owner) => {
                self.board.mark_hit(row, col)?;
                // A ship-marked cell with no fleet record means the engine
                // state is corrupt, not that the caller erred.
                let ship = self.fleets[owner.index()]
                    .ship_at(row, col)
                    .expect("ship cell on the board has no matching fleet record");
                if ship.is_sunk(self.board.hits()) {
                    ShotResult::Sunk { size: ship.size() }
                } else {
                    ShotResult::Hit
                }
            }
            CellState::Empty => {
                self.board.mark_miss(row, col)?;
                ShotResult::Miss
            }
        };

        // Own-ship targeting is rejected above, so only the opponent's fleet
        // can have changed.
        debug_assert!(
            !self.fleets[actor.index()].all_sunk(self.board.hits()),
            "a player cannot sink their own fleet"
        );
        let opponent = actor.opponent();
        if self.fleets[opponent.index()].all_sunk(self.board.hits()) {
            self.winner = Some(actor);
            log::debug!("{} wins", actor);
        } else {
            self.current = opponent;
        }

        Ok(MoveOutcome {
            shot,
            state: self.state(),
        })
    }

    /// The owner whose turn it is. Unchanged once the game is over.
    pub fn current_player(&self) -> Owner {
        self.current
    }

    /// True once a winner is decided.
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The winner, if the game is over.
    pub fn winner(&self) -> Option<Owner> {
        self.winner
    }

    /// Immutable view of the shared board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True when `owner` has a fleet on the board and all of it is sunk.
    pub fn fleet_sunk(&self, owner: Owner) -> bool {
        self.fleets[owner.index()].all_sunk(self.board.hits())
    }

    /// Cells `actor` may still legally target: unresolved and not their own
    /// ship cells.
    pub fn legal_targets(&self, actor: Owner) -> Mask {
        !(self.board.resolved() | self.board.ship_map(actor))
    }

    /// One cell as seen by `viewer`: own ships visible, the opponent's
    /// unshot ship cells indistinguishable from empty water.
    pub fn visible_cell(
        &self,
        viewer: Owner,
        row: usize,
        col: usize,
    ) -> Result<VisibleCell, MoveError> {
        Ok(match self.board.cell(row, col)? {
            CellState::Empty => VisibleCell::Empty,
            CellState::Ship(owner) if owner == viewer => VisibleCell::Ship,
            CellState::Ship(_) => VisibleCell::Empty,
            CellState::Hit => VisibleCell::Hit,
            CellState::Miss => VisibleCell::Miss,
        })
    }

    /// The full board as seen by `viewer`. Pure derivation from ground
    /// truth; the board never stores fog of war.
    pub fn visible_board(&self, viewer: Owner) -> VisibleGrid {
        let mut grid = [[VisibleCell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, grid_row) in grid.iter_mut().enumerate() {
            for (c, cell) in grid_row.iter_mut().enumerate() {
                *cell = self
                    .visible_cell(viewer, r, c)
                    .unwrap_or(VisibleCell::Empty);
            }
        }
        grid
    }

    /// Snapshot of the whole game for observers.
    pub fn state(&self) -> GameState {
        let hits = self.board.hits();
        GameState {
            board: BoardState {
                ships: [
                    self.board.ship_map(Owner::Player1),
                    self.board.ship_map(Owner::Player2),
                ],
                hits,
                misses: self.board.misses(),
            },
            fleets: [
                self.fleets[0].state(hits),
                self.fleets[1].state(hits),
            ],
            current_player: self.current,
            game_over: self.winner.is_some(),
            winner: self.winner,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
