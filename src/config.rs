//! Board and fleet configuration shared by every module.

/// Side length of the square board.
pub const BOARD_SIZE: usize = 8;

/// Number of ships in one owner's fleet.
pub const NUM_SHIPS: usize = 5;

/// Ship lengths placed for each owner, in placement order.
pub const SHIP_SIZES: [usize; NUM_SHIPS] = [2, 3, 3, 4, 5];

/// Ship cells per fleet (sum of `SHIP_SIZES`).
pub const TOTAL_SHIP_CELLS: usize = 17;

/// Cap on rejection-sampling attempts per ship during random placement.
/// Both fleets share one grid, so legal anchors get scarce late in setup.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;
