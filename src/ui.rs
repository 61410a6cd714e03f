#![cfg(feature = "std")]

//! Plain-text rendering of per-viewer board views.

use crate::common::{Owner, VisibleCell};
use crate::config::BOARD_SIZE;
use crate::game::{GameEngine, VisibleGrid};

/// Letter-number form of a coordinate, e.g. `C5`.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let col_ch = (b'A' + col as u8) as char;
    format!("{}{}", col_ch, row + 1)
}

/// Print a visible grid with column letters and row numbers.
pub fn print_visible_board(grid: &VisibleGrid) {
    print!("   ");
    for c in 0..BOARD_SIZE {
        print!(" {}", (b'A' + c as u8) as char);
    }
    println!();
    for (r, row) in grid.iter().enumerate() {
        print!("{:2} ", r + 1);
        for cell in row {
            let ch = match cell {
                VisibleCell::Hit => 'X',
                VisibleCell::Miss => 'o',
                VisibleCell::Ship => 'S',
                VisibleCell::Empty => '.',
            };
            print!(" {}", ch);
        }
        println!();
    }
}

/// Print the board as one viewer sees it.
pub fn print_player_view(engine: &GameEngine, viewer: Owner) {
    println!("{} view:", viewer);
    print_visible_board(&engine.visible_board(viewer));
}
