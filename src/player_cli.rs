#![cfg(feature = "std")]

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::game::VisibleGrid;
use crate::mask::Mask;
use crate::player::Player;
use crate::ui::{coord_to_string, print_visible_board};

/// Interactive player reading targets from stdin in `C5` form.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_coord(input: &str) -> Option<(usize, usize)> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

impl Player for CliPlayer {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        view: &VisibleGrid,
        open: Mask,
    ) -> (usize, usize) {
        print_visible_board(view);
        loop {
            print!("Enter target (e.g. C5): ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            io::stdin().read_line(&mut line).unwrap();
            let line = line.trim();
            match parse_coord(line) {
                Some((r, c)) => {
                    if open.get(r, c).unwrap_or(false) {
                        return (r, c);
                    }
                    println!("{} is not an open target", coord_to_string(r, c));
                }
                None => println!("Invalid coordinate"),
            }
        }
    }
}
