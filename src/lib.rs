#![cfg_attr(not(feature = "std"), no_std)]

mod ai;
mod board;
mod common;
mod config;
mod game;
mod mask;
mod player;
mod player_ai;
mod ship;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use mask::{Mask, OutOfBounds, SetCells};
pub use player::*;
pub use player_ai::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use ui::*;
