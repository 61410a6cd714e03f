use rand::rngs::SmallRng;

use crate::ai;
use crate::game::VisibleGrid;
use crate::mask::Mask;
use crate::player::Player;

/// Player that picks uniformly among the legal targets.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        _view: &VisibleGrid,
        open: Mask,
    ) -> (usize, usize) {
        // The engine never asks with an empty mask; the fallback is only
        // reachable from a misbehaving caller and gets rejected upstream.
        ai::uniform_target(open, rng).unwrap_or((0, 0))
    }
}
