use rand::rngs::SmallRng;

use crate::game::VisibleGrid;
use crate::mask::Mask;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next target given this player's view of the board and the
    /// mask of cells that are still legal to shoot. The engine only asks
    /// while at least one legal target remains.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &VisibleGrid,
        open: Mask,
    ) -> (usize, usize);
}
