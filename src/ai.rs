// Uniform-random target selection over a mask of open cells.
// Uses no_std and avoids heap allocations.

use rand::Rng;

use crate::mask::Mask;

/// Pick a target uniformly at random among the set cells of `open`.
/// Returns `None` when no cell is open.
pub fn uniform_target<R: Rng + ?Sized>(open: Mask, rng: &mut R) -> Option<(usize, usize)> {
    let n = open.count_ones();
    if n == 0 {
        return None;
    }
    let k = rng.random_range(0..n);
    open.iter_set_cells().nth(k)
}
