// crates/lifewave-core/src/grid/rule.rs

use crate::dynamics::state::RuleParams;
use crate::grid::store::{Generation, GridStore};
use crate::grid::{GRID_HEIGHT, GRID_WIDTH};

const MOORE: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Live cells among the 8 toroidal neighbours of `(x, y)`.
pub fn neighbours(g: &Generation, x: isize, y: isize) -> u8 {
    MOORE
        .iter()
        .filter(|(dx, dy)| g.get(x + dx, y + dy))
        .count() as u8
}

/// Next state of one cell given its neighbour count.
///
/// Ranges with min > max are legal and match no count.
#[inline]
pub fn next_state(alive: bool, n: u8, p: &RuleParams) -> bool {
    if alive {
        p.live_min <= n && n <= p.live_max
    } else {
        p.birth_min <= n && n <= p.birth_max
    }
}

/// Evaluate `current` into `next`, overwriting every cell. Returns the live count written.
pub fn evaluate(current: &Generation, next: &mut Generation, p: &RuleParams) -> usize {
    let mut count = 0usize;
    for x in 0..GRID_WIDTH as isize {
        for y in 0..GRID_HEIGHT as isize {
            let n = neighbours(current, x, y);
            let alive = next_state(current.get(x, y), n, p);
            next.set(x, y, alive);
            if alive {
                count += 1;
            }
        }
    }
    count
}

/// Fill the scratch buffer of `store` with the next generation.
///
/// Does not commit; the caller swaps once the result has been inspected
/// (an empty result is reseeded in the scratch buffer first).
pub fn advance(store: &mut GridStore, p: &RuleParams) -> usize {
    let (current, next) = store.split();
    evaluate(current, next, p)
}
