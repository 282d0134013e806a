// crates/lifewave-core/src/grid/seed.rs

use crate::grid::store::Generation;
use crate::grid::{GRID_HEIGHT, GRID_WIDTH};
use crate::random::RandomSource;

pub const SEED_CELL_COUNT: usize = 16;

/// The cells of one reseeding walk, in walk order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedPattern {
    pub points: [(u8, u8); SEED_CELL_COUNT],
}

impl SeedPattern {
    /// Random diagonal walk: uniform start, then every step moves x by +1 or -1 and
    /// y by +1 or -1 on the torus, the two signs drawn independently.
    pub fn walk<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut points = [(0u8, 0u8); SEED_CELL_COUNT];
        let x0 = rng.below(GRID_WIDTH as u32) as usize;
        let y0 = rng.below(GRID_HEIGHT as u32) as usize;
        points[0] = (x0 as u8, y0 as u8);

        for i in 1..SEED_CELL_COUNT {
            let (px, py) = points[i - 1];
            let sx = if rng.coin() { 1 } else { GRID_WIDTH - 1 };
            let sy = if rng.coin() { 1 } else { GRID_HEIGHT - 1 };
            let x = (px as usize + sx) % GRID_WIDTH;
            let y = (py as usize + sy) % GRID_HEIGHT;
            points[i] = (x as u8, y as u8);
        }

        Self { points }
    }

    /// Mark every walk cell alive. Other cells are left as they are.
    pub fn apply(&self, g: &mut Generation) {
        for &(x, y) in self.points.iter() {
            g.set(x as isize, y as isize, true);
        }
    }
}

/// Draw a fresh walk and add it to `g`. Returns the pattern that was applied.
pub fn seed<R: RandomSource + ?Sized>(g: &mut Generation, rng: &mut R) -> SeedPattern {
    let pattern = SeedPattern::walk(rng);
    pattern.apply(g);
    pattern
}
