// crates/lifewave-core/src/random.rs

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// Uniform integer source consumed by the seeder.
pub trait RandomSource {
    /// Uniform value in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: u32) -> u32;

    /// Fair coin.
    fn coin(&mut self) -> bool;
}

impl RandomSource for StdRng {
    #[inline]
    fn below(&mut self, bound: u32) -> u32 {
        self.gen_range(0..bound)
    }

    #[inline]
    fn coin(&mut self) -> bool {
        self.gen()
    }
}

impl RandomSource for ThreadRng {
    #[inline]
    fn below(&mut self, bound: u32) -> u32 {
        self.gen_range(0..bound)
    }

    #[inline]
    fn coin(&mut self) -> bool {
        self.gen()
    }
}
