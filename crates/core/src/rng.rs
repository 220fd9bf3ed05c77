//! Injectable random source consumed by placement and corridor carving.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// Sequential stream of random draws. Generation consumes it in a fixed order,
/// so a given stream always yields the same layout.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform index in `0..bound`. `bound` must be positive.
    fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        let bound = bound as u64;
        // Reject the top partial bucket so every index is equally likely.
        let zone = u64::MAX - (u64::MAX - bound + 1) % bound;
        loop {
            let value = self.next_u64();
            if value <= zone {
                return (value % bound) as usize;
            }
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

/// ChaCha8 stream seeded from a single `u64`.
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    pub fn from_seed(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededRng {
    fn next_u64(&mut self) -> u64 {
        Rng::next_u64(&mut self.inner)
    }
}
