use rand::prelude::*;
use rand::rngs::SmallRng;

pub use scripted::*;

mod scripted;

/// Where the brush gets its randomness from.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn draw_index(&mut self, len: usize) -> usize;

    /// `true` with the given probability, which is within `0.0..=1.0`.
    fn draw_chance(&mut self, probability: f64) -> bool;
}

impl RandomSource for SmallRng {
    fn draw_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn draw_chance(&mut self, probability: f64) -> bool {
        self.random_bool(probability)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn draw_index(&mut self, len: usize) -> usize {
        (**self).draw_index(len)
    }

    fn draw_chance(&mut self, probability: f64) -> bool {
        (**self).draw_chance(probability)
    }
}

/// Deterministic fast generator for the given seed.
pub fn seeded_source(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
