//! Seeded random source for spawning and recoloring
//!
//! Every random draw in the simulation goes through [`GameRng`], so a run is
//! fully reproducible from its seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::color::Rgb;

/// Bounded integers and random colors from a seeded PCG stream
#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    inner: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this stream was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`. Callers guard their bounds; an inverted range
    /// is a bug, not a value to paper over.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        assert!(
            min <= max,
            "random_int called with min ({min}) greater than max ({max})"
        );
        self.inner.random_range(min..=max)
    }

    /// Three independent channel draws in `[0, 255]`
    pub fn random_color(&mut self) -> Rgb {
        let r = self.random_int(0, 255) as u8;
        let g = self.random_int(0, 255) as u8;
        let b = self.random_int(0, 255) as u8;
        Rgb::new(r, g, b)
    }
}
