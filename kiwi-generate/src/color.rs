//! Colors for generated stylesheets.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of CSS colors as lowercase `#rrggbb` strings.
pub trait ColorSource {
    fn hex_color(&mut self) -> String;
}

/// Uniformly random colors drawn from any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomColor<R> {
    rng: R,
}

impl<R: Rng> RandomColor<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomColor<StdRng> {
    /// Seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ColorSource for RandomColor<R> {
    fn hex_color(&mut self) -> String {
        format!("#{:06x}", self.rng.random_range(0..=0xff_ffffu32))
    }
}
