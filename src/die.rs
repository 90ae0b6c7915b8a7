use rand::prelude::*;

/// A fair six sided die.
pub struct Die {
    rand: StdRng,
}

impl Default for Die {
    fn default() -> Self {
        Self::new()
    }
}

impl Die {
    pub fn new() -> Self {
        Self::from_seed(rand::rng().random())
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rand: StdRng::seed_from_u64(seed),
        }
    }

    pub fn roll(&mut self) -> u32 {
        self.rand.random_range(1..=6)
    }
}
