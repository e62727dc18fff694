use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded randomness for one session, so a run can be reproduced from its seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn from_seed_or_random(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_random(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fair coin: true with probability 0.5.
    pub fn flip_coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}
