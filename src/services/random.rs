use rand::{rngs::StdRng, SeedableRng};

/// Where per-request sampling randomness comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RandomSource {
    /// Fresh OS-seeded generator for every request
    #[default]
    Entropy,
    /// Every request starts from the same seed, so identical requests agree
    Seeded(u64),
}

impl RandomSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(RandomSource::Entropy, RandomSource::Seeded)
    }

    /// Generator for a single request. Never shared between requests.
    pub fn rng(&self) -> StdRng {
        match self {
            RandomSource::Entropy => StdRng::from_entropy(),
            RandomSource::Seeded(seed) => StdRng::seed_from_u64(*seed),
        }
    }
}
