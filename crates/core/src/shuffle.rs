use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Where the question-order randomness comes from.
///
/// `Fixed` makes the order reproducible, which tests rely on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShuffleSeed {
    #[default]
    Entropy,
    Fixed(u64),
}

impl ShuffleSeed {
    #[must_use]
    pub fn from_option(seed: Option<u64>) -> Self {
        seed.map_or(Self::Entropy, Self::Fixed)
    }

    /// Build the random source this seed describes.
    #[must_use]
    pub fn rng(self) -> StdRng {
        match self {
            ShuffleSeed::Entropy => StdRng::from_os_rng(),
            ShuffleSeed::Fixed(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

/// Uniform in-place permutation (Fisher-Yates).
pub fn shuffle_in_place<T>(items: &mut [T], rng: &mut StdRng) {
    items.shuffle(rng);
}
