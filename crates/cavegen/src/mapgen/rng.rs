//! Seeded pseudo-random stream used by grid initialization.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Scale factor mapping the top 53 bits of a `u64` onto `[0, 1)`.
const UNIT_SCALE: f64 = 1.0 / (1_u64 << 53) as f64;

/// Creates the single random stream a generation run consumes.
pub fn cave_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// One Bernoulli trial. Consumes exactly one `u64` from `rng`.
pub(super) fn bernoulli<R: Rng>(rng: &mut R, probability: f64) -> bool {
    unit_interval(rng.next_u64()) < probability
}

fn unit_interval(bits: u64) -> f64 {
    (bits >> 11) as f64 * UNIT_SCALE
}
