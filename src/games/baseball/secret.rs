//! Secret generation.
//!
//! Secrets are drawn without replacement from `[MIN_NUMBER, MAX_NUMBER)`
//! in shuffled order, so every ordered selection of `ANSWERS_COUNT`
//! distinct digits is equally likely. The random source is
//! passed in by the caller; nothing here keeps state between draws.

use super::types::{ANSWERS_COUNT, Digit, Triple};
use rand::Rng;
use rand::seq::index;
use tracing::instrument;

/// Draws a fresh secret from `rng`.
#[instrument(level = "trace", skip(rng), ret)]
pub fn generate_secret<R: Rng>(rng: &mut R) -> Triple {
    let pool: Vec<Digit> = Digit::all().collect();
    let picked = index::sample(rng, pool.len(), ANSWERS_COUNT);
    Triple::from_digits(std::array::from_fn(|i| pool[picked.index(i)]))
}
