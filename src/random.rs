//! Seeded random number generation.
//!
//! A run draws every random number from a single [`StdRng`] stream which the
//! optimizer owns and lends to each [`Individual`] when it reproduces. Draws
//! happen in a fixed order, so a fixed seed replays the exact same run.
//!
//! [`Individual`]: crate::individual::Individual

use rand::{rngs::StdRng, SeedableRng};

/// Creates a random number generator from `seed`. Without a seed the
/// generator is seeded from system entropy and runs are not reproducible.
///
/// # Examples
/// ```
/// use evostrat::random::random_with_seed;
/// use rand::Rng;
///
/// let a: f64 = random_with_seed(Some(42)).gen();
/// let b: f64 = random_with_seed(Some(42)).gen();
/// assert_eq!(a, b);
/// ```
pub fn random_with_seed(seed: Option<u64>) -> StdRng {
  match seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  }
}
