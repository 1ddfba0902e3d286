//! Fitness functions and optimization direction.

use std::cmp::Ordering;

/// A fitness function evaluated on a genotype.
///
/// Implemented for every closure of type `Fn(&[f64]) -> f64`, so usually
/// there is no need to implement it by hand.
///
/// The function is expected to be pure: the same genotype must always
/// produce the same fitness, otherwise a seeded run cannot be replayed.
/// A panic inside the function is not caught by the optimizer.
///
/// # Examples
/// ```
/// use evostrat::fitness::Fitness;
///
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// assert_eq!(sphere.evaluate(&[1.0, 2.0]), 5.0);
/// ```
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Fitness {
  /// Returns the fitness of given genotype.
  fn evaluate(&self, genotype: &[f64]) -> f64;
}

impl<F> Fitness for F
where
  F: Fn(&[f64]) -> f64,
{
  fn evaluate(&self, genotype: &[f64]) -> f64 {
    self(genotype)
  }
}

/// Whether the fitness function is minimized or maximized.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Direction {
  /// Lower fitness is better.
  #[default]
  Minimize,
  /// Higher fitness is better.
  Maximize,
}

impl Direction {
  /// Orders fitness values from best to worst. `NaN` is ranked below every
  /// other value, whatever the direction. `-0.0` and `0.0` are equal.
  pub fn rank(self, a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
      (true, true) => Ordering::Equal,
      (true, false) => Ordering::Greater,
      (false, true) => Ordering::Less,
      (false, false) => {
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
          Direction::Minimize => ord,
          Direction::Maximize => ord.reverse(),
        }
      }
    }
  }
}
