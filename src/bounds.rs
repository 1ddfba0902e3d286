//! Box constraints on genes.

use rand::Rng;

use crate::error::{Error, Result};

/// Closed interval `[lower, upper]` applied to every gene of a genotype.
///
/// Initial genotypes are clamped into the interval, offspring genes that
/// leave it are resampled uniformly inside it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bounds {
  lower: f64,
  upper: f64,
}

impl Bounds {
  /// Creates bounds `[lower, upper]`.
  ///
  /// Fails if either limit is not finite or if `lower > upper`.
  pub fn new(lower: f64, upper: f64) -> Result<Self> {
    if lower.is_finite() && upper.is_finite() && lower <= upper {
      Ok(Self { lower, upper })
    } else {
      Err(Error::InvalidBounds { lower, upper })
    }
  }

  /// Lower limit.
  pub fn lower(&self) -> f64 {
    self.lower
  }

  /// Upper limit.
  pub fn upper(&self) -> f64 {
    self.upper
  }

  /// Returns `true` if `value` lies within the bounds, limits included.
  pub fn contains(&self, value: f64) -> bool {
    (self.lower..=self.upper).contains(&value)
  }

  /// Clamps every gene into the bounds.
  pub fn clamp(&self, genes: &mut [f64]) {
    genes
      .iter_mut()
      .for_each(|g| *g = g.clamp(self.lower, self.upper));
  }

  /// Replaces every gene outside the bounds with a value drawn uniformly
  /// from them.
  pub fn resample<R: Rng + ?Sized>(&self, genes: &mut [f64], rng: &mut R) {
    for g in genes.iter_mut().filter(|g| !self.contains(**g)) {
      *g = rng.gen_range(self.lower..=self.upper);
    }
  }
}
