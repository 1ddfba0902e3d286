//! Errors reported by the optimizer.

use thiserror::Error;

/// An alias for `Result` with this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors detected before any fitness evaluation takes place.
///
/// Reaching a termination condition is never an error: every way a run can
/// end is reported through [`ProgressReport`](crate::report::ProgressReport).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
  /// The strategy selector does not name one of the known strategies.
  #[error("unknown strategy `{0}`")]
  UnknownStrategy(String),

  /// The initial population would contain no individuals.
  #[error("initial population is empty")]
  EmptyPopulation,

  /// Parents would produce no offspring.
  #[error("number of children per parent must be at least 1")]
  NoOffspring,

  /// A warm start genotype has a wrong length.
  #[error(
    "warm start genotype {row} has length {found}, expected {expected}"
  )]
  WarmStartLength {
    /// Index of the offending genotype.
    row: usize,
    /// Configured individual length.
    expected: usize,
    /// Actual length of the genotype.
    found: usize,
  },

  /// Bounds are not finite or `lower` exceeds `upper`.
  #[error("invalid bounds [{lower}, {upper}]")]
  InvalidBounds {
    /// Lower bound.
    lower: f64,
    /// Upper bound.
    upper: f64,
  },

  /// The mean for initial sampling is not finite.
  #[error("mean must be finite, got {0}")]
  InvalidMean(f64),

  /// The standard deviation for initial sampling is negative or not finite.
  #[error("standard deviation must be finite and non-negative, got {0}")]
  InvalidStd(f64),

  /// The mutation rate is not a positive finite number.
  #[error("mutation rate must be finite and positive, got {0}")]
  InvalidMutationRate(f64),
}
