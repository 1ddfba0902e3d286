//! Self-adaptation strategies.

use std::{fmt, str::FromStr};

use crate::error::Error;

/// Granularity of an individual's self-adaptive mutation step sizes.
///
/// The strategy determines how many strategy parameters each individual
/// carries for a genotype of length `n`:
///
/// |                                       | Strategy parameters |
/// |:--------------------------------------|:-------------------:|
/// | [`SingleVariance`](Self::SingleVariance)     | `1`                 |
/// | [`MultipleVariance`](Self::MultipleVariance) | `n`                 |
/// | [`FullVariance`](Self::FullVariance)         | `n * (n + 1) / 2`   |
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Strategy {
  /// One step size shared by all genes.
  #[default]
  SingleVariance,
  /// One step size per gene.
  MultipleVariance,
  /// One step size per gene plus a rotation angle per pair of genes,
  /// allowing correlated mutations.
  FullVariance,
}

impl Strategy {
  /// All known strategies.
  pub const ALL: [Strategy; 3] = [
    Strategy::SingleVariance,
    Strategy::MultipleVariance,
    Strategy::FullVariance,
  ];

  /// Returns the number of strategy parameters an individual with a genotype
  /// of length `individual_length` carries.
  pub fn parameter_count(self, individual_length: usize) -> usize {
    match self {
      Strategy::SingleVariance => 1,
      Strategy::MultipleVariance => individual_length,
      Strategy::FullVariance => individual_length * (individual_length + 1) / 2,
    }
  }

  fn name(self) -> &'static str {
    match self {
      Strategy::SingleVariance => "single",
      Strategy::MultipleVariance => "multiple",
      Strategy::FullVariance => "full",
    }
  }
}

impl fmt::Display for Strategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.name())
  }
}

/// Parses `single`, `multiple` or `full`, ignoring case. The `_variance`
/// suffix is accepted too.
///
/// # Examples
/// ```
/// use evostrat::strategy::Strategy;
///
/// assert_eq!("full".parse(), Ok(Strategy::FullVariance));
/// assert!("diagonal".parse::<Strategy>().is_err());
/// ```
impl FromStr for Strategy {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let lower = s.trim().to_ascii_lowercase();
    let name = lower.strip_suffix("_variance").unwrap_or(&lower);
    Strategy::ALL
      .into_iter()
      .find(|strategy| strategy.name() == name)
      .ok_or_else(|| Error::UnknownStrategy(s.to_owned()))
  }
}

/// Converts numeric selectors `1`, `2` and `3`.
impl TryFrom<u8> for Strategy {
  type Error = Error;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      1 => Ok(Strategy::SingleVariance),
      2 => Ok(Strategy::MultipleVariance),
      3 => Ok(Strategy::FullVariance),
      _ => Err(Error::UnknownStrategy(value.to_string())),
    }
  }
}
