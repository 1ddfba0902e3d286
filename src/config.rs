//! Optimizer configuration.

use std::time::Duration;

use typed_builder::TypedBuilder;

use crate::{
  bounds::Bounds,
  error::{Error, Result},
  fitness::Direction,
  strategy::Strategy,
};

/// Everything that parameterizes a run, except the fitness function and the
/// reporter.
///
/// Built with a builder from [typed-builder] crate, which checks at compile
/// time that the only required field, `individual_length`, is set. Optional
/// settings are disabled unless given.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use evostrat::{config::Config, fitness::Direction, strategy::Strategy};
///
/// let config = Config::builder()
///   .individual_length(10)
///   .population_size(50)
///   .direction(Direction::Maximize)
///   .strategy(Strategy::MultipleVariance)
///   .max_run_time(Duration::from_secs(5))
///   .random_seed(42)
///   .build();
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.max_evaluations, None);
/// ```
///
/// [typed-builder]: https://docs.rs/typed-builder
#[derive(TypedBuilder, Clone, PartialEq, Debug)]
pub struct Config {
  /// Length of every genotype.
  pub individual_length: usize,
  /// Genotypes of the initial population. When unset, the initial population
  /// is sampled from a normal distribution.
  #[builder(default, setter(strip_option))]
  pub warm_start: Option<Vec<Vec<f64>>>,
  /// Maximal number of generations.
  #[builder(default = 100)]
  pub generations: usize,
  /// Number of individuals kept after each generation.
  #[builder(default = 30)]
  pub population_size: usize,
  /// Number of offspring each parent produces per generation.
  #[builder(default = 1)]
  pub num_children: usize,
  /// Mean of the normal distribution initial genes are sampled from.
  #[builder(default = 0.0)]
  pub mean: f64,
  /// Standard deviation of the normal distribution initial genes are sampled
  /// from.
  #[builder(default = 1.0)]
  pub std: f64,
  /// Whether fitness is minimized or maximized.
  #[builder(default)]
  pub direction: Direction,
  /// Self-adaptation strategy of individuals.
  #[builder(default)]
  pub strategy: Strategy,
  /// Seed of the random number generator. Runs are reproducible only when
  /// it is set.
  #[builder(default, setter(strip_option))]
  pub random_seed: Option<u64>,
  /// Stop as soon as the best fitness gets within `target_tolerance` of this
  /// value.
  #[builder(default, setter(strip_option))]
  pub target_fitness_value: Option<f64>,
  /// Tolerance of `target_fitness_value`.
  #[builder(default = 1e-5)]
  pub target_tolerance: f64,
  /// Stop after a generation that ends later than this after the start.
  #[builder(default, setter(strip_option))]
  pub max_run_time: Option<Duration>,
  /// Stop once this many fitness evaluations have been performed.
  #[builder(default, setter(strip_option))]
  pub max_evaluations: Option<usize>,
  /// Box constraints on every gene.
  #[builder(default, setter(strip_option))]
  pub bounds: Option<Bounds>,
  /// Individuals survive into the next generation only while their age is
  /// below this value. `0` replaces the whole population every generation.
  #[builder(default = 0)]
  pub max_age: usize,
  /// Scale of the mutation applied to genotypes.
  #[builder(default = 1.0)]
  pub mutation_rate: f64,
}

impl Config {
  /// Checks the settings that the builder cannot check.
  pub fn validate(&self) -> Result<()> {
    if self.population_size == 0 {
      return Err(Error::EmptyPopulation);
    }
    if self.num_children == 0 {
      return Err(Error::NoOffspring);
    }
    if !self.mean.is_finite() {
      return Err(Error::InvalidMean(self.mean));
    }
    if !(self.std.is_finite() && self.std >= 0.0) {
      return Err(Error::InvalidStd(self.std));
    }
    if !(self.mutation_rate.is_finite() && self.mutation_rate > 0.0) {
      return Err(Error::InvalidMutationRate(self.mutation_rate));
    }
    if let Some(genotypes) = &self.warm_start {
      if genotypes.is_empty() {
        return Err(Error::EmptyPopulation);
      }
      if let Some((row, genotype)) = genotypes
        .iter()
        .enumerate()
        .find(|(_, g)| g.len() != self.individual_length)
      {
        return Err(Error::WarmStartLength {
          row,
          expected: self.individual_length,
          found: genotype.len(),
        });
      }
    }
    Ok(())
  }
}
