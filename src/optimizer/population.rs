//! Population lifecycle: initialization, aging and ranking.

use rand::Rng;
use rand_distr::{Distribution, Normal, StandardNormal};
use tracing::trace;

use crate::{
  config::Config,
  error::{Error, Result},
  fitness::Direction,
  individual::Individual,
};

/// Creates the initial population.
///
/// Strategy parameters are sampled once and every individual starts with its
/// own copy of them. Genotypes are either taken from the warm start or
/// sampled, then clamped into bounds if any.
///
/// Draws the strategy parameters before the genotypes.
pub(crate) fn init_population<R: Rng + ?Sized>(
  config: &Config,
  rng: &mut R,
) -> Result<Vec<Individual>> {
  config.validate()?;
  let n = config.individual_length;

  let strategy_parameters = (0..config.strategy.parameter_count(n))
    .map(|_| StandardNormal.sample(rng))
    .collect::<Vec<f64>>();

  let mut genotypes = match &config.warm_start {
    Some(genotypes) => genotypes.clone(),
    None => {
      let normal = Normal::new(config.mean, config.std)
        .map_err(|_| Error::InvalidStd(config.std))?;
      (0..config.population_size)
        .map(|_| normal.sample_iter(&mut *rng).take(n).collect())
        .collect::<Vec<Vec<f64>>>()
    }
  };

  if let Some(bounds) = &config.bounds {
    genotypes.iter_mut().for_each(|g| bounds.clamp(g));
  }

  Ok(
    genotypes
      .into_iter()
      .map(|genotype| {
        Individual::new(
          genotype,
          config.strategy,
          strategy_parameters.clone(),
          config.bounds,
          config.mutation_rate,
        )
      })
      .collect(),
  )
}

/// Drops individuals whose age reached `max_age` and makes the rest one
/// generation older.
pub(crate) fn age_population(
  population: Vec<Individual>,
  max_age: usize,
) -> Vec<Individual> {
  let survivors = population
    .into_iter()
    .filter(|individual| individual.age() < max_age)
    .map(|mut individual| {
      individual.grow_older();
      individual
    })
    .collect::<Vec<_>>();
  trace!(survivors = survivors.len(), "aged population");
  survivors
}

/// Sorts evaluated individuals from best to worst. The sort is stable, so
/// individuals with equal fitness keep their relative order.
pub(crate) fn rank(population: &mut [Individual], direction: Direction) {
  debug_assert!(
    population.iter().all(|i| i.fitness().is_some()),
    "every individual must be evaluated before ranking"
  );
  population.sort_by(|a, b| {
    direction.rank(
      a.fitness().unwrap_or(f64::NAN),
      b.fitness().unwrap_or(f64::NAN),
    )
  });
}
