//! The evolution strategy optimizer.

mod population;

use std::time::Instant;

use itertools::iproduct;
use tracing::{debug, info};

use crate::{
  config::Config,
  error::Result,
  fitness::Fitness,
  individual::Individual,
  random::random_with_seed,
  report::{mean_std, ProgressReport, Reporter},
  termination::{RunState, Terminator},
};

/// A (μ+λ) evolution strategy with self-adaptive mutation.
///
/// Each generation, every individual of the population produces
/// `num_children` mutated offspring. Individuals younger than `max_age` grow
/// one generation older and compete with the offspring, the rest are
/// discarded. The best `population_size` individuals form the next
/// population.
///
/// The run is single threaded and draws all of its random numbers from one
/// generator seeded with `random_seed`. With a seed and a pure fitness
/// function, two runs produce the same reports and the same result.
///
/// # Examples
/// ```
/// use evostrat::{config::Config, optimizer::EvolutionStrategy};
///
/// let config = Config::builder()
///   .individual_length(2)
///   .population_size(10)
///   .generations(50)
///   .random_seed(0)
///   .build();
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// let best = EvolutionStrategy::new(config, sphere)
///   .with_reporter(|r: &evostrat::report::ProgressReport| {
///     println!("{}: {}", r.generation, r.best_fitness)
///   })
///   .run()
///   .unwrap()
///   .unwrap();
/// assert_eq!(best.len(), 2);
/// ```
pub struct EvolutionStrategy<F, R = fn(&ProgressReport)> {
  config: Config,
  fitness: F,
  reporter: Option<R>,
}

impl<F: Fitness> EvolutionStrategy<F> {
  /// Creates an optimizer of `fitness` without a reporter.
  pub fn new(config: Config, fitness: F) -> Self {
    Self {
      config,
      fitness,
      reporter: None,
    }
  }
}

impl<F: Fitness, R: Reporter> EvolutionStrategy<F, R> {
  /// Sets a reporter that receives a [`ProgressReport`] after every
  /// generation.
  pub fn with_reporter<T: Reporter>(
    self,
    reporter: T,
  ) -> EvolutionStrategy<F, T> {
    EvolutionStrategy {
      config: self.config,
      fitness: self.fitness,
      reporter: Some(reporter),
    }
  }

  /// Returns the configuration.
  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Runs the optimizer until a termination condition is met and returns the
  /// genotype of the best individual of the last generation.
  ///
  /// Returns `Ok(None)` without evaluating anything if `individual_length`
  /// is 0.
  ///
  /// # Errors
  ///
  /// Fails if the configuration is invalid, before the fitness function is
  /// ever called.
  pub fn run(mut self) -> Result<Option<Vec<f64>>> {
    let config = &self.config;
    if config.individual_length == 0 {
      debug!("individual length is 0, nothing to optimize");
      return Ok(None);
    }

    let start = Instant::now();
    let mut rng = random_with_seed(config.random_seed);
    let terminator = Terminator::from(config);

    let mut population = population::init_population(config, &mut rng)?;
    info!(
      individual_length = config.individual_length,
      population_size = population.len(),
      strategy = %config.strategy,
      direction = ?config.direction,
      "starting evolution strategy"
    );
    evaluate(&mut population, &self.fitness);
    population::rank(&mut population, config.direction);

    let mut evaluations = 0;
    for generation in 0..config.generations {
      let children = iproduct!(0..config.num_children, population.iter())
        .map(|(_, parent)| parent.reproduce(&mut rng))
        .collect::<Vec<_>>();
      let survivors = population::age_population(population, config.max_age);

      population = children;
      population.extend(survivors);
      evaluate(&mut population, &self.fitness);
      evaluations += population.len();
      population::rank(&mut population, config.direction);
      population.truncate(config.population_size);

      let best = &population[0];
      let best_fitness = best.fitness().unwrap_or(f64::NAN);
      let elapsed = start.elapsed();
      let stop_reason = terminator.check(&RunState {
        generation,
        elapsed,
        evaluations,
        best_fitness,
      });
      debug!(generation, evaluations, best_fitness, "generation finished");

      if let Some(reporter) = &mut self.reporter {
        let fitness = population
          .iter()
          .map(|i| i.fitness().unwrap_or(f64::NAN))
          .collect::<Vec<_>>();
        let (avg_fitness, std_fitness) = mean_std(&fitness);
        reporter.report(&ProgressReport {
          generation,
          evaluations,
          best_genotype: best.genotype().to_vec(),
          best_fitness,
          avg_fitness,
          std_fitness,
          elapsed,
          is_final: stop_reason.is_some(),
          stop_reason,
        });
      }

      if let Some(reason) = stop_reason {
        info!(generation, evaluations, best_fitness, %reason, "stopping");
        break;
      }
    }

    Ok(population.into_iter().next().map(Individual::into_genotype))
  }
}

/// Evaluates every individual, caching its fitness.
fn evaluate<F: Fitness>(population: &mut [Individual], fitness: &F) {
  for individual in population.iter_mut() {
    individual.evaluate(fitness);
  }
}
