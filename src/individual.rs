//! A single candidate solution and its self-adaptive mutation.

use std::f64::consts::{PI, TAU};

use itertools::Itertools;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::{bounds::Bounds, fitness::Fitness, strategy::Strategy};

/// Lower limit for every mutation step size.
pub const EPSILON: f64 = 0.01;

/// Learning rate of rotation angles, roughly 5 degrees.
pub const BETA: f64 = 0.0873;

/// A candidate solution: a genotype, the strategy parameters controlling its
/// mutation, an age and a cached fitness value.
///
/// Strategy parameters are laid out as follows, for a genotype of length `n`:
/// - [`Strategy::SingleVariance`]: `[σ]`;
/// - [`Strategy::MultipleVariance`]: `[σ₁, …, σₙ]`;
/// - [`Strategy::FullVariance`]: `[σ₁, …, σₙ, α₁, …, αₘ]` where `m` is
///   `n * (n - 1) / 2` rotation angles, one per pair of genes `(p, q)` with
///   `p < q`, pairs ordered lexicographically.
///
/// The lengths of the genotype and of the strategy parameters never change.
#[derive(Clone, PartialEq, Debug)]
pub struct Individual {
  genotype: Vec<f64>,
  strategy: Strategy,
  strategy_parameters: Vec<f64>,
  bounds: Option<Bounds>,
  mutation_rate: f64,
  age: usize,
  fitness: Option<f64>,
}

impl Individual {
  /// Creates a new individual of age 0 with no fitness.
  ///
  /// # Panics
  ///
  /// Panics if `genotype` is empty or if the number of strategy parameters
  /// does not match `strategy` for this genotype length.
  pub fn new(
    genotype: Vec<f64>,
    strategy: Strategy,
    strategy_parameters: Vec<f64>,
    bounds: Option<Bounds>,
    mutation_rate: f64,
  ) -> Self {
    assert!(!genotype.is_empty(), "genotype cannot be empty");
    assert_eq!(
      strategy_parameters.len(),
      strategy.parameter_count(genotype.len()),
      "wrong number of strategy parameters for {strategy} strategy"
    );
    Self {
      genotype,
      strategy,
      strategy_parameters,
      bounds,
      mutation_rate,
      age: 0,
      fitness: None,
    }
  }

  /// Returns the genotype.
  pub fn genotype(&self) -> &[f64] {
    &self.genotype
  }

  /// Moves the genotype out of the individual.
  pub fn into_genotype(self) -> Vec<f64> {
    self.genotype
  }

  /// Returns the self-adaptation strategy.
  pub fn strategy(&self) -> Strategy {
    self.strategy
  }

  /// Returns the strategy parameters.
  pub fn strategy_parameters(&self) -> &[f64] {
    &self.strategy_parameters
  }

  /// Returns the number of generations this individual has survived.
  pub fn age(&self) -> usize {
    self.age
  }

  /// Returns the fitness computed by the last call to
  /// [`evaluate`](Self::evaluate), if any.
  pub fn fitness(&self) -> Option<f64> {
    self.fitness
  }

  /// Evaluates the genotype with `fitness`, caches and returns the result.
  pub fn evaluate<F: Fitness + ?Sized>(&mut self, fitness: &F) -> f64 {
    let value = fitness.evaluate(&self.genotype);
    self.fitness = Some(value);
    value
  }

  pub(crate) fn grow_older(&mut self) {
    self.age += 1;
  }

  /// Creates a mutated offspring of age 0 with no fitness. The parent is left
  /// untouched.
  pub fn reproduce<R: Rng + ?Sized>(&self, rng: &mut R) -> Individual {
    let (mut genotype, strategy_parameters) = match self.strategy {
      Strategy::SingleVariance => self.mutate_single_variance(rng),
      Strategy::MultipleVariance => self.mutate_multiple_variance(rng),
      Strategy::FullVariance => self.mutate_full_variance(rng),
    };
    if let Some(bounds) = &self.bounds {
      bounds.resample(&mut genotype, rng);
    }
    Individual {
      genotype,
      strategy: self.strategy,
      strategy_parameters,
      bounds: self.bounds,
      mutation_rate: self.mutation_rate,
      age: 0,
      fitness: None,
    }
  }

  fn mutate_single_variance<R: Rng + ?Sized>(
    &self,
    rng: &mut R,
  ) -> (Vec<f64>, Vec<f64>) {
    let sigma = self.strategy_parameters[0];
    let genotype = self
      .genotype
      .iter()
      .map(|x| x + self.mutation_rate * sigma * normal(rng))
      .collect();
    let tau = global_learning_rate(self.genotype.len());
    let sigma = (sigma * (tau * normal(rng)).exp()).max(EPSILON);
    (genotype, vec![sigma])
  }

  fn mutate_multiple_variance<R: Rng + ?Sized>(
    &self,
    rng: &mut R,
  ) -> (Vec<f64>, Vec<f64>) {
    let genotype = self
      .genotype
      .iter()
      .zip(&self.strategy_parameters)
      .map(|(x, sigma)| x + self.mutation_rate * sigma * normal(rng))
      .collect();
    let sigmas = adapt_step_sizes(&self.strategy_parameters, rng);
    (genotype, sigmas)
  }

  fn mutate_full_variance<R: Rng + ?Sized>(
    &self,
    rng: &mut R,
  ) -> (Vec<f64>, Vec<f64>) {
    let (sigmas, angles) =
      self.strategy_parameters.split_at(self.genotype.len());
    let sigmas = adapt_step_sizes(sigmas, rng);
    let angles = angles
      .iter()
      .map(|angle| wrap_angle(angle + BETA * normal(rng)))
      .collect::<Vec<_>>();

    let mut step = sigmas.iter().map(|s| s * normal(rng)).collect::<Vec<_>>();
    rotate(&mut step, &angles);
    let genotype = self
      .genotype
      .iter()
      .zip(step)
      .map(|(x, dx)| x + self.mutation_rate * dx)
      .collect();

    (genotype, sigmas.into_iter().chain(angles).collect())
  }
}

fn normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
  StandardNormal.sample(rng)
}

/// Learning rate shared by all step sizes of an individual.
fn global_learning_rate(n: usize) -> f64 {
  (2.0 * n as f64).sqrt().recip()
}

/// Learning rate of each individual step size.
fn local_learning_rate(n: usize) -> f64 {
  (2.0 * (n as f64).sqrt()).sqrt().recip()
}

/// Log-normal self-adaptation of per-gene step sizes.
fn adapt_step_sizes<R: Rng + ?Sized>(sigmas: &[f64], rng: &mut R) -> Vec<f64> {
  let n = sigmas.len();
  let global = global_learning_rate(n) * normal(rng);
  let local = local_learning_rate(n);
  sigmas
    .iter()
    .map(|sigma| (sigma * (global + local * normal(rng)).exp()).max(EPSILON))
    .collect()
}

/// Keeps an angle within `[-π, π]`.
fn wrap_angle(angle: f64) -> f64 {
  if angle.abs() <= PI {
    angle
  } else {
    (angle + PI).rem_euclid(TAU) - PI
  }
}

/// Multiplies `v` by the ordered product of Givens rotations, one per pair of
/// axes `(p, q)`, `p < q`, in lexicographic order.
fn rotate(v: &mut [f64], angles: &[f64]) {
  let pairs: Vec<(usize, usize)> = (0..v.len()).tuple_combinations().collect();
  debug_assert_eq!(pairs.len(), angles.len(), "one angle per pair of axes");
  // rightmost factor applies first
  for (&(p, q), angle) in pairs.iter().zip(angles).rev() {
    let (sin, cos) = angle.sin_cos();
    let (vp, vq) = (v[p], v[q]);
    v[p] = cos * vp - sin * vq;
    v[q] = sin * vp + cos * vq;
  }
}

#[cfg(test)]
mod tests {
  use rand::{rngs::StdRng, SeedableRng};

  use super::*;

  fn individual(strategy: Strategy, n: usize) -> Individual {
    let params = vec![0.5; strategy.parameter_count(n)];
    Individual::new(vec![1.0; n], strategy, params, None, 1.0)
  }

  #[test]
  fn test_new_individual() {
    let ind = individual(Strategy::MultipleVariance, 3);
    assert_eq!(ind.age(), 0);
    assert_eq!(ind.fitness(), None);
    assert_eq!(ind.strategy_parameters().len(), 3);
  }

  #[test]
  #[should_panic]
  fn test_new_wrong_parameter_count() {
    Individual::new(vec![0.0; 3], Strategy::FullVariance, vec![1.0; 3], None, 1.0);
  }

  #[test]
  fn test_evaluate_caches_fitness() {
    let mut ind = individual(Strategy::SingleVariance, 2);
    let sum = |x: &[f64]| x.iter().sum::<f64>();
    assert_eq!(ind.evaluate(&sum), 2.0);
    assert_eq!(ind.fitness(), Some(2.0));
  }

  #[test]
  fn test_reproduce_keeps_shapes() {
    let mut rng = StdRng::seed_from_u64(0);
    for strategy in Strategy::ALL {
      let mut parent = individual(strategy, 4);
      parent.grow_older();
      parent.evaluate(&|x: &[f64]| x[0]);
      let child = parent.reproduce(&mut rng);
      assert_eq!(child.genotype().len(), 4);
      assert_eq!(
        child.strategy_parameters().len(),
        strategy.parameter_count(4)
      );
      assert_eq!(child.strategy(), strategy);
      assert_eq!(child.age(), 0);
      assert_eq!(child.fitness(), None);
      assert_ne!(child.genotype(), parent.genotype());
      // parent is left as it was
      assert_eq!(parent.age(), 1);
      assert_eq!(parent.genotype(), &[1.0; 4]);
    }
  }

  #[test]
  fn test_step_sizes_stay_above_epsilon() {
    let mut rng = StdRng::seed_from_u64(1);
    for strategy in Strategy::ALL {
      let params = vec![-1e-9; strategy.parameter_count(3)];
      let mut ind = Individual::new(vec![0.0; 3], strategy, params, None, 1.0);
      for _ in 0..50 {
        ind = ind.reproduce(&mut rng);
        let sigmas = match strategy {
          Strategy::SingleVariance => &ind.strategy_parameters()[..1],
          _ => &ind.strategy_parameters()[..3],
        };
        assert!(sigmas.iter().all(|s| *s >= EPSILON));
      }
    }
  }

  #[test]
  fn test_reproduce_respects_bounds() {
    let mut rng = StdRng::seed_from_u64(2);
    let bounds = Bounds::new(-0.5, 0.5).unwrap();
    for strategy in Strategy::ALL {
      let params = vec![10.0; strategy.parameter_count(5)];
      let mut ind =
        Individual::new(vec![0.0; 5], strategy, params, Some(bounds), 1.0);
      for _ in 0..20 {
        ind = ind.reproduce(&mut rng);
        assert!(ind.genotype().iter().all(|g| bounds.contains(*g)));
      }
    }
  }

  #[test]
  fn test_reproduce_is_deterministic() {
    for strategy in Strategy::ALL {
      let parent = individual(strategy, 3);
      let a = parent.reproduce(&mut StdRng::seed_from_u64(9));
      let b = parent.reproduce(&mut StdRng::seed_from_u64(9));
      assert_eq!(a, b);
    }
  }

  #[test]
  fn test_mutation_rate_scales_step() {
    let parent = |rate| {
      Individual::new(vec![0.0], Strategy::SingleVariance, vec![1.0], None, rate)
    };
    let a = parent(1.0).reproduce(&mut StdRng::seed_from_u64(4));
    let b = parent(0.5).reproduce(&mut StdRng::seed_from_u64(4));
    assert!((b.genotype()[0] - 0.5 * a.genotype()[0]).abs() < 1e-12);
  }

  #[test]
  fn test_full_variance_angles_stay_wrapped() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut params = vec![1.0; 3];
    params.extend([PI - 1e-3, -PI + 1e-3, 0.0]);
    let mut ind =
      Individual::new(vec![0.0; 3], Strategy::FullVariance, params, None, 1.0);
    for _ in 0..100 {
      ind = ind.reproduce(&mut rng);
      assert!(ind.strategy_parameters()[3..]
        .iter()
        .all(|a| a.abs() <= PI));
    }
  }

  #[test]
  fn test_wrap_angle() {
    assert_eq!(wrap_angle(0.5), 0.5);
    assert_eq!(wrap_angle(PI), PI);
    assert!((wrap_angle(PI + 0.1) - (-PI + 0.1)).abs() < 1e-12);
    assert!((wrap_angle(-PI - 0.1) - (PI - 0.1)).abs() < 1e-12);
  }

  #[test]
  fn test_wrap_angle_several_turns() {
    assert!((wrap_angle(7.0 * PI + 0.1) - (-PI + 0.1)).abs() < 1e-9);
    assert!((wrap_angle(-9.0 * PI - 0.1) - (PI - 0.1)).abs() < 1e-9);
    assert!((wrap_angle(4.0 * TAU + 0.5) - 0.5).abs() < 1e-9);
    for angle in [50.0, -50.0, 1e3, -1e3] {
      assert!(wrap_angle(angle).abs() <= PI);
    }
  }

  #[test]
  fn test_rotate() {
    // a quarter turn in the (0, 1) plane
    let mut v = [1.0, 0.0];
    rotate(&mut v, &[PI / 2.0]);
    assert!(v[0].abs() < 1e-12);
    assert!((v[1] - 1.0).abs() < 1e-12);

    // rotations preserve length
    let mut v = [1.0, -2.0, 3.0, 0.5];
    let norm = |v: &[f64]| v.iter().map(|x| x * x).sum::<f64>().sqrt();
    let before = norm(&v);
    rotate(&mut v, &[0.3, -1.2, 2.0, 0.7, -0.1, 3.0]);
    assert!((norm(&v) - before).abs() < 1e-12);

    // zero angles leave the vector intact
    let mut v = [1.0, 2.0, 3.0];
    rotate(&mut v, &[0.0; 3]);
    assert_eq!(v, [1.0, 2.0, 3.0]);
  }
}
