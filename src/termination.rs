//! Termination conditions.
//!
//! A run ends after its configured number of generations, or earlier as soon
//! as any enabled early stopping condition holds. None of them is an error.

use std::{fmt, time::Duration};

use crate::config::Config;

/// The condition that ended a run.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum StopReason {
  /// The wall-clock budget was exceeded.
  TimeBudget,
  /// The best fitness got within tolerance of the target value.
  TargetReached,
  /// The fitness evaluation budget was used up.
  EvaluationBudget,
  /// The last configured generation was completed.
  GenerationLimit,
}

impl fmt::Display for StopReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      StopReason::TimeBudget => "time budget exceeded",
      StopReason::TargetReached => "target fitness reached",
      StopReason::EvaluationBudget => "evaluation budget exhausted",
      StopReason::GenerationLimit => "generation limit reached",
    })
  }
}

/// Target fitness value and the tolerance within which it counts as reached.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Target {
  /// Fitness value to reach.
  pub value: f64,
  /// Maximal absolute difference from `value`, exclusive.
  pub tolerance: f64,
}

impl Target {
  /// Returns `true` if `fitness` is strictly closer to the target than the
  /// tolerance.
  pub fn is_reached(&self, fitness: f64) -> bool {
    (fitness - self.value).abs() < self.tolerance
  }
}

/// Progress of a run after a finished generation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RunState {
  /// Index of the finished generation.
  pub generation: usize,
  /// Time elapsed since the run started.
  pub elapsed: Duration,
  /// Fitness evaluations performed so far.
  pub evaluations: usize,
  /// Fitness of the best individual of the generation.
  pub best_fitness: f64,
}

/// Decides after every generation whether the run is over.
///
/// Early stopping conditions are independent and disabled when unset.
/// The generation limit always applies.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Terminator {
  generations: usize,
  max_run_time: Option<Duration>,
  target: Option<Target>,
  max_evaluations: Option<usize>,
}

impl Terminator {
  /// Creates a terminator that only stops after `generations` generations.
  pub fn new(generations: usize) -> Self {
    Self {
      generations,
      max_run_time: None,
      target: None,
      max_evaluations: None,
    }
  }

  /// Stops once the run has been going for longer than `max_run_time`.
  pub fn with_max_run_time(mut self, max_run_time: Option<Duration>) -> Self {
    self.max_run_time = max_run_time;
    self
  }

  /// Stops once the best fitness reaches `target`.
  pub fn with_target(mut self, target: Option<Target>) -> Self {
    self.target = target;
    self
  }

  /// Stops once at least `max_evaluations` evaluations have been performed.
  pub fn with_max_evaluations(mut self, max_evaluations: Option<usize>) -> Self {
    self.max_evaluations = max_evaluations;
    self
  }

  /// Returns the reason to stop after the generation described by `state`,
  /// or `None` if the run goes on. When several conditions hold at once,
  /// the first one in [`StopReason`] declaration order is returned.
  pub fn check(&self, state: &RunState) -> Option<StopReason> {
    if self.max_run_time.is_some_and(|max| state.elapsed > max) {
      Some(StopReason::TimeBudget)
    } else if self.target.is_some_and(|t| t.is_reached(state.best_fitness)) {
      Some(StopReason::TargetReached)
    } else if self
      .max_evaluations
      .is_some_and(|max| state.evaluations >= max)
    {
      Some(StopReason::EvaluationBudget)
    } else if state.generation + 1 >= self.generations {
      Some(StopReason::GenerationLimit)
    } else {
      None
    }
  }
}

impl From<&Config> for Terminator {
  fn from(config: &Config) -> Self {
    Terminator::new(config.generations)
      .with_max_run_time(config.max_run_time)
      .with_target(config.target_fitness_value.map(|value| Target {
        value,
        tolerance: config.target_tolerance,
      }))
      .with_max_evaluations(config.max_evaluations)
  }
}
