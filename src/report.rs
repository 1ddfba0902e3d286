//! Per-generation progress reports.

use std::time::Duration;

use crate::termination::StopReason;

/// A snapshot of a single generation.
///
/// Reports are created by the optimizer and handed to a [`Reporter`] by
/// reference. They hold copies of everything they describe, so a reporter
/// can keep them around but can never reach into the optimizer's state.
#[derive(Clone, PartialEq, Debug)]
pub struct ProgressReport {
  /// Index of the generation, starting at 0.
  pub generation: usize,
  /// Fitness evaluations performed so far.
  pub evaluations: usize,
  /// Genotype of the best individual of the generation.
  pub best_genotype: Vec<f64>,
  /// Fitness of the best individual of the generation.
  pub best_fitness: f64,
  /// Mean fitness of the population.
  pub avg_fitness: f64,
  /// Standard deviation of the population fitness.
  pub std_fitness: f64,
  /// Time elapsed since the start of the run.
  pub elapsed: Duration,
  /// `true` for the last report of a run.
  pub is_final: bool,
  /// Why the run ended, set only on the last report.
  pub stop_reason: Option<StopReason>,
}

/// An observer of the optimization progress, invoked once per generation in
/// generation order.
///
/// Implemented for every closure of type `FnMut(&ProgressReport)`.
///
/// Reporters run on the optimizer's thread: a slow reporter slows down the
/// whole run.
///
/// # Examples
/// ```
/// use evostrat::report::{ProgressReport, Reporter};
///
/// let mut history = vec![];
/// let mut reporter = |r: &ProgressReport| history.push(r.best_fitness);
/// # fn takes_reporter<R: Reporter>(_: &mut R) {}
/// # takes_reporter(&mut reporter);
/// ```
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Reporter {
  /// Receives the report of a finished generation.
  fn report(&mut self, report: &ProgressReport);
}

impl<F> Reporter for F
where
  F: FnMut(&ProgressReport),
{
  fn report(&mut self, report: &ProgressReport) {
    self(report)
  }
}

/// Mean and population standard deviation of `values`. Both are `NaN` for
/// an empty slice.
pub(crate) fn mean_std(values: &[f64]) -> (f64, f64) {
  let n = values.len() as f64;
  let mean = values.iter().sum::<f64>() / n;
  let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
  (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn report(generation: usize) -> ProgressReport {
    ProgressReport {
      generation,
      evaluations: 10 * generation,
      best_genotype: vec![0.0],
      best_fitness: 1.0 / (generation + 1) as f64,
      avg_fitness: 1.0,
      std_fitness: 0.0,
      elapsed: Duration::from_millis(generation as u64),
      is_final: false,
      stop_reason: None,
    }
  }

  fn takes_reporter<R: Reporter>(r: &mut R) {
    r.report(&report(0));
    r.report(&report(1));
  }

  #[test]
  fn test_reporter_from_closure() {
    let mut seen = vec![];
    takes_reporter(&mut |r: &ProgressReport| seen.push(r.generation));
    assert_eq!(seen, [0, 1]);
  }

  #[test]
  fn test_custom_reporter() {
    struct Last(Option<ProgressReport>);
    impl Reporter for Last {
      fn report(&mut self, report: &ProgressReport) {
        self.0 = Some(report.clone());
      }
    }
    let mut last = Last(None);
    takes_reporter(&mut last);
    assert_eq!(last.0, Some(report(1)));
  }

  #[test]
  fn test_mean_std() {
    let (mean, std) = mean_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    assert_eq!(mean, 5.0);
    assert_eq!(std, 2.0);

    let (mean, std) = mean_std(&[3.0]);
    assert_eq!((mean, std), (3.0, 0.0));
  }
}
