use std::time::Duration;

use evostrat::{
  config::Config,
  fitness::Direction,
  optimizer::EvolutionStrategy,
  report::ProgressReport,
  strategy::Strategy,
};

fn main() -> evostrat::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::DEBUG)
    .init();

  // negated Rosenbrock function, maximum 0 at (1, 1)
  let rosenbrock = |x: &[f64]| {
    -((1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0].powi(2)).powi(2))
  };

  // compare the three strategies on the same budget
  for strategy in Strategy::ALL {
    let config = Config::builder()
      .individual_length(2)
      .population_size(15)
      .num_children(4)
      .generations(2_000)
      .max_age(20)
      .direction(Direction::Maximize)
      .strategy(strategy)
      .max_evaluations(50_000)
      .max_run_time(Duration::from_secs(10))
      .random_seed(2024)
      .build();

    let mut last = None;
    let best = EvolutionStrategy::new(config, rosenbrock)
      .with_reporter(|r: &ProgressReport| last = Some(r.clone()))
      .run()?;

    if let (Some(best), Some(last)) = (best, last) {
      println!(
        "{strategy:>8}: {best:.5?} fitness {:.3e} after {} evaluations ({})",
        last.best_fitness,
        last.evaluations,
        last.stop_reason.map_or("-".to_owned(), |r| r.to_string()),
      );
    }
  }
  Ok(())
}
