use evostrat::{
  bounds::Bounds,
  config::Config,
  optimizer::EvolutionStrategy,
  report::ProgressReport,
  strategy::Strategy,
};

fn main() -> evostrat::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::INFO)
    .init();

  // f(x) = x1^2 + x2^2 + ... + xn^2, minimum 0 at the origin
  let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();

  let config = Config::builder()
    .individual_length(10)
    .population_size(30)
    .num_children(3)
    .generations(500)
    .max_age(5)
    .strategy(Strategy::MultipleVariance)
    .bounds(Bounds::new(-5.0, 5.0)?)
    .target_fitness_value(0.0)
    .target_tolerance(1e-4)
    .random_seed(7)
    .build();

  // print every 25th generation and the last one
  let reporter = |r: &ProgressReport| {
    if r.generation % 25 == 0 || r.is_final {
      println!(
        "gen {:4} | evals {:6} | best {:12.6e} | avg {:12.6e} | std {:10.4e}",
        r.generation, r.evaluations, r.best_fitness, r.avg_fitness, r.std_fitness
      );
    }
  };

  let best = EvolutionStrategy::new(config, sphere)
    .with_reporter(reporter)
    .run()?;
  if let Some(best) = best {
    println!("best = {best:.4?}");
  }
  Ok(())
}
