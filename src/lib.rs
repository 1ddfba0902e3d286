//! **evostrat** is a self-adaptive evolution strategy for derivative-free
//! optimization of functions over fixed-length real-valued vectors. Give it a
//! fitness function, and it searches for a vector that minimizes (or
//! maximizes) it, without ever asking for a gradient.
//!
//! Here's a [quick start example](#example) for the impatient.
//!
//! # How it works
//!
//! The optimizer keeps a population of **individuals**. An [`Individual`] is
//! a **genotype** - the vector being optimized - together with the
//! **strategy parameters** that control how it mutates, an **age** and its
//! last computed fitness. Each generation, the optimizer:
//! 1. lets every individual **reproduce** `num_children` times, creating
//!    mutated offspring
//! 2. **ages** the current population: individuals younger than `max_age`
//!    become one generation older, the rest are discarded
//! 3. **evaluates** offspring and survivors with the fitness function
//! 4. **selects** the best `population_size` of them for the next generation
//! 5. **terminates** the run if a stopping condition holds
//!
//! Offspring and survivors compete for the same places, which makes this a
//! (μ+λ) scheme. With `max_age` set to 0 (the default) nobody survives and
//! only offspring compete, which is closer to a (μ,λ) scheme.
//!
//! # Self-adaptation
//!
//! Mutation step sizes are not configured but evolve along with genotypes:
//! individuals with well suited step sizes produce better offspring, which
//! inherit those step sizes. The granularity of step sizes is selected with
//! [`Strategy`]:
//! - [`SingleVariance`] - one step size for all genes
//! - [`MultipleVariance`] - one step size per gene
//! - [`FullVariance`] - one step size per gene and a rotation angle per pair
//!   of genes, which allows mutations along correlated directions
//!
//! The more strategy parameters, the more the optimizer can adapt to the
//! shape of the fitness landscape, and the longer it takes to learn it.
//!
//! # Termination
//!
//! A run always ends after `generations` generations. It ends earlier when
//! any of the optional conditions holds:
//! - the run took longer than `max_run_time`
//! - the best fitness is within `target_tolerance` of `target_fitness_value`
//! - at least `max_evaluations` fitness evaluations were performed
//!
//! Every way a run ends is a success: the last [`ProgressReport`] is marked
//! with `is_final` and tells the [`StopReason`]. Errors are only returned for
//! invalid configurations, before any evaluation.
//!
//! # Reproducibility
//!
//! All random numbers are drawn from a single generator seeded with
//! `random_seed`. Given the same seed, configuration and a pure fitness
//! function, two runs produce the same reports and the same result. Without
//! a seed, the generator is seeded from system entropy.
//!
//! # Logging
//!
//! The crate emits [tracing] events: `info` when a run starts and stops,
//! `debug` for each generation and `trace` for population details. Install
//! any `tracing` subscriber to see them.
//!
//! # Example
//!
//! Minimizing the *Rosenbrock function* in 2 dimensions, stopping early once
//! the known optimum of 0 is approached closely enough.
//! ```no_run
//! use evostrat::{
//!   config::Config,
//!   optimizer::EvolutionStrategy,
//!   report::ProgressReport,
//!   strategy::Strategy,
//! };
//!
//! let rosenbrock = |x: &[f64]| {
//!   (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0].powi(2)).powi(2)
//! };
//! let config = Config::builder()
//!   .individual_length(2)
//!   .population_size(20)
//!   .num_children(5)
//!   .generations(1000)
//!   .max_age(10)
//!   .strategy(Strategy::FullVariance)
//!   .target_fitness_value(0.0)
//!   .random_seed(42)
//!   .build();
//! let best = EvolutionStrategy::new(config, rosenbrock)
//!   .with_reporter(|r: &ProgressReport| {
//!     if r.is_final {
//!       println!("{} after {} generations", r.best_fitness, r.generation + 1);
//!     }
//!   })
//!   .run()
//!   .expect("valid configuration")
//!   .expect("non-empty genotype");
//! println!("{best:?}");
//! ```
//!
//! More examples live in the *demos* folder.
//!
//! [`Individual`]: crate::individual::Individual
//! [`Strategy`]: crate::strategy::Strategy
//! [`SingleVariance`]: crate::strategy::Strategy::SingleVariance
//! [`MultipleVariance`]: crate::strategy::Strategy::MultipleVariance
//! [`FullVariance`]: crate::strategy::Strategy::FullVariance
//! [`ProgressReport`]: crate::report::ProgressReport
//! [`StopReason`]: crate::termination::StopReason
//! [tracing]: https://docs.rs/tracing

#![warn(missing_docs)]

pub mod bounds;
pub mod config;
pub mod error;
pub mod fitness;
pub mod individual;
pub mod optimizer;
pub mod random;
pub mod report;
pub mod strategy;
pub mod termination;

pub use config::Config;
pub use error::{Error, Result};
pub use optimizer::EvolutionStrategy;
