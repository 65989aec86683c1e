//! Generational evolutionary algorithm.
//!
//! A real-vector optimizer built from three pluggable operators applied in a
//! fixed order every generation: selection, crossover, mutation. Problems
//! plug in by implementing [`Objective`].
//!
//! # Core Traits
//!
//! - [`Objective`]: evaluation, feasibility, optional feasible sampling
//! - [`SelectionOperator`], [`CrossoverOperator`], [`MutationOperator`]:
//!   strategy objects that rewrite a [`Population`] in place
//!
//! # Key Types
//!
//! - [`EngineConfig`]: population size, seed, initialization policy
//! - [`Engine`]: executes the generational loop
//! - [`EvolutionResult`]: final population and per-generation best values
//! - [`BoxConstrained`]: turns a plain function plus bounds into an objective
//!
//! # Example
//!
//! ```
//! use u_evolve::ea::{BoxConstrained, Engine, EngineConfig};
//!
//! let sphere = BoxConstrained::new(|x: &[f64]| x.iter().map(|v| v * v).sum(), -10.0, 10.0)
//!     .unwrap();
//! let mut engine = Engine::new(EngineConfig::default().with_population_size(10).with_seed(7));
//! let best = engine.optimize(&sphere, 50, 2).unwrap();
//! assert!(best >= 0.0);
//! ```

mod bounded;
mod config;
mod crossover;
mod engine;
mod mutation;
mod population;
mod selection;
mod types;

pub use bounded::BoxConstrained;
pub use config::{EngineConfig, InitPolicy};
pub use crossover::{CrossoverOperator, SinglePointCrossover};
pub use engine::{Engine, EvolutionResult};
pub use mutation::{GaussianMutation, MutationOperator};
pub use population::Population;
pub use selection::{cumulative_scores, FitnessProportionate, SelectionKey, SelectionOperator};
pub use types::Objective;
