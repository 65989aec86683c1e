//! Generational evolutionary optimization over real vectors.
//!
//! Evolves a fixed-size population of candidate vectors toward the minimum
//! of an objective function:
//!
//! - **Selection**: fitness-proportionate resampling of the population.
//! - **Crossover**: single-point recombination of adjacent pairs, each
//!   offspring kept only if feasible.
//! - **Mutation**: per-gene Gaussian perturbation, rolled back exactly when
//!   the result is infeasible.
//!
//! # Modules
//!
//! - [`ea`]: objective contract, population, operators, engine
//! - [`random`]: engine-scoped, lazily seeded random source
//! - [`benchmarks`]: standard test functions with their search domains
//! - [`error`]: structural error type
//!
//! Runs are single-threaded and deterministic for a fixed seed. Independent
//! runs can be spread across threads, one engine per thread.

pub mod benchmarks;
pub mod ea;
pub mod error;
pub mod random;

pub use error::{EvolveError, Result};
