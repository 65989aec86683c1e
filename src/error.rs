//! Error types for u-evolve.
//!
//! Only structural precondition violations are errors. An infeasible
//! candidate is an ordinary outcome handled by the operators.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EvolveError>;

/// Structural errors raised by the engine and its operators.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvolveError {
    /// A population with no individuals was supplied or requested.
    #[error("population must contain at least one individual")]
    EmptyPopulation,

    /// The search-space dimension was zero.
    #[error("dimension must be at least 1")]
    ZeroDimension,

    /// An individual's length disagrees with the population dimension.
    #[error("individual {index} has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// A population has the wrong number of individuals.
    #[error("population has {actual} individuals, expected {expected}")]
    PopulationSizeMismatch { expected: usize, actual: usize },

    /// An index referred past the end of the population.
    #[error("index {index} out of range for population of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Invalid engine configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
