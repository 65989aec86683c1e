//! Engine configuration.
//!
//! [`EngineConfig`] holds the parameters that do not belong to an individual
//! operator: population size, seeding, and how the first population is built.

use crate::error::{EvolveError, Result};

/// How the population is materialized before the first generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitPolicy {
    /// Ask the objective for a random feasible population; zero-fill if it
    /// has no sampler.
    #[default]
    Sample,

    /// Always start from the all-zero population.
    Zero,
}

/// Configuration for the evolutionary engine.
///
/// # Defaults
///
/// ```
/// use u_evolve::ea::{EngineConfig, InitPolicy};
///
/// let config = EngineConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.init, InitPolicy::Sample);
/// assert!(config.seed.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ea::{EngineConfig, InitPolicy};
///
/// let config = EngineConfig::default()
///     .with_population_size(100)
///     .with_seed(42)
///     .with_init(InitPolicy::Zero);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of individuals, fixed for the whole run.
    ///
    /// Crossover works on adjacent pairs, so an even size uses every
    /// individual; with an odd size the last one never recombines.
    pub population_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy on the first draw.
    pub seed: Option<u64>,

    /// Initialization policy.
    pub init: InitPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            seed: None,
            init: InitPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the initialization policy.
    pub fn with_init(mut self, init: InitPolicy) -> Self {
        self.init = init;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(EvolveError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.seed, None);
        assert_eq!(config.init, InitPolicy::Sample);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_population_size(8)
            .with_seed(7)
            .with_init(InitPolicy::Zero);
        assert_eq!(config.population_size, 8);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.init, InitPolicy::Zero);
    }

    #[test]
    fn test_validate_zero_population() {
        let config = EngineConfig::default().with_population_size(0);
        assert!(matches!(
            config.validate(),
            Err(EvolveError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_single_individual() {
        let config = EngineConfig::default().with_population_size(1);
        assert!(config.validate().is_ok());
    }
}
