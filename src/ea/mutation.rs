//! Gaussian mutation with all-or-nothing rollback.
//!
//! Each individual is considered for mutation with probability
//! `individual_rate`. A considered individual has every gene perturbed
//! independently with probability `gene_rate` by a `N(0, sigma)` delta.
//! Only after the whole vector has been perturbed is feasibility checked;
//! an infeasible result restores the individual to its exact pre-mutation
//! values.

use tracing::trace;

use super::population::Population;
use super::types::Objective;
use crate::error::Result;
use crate::random::RandomSource;

/// Perturbs a population in place.
pub trait MutationOperator {
    /// Applies mutation to `population`. The size and dimension are
    /// unchanged.
    fn mutate<O: Objective + ?Sized>(
        &self,
        objective: &O,
        population: &mut Population,
        rng: &mut RandomSource,
    ) -> Result<()>;
}

/// Per-gene Gaussian mutation with rollback on infeasibility.
///
/// # Defaults
///
/// ```
/// use u_evolve::ea::GaussianMutation;
///
/// let m = GaussianMutation::default();
/// assert_eq!(m.sigma, 10.1);
/// assert_eq!(m.individual_rate, 0.5);
/// assert_eq!(m.gene_rate, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaussianMutation {
    /// Standard deviation of each gene delta.
    pub sigma: f64,

    /// Probability that an individual is considered at all.
    pub individual_rate: f64,

    /// Probability that a gene of a considered individual is perturbed.
    pub gene_rate: f64,
}

impl Default for GaussianMutation {
    fn default() -> Self {
        Self {
            sigma: 10.1,
            individual_rate: 0.5,
            gene_rate: 0.5,
        }
    }
}

impl GaussianMutation {
    /// Sets the delta standard deviation.
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma.max(0.0);
        self
    }

    /// Sets the per-individual mutation probability.
    pub fn with_individual_rate(mut self, rate: f64) -> Self {
        self.individual_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn with_gene_rate(mut self, rate: f64) -> Self {
        self.gene_rate = rate.clamp(0.0, 1.0);
        self
    }
}

impl MutationOperator for GaussianMutation {
    fn mutate<O: Objective + ?Sized>(
        &self,
        objective: &O,
        population: &mut Population,
        rng: &mut RandomSource,
    ) -> Result<()> {
        let mut snapshot = vec![0.0; population.dimension()];
        let mut mutated = 0usize;
        let mut rolled_back = 0usize;

        for individual in population.iter_mut() {
            if !rng.chance(self.individual_rate) {
                continue;
            }
            snapshot.copy_from_slice(individual);

            for gene in individual.iter_mut() {
                if rng.chance(self.gene_rate) {
                    *gene += rng.gaussian(0.0, self.sigma);
                }
            }

            if objective.is_feasible(individual) {
                mutated += 1;
            } else {
                individual.copy_from_slice(&snapshot);
                rolled_back += 1;
            }
        }

        trace!(mutated, rolled_back, "mutation applied");
        Ok(())
    }
}
