//! Fitness-proportionate resampling.
//!
//! Selection replaces the whole population with `len()` draws from itself,
//! biased toward individuals with lower objective values.
//!
//! # Algorithm
//!
//! 1. Score each individual as `s_i = -f(x_i)`.
//! 2. Shift every score by `|min(s)|`.
//! 3. Accumulate the scores and normalize by the total so the cumulative
//!    array is non-decreasing and ends at `1.0`.
//! 4. For each draw, sample a key and binary-search the cumulative array.
//!
//! The default key is a standard-normal deviate ([`SelectionKey::Gaussian`]).
//! Its support is unbounded, so every negative key lands on index 0 and every
//! key above 1 lands on the last index. [`SelectionKey::Uniform`] gives the
//! textbook roulette wheel.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel selection)

use tracing::trace;

use super::population::Population;
use super::types::Objective;
use crate::error::{EvolveError, Result};
use crate::random::RandomSource;

/// Replaces a population with a fitness-biased resampling of itself.
pub trait SelectionOperator {
    /// Resamples `population` in place. The size and dimension are unchanged.
    fn select<O: Objective + ?Sized>(
        &self,
        objective: &O,
        population: &mut Population,
        rng: &mut RandomSource,
    ) -> Result<()>;
}

/// How the search key for each draw is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionKey {
    /// Standard-normal key, `N(0, 1)`.
    #[default]
    Gaussian,
    /// Uniform key in `[0, 1)`.
    Uniform,
}

/// Fitness-proportionate selection over shifted, negated objective values.
///
/// # Examples
///
/// ```
/// use u_evolve::ea::{FitnessProportionate, SelectionKey};
///
/// let sel = FitnessProportionate::default();
/// assert_eq!(sel.key, SelectionKey::Gaussian);
///
/// let roulette = FitnessProportionate::default().with_key(SelectionKey::Uniform);
/// assert_eq!(roulette.key, SelectionKey::Uniform);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessProportionate {
    /// Distribution of the per-draw search key.
    pub key: SelectionKey,
}

impl FitnessProportionate {
    /// Sets the key distribution.
    pub fn with_key(mut self, key: SelectionKey) -> Self {
        self.key = key;
        self
    }

    fn draw_key(&self, rng: &mut RandomSource) -> f64 {
        match self.key {
            SelectionKey::Gaussian => rng.gaussian(0.0, 1.0),
            SelectionKey::Uniform => rng.uniform(0.0, 1.0),
        }
    }
}

impl SelectionOperator for FitnessProportionate {
    fn select<O: Objective + ?Sized>(
        &self,
        objective: &O,
        population: &mut Population,
        rng: &mut RandomSource,
    ) -> Result<()> {
        let n = population.len();
        if n == 0 {
            return Err(EvolveError::EmptyPopulation);
        }

        let picks: Vec<usize> = match cumulative_scores(objective, population) {
            Some(cumulative) => (0..n)
                .map(|_| search(&cumulative, self.draw_key(rng)))
                .collect(),
            None => {
                trace!(size = n, "degenerate scores, selecting uniformly");
                (0..n).map(|_| rng.uniform_int(0, n)).collect()
            }
        };

        population.resample(&picks)
    }
}

/// Computes the normalized cumulative score array used by selection.
///
/// Returns `None` when the scores cannot be normalized: the cumulative total
/// is zero, or some objective value is not finite.
///
/// ```
/// use u_evolve::ea::{cumulative_scores, Objective, Population};
///
/// struct Identity;
/// impl Objective for Identity {
///     fn evaluate(&self, x: &[f64]) -> f64 { x[0] }
///     fn is_feasible(&self, _: &[f64]) -> bool { true }
/// }
///
/// let pop = Population::from_vectors(vec![vec![1.0], vec![3.0], vec![2.0]]).unwrap();
/// let c = cumulative_scores(&Identity, &pop).unwrap();
/// assert_eq!(c, vec![2.0 / 3.0, 2.0 / 3.0, 1.0]);
/// ```
pub fn cumulative_scores<O: Objective + ?Sized>(
    objective: &O,
    population: &Population,
) -> Option<Vec<f64>> {
    let mut scores: Vec<f64> = population.iter().map(|x| -objective.evaluate(x)).collect();
    if scores.is_empty() || scores.iter().any(|s| !s.is_finite()) {
        return None;
    }

    let extra = scores.iter().cloned().fold(f64::INFINITY, f64::min).abs();
    for s in scores.iter_mut() {
        *s += extra;
    }

    for i in 1..scores.len() {
        scores[i] += scores[i - 1];
    }

    let total = scores[scores.len() - 1];
    if !(total > 0.0) || !total.is_finite() {
        return None;
    }
    for c in scores.iter_mut() {
        *c /= total;
    }
    Some(scores)
}

/// Binary search for the draw `u` over a normalized cumulative array.
///
/// Narrows `[low, high]` until the two are adjacent, then takes `low` if its
/// cumulative value is strictly greater than `u`, otherwise `high`.
fn search(cumulative: &[f64], u: f64) -> usize {
    let mut low = 0;
    let mut high = cumulative.len() - 1;
    while high - low > 1 {
        let mid = (low + high) / 2;
        if u <= cumulative[mid] {
            high = mid;
        } else {
            low = mid;
        }
    }
    if cumulative[low] > u {
        low
    } else {
        high
    }
}
