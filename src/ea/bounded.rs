//! Box-constrained objective adapter.
//!
//! [`BoxConstrained`] turns any `Fn(&[f64]) -> f64` plus a scalar interval
//! `[lower, upper]` into a complete [`Objective`]: a vector is feasible when
//! every gene lies in the interval, and the initial population is sampled
//! uniformly from it.

use super::population::Population;
use super::types::Objective;
use crate::error::{EvolveError, Result};
use crate::random::RandomSource;

/// An objective function restricted to the hypercube `[lower, upper]^D`.
///
/// # Examples
///
/// ```
/// use u_evolve::ea::{BoxConstrained, Objective};
///
/// let sphere = BoxConstrained::new(|x: &[f64]| x.iter().map(|v| v * v).sum(), -10.0, 10.0)
///     .unwrap();
/// assert_eq!(sphere.evaluate(&[1.0, 2.0]), 5.0);
/// assert!(sphere.is_feasible(&[10.0, -10.0]));
/// assert!(!sphere.is_feasible(&[10.5, 0.0]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoxConstrained<F> {
    function: F,
    lower: f64,
    upper: f64,
}

impl<F> BoxConstrained<F>
where
    F: Fn(&[f64]) -> f64,
{
    /// Wraps `function` with the bounds `[lower, upper]`.
    ///
    /// Fails unless both bounds are finite and `lower <= upper`.
    pub fn new(function: F, lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(EvolveError::InvalidConfig(format!(
                "invalid bounds [{lower}, {upper}]"
            )));
        }
        Ok(Self {
            function,
            lower,
            upper,
        })
    }

    /// Lower bound of every gene.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound of every gene.
    pub fn upper(&self) -> f64 {
        self.upper
    }
}

impl<F> Objective for BoxConstrained<F>
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, x: &[f64]) -> f64 {
        (self.function)(x)
    }

    fn is_feasible(&self, x: &[f64]) -> bool {
        x.iter().all(|&v| v >= self.lower && v <= self.upper)
    }

    fn sample_feasible(
        &self,
        count: usize,
        dimension: usize,
        rng: &mut RandomSource,
    ) -> Option<Population> {
        Population::from_fn(count, dimension, |_, _| rng.uniform(self.lower, self.upper)).ok()
    }
}
