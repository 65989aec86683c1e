//! The objective contract between the engine and a problem.
//!
//! The engine never inspects a problem beyond [`Objective`]: it scores
//! vectors, asks whether they are feasible, and optionally asks the problem
//! to produce a random feasible starting population.

use super::population::Population;
use crate::random::RandomSource;

/// A real-valued objective over a fixed-dimension search space.
///
/// Lower values of [`evaluate`](Objective::evaluate) are better
/// (minimization). For maximization, negate the value.
///
/// # Implementing
///
/// ```
/// use u_evolve::ea::Objective;
///
/// struct Sphere;
///
/// impl Objective for Sphere {
///     fn evaluate(&self, x: &[f64]) -> f64 {
///         x.iter().map(|v| v * v).sum()
///     }
///
///     fn is_feasible(&self, x: &[f64]) -> bool {
///         x.iter().all(|v| (-10.0..=10.0).contains(v))
///     }
/// }
///
/// assert_eq!(Sphere.evaluate(&[3.0, 4.0]), 25.0);
/// assert!(!Sphere.is_feasible(&[11.0, 0.0]));
/// ```
pub trait Objective {
    /// Scores a candidate vector. Lower is better.
    fn evaluate(&self, x: &[f64]) -> f64;

    /// Returns `true` if `x` lies in the feasible region.
    ///
    /// The dimension is the slice length.
    fn is_feasible(&self, x: &[f64]) -> bool;

    /// Samples `count` feasible vectors of length `dimension`.
    ///
    /// Returns `None` when the problem has no sampler, in which case the
    /// engine falls back to a zero-filled population. The default
    /// implementation returns `None`.
    fn sample_feasible(
        &self,
        _count: usize,
        _dimension: usize,
        _rng: &mut RandomSource,
    ) -> Option<Population> {
        None
    }
}

impl<O: Objective + ?Sized> Objective for &O {
    fn evaluate(&self, x: &[f64]) -> f64 {
        (**self).evaluate(x)
    }

    fn is_feasible(&self, x: &[f64]) -> bool {
        (**self).is_feasible(x)
    }

    fn sample_feasible(
        &self,
        count: usize,
        dimension: usize,
        rng: &mut RandomSource,
    ) -> Option<Population> {
        (**self).sample_feasible(count, dimension, rng)
    }
}
