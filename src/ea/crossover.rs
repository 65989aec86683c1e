//! Single-point crossover with a feasibility gate.
//!
//! The population is processed as disjoint adjacent pairs `(0, 1)`,
//! `(2, 3)`, ... An odd trailing individual is left untouched.
//!
//! For each pair a pivot `p` is drawn uniformly from `[0, D)` and two
//! offspring are built from the unchanged parents:
//!
//! ```text
//! parent a: a0 a1 | a2 a3        o1: a0 a1 | b2 b3
//! parent b: b0 b1 | b2 b3   =>   o2: b0 b1 | a2 a3
//! ```
//!
//! Each offspring replaces its own parent only if it is feasible. A rejected
//! offspring leaves its parent exactly as it was.

use tracing::trace;

use super::population::Population;
use super::types::Objective;
use crate::error::Result;
use crate::random::RandomSource;

/// Recombines a population in place.
pub trait CrossoverOperator {
    /// Applies crossover to `population`. The size and dimension are
    /// unchanged.
    fn crossover<O: Objective + ?Sized>(
        &self,
        objective: &O,
        population: &mut Population,
        rng: &mut RandomSource,
    ) -> Result<()>;
}

/// Single-point crossover over adjacent pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SinglePointCrossover;

impl CrossoverOperator for SinglePointCrossover {
    fn crossover<O: Objective + ?Sized>(
        &self,
        objective: &O,
        population: &mut Population,
        rng: &mut RandomSource,
    ) -> Result<()> {
        let dimension = population.dimension();
        let mut o1 = vec![0.0; dimension];
        let mut o2 = vec![0.0; dimension];
        let mut accepted = 0usize;

        for k in (0..population.len()).step_by(2) {
            let Some((a, b)) = population.pair_mut(k) else {
                break;
            };
            let piv = rng.uniform_int(0, dimension);
            recombine(a, b, piv, &mut o1, &mut o2);

            if objective.is_feasible(&o1) {
                a.copy_from_slice(&o1);
                accepted += 1;
            }
            if objective.is_feasible(&o2) {
                b.copy_from_slice(&o2);
                accepted += 1;
            }
        }

        trace!(accepted, "crossover offspring accepted");
        Ok(())
    }
}

/// Writes the two single-point offspring of `a` and `b` into `o1` and `o2`.
fn recombine(a: &[f64], b: &[f64], piv: usize, o1: &mut [f64], o2: &mut [f64]) {
    o1[..piv].copy_from_slice(&a[..piv]);
    o1[piv..].copy_from_slice(&b[piv..]);
    o2[..piv].copy_from_slice(&b[..piv]);
    o2[piv..].copy_from_slice(&a[piv..]);
}
