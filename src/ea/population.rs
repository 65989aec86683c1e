//! Fixed-size, fixed-dimension population of real vectors.
//!
//! A [`Population`] owns its individuals outright. Each individual is a
//! boxed slice, so its length cannot change after construction, and the
//! population exposes no way to add or remove individuals. Operators read
//! and overwrite genes through borrowed slices only.

use std::ops::Index;

use super::types::Objective;
use crate::error::{EvolveError, Result};

/// An ordered collection of `len()` individuals, each of length
/// `dimension()`.
///
/// # Examples
///
/// ```
/// use u_evolve::ea::Population;
///
/// let mut pop = Population::zeros(4, 3).unwrap();
/// assert_eq!(pop.len(), 4);
/// assert_eq!(pop.dimension(), 3);
///
/// pop.get_mut(1).unwrap()[2] = 5.0;
/// assert_eq!(&pop[1], &[0.0, 0.0, 5.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    individuals: Vec<Box<[f64]>>,
    dimension: usize,
}

impl Population {
    /// Creates `size` zero-filled individuals of length `dimension`.
    pub fn zeros(size: usize, dimension: usize) -> Result<Self> {
        Self::from_fn(size, dimension, |_, _| 0.0)
    }

    /// Creates a population by calling `gene(individual, position)` for every
    /// gene, individual by individual.
    pub fn from_fn<F>(size: usize, dimension: usize, mut gene: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        check_shape(size, dimension)?;
        let individuals: Vec<Box<[f64]>> = (0..size)
            .map(|i| (0..dimension).map(|j| gene(i, j)).collect())
            .collect();
        Ok(Self {
            individuals,
            dimension,
        })
    }

    /// Builds a population from explicit vectors.
    ///
    /// All vectors must share the length of the first one.
    pub fn from_vectors(vectors: Vec<Vec<f64>>) -> Result<Self> {
        let dimension = vectors.first().map_or(0, Vec::len);
        check_shape(vectors.len(), dimension)?;
        if let Some((index, v)) = vectors
            .iter()
            .enumerate()
            .find(|(_, v)| v.len() != dimension)
        {
            return Err(EvolveError::DimensionMismatch {
                index,
                expected: dimension,
                actual: v.len(),
            });
        }
        Ok(Self {
            individuals: vectors.into_iter().map(Vec::into_boxed_slice).collect(),
            dimension,
        })
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Always `false`: construction rejects empty populations.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Length of every individual.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Borrows individual `i`.
    pub fn get(&self, i: usize) -> Option<&[f64]> {
        self.individuals.get(i).map(|v| &v[..])
    }

    /// Mutably borrows individual `i`.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut [f64]> {
        self.individuals.get_mut(i).map(|v| &mut v[..])
    }

    /// Mutably borrows the adjacent pair `(k, k + 1)`.
    ///
    /// Returns `None` if `k + 1` is out of range.
    pub fn pair_mut(&mut self, k: usize) -> Option<(&mut [f64], &mut [f64])> {
        if k + 1 >= self.individuals.len() {
            return None;
        }
        let (head, tail) = self.individuals.split_at_mut(k + 1);
        Some((&mut head[k][..], &mut tail[0][..]))
    }

    /// Iterates over individuals in order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.individuals.iter().map(|v| &v[..])
    }

    /// Iterates mutably over individuals in order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut [f64]> {
        self.individuals.iter_mut().map(|v| &mut v[..])
    }

    /// Replaces the population with copies of the individuals at `picks`,
    /// in order.
    ///
    /// Every pick reads the population as it was before the call, so the
    /// same individual may be copied several times. `picks` must have
    /// exactly `len()` entries.
    pub fn resample(&mut self, picks: &[usize]) -> Result<()> {
        let len = self.individuals.len();
        if picks.len() != len {
            return Err(EvolveError::PopulationSizeMismatch {
                expected: len,
                actual: picks.len(),
            });
        }
        if let Some(&index) = picks.iter().find(|&&p| p >= len) {
            return Err(EvolveError::IndexOutOfRange { index, len });
        }
        let next: Vec<Box<[f64]>> = picks
            .iter()
            .map(|&p| self.individuals[p].clone())
            .collect();
        self.individuals = next;
        Ok(())
    }

    /// Checks that this population has exactly `size` individuals of length
    /// `dimension`.
    pub fn ensure_shape(&self, size: usize, dimension: usize) -> Result<()> {
        if self.len() != size {
            return Err(EvolveError::PopulationSizeMismatch {
                expected: size,
                actual: self.len(),
            });
        }
        if self.dimension != dimension {
            return Err(EvolveError::DimensionMismatch {
                index: 0,
                expected: dimension,
                actual: self.dimension,
            });
        }
        Ok(())
    }

    /// Finds the individual with the lowest objective value.
    ///
    /// Returns `(index, value)`. A non-NaN value always wins over NaN; the
    /// value is NaN only when every individual evaluates to NaN, and then the
    /// index is 0.
    pub fn best<O: Objective + ?Sized>(&self, objective: &O) -> (usize, f64) {
        let mut best_idx = 0;
        let mut best = objective.evaluate(&self.individuals[0]);
        for (i, ind) in self.individuals.iter().enumerate().skip(1) {
            let f = objective.evaluate(ind);
            if f < best || (best.is_nan() && !f.is_nan()) {
                best_idx = i;
                best = f;
            }
        }
        (best_idx, best)
    }

    /// Copies the population into plain vectors.
    pub fn to_vecs(&self) -> Vec<Vec<f64>> {
        self.individuals.iter().map(|v| v.to_vec()).collect()
    }
}

impl Index<usize> for Population {
    type Output = [f64];

    fn index(&self, i: usize) -> &[f64] {
        &self.individuals[i]
    }
}

fn check_shape(size: usize, dimension: usize) -> Result<()> {
    if size == 0 {
        return Err(EvolveError::EmptyPopulation);
    }
    if dimension == 0 {
        return Err(EvolveError::ZeroDimension);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sum;

    impl Objective for Sum {
        fn evaluate(&self, x: &[f64]) -> f64 {
            x.iter().sum()
        }
        fn is_feasible(&self, _x: &[f64]) -> bool {
            true
        }
    }

    #[test]
    fn test_zeros_shape() {
        let pop = Population::zeros(5, 3).unwrap();
        assert_eq!(pop.len(), 5);
        assert_eq!(pop.dimension(), 3);
        assert!(pop.iter().all(|v| v == [0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_rejects_empty_and_zero_dimension() {
        assert_eq!(Population::zeros(0, 3), Err(EvolveError::EmptyPopulation));
        assert_eq!(Population::zeros(3, 0), Err(EvolveError::ZeroDimension));
        assert_eq!(
            Population::from_vectors(vec![]),
            Err(EvolveError::EmptyPopulation)
        );
    }

    #[test]
    fn test_from_vectors_dimension_mismatch() {
        let err = Population::from_vectors(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            EvolveError::DimensionMismatch {
                index: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_pair_mut() {
        let mut pop = Population::from_vectors(vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        {
            let (a, b) = pop.pair_mut(1).unwrap();
            std::mem::swap(&mut a[0], &mut b[0]);
        }
        assert_eq!(pop.to_vecs(), vec![vec![1.0], vec![3.0], vec![2.0]]);
        assert!(pop.pair_mut(2).is_none());
    }

    #[test]
    fn test_resample_reads_original() {
        let mut pop =
            Population::from_vectors(vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        pop.resample(&[3, 0, 0, 1]).unwrap();
        assert_eq!(
            pop.to_vecs(),
            vec![vec![3.0], vec![0.0], vec![0.0], vec![1.0]]
        );
    }

    #[test]
    fn test_resample_errors() {
        let mut pop = Population::zeros(3, 2).unwrap();
        assert_eq!(
            pop.resample(&[0, 1]),
            Err(EvolveError::PopulationSizeMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            pop.resample(&[0, 1, 3]),
            Err(EvolveError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_best_finds_minimum() {
        let pop = Population::from_vectors(vec![
            vec![4.0, 1.0],
            vec![-2.0, 0.5],
            vec![0.0, 0.0],
        ])
        .unwrap();
        assert_eq!(pop.best(&Sum), (1, -1.5));
    }

    #[test]
    fn test_ensure_shape() {
        let pop = Population::zeros(4, 2).unwrap();
        assert!(pop.ensure_shape(4, 2).is_ok());
        assert!(pop.ensure_shape(5, 2).is_err());
        assert!(pop.ensure_shape(4, 3).is_err());
    }

    #[test]
    fn test_best_skips_nan() {
        let pop =
            Population::from_vectors(vec![vec![f64::NAN], vec![3.0], vec![f64::NAN], vec![5.0]])
                .unwrap();
        assert_eq!(pop.best(&Sum), (1, 3.0));

        let all_nan = Population::from_vectors(vec![vec![f64::NAN], vec![f64::NAN]]).unwrap();
        let (index, value) = all_nan.best(&Sum);
        assert_eq!(index, 0);
        assert!(value.is_nan());
    }
}
