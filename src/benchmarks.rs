//! Standard continuous test functions.
//!
//! Unshifted, unrotated forms of the functions commonly used to exercise
//! real-valued optimizers, each paired with its conventional search domain.
//! All are minimized; every function here has global minimum `0`.
//!
//! # References
//!
//! - Li et al. (2013), "Benchmark Functions for the CEC'2013 Special Session
//!   and Competition on Large-Scale Global Optimization"

use std::f64::consts::{E, PI};

use crate::ea::BoxConstrained;

/// Catalogue of benchmark functions.
///
/// # Examples
///
/// ```
/// use u_evolve::benchmarks::Benchmark;
/// use u_evolve::ea::Objective;
///
/// let obj = Benchmark::Rastrigin.objective();
/// assert_eq!(obj.evaluate(&[0.0; 4]), 0.0);
/// assert!(obj.is_feasible(&[5.0, -5.0]));
/// assert!(!obj.is_feasible(&[5.5]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Benchmark {
    /// `sum x_i^2` on `[-100, 100]`.
    Sphere,
    /// High-conditioned elliptic, `sum 10^(6 i / (D-1)) x_i^2`, on `[-100, 100]`.
    Elliptic,
    /// Rastrigin on `[-5, 5]`.
    Rastrigin,
    /// Ackley on `[-32, 32]`.
    Ackley,
    /// Schwefel 1.2, `sum_i (sum_{j<=i} x_j)^2`, on `[-100, 100]`.
    Schwefel12,
    /// Rosenbrock on `[-100, 100]`; minimum at `(1, ..., 1)`.
    Rosenbrock,
}

impl Benchmark {
    /// Every benchmark, in declaration order.
    pub const ALL: [Benchmark; 6] = [
        Benchmark::Sphere,
        Benchmark::Elliptic,
        Benchmark::Rastrigin,
        Benchmark::Ackley,
        Benchmark::Schwefel12,
        Benchmark::Rosenbrock,
    ];

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Benchmark::Sphere => "sphere",
            Benchmark::Elliptic => "elliptic",
            Benchmark::Rastrigin => "rastrigin",
            Benchmark::Ackley => "ackley",
            Benchmark::Schwefel12 => "schwefel12",
            Benchmark::Rosenbrock => "rosenbrock",
        }
    }

    /// Search domain `(lower, upper)` applied to every gene.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Benchmark::Rastrigin => (-5.0, 5.0),
            Benchmark::Ackley => (-32.0, 32.0),
            _ => (-100.0, 100.0),
        }
    }

    /// The raw function.
    pub fn function(self) -> fn(&[f64]) -> f64 {
        match self {
            Benchmark::Sphere => sphere,
            Benchmark::Elliptic => elliptic,
            Benchmark::Rastrigin => rastrigin,
            Benchmark::Ackley => ackley,
            Benchmark::Schwefel12 => schwefel12,
            Benchmark::Rosenbrock => rosenbrock,
        }
    }

    /// The function restricted to its search domain.
    pub fn objective(self) -> BoxConstrained<fn(&[f64]) -> f64> {
        let (lower, upper) = self.bounds();
        BoxConstrained::new(self.function(), lower, upper)
            .expect("benchmark bounds are finite and ordered")
    }
}

/// `sum x_i^2`
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

/// `sum 10^(6 i / (D-1)) x_i^2`
pub fn elliptic(x: &[f64]) -> f64 {
    let d = x.len();
    if d < 2 {
        return sphere(x);
    }
    x.iter()
        .enumerate()
        .map(|(i, v)| 10f64.powf(6.0 * i as f64 / (d - 1) as f64) * v * v)
        .sum()
}

/// `sum x_i^2 - 10 cos(2 pi x_i) + 10`
pub fn rastrigin(x: &[f64]) -> f64 {
    x.iter()
        .map(|v| v * v - 10.0 * (2.0 * PI * v).cos() + 10.0)
        .sum()
}

/// Ackley's function with `a = 20`, `b = 0.2`, `c = 2 pi`.
pub fn ackley(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    let n = x.len() as f64;
    let sq = x.iter().map(|v| v * v).sum::<f64>() / n;
    let cos = x.iter().map(|v| (2.0 * PI * v).cos()).sum::<f64>() / n;
    -20.0 * (-0.2 * sq.sqrt()).exp() - cos.exp() + 20.0 + E
}

/// `sum_i (sum_{j<=i} x_j)^2`
pub fn schwefel12(x: &[f64]) -> f64 {
    x.iter()
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc * *acc)
        })
        .sum()
}

/// `sum 100 (x_{i+1} - x_i^2)^2 + (x_i - 1)^2`
pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (w[0] - 1.0).powi(2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ea::Objective;

    #[test]
    fn test_minima() {
        let zeros = [0.0; 5];
        assert_eq!(sphere(&zeros), 0.0);
        assert_eq!(elliptic(&zeros), 0.0);
        assert_eq!(rastrigin(&zeros), 0.0);
        assert!(ackley(&zeros).abs() < 1e-12);
        assert_eq!(schwefel12(&zeros), 0.0);
        assert_eq!(rosenbrock(&[1.0; 5]), 0.0);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(sphere(&[1.0, 2.0, 3.0]), 14.0);
        // Weights 1, 1e3, 1e6 for D = 3.
        assert!((elliptic(&[1.0, 1.0, 1.0]) - 1_001_001.0).abs() < 1e-6);
        assert!((rastrigin(&[1.0]) - 1.0).abs() < 1e-12);
        assert_eq!(schwefel12(&[1.0, 2.0, 3.0]), 1.0 + 9.0 + 36.0);
        assert_eq!(rosenbrock(&[0.0, 0.0]), 1.0);
    }

    #[test]
    fn test_positive_away_from_minimum() {
        let x = [0.3, -1.7, 2.5];
        for b in Benchmark::ALL {
            assert!(b.function()(&x) > 0.0, "{} should be positive", b.name());
        }
    }

    #[test]
    fn test_objective_bounds() {
        for b in Benchmark::ALL {
            let (lo, hi) = b.bounds();
            let obj = b.objective();
            assert_eq!(obj.lower(), lo);
            assert_eq!(obj.upper(), hi);
            assert!(obj.is_feasible(&[lo, hi]));
            assert!(!obj.is_feasible(&[hi + 1.0]));
        }
    }

    #[test]
    fn test_names_unique() {
        let mut names: Vec<&str> = Benchmark::ALL.iter().map(|b| b.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Benchmark::ALL.len());
    }
}
