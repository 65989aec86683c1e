//! Engine-scoped random number source.
//!
//! [`RandomSource`] wraps a [`StdRng`] that is created lazily on the first
//! draw, either from an explicit seed or from operating-system entropy.
//! Once created, the stream is deterministic for that seed.
//!
//! The source is owned by whoever draws from it (normally an
//! [`Engine`](crate::ea::Engine)). It performs no internal locking: callers
//! that share one source across threads must serialize access themselves,
//! e.g. behind a `Mutex`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Lazily seeded pseudo-random generator.
///
/// # Examples
///
/// ```
/// use u_evolve::random::RandomSource;
///
/// let mut a = RandomSource::seeded(7);
/// let mut b = RandomSource::seeded(7);
/// assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
/// assert_eq!(a.gaussian(0.0, 1.0), b.gaussian(0.0, 1.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RandomSource {
    seed: Option<u64>,
    rng: Option<StdRng>,
}

impl RandomSource {
    /// Creates an unseeded source. The first draw seeds it from OS entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source that will be seeded deterministically on first draw.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rng: None,
        }
    }

    /// Reseeds the source. Any existing generator state is discarded.
    pub fn seed(&mut self, seed: u64) {
        self.seed = Some(seed);
        self.rng = None;
    }

    /// Returns the explicit seed, if one was set.
    pub fn seed_value(&self) -> Option<u64> {
        self.seed
    }

    /// Returns `true` once the underlying generator has been created.
    pub fn is_initialized(&self) -> bool {
        self.rng.is_some()
    }

    fn rng(&mut self) -> &mut StdRng {
        let seed = self.seed;
        self.rng.get_or_insert_with(|| match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        })
    }

    /// Uniform real in `[lo, hi)`.
    ///
    /// Returns `lo` when the range is empty or not finite.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if !(lo < hi) || !(hi - lo).is_finite() {
            return lo;
        }
        self.rng().random_range(lo..hi)
    }

    /// Uniform integer in `[lo, hi)`.
    ///
    /// Returns `lo` when the range is empty.
    pub fn uniform_int(&mut self, lo: usize, hi: usize) -> usize {
        if lo >= hi {
            return lo;
        }
        self.rng().random_range(lo..hi)
    }

    /// Normal deviate with the given mean and standard deviation.
    pub fn gaussian(&mut self, mean: f64, stddev: f64) -> f64 {
        let z: f64 = self.rng().sample(StandardNormal);
        mean + stddev * z
    }

    /// Fair coin: `uniform(0, 1) <= 0.5`.
    pub fn boolean(&mut self) -> bool {
        self.chance(0.5)
    }

    /// `true` with probability `p`, evaluated as `uniform(0, 1) <= p`.
    ///
    /// `p <= 0` is always `false` and draws nothing.
    pub fn chance(&mut self, p: f64) -> bool {
        if p <= 0.0 {
            return false;
        }
        self.uniform(0.0, 1.0) <= p
    }
}
