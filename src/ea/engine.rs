//! Generational loop execution.
//!
//! [`Engine`] orchestrates one optimization run:
//! initialization → (selection → crossover → mutation) × generations →
//! best of the final population.

use tracing::{debug, info};

use super::config::{EngineConfig, InitPolicy};
use super::crossover::{CrossoverOperator, SinglePointCrossover};
use super::mutation::{GaussianMutation, MutationOperator};
use super::population::Population;
use super::selection::{FitnessProportionate, SelectionOperator};
use super::types::Objective;
use crate::error::{EvolveError, Result};
use crate::random::RandomSource;

/// Result of an optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// Best individual of the final population.
    pub best: Vec<f64>,

    /// Objective value of `best`.
    pub best_fitness: f64,

    /// Best objective value of the initial population.
    pub initial_best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best objective value in the population after each generation.
    ///
    /// Index 0 is the initial population, so the length is
    /// `generations + 1`. Not monotone: only selection is fitness-biased.
    pub fitness_history: Vec<f64>,

    /// The final population.
    pub population: Population,
}

/// Generational evolutionary optimizer.
///
/// Operators are strategy objects injected at construction; the defaults
/// are [`FitnessProportionate`], [`SinglePointCrossover`] and
/// [`GaussianMutation`].
///
/// The random source belongs to the engine. Two engines built with the same
/// seed and operators produce identical runs; repeated runs on one engine
/// continue the same stream.
///
/// # Usage
///
/// ```
/// use u_evolve::ea::{Engine, EngineConfig, Objective};
///
/// struct Sphere;
///
/// impl Objective for Sphere {
///     fn evaluate(&self, x: &[f64]) -> f64 {
///         x.iter().map(|v| v * v).sum()
///     }
///     fn is_feasible(&self, x: &[f64]) -> bool {
///         x.iter().all(|v| v.abs() <= 10.0)
///     }
/// }
///
/// let mut engine = Engine::new(EngineConfig::default().with_population_size(8).with_seed(1));
/// let best = engine.optimize(&Sphere, 20, 3).unwrap();
/// assert!(best >= 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Engine<S = FitnessProportionate, C = SinglePointCrossover, M = GaussianMutation> {
    config: EngineConfig,
    selection: S,
    crossover: C,
    mutation: M,
    rng: RandomSource,
}

impl Engine {
    /// Creates an engine with the default operators.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_operators(
            config,
            FitnessProportionate::default(),
            SinglePointCrossover,
            GaussianMutation::default(),
        )
    }
}

impl<S, C, M> Engine<S, C, M>
where
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
{
    /// Creates an engine with custom operators.
    pub fn with_operators(config: EngineConfig, selection: S, crossover: C, mutation: M) -> Self {
        let rng = match config.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::new(),
        };
        Self {
            config,
            selection,
            crossover,
            mutation,
            rng,
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Reseeds the engine's random source.
    pub fn seed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }

    /// Runs `generations` generations over a `dimension`-dimensional space
    /// and returns the lowest objective value in the final population.
    ///
    /// With the default operators the objective is evaluated only by
    /// selection and by the final scan,
    /// `population_size * (generations + 1)` calls in total.
    pub fn optimize<O: Objective + ?Sized>(
        &mut self,
        objective: &O,
        generations: usize,
        dimension: usize,
    ) -> Result<f64> {
        let population = self.evolve(objective, generations, dimension, None)?;
        let (_, best_fitness) = population.best(objective);
        info!(best_fitness, "evolution finished");
        Ok(best_fitness)
    }

    /// Like [`optimize`](Self::optimize), returning the full [`EvolutionResult`].
    ///
    /// Recording the history costs one extra scan of the population per
    /// generation.
    pub fn run<O: Objective + ?Sized>(
        &mut self,
        objective: &O,
        generations: usize,
        dimension: usize,
    ) -> Result<EvolutionResult> {
        let mut fitness_history = Vec::new();
        let population =
            self.evolve(objective, generations, dimension, Some(&mut fitness_history))?;

        let (best_idx, best_fitness) = population.best(objective);
        let initial_best_fitness = fitness_history.first().copied().unwrap_or(best_fitness);
        info!(best_fitness, initial_best_fitness, "evolution finished");

        Ok(EvolutionResult {
            best: population[best_idx].to_vec(),
            best_fitness,
            initial_best_fitness,
            generations,
            fitness_history,
            population,
        })
    }

    /// Initializes a population and evolves it for `generations` generations.
    ///
    /// When `history` is given, the best value of the initial population and
    /// of every generation is appended to it.
    fn evolve<O: Objective + ?Sized>(
        &mut self,
        objective: &O,
        generations: usize,
        dimension: usize,
        mut history: Option<&mut Vec<f64>>,
    ) -> Result<Population> {
        self.config.validate()?;
        if dimension == 0 {
            return Err(EvolveError::ZeroDimension);
        }

        info!(
            population_size = self.config.population_size,
            dimension,
            generations,
            "starting evolution"
        );

        let mut population = self.initial_population(objective, dimension)?;
        if let Some(history) = history.as_deref_mut() {
            history.push(population.best(objective).1);
        }

        for gen in 0..generations {
            self.selection
                .select(objective, &mut population, &mut self.rng)?;
            self.crossover
                .crossover(objective, &mut population, &mut self.rng)?;
            self.mutation
                .mutate(objective, &mut population, &mut self.rng)?;

            match history.as_deref_mut() {
                Some(history) => {
                    let (_, gen_best) = population.best(objective);
                    history.push(gen_best);
                    debug!(generation = gen + 1, best = gen_best, "generation complete");
                }
                None => debug!(generation = gen + 1, "generation complete"),
            }
        }

        Ok(population)
    }

    fn initial_population<O: Objective + ?Sized>(
        &mut self,
        objective: &O,
        dimension: usize,
    ) -> Result<Population> {
        let size = self.config.population_size;
        let sampled = match self.config.init {
            InitPolicy::Sample => objective.sample_feasible(size, dimension, &mut self.rng),
            InitPolicy::Zero => None,
        };
        match sampled {
            Some(population) => {
                population.ensure_shape(size, dimension)?;
                Ok(population)
            }
            None => {
                debug!("initializing zero population");
                Population::zeros(size, dimension)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Sphere on `[-10, 10]^D` with an optional uniform sampler.
    struct Sphere {
        sampler: bool,
    }

    impl Objective for Sphere {
        fn evaluate(&self, x: &[f64]) -> f64 {
            x.iter().map(|v| v * v).sum()
        }

        fn is_feasible(&self, x: &[f64]) -> bool {
            x.iter().all(|v| (-10.0..=10.0).contains(v))
        }

        fn sample_feasible(
            &self,
            count: usize,
            dimension: usize,
            rng: &mut RandomSource,
        ) -> Option<Population> {
            if !self.sampler {
                return None;
            }
            Population::from_fn(count, dimension, |_, _| rng.uniform(-10.0, 10.0)).ok()
        }
    }

    /// Sampler that returns the wrong number of individuals.
    struct BadSampler;

    impl Objective for BadSampler {
        fn evaluate(&self, x: &[f64]) -> f64 {
            x[0]
        }
        fn is_feasible(&self, _x: &[f64]) -> bool {
            true
        }
        fn sample_feasible(
            &self,
            _count: usize,
            dimension: usize,
            _rng: &mut RandomSource,
        ) -> Option<Population> {
            Population::zeros(3, dimension).ok()
        }
    }

    /// Sphere that counts its evaluations.
    struct Counting {
        calls: Cell<usize>,
    }

    impl Objective for Counting {
        fn evaluate(&self, x: &[f64]) -> f64 {
            self.calls.set(self.calls.get() + 1);
            x.iter().map(|v| v * v).sum()
        }
        fn is_feasible(&self, x: &[f64]) -> bool {
            x.iter().all(|v| v.abs() <= 10.0)
        }
    }

    fn config(seed: u64) -> EngineConfig {
        EngineConfig::default()
            .with_population_size(6)
            .with_seed(seed)
    }

    #[test]
    fn test_history_length_and_result_shape() {
        let mut engine = Engine::new(config(42));
        let result = engine.run(&Sphere { sampler: true }, 30, 4).unwrap();
        assert_eq!(result.generations, 30);
        assert_eq!(result.fitness_history.len(), 31);
        assert_eq!(result.fitness_history[0], result.initial_best_fitness);
        assert_eq!(result.fitness_history[30], result.best_fitness);
        assert_eq!(result.best.len(), 4);
        assert_eq!(result.population.len(), 6);
        assert_eq!(result.population.dimension(), 4);
    }

    #[test]
    fn test_best_is_minimum_of_final_population() {
        let objective = Sphere { sampler: true };
        let mut engine = Engine::new(config(3));
        let result = engine.run(&objective, 10, 2).unwrap();
        let min = result
            .population
            .iter()
            .map(|x| objective.evaluate(x))
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.best_fitness, min);
        assert_eq!(objective.evaluate(&result.best), min);
    }

    #[test]
    fn test_zero_generations_returns_initial_best() {
        let mut engine = Engine::new(config(5));
        let result = engine.run(&Sphere { sampler: true }, 0, 3).unwrap();
        assert_eq!(result.best_fitness, result.initial_best_fitness);
        assert_eq!(result.fitness_history.len(), 1);
    }

    #[test]
    fn test_zero_fill_without_sampler() {
        let mut engine = Engine::new(config(5));
        let result = engine.run(&Sphere { sampler: false }, 0, 3).unwrap();
        assert_eq!(result.initial_best_fitness, 0.0);
        assert!(result.population.iter().all(|x| x == [0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_zero_policy_ignores_sampler() {
        let mut engine = Engine::new(config(5).with_init(InitPolicy::Zero));
        let result = engine.run(&Sphere { sampler: true }, 0, 2).unwrap();
        assert!(result.population.iter().all(|x| x == [0.0, 0.0]));
    }

    #[test]
    fn test_same_seed_same_run() {
        let objective = Sphere { sampler: true };
        let a = Engine::new(config(99)).run(&objective, 40, 3).unwrap();
        let b = Engine::new(config(99)).run(&objective, 40, 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_optimize_matches_run() {
        let objective = Sphere { sampler: true };
        let best = Engine::new(config(17)).optimize(&objective, 25, 2).unwrap();
        let result = Engine::new(config(17)).run(&objective, 25, 2).unwrap();
        assert_eq!(best, result.best_fitness);
    }

    #[test]
    fn test_reseed_replays_run() {
        let objective = Sphere { sampler: true };
        let mut engine = Engine::new(config(8));
        let first = engine.optimize(&objective, 15, 2).unwrap();
        engine.seed(8);
        let second = engine.optimize(&objective, 15, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_zero_dimension() {
        let mut engine = Engine::new(config(1));
        assert_eq!(
            engine.optimize(&Sphere { sampler: true }, 5, 0),
            Err(EvolveError::ZeroDimension)
        );
    }

    #[test]
    fn test_rejects_zero_population() {
        let mut engine = Engine::new(config(1).with_population_size(0));
        assert!(matches!(
            engine.optimize(&Sphere { sampler: true }, 5, 2),
            Err(EvolveError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_missized_sample() {
        let mut engine = Engine::new(config(1));
        assert_eq!(
            engine.optimize(&BadSampler, 5, 2),
            Err(EvolveError::PopulationSizeMismatch {
                expected: 6,
                actual: 3
            })
        );
    }

    #[test]
    fn test_population_stays_feasible() {
        let objective = Sphere { sampler: true };
        let mut engine = Engine::new(config(21));
        let result = engine.run(&objective, 50, 5).unwrap();
        assert!(result.population.iter().all(|x| objective.is_feasible(x)));
    }

    #[test]
    fn test_odd_population_size() {
        let mut engine = Engine::new(config(4).with_population_size(5));
        let result = engine.run(&Sphere { sampler: true }, 20, 3).unwrap();
        assert_eq!(result.population.len(), 5);
    }

    #[test]
    fn test_optimize_evaluates_only_in_selection_and_final_scan() {
        let objective = Counting { calls: Cell::new(0) };
        let mut engine = Engine::new(config(11).with_population_size(4));
        engine.optimize(&objective, 10, 2).unwrap();
        assert_eq!(objective.calls.get(), 4 * 10 + 4);
    }

    #[test]
    fn test_run_adds_one_scan_per_generation() {
        let objective = Counting { calls: Cell::new(0) };
        let mut engine = Engine::new(config(11).with_population_size(4));
        let result = engine.run(&objective, 10, 2).unwrap();
        // Selection, plus the initial, per-generation and final scans.
        assert_eq!(objective.calls.get(), 4 * 10 + 4 * 11 + 4);
        assert_eq!(result.fitness_history.len(), 11);
    }
}
