//! Generational search loop of the cultural algorithm.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::compute::TourSolver;
use crate::schema::{Algorithm, CulturalConfig, Square, TourResult};

use super::belief::BeliefSpace;
use super::genome::{Genome, GenomeRng};

/// A genome together with its decoded path and score.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The genome.
    pub genome: Genome,
    /// Path length reached by the genome (start square included).
    pub score: usize,
    /// Decoded path.
    pub path: Vec<Square>,
}

/// Progress report passed to the callback after each evaluated generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationProgress {
    /// Current generation number (1-based).
    pub generation: usize,
    /// Generation limit.
    pub max_generations: usize,
    /// Belief-space score so far.
    pub best_score: usize,
    /// Best score within this generation.
    pub generation_best: usize,
    /// Mean score of this generation.
    pub avg_score: f32,
    /// Number of squares on the board.
    pub total_squares: usize,
}

/// Per-generation statistics for plotting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvolutionHistory {
    /// Belief-space score after each generation.
    pub best_score: Vec<usize>,
    /// Best score within each generation.
    pub generation_best: Vec<usize>,
    /// Mean score of each generation.
    pub avg_score: Vec<f32>,
}

/// Reason a run ended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopReason {
    /// A genome covered the whole board.
    TourFound,
    /// Reached the generation limit.
    MaxGenerations,
    /// Cancelled through the cancel handle.
    Cancelled,
}

/// Cultural-algorithm Knight's Tour solver.
///
/// Each run starts from a fresh population and an empty belief space.
pub struct CulturalSolver {
    n: usize,
    config: CulturalConfig,
    rng: GenomeRng,
    belief: BeliefSpace,
    history: EvolutionHistory,
    generation: usize,
    stop_reason: Option<StopReason>,
    cancelled: Arc<AtomicBool>,
}

impl CulturalSolver {
    /// Create a solver with the default population size and generation limit.
    pub fn new(n: usize) -> Self {
        Self::with_config(n, CulturalConfig::default())
    }

    /// Create a solver with explicit parameters.
    pub fn with_config(n: usize, config: CulturalConfig) -> Self {
        let seed = config.random_seed.unwrap_or_else(rand::random);
        Self {
            n,
            config,
            rng: GenomeRng::new(seed),
            belief: BeliefSpace::new(),
            history: EvolutionHistory::default(),
            generation: 0,
            stop_reason: None,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Parameters this solver runs with.
    pub fn config(&self) -> &CulturalConfig {
        &self.config
    }

    /// Get cancellation handle.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Belief space at the end of the last run.
    pub fn belief(&self) -> &BeliefSpace {
        &self.belief
    }

    /// Statistics of the last run.
    pub fn history(&self) -> &EvolutionHistory {
        &self.history
    }

    /// Generations evaluated in the last run.
    pub fn generations(&self) -> usize {
        self.generation
    }

    /// Why the last run ended, if a run has happened.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    /// Generate the initial population.
    pub fn initial_population(&mut self) -> Vec<Genome> {
        let len = self.n * self.n;
        (0..self.config.population_size)
            .map(|_| self.rng.random_genome(len))
            .collect()
    }

    /// Decode and score every genome, preserving population order.
    pub fn evaluate(&self, population: Vec<Genome>, start: Square) -> Vec<Candidate> {
        let n = self.n;
        population
            .into_par_iter()
            .map(|genome| {
                let path = genome.decode(start, n);
                Candidate {
                    score: path.len(),
                    path,
                    genome,
                }
            })
            .collect()
    }

    /// Build the next generation from this generation's candidates.
    ///
    /// Slot 0 holds an exact copy of the belief-space genome. The remaining
    /// slots are copies of parents drawn uniformly from the top-ranked
    /// candidates, each put through knowledge-guided mutation.
    pub fn reproduce(
        &mut self,
        mut candidates: Vec<Candidate>,
        belief: &BeliefSpace,
    ) -> Vec<Genome> {
        // Stable sort keeps population order among equal scores.
        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        let pool_size = self.config.breeding_pool_size().min(candidates.len());
        let pool = &candidates[..pool_size];

        let mut next_gen = Vec::with_capacity(self.config.population_size);
        next_gen.push(belief.genome.clone());

        let failure_index = belief.failure_index();
        while next_gen.len() < self.config.population_size {
            let parent = &pool[self.rng.pick(pool.len())];
            let mut child = parent.genome.clone();
            self.rng.guided_mutate(
                &mut child,
                failure_index,
                self.config.mutation_lookback,
                self.config.mutation_rate,
            );
            next_gen.push(child);
        }

        next_gen
    }

    /// Record statistics for an evaluated generation.
    fn record(&mut self, candidates: &[Candidate]) -> GenerationProgress {
        let generation_best = candidates.iter().map(|c| c.score).max().unwrap_or(0);
        let avg_score = if candidates.is_empty() {
            0.0
        } else {
            candidates.iter().map(|c| c.score).sum::<usize>() as f32 / candidates.len() as f32
        };

        self.history.best_score.push(self.belief.score);
        self.history.generation_best.push(generation_best);
        self.history.avg_score.push(avg_score);

        GenerationProgress {
            generation: self.generation,
            max_generations: self.config.max_generations,
            best_score: self.belief.score,
            generation_best,
            avg_score,
            total_squares: self.n * self.n,
        }
    }

    /// Run the search with a progress callback.
    pub fn run_with_callback<F>(
        &mut self,
        start_row: usize,
        start_col: usize,
        callback: F,
    ) -> TourResult
    where
        F: Fn(&GenerationProgress),
    {
        let start_time = Instant::now();
        let start = Square::new(start_row, start_col);
        let total_squares = self.n * self.n;

        self.belief = BeliefSpace::new();
        self.history = EvolutionHistory::default();
        self.generation = 0;

        let mut population = self.initial_population();

        let stop_reason = loop {
            if self.cancelled.load(Ordering::Relaxed) {
                break StopReason::Cancelled;
            }
            if self.generation >= self.config.max_generations {
                break StopReason::MaxGenerations;
            }
            self.generation += 1;

            let candidates = self.evaluate(population, start);
            for candidate in &candidates {
                if self.belief.observe(candidate) {
                    log::debug!(
                        "generation {}: belief space improved to {}/{}",
                        self.generation,
                        self.belief.score,
                        total_squares
                    );
                }
            }

            let progress = self.record(&candidates);
            log::trace!(
                "generation {}: best={} gen_best={} avg={:.2}",
                progress.generation,
                progress.best_score,
                progress.generation_best,
                progress.avg_score
            );
            callback(&progress);

            if self.belief.is_complete(total_squares) {
                break StopReason::TourFound;
            }

            let belief = self.belief.clone();
            population = self.reproduce(candidates, &belief);
        };

        self.stop_reason = Some(stop_reason);
        let elapsed = start_time.elapsed().as_secs_f64();

        if stop_reason == StopReason::TourFound {
            log::info!(
                "Cultural algorithm found a tour in generation {} ({elapsed:.4}s)",
                self.generation
            );
        } else {
            log::debug!(
                "cultural algorithm stopped ({stop_reason:?}) after {} generations at {}/{}",
                self.generation,
                self.belief.score,
                total_squares
            );
        }

        // A run that never evaluated a generation still stands on its start square.
        let path = if self.belief.path.is_empty() {
            vec![start]
        } else {
            self.belief.path.clone()
        };
        TourResult::new(Algorithm::Cultural, self.n, path, elapsed)
    }
}

impl TourSolver for CulturalSolver {
    fn board_size(&self) -> usize {
        self.n
    }

    fn run(&mut self, start_row: usize, start_col: usize) -> TourResult {
        self.run_with_callback(start_row, start_col, |_| {})
    }
}
