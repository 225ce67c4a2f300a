use crate::cipher::SubstitutionMapping;
use crate::config::Config;
use crate::consts::HYBRID_BUDGET_DIVISOR;
use crate::optimizer::{mutation, OptimizationMethod, Searcher};
use crate::scorer::FitnessScorer;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct OptimizationOptions {
    pub method: OptimizationMethod,
    pub climb_iterations: usize,
    pub anneal_iterations: usize,
    pub initial_temperature: f64,
    pub temperature_floor: f64,
    pub bigram_refinements: usize,
    pub seed: Option<u64>,
}

impl From<&Config> for OptimizationOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            method: cfg.search.method,
            climb_iterations: cfg.search.climb_iterations,
            anneal_iterations: cfg.search.anneal_iterations,
            initial_temperature: cfg.search.initial_temperature,
            temperature_floor: cfg.search.temperature_floor,
            bigram_refinements: cfg.search.bigram_refinements,
            seed: cfg.search.seed,
        }
    }
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    pub method: OptimizationMethod,
    pub mapping: SubstitutionMapping,
    pub score: f64,
    /// (iteration, score) at every strict improvement
    pub history: Vec<(usize, f64)>,
}

/// A trait for receiving updates during optimization.
/// Boolean return value indicates if the search should continue (true) or abort (false).
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, iteration: usize, best_score: f64, best: &SubstitutionMapping) -> bool;
}

pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_progress(&self, _: usize, _: f64, _: &SubstitutionMapping) -> bool {
        true
    }
}

/// Strategies run side by side by `OptimizationMethod::Ensemble`.
#[derive(Debug, Clone, Copy)]
enum Strategy {
    BigramOnly,
    Climb,
    Anneal,
}

const ENSEMBLE: [Strategy; 3] = [Strategy::BigramOnly, Strategy::Climb, Strategy::Anneal];

pub struct Optimizer<'a> {
    scorer: &'a FitnessScorer,
    options: OptimizationOptions,
}

impl<'a> Optimizer<'a> {
    pub fn new(scorer: &'a FitnessScorer, options: OptimizationOptions) -> Self {
        Self { scorer, options }
    }

    pub fn options(&self) -> &OptimizationOptions {
        &self.options
    }

    pub fn seed_mapping(&self, ciphertext: &str) -> SubstitutionMapping {
        mutation::seed_by_frequency(ciphertext, self.scorer.profile())
    }

    pub fn run<CB: ProgressCallback>(&self, ciphertext: &str, callback: &CB) -> OptimizationResult {
        let opts = &self.options;
        let seed = self.seed_mapping(ciphertext);

        let result = match opts.method {
            OptimizationMethod::Frequency => {
                let score = self.scorer.score(&seed.apply(ciphertext));
                OptimizationResult {
                    method: opts.method,
                    mapping: seed,
                    score,
                    history: vec![(0, score)],
                }
            }
            OptimizationMethod::HillClimbing => {
                let mut searcher = Searcher::new(self.scorer, ciphertext, seed, opts.seed);
                searcher.climb(opts.climb_iterations, callback);
                finish(opts.method, searcher)
            }
            OptimizationMethod::SimulatedAnnealing => {
                let mut searcher = Searcher::new(self.scorer, ciphertext, seed, opts.seed);
                searcher.anneal(
                    opts.anneal_iterations,
                    opts.initial_temperature,
                    opts.temperature_floor,
                    callback,
                );
                finish(opts.method, searcher)
            }
            OptimizationMethod::Hybrid => {
                let (refined, _) = mutation::refine_with_bigrams(
                    seed,
                    ciphertext,
                    self.scorer,
                    opts.bigram_refinements,
                );
                let mut searcher = Searcher::new(self.scorer, ciphertext, refined, opts.seed);
                searcher.climb(opts.climb_iterations / HYBRID_BUDGET_DIVISOR, callback);
                finish(opts.method, searcher)
            }
            OptimizationMethod::Ensemble => self.run_ensemble(ciphertext, seed, callback),
        };

        info!(
            "{} search finished: score {:.5}, {} improvements",
            result.method,
            result.score,
            result.history.len().saturating_sub(1)
        );
        result
    }

    /// Every strategy gets its own copy of the seed mapping and its own RNG
    /// (`seed + i`). Ties keep the earlier strategy.
    fn run_ensemble<CB: ProgressCallback>(
        &self,
        ciphertext: &str,
        seed: SubstitutionMapping,
        callback: &CB,
    ) -> OptimizationResult {
        let opts = &self.options;

        let results: Vec<OptimizationResult> = ENSEMBLE
            .par_iter()
            .enumerate()
            .map(|(i, strategy)| {
                let rng_seed = opts.seed.map(|s| s.wrapping_add(i as u64));
                let result = match strategy {
                    Strategy::BigramOnly => {
                        let (mapping, score) = mutation::refine_with_bigrams(
                            seed,
                            ciphertext,
                            self.scorer,
                            opts.bigram_refinements,
                        );
                        OptimizationResult {
                            method: OptimizationMethod::Frequency,
                            mapping,
                            score,
                            history: vec![(0, score)],
                        }
                    }
                    Strategy::Climb => {
                        let mut searcher = Searcher::new(self.scorer, ciphertext, seed, rng_seed);
                        searcher.climb(opts.climb_iterations, callback);
                        finish(OptimizationMethod::HillClimbing, searcher)
                    }
                    Strategy::Anneal => {
                        let mut searcher = Searcher::new(self.scorer, ciphertext, seed, rng_seed);
                        searcher.anneal(
                            opts.anneal_iterations,
                            opts.initial_temperature,
                            opts.temperature_floor,
                            callback,
                        );
                        finish(OptimizationMethod::SimulatedAnnealing, searcher)
                    }
                };
                debug!("Ensemble {:?} scored {:.5}", strategy, result.score);
                result
            })
            .collect();

        let mut best: Option<OptimizationResult> = None;
        for r in results {
            if best.as_ref().map_or(true, |b| r.score > b.score) {
                best = Some(r);
            }
        }

        let mut best = best.unwrap_or_else(|| OptimizationResult {
            method: OptimizationMethod::Frequency,
            mapping: seed,
            score: self.scorer.score(&seed.apply(ciphertext)),
            history: Vec::new(),
        });
        debug!("Ensemble winner: {}", best.method);
        best.method = OptimizationMethod::Ensemble;
        best
    }
}

fn finish(method: OptimizationMethod, searcher: Searcher<'_>) -> OptimizationResult {
    OptimizationResult {
        method,
        mapping: searcher.best_mapping,
        score: searcher.best_score,
        history: searcher.history,
    }
}
