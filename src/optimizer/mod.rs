pub mod mutation;
pub mod runner;

pub use self::runner::{
    NoProgress, OptimizationOptions, OptimizationResult, Optimizer, ProgressCallback,
};
use crate::cipher::SubstitutionMapping;
use crate::scorer::FitnessScorer;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Iterations between progress callbacks.
const REPORT_INTERVAL: usize = 100;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum OptimizationMethod {
    /// Frequency seed only
    Frequency,
    HillClimbing,
    SimulatedAnnealing,
    /// Seed, bigram refinement, then a half-budget hill climb
    Hybrid,
    /// Bigram-only, hill climbing and annealing in parallel; best wins
    Ensemble,
}

/// One local search over a private copy of the mapping.
///
/// Neighbours are built on a copy and only committed when accepted, so a
/// searcher never shares mutable state with another.
pub struct Searcher<'a> {
    scorer: &'a FitnessScorer,
    ciphertext: &'a str,

    pub mapping: SubstitutionMapping,
    pub score: f64,
    pub best_mapping: SubstitutionMapping,
    pub best_score: f64,
    pub history: Vec<(usize, f64)>,

    pub rng: fastrand::Rng,
}

impl<'a> Searcher<'a> {
    pub fn new(
        scorer: &'a FitnessScorer,
        ciphertext: &'a str,
        start: SubstitutionMapping,
        seed: Option<u64>,
    ) -> Self {
        let rng = if let Some(s) = seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };

        let score = scorer.score(&start.apply(ciphertext));
        Self {
            scorer,
            ciphertext,
            mapping: start,
            score,
            best_mapping: start,
            best_score: score,
            history: vec![(0, score)],
            rng,
        }
    }

    #[inline(always)]
    pub fn evaluate(&self, mapping: &SubstitutionMapping) -> f64 {
        self.scorer.score(&mapping.apply(self.ciphertext))
    }

    /// Accepts a neighbour only when it strictly improves the score.
    /// Returns false if the callback asked to stop.
    pub fn climb<CB: ProgressCallback + ?Sized>(&mut self, iterations: usize, callback: &CB) -> bool {
        for it in 1..=iterations {
            let (a, b) = mutation::random_pair(&mut self.rng);
            let mut neighbor = self.mapping;
            neighbor.swap(a, b);

            let candidate = self.evaluate(&neighbor);
            if candidate > self.score {
                self.mapping = neighbor;
                self.score = candidate;
                self.commit_best(it);
            }

            if it % REPORT_INTERVAL == 0
                && !callback.on_progress(it, self.best_score, &self.best_mapping)
            {
                return false;
            }
        }
        true
    }

    /// Metropolis acceptance with geometric cooling from `initial` to `floor`.
    /// Returns false if the callback asked to stop.
    pub fn anneal<CB: ProgressCallback + ?Sized>(
        &mut self,
        iterations: usize,
        initial: f64,
        floor: f64,
        callback: &CB,
    ) -> bool {
        if iterations == 0 {
            return true;
        }
        let cooling = (floor / initial).powf(1.0 / iterations as f64);
        let mut temperature = initial;

        for it in 1..=iterations {
            let (a, b) = mutation::random_pair(&mut self.rng);
            let mut neighbor = self.mapping;
            neighbor.swap(a, b);

            let candidate = self.evaluate(&neighbor);
            let delta = candidate - self.score;

            if delta >= 0.0 || self.rng.f64() < (delta / temperature).exp() {
                self.mapping = neighbor;
                self.score = candidate;
                if self.score > self.best_score {
                    self.commit_best(it);
                }
            }

            temperature *= cooling;

            if it % REPORT_INTERVAL == 0
                && !callback.on_progress(it, self.best_score, &self.best_mapping)
            {
                return false;
            }
        }
        true
    }

    #[inline(always)]
    fn commit_best(&mut self, iteration: usize) {
        self.best_mapping = self.mapping;
        self.best_score = self.score;
        self.history.push((iteration, self.score));
    }
}
