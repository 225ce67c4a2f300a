use crate::cipher::{CipherKind, Key, SubstitutionMapping};
use crate::config::Config;
use crate::consts::ALTERNATIVE_CLIMB_ITERATIONS;
use crate::language::LanguageProfile;
use crate::optimizer::{
    mutation, NoProgress, OptimizationMethod, OptimizationOptions, Optimizer, ProgressCallback,
    Searcher,
};
use crate::scorer::FitnessScorer;
use crate::solvers::{normalized_confidence, Candidate, SolveStatus, SolverResult};
use crate::text::{alpha_count, is_valid_input};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct SubstitutionSolver {
    scorer: FitnessScorer,
    options: OptimizationOptions,
    min_text_length: usize,
}

impl SubstitutionSolver {
    pub fn new(profile: Arc<LanguageProfile>, config: &Config) -> Self {
        Self {
            scorer: FitnessScorer::new(profile),
            options: OptimizationOptions::from(config),
            min_text_length: config.scoring.min_text_length,
        }
    }

    pub fn scorer(&self) -> &FitnessScorer {
        &self.scorer
    }

    pub fn method(&self) -> OptimizationMethod {
        self.options.method
    }

    pub fn score_mapping(&self, mapping: &SubstitutionMapping, text: &str) -> f64 {
        self.scorer.score(&mapping.apply(text))
    }

    pub fn solve(&self, text: &str) -> SolverResult {
        self.solve_with_progress(text, &NoProgress)
    }

    pub fn solve_with_progress<CB: ProgressCallback>(&self, text: &str, callback: &CB) -> SolverResult {
        let start = Instant::now();
        if !is_valid_input(text) {
            return SolverResult::empty(CipherKind::Substitution, SolveStatus::InvalidInput);
        }

        let optimizer = Optimizer::new(&self.scorer, self.options.clone());
        let result = optimizer.run(text, callback);

        let status = if alpha_count(text) < self.min_text_length {
            SolveStatus::InsufficientEvidence
        } else {
            SolveStatus::Solved
        };

        SolverResult {
            cipher: CipherKind::Substitution,
            status,
            plaintext: result.mapping.apply(text),
            key: Key::Mapping(result.mapping),
            score: result.score,
            confidence: normalized_confidence(result.score),
            elapsed: start.elapsed(),
            history: result.history,
        }
    }

    /// Frequency seed, bigram-refined seed and a short hill climb, best
    /// first, duplicates removed.
    pub fn alternatives(&self, text: &str, n: usize) -> Vec<Candidate> {
        if !is_valid_input(text) {
            return Vec::new();
        }

        let seed = mutation::seed_by_frequency(text, self.scorer.profile());
        let (refined, _) =
            mutation::refine_with_bigrams(seed, text, &self.scorer, self.options.bigram_refinements);

        let mut searcher = Searcher::new(&self.scorer, text, seed, self.options.seed);
        searcher.climb(ALTERNATIVE_CLIMB_ITERATIONS, &NoProgress);

        let mut out: Vec<Candidate> = Vec::new();
        for mapping in [seed, refined, searcher.best_mapping] {
            let key = Key::Mapping(mapping);
            if out.iter().any(|c| c.key == key) {
                continue;
            }
            out.push(Candidate {
                plaintext: mapping.apply(text),
                score: self.score_mapping(&mapping, text),
                key,
            });
        }

        out.sort_by(|a, b| b.score.total_cmp(&a.score));
        out.truncate(n);
        out
    }
}
