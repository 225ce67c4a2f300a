use crate::cipher::{caesar, CipherKind, Key};
use crate::config::Config;
use crate::consts::{ALPHABET_LEN, CAESAR_CONFIDENCE_OFFSET, CAESAR_CONFIDENCE_SCALE};
use crate::language::LanguageProfile;
use crate::scorer::FitnessScorer;
use crate::solvers::{Candidate, SolveStatus, SolverResult};
use crate::text::{alpha_count, is_valid_input};
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Exhaustive search over the 26 shifts.
#[derive(Debug, Clone)]
pub struct CaesarSolver {
    scorer: FitnessScorer,
    min_text_length: usize,
}

impl CaesarSolver {
    pub fn new(profile: Arc<LanguageProfile>, config: &Config) -> Self {
        Self::with_min_text_length(profile, config.scoring.min_text_length)
    }

    pub fn with_min_text_length(profile: Arc<LanguageProfile>, min_text_length: usize) -> Self {
        Self {
            scorer: FitnessScorer::new(profile),
            min_text_length,
        }
    }

    pub fn scorer(&self) -> &FitnessScorer {
        &self.scorer
    }

    /// Every shift with the fitness of its decryption, best first.
    /// Texts with fewer letters than the minimum score 0 across the board.
    pub fn rank_shifts(&self, text: &str) -> Vec<(usize, f64)> {
        if alpha_count(text) < self.min_text_length {
            return (0..ALPHABET_LEN).map(|s| (s, 0.0)).collect();
        }

        let mut ranked: Vec<(usize, f64)> = (0..ALPHABET_LEN)
            .into_par_iter()
            .map(|s| (s, self.scorer.score(&caesar::decrypt(text, s))))
            .collect();

        // stable: equal scores keep the lower shift first
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Winning shift and its score.
    pub fn best_shift(&self, text: &str) -> (usize, f64) {
        self.rank_shifts(text).first().copied().unwrap_or((0, 0.0))
    }

    pub fn solve(&self, text: &str) -> SolverResult {
        let start = Instant::now();
        if !is_valid_input(text) {
            return SolverResult::empty(CipherKind::Caesar, SolveStatus::InvalidInput);
        }

        let ranked = self.rank_shifts(text);
        let (shift, best) = ranked[0];
        let confidence = match ranked.get(1) {
            _ if best <= 0.0 => 0.0,
            Some(&(_, second)) => {
                ((best - second) * CAESAR_CONFIDENCE_SCALE + CAESAR_CONFIDENCE_OFFSET)
                    .clamp(0.0, 100.0)
            }
            None => 0.0,
        };

        let status = if alpha_count(text) < self.min_text_length {
            SolveStatus::InsufficientEvidence
        } else {
            SolveStatus::Solved
        };

        debug!(
            "Caesar: shift {} score {:.5} confidence {:.1}",
            shift, best, confidence
        );

        SolverResult {
            cipher: CipherKind::Caesar,
            status,
            plaintext: caesar::decrypt(text, shift),
            key: Key::Shift(shift as u8),
            score: best,
            confidence,
            elapsed: start.elapsed(),
            history: Vec::new(),
        }
    }

    pub fn alternatives(&self, text: &str, n: usize) -> Vec<Candidate> {
        if !is_valid_input(text) {
            return Vec::new();
        }
        self.rank_shifts(text)
            .into_iter()
            .take(n)
            .map(|(shift, score)| Candidate {
                plaintext: caesar::decrypt(text, shift),
                key: Key::Shift(shift as u8),
                score,
            })
            .collect()
    }
}
