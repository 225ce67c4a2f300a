use crate::cipher::{vigenere, CipherKind, Key};
use crate::config::{Config, KeyLengthParams};
use crate::keylength::{self, KeyLengthReport};
use crate::language::LanguageProfile;
use crate::scorer::FitnessScorer;
use crate::solvers::{normalized_confidence, CaesarSolver, Candidate, SolveStatus, SolverResult};
use crate::text::{is_valid_input, normalize, split_by_key_position};
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Columns are short, so they are scored whenever they hold a couple of letters.
const COLUMN_MIN_LETTERS: usize = 2;

#[derive(Debug, Clone)]
pub struct VigenereSolver {
    scorer: FitnessScorer,
    columns: CaesarSolver,
    keys: KeyLengthParams,
}

impl VigenereSolver {
    pub fn new(profile: Arc<LanguageProfile>, config: &Config) -> Self {
        Self {
            scorer: FitnessScorer::new(profile.clone()),
            columns: CaesarSolver::with_min_text_length(profile, COLUMN_MIN_LETTERS),
            keys: config.keys.clone(),
        }
    }

    pub fn scorer(&self) -> &FitnessScorer {
        &self.scorer
    }

    pub fn detect_key_lengths(&self, text: &str) -> KeyLengthReport {
        keylength::analyze(text, &self.keys)
    }

    /// Solves each of the `length` columns as a Caesar cipher; the winning
    /// shift of column i is key letter i.
    pub fn recover_key(&self, text: &str, length: usize) -> String {
        split_by_key_position(&normalize(text), length)
            .iter()
            .map(|column| vigenere::shift_to_char(self.columns.best_shift(column).0))
            .collect()
    }

    pub fn solve(&self, text: &str) -> SolverResult {
        let start = Instant::now();
        if !is_valid_input(text) {
            return SolverResult::empty(CipherKind::Vigenere, SolveStatus::InvalidInput);
        }

        let report = self.detect_key_lengths(text);
        let lengths: Vec<usize> = report.top(self.keys.key_candidates).collect();
        if lengths.is_empty() {
            info!("No key length candidates, giving up");
            return SolverResult {
                elapsed: start.elapsed(),
                ..SolverResult::empty(CipherKind::Vigenere, SolveStatus::InsufficientEvidence)
            };
        }

        let candidates = self.evaluate_lengths(text, &lengths);

        // first-ranked length wins ties
        let mut best: Option<Candidate> = None;
        for c in candidates {
            if best.as_ref().map_or(true, |b| c.score > b.score) {
                best = Some(c);
            }
        }

        match best {
            Some(best) => SolverResult {
                cipher: CipherKind::Vigenere,
                status: SolveStatus::Solved,
                confidence: normalized_confidence(best.score),
                plaintext: best.plaintext,
                key: best.key,
                score: best.score,
                elapsed: start.elapsed(),
                history: Vec::new(),
            },
            None => SolverResult::empty(CipherKind::Vigenere, SolveStatus::InsufficientEvidence),
        }
    }

    /// One candidate per top-ranked key length, best first.
    pub fn alternatives(&self, text: &str, n: usize) -> Vec<Candidate> {
        if !is_valid_input(text) {
            return Vec::new();
        }
        let lengths: Vec<usize> = self
            .detect_key_lengths(text)
            .top(self.keys.key_candidates.max(n))
            .collect();

        let mut out = self.evaluate_lengths(text, &lengths);
        out.sort_by(|a, b| b.score.total_cmp(&a.score));
        out.truncate(n);
        out
    }

    /// Key recovery, decryption and scoring per length, in input order.
    fn evaluate_lengths(&self, text: &str, lengths: &[usize]) -> Vec<Candidate> {
        lengths
            .par_iter()
            .map(|&length| {
                let key = self.recover_key(text, length);
                let plaintext = vigenere::decrypt(text, &key);
                let score = self.scorer.score(&plaintext);
                debug!("Key length {}: key {} score {:.5}", length, key, score);
                Candidate {
                    plaintext,
                    key: Key::Keyword(key),
                    score,
                }
            })
            .collect()
    }
}
