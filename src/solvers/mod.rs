pub mod caesar;
pub mod substitution;
pub mod vigenere;

pub use self::caesar::CaesarSolver;
pub use self::substitution::SubstitutionSolver;
pub use self::vigenere::VigenereSolver;
use crate::cipher::{CipherKind, Key};
use crate::config::Config;
use crate::consts::FITNESS_NORMALIZATION;
use crate::language::LanguageProfile;
use crate::optimizer::ProgressCallback;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use strum_macros::Display;

/// Why a result looks the way it does. Failing to break a cipher is a
/// status, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Solved,
    /// Empty text, or fewer than half of the characters are letters
    InvalidInput,
    /// Too little text for the statistics to mean anything
    InsufficientEvidence,
}

#[derive(Debug, Clone, Serialize)]
pub struct SolverResult {
    pub cipher: CipherKind,
    pub status: SolveStatus,
    pub plaintext: String,
    pub key: Key,
    /// Raw fitness of the plaintext
    pub score: f64,
    /// Relative ranking signal in [0, 100], not a probability
    pub confidence: f64,
    pub elapsed: Duration,
    /// Substitution only: (iteration, score) at every improvement
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<(usize, f64)>,
}

impl SolverResult {
    pub fn empty(cipher: CipherKind, status: SolveStatus) -> Self {
        Self {
            cipher,
            status,
            plaintext: String::new(),
            key: Key::None,
            score: 0.0,
            confidence: 0.0,
            elapsed: Duration::ZERO,
            history: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.plaintext.is_empty()
    }
}

/// One ranked alternative decryption.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub plaintext: String,
    pub key: Key,
    pub score: f64,
}

/// Fitness scaled to [0, 100].
pub(crate) fn normalized_confidence(score: f64) -> f64 {
    (score / FITNESS_NORMALIZATION * 100.0).clamp(0.0, 100.0)
}

/// Closed set of breakers, dispatched by match.
#[derive(Debug, Clone)]
pub enum Breaker {
    Caesar(CaesarSolver),
    Substitution(SubstitutionSolver),
    Vigenere(VigenereSolver),
}

impl Breaker {
    pub fn new(kind: CipherKind, profile: Arc<LanguageProfile>, config: &Config) -> Self {
        match kind {
            CipherKind::Caesar => Breaker::Caesar(CaesarSolver::new(profile, config)),
            CipherKind::Substitution => {
                Breaker::Substitution(SubstitutionSolver::new(profile, config))
            }
            CipherKind::Vigenere => Breaker::Vigenere(VigenereSolver::new(profile, config)),
        }
    }

    pub fn kind(&self) -> CipherKind {
        match self {
            Breaker::Caesar(_) => CipherKind::Caesar,
            Breaker::Substitution(_) => CipherKind::Substitution,
            Breaker::Vigenere(_) => CipherKind::Vigenere,
        }
    }

    pub fn solve(&self, text: &str) -> SolverResult {
        match self {
            Breaker::Caesar(s) => s.solve(text),
            Breaker::Substitution(s) => s.solve(text),
            Breaker::Vigenere(s) => s.solve(text),
        }
    }

    /// Only the substitution search reports progress.
    pub fn solve_with_progress<CB: ProgressCallback>(&self, text: &str, callback: &CB) -> SolverResult {
        match self {
            Breaker::Substitution(s) => s.solve_with_progress(text, callback),
            _ => self.solve(text),
        }
    }

    pub fn alternatives(&self, text: &str, n: usize) -> Vec<Candidate> {
        match self {
            Breaker::Caesar(s) => s.alternatives(text, n),
            Breaker::Substitution(s) => s.alternatives(text, n),
            Breaker::Vigenere(s) => s.alternatives(text, n),
        }
    }

    /// Fitness of `text` as read by this breaker's language.
    pub fn score(&self, text: &str) -> f64 {
        let scorer = match self {
            Breaker::Caesar(s) => s.scorer(),
            Breaker::Substitution(s) => s.scorer(),
            Breaker::Vigenere(s) => s.scorer(),
        };
        scorer.score(text)
    }
}
