/// Size of the fixed Latin alphabet every table is indexed by.
pub const ALPHABET_LEN: usize = 26;

/// Fitness weights shared by every solver.
pub const WEIGHT_UNIGRAM: f64 = 0.3;
pub const WEIGHT_BIGRAM: f64 = 0.3;
pub const WEIGHT_TRIGRAM: f64 = 0.2;
pub const WEIGHT_WORDS: f64 = 0.2;

/// Shortest whitespace token that counts towards the word fit.
pub const MIN_WORD_LEN: usize = 3;

/// Key-length evidence weights (Kasiski vs. column IC).
pub const WEIGHT_KASISKI: f64 = 0.6;
pub const WEIGHT_COINCIDENCE: f64 = 0.4;

/// Hard bounds a configured key-length range is clamped into.
pub const MIN_SUPPORTED_KEY_LENGTH: usize = 1;
pub const MAX_SUPPORTED_KEY_LENGTH: usize = 64;

/// Kasiski substring bounds.
pub const MIN_SUPPORTED_SUBSTRING: usize = 2;
pub const MAX_KASISKI_SUBSTRING: usize = 10;

/// Minimum share of alphabetic characters for a text to be analysed at all.
pub const MIN_ALPHA_RATIO: f64 = 0.5;

/// Caesar confidence: `(best - runner_up) * SCALE + OFFSET`, clamped to 0..=100.
pub const CAESAR_CONFIDENCE_SCALE: f64 = 10.0;
pub const CAESAR_CONFIDENCE_OFFSET: f64 = 50.0;

/// Fitness value treated as 100% confidence by the search-based solvers.
pub const FITNESS_NORMALIZATION: f64 = 1.0;

/// Hybrid mode runs hill-climbing with this fraction of the budget.
pub const HYBRID_BUDGET_DIVISOR: usize = 2;

/// Hill-climb budget used when generating alternative substitution solutions.
pub const ALTERNATIVE_CLIMB_ITERATIONS: usize = 500;
