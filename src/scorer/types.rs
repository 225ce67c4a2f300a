use serde::Serialize;

/// Breakdown of one fitness evaluation, for diagnostics and reports.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct ScoreDetails {
    // Weighted total
    pub fitness: f64,

    // Normalised sub-scores (unweighted)
    pub unigram_fit: f64,
    pub bigram_fit: f64,
    pub trigram_fit: f64,
    pub word_fit: f64,

    // Raw counters
    pub letters: usize,
    pub words_checked: usize,
    pub words_found: usize,
}
