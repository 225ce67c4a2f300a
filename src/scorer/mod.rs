pub mod types;

pub use self::types::ScoreDetails;
use crate::consts::{MIN_WORD_LEN, WEIGHT_BIGRAM, WEIGHT_TRIGRAM, WEIGHT_UNIGRAM, WEIGHT_WORDS};
use crate::language::{LanguageProfile, NGramTable};
use crate::stats::englishness;
use crate::text::normalize;
use std::sync::Arc;

/// Scores candidate plaintexts of the same ciphertext against one language.
///
/// `fitness = 0.3·unigram + 0.3·bigram + 0.2·trigram + 0.2·words`
#[derive(Debug, Clone)]
pub struct FitnessScorer {
    profile: Arc<LanguageProfile>,
}

impl FitnessScorer {
    pub fn new(profile: Arc<LanguageProfile>) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// Hot path used by every search loop.
    pub fn score(&self, text: &str) -> f64 {
        let normalized = normalize(text);
        let (found, checked) = self.word_hits(text);
        combine(
            englishness(&normalized, &self.profile.letters),
            ngram_fit(&normalized, &self.profile.bigrams),
            ngram_fit(&normalized, &self.profile.trigrams),
            ratio(found, checked),
        )
    }

    pub fn score_details(&self, text: &str) -> ScoreDetails {
        let normalized = normalize(text);
        let (found, checked) = self.word_hits(text);

        let unigram_fit = englishness(&normalized, &self.profile.letters);
        let bigram_fit = ngram_fit(&normalized, &self.profile.bigrams);
        let trigram_fit = ngram_fit(&normalized, &self.profile.trigrams);
        let word_fit = ratio(found, checked);

        ScoreDetails {
            fitness: combine(unigram_fit, bigram_fit, trigram_fit, word_fit),
            unigram_fit,
            bigram_fit,
            trigram_fit,
            word_fit,
            letters: normalized.len(),
            words_checked: checked,
            words_found: found,
        }
    }

    pub fn unigram_fit(&self, text: &str) -> f64 {
        englishness(text, &self.profile.letters)
    }

    pub fn bigram_fit(&self, text: &str) -> f64 {
        ngram_fit(&normalize(text), &self.profile.bigrams)
    }

    pub fn trigram_fit(&self, text: &str) -> f64 {
        ngram_fit(&normalize(text), &self.profile.trigrams)
    }

    /// Share of whitespace tokens (3+ letters after normalising) that are
    /// common words of the language.
    pub fn word_fit(&self, text: &str) -> f64 {
        let (found, checked) = self.word_hits(text);
        ratio(found, checked)
    }

    fn word_hits(&self, text: &str) -> (usize, usize) {
        let mut found = 0;
        let mut checked = 0;
        for token in text.split_whitespace() {
            let word = normalize(token);
            if word.len() >= MIN_WORD_LEN {
                checked += 1;
                if self.profile.common_words.contains(&word) {
                    found += 1;
                }
            }
        }
        (found, checked)
    }
}

#[inline(always)]
fn combine(unigram: f64, bigram: f64, trigram: f64, words: f64) -> f64 {
    WEIGHT_UNIGRAM * unigram + WEIGHT_BIGRAM * bigram + WEIGHT_TRIGRAM * trigram + WEIGHT_WORDS * words
}

#[inline(always)]
fn ratio(found: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        found as f64 / total as f64
    }
}

/// Mean reference frequency over every window of the (already normalised) text.
fn ngram_fit(normalized: &str, table: &NGramTable) -> f64 {
    let n = table.n();
    if n == 0 || normalized.len() < n {
        return 0.0;
    }
    let bytes = normalized.as_bytes();
    let mut sum = 0.0;
    let mut windows = 0usize;
    for i in 0..=(bytes.len() - n) {
        // normalised text is ASCII, so byte windows are valid str slices
        sum += table.get(&normalized[i..i + n]);
        windows += 1;
    }
    sum / windows as f64
}
