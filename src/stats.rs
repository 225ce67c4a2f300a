//! Pure letter statistics over text. Nothing here holds state.

use crate::consts::ALPHABET_LEN;
use crate::text::{index_to_letter, letter_index, normalize};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Percentage of occurrences per letter A..Z. Always covers all 26 letters;
/// absent letters hold 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable([f64; ALPHABET_LEN]);

impl Default for FrequencyTable {
    fn default() -> Self {
        Self([0.0; ALPHABET_LEN])
    }
}

impl FrequencyTable {
    pub fn from_percentages(values: [f64; ALPHABET_LEN]) -> Self {
        Self(values)
    }

    #[inline(always)]
    pub fn get(&self, idx: usize) -> f64 {
        self.0[idx]
    }

    pub fn letter(&self, c: char) -> f64 {
        letter_index(c).map(|i| self.0[i]).unwrap_or(0.0)
    }

    pub fn set(&mut self, idx: usize, value: f64) {
        self.0[idx] = value;
    }

    pub fn values(&self) -> &[f64; ALPHABET_LEN] {
        &self.0
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&v| v == 0.0)
    }

    /// Letters by descending percentage. Ties keep alphabetical order.
    pub fn ranked(&self) -> Vec<(char, f64)> {
        let mut out: Vec<(char, f64)> = self
            .0
            .iter()
            .enumerate()
            .map(|(i, &v)| (index_to_letter(i), v))
            .collect();
        out.sort_by(|a, b| b.1.total_cmp(&a.1));
        out
    }

    /// Σ p² over the distribution, i.e. the IC a text following it would show.
    pub fn expected_ic(&self) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            return 0.0;
        }
        self.0.iter().map(|&v| (v / total) * (v / total)).sum()
    }
}

/// Raw letter counts and the number of letters seen.
pub fn letter_counts(text: &str) -> ([usize; ALPHABET_LEN], usize) {
    let mut counts = [0usize; ALPHABET_LEN];
    let mut total = 0;
    for c in text.chars() {
        if let Some(i) = letter_index(c) {
            counts[i] += 1;
            total += 1;
        }
    }
    (counts, total)
}

/// Case-insensitive letter percentages. Text without letters yields all zeros.
pub fn frequency(text: &str) -> FrequencyTable {
    let (counts, total) = letter_counts(text);
    let mut table = FrequencyTable::default();
    if total == 0 {
        return table;
    }
    for (i, &n) in counts.iter().enumerate() {
        table.set(i, n as f64 / total as f64 * 100.0);
    }
    table
}

/// Σ (observed − expected)² / expected. Letters with zero expectation are skipped.
pub fn chi_squared(observed: &FrequencyTable, expected: &FrequencyTable) -> f64 {
    let mut chi = 0.0;
    for i in 0..ALPHABET_LEN {
        let exp = expected.get(i);
        if exp > 0.0 {
            let diff = observed.get(i) - exp;
            chi += diff * diff / exp;
        }
    }
    chi
}

/// Σ nᵢ(nᵢ−1) / N(N−1). Zero for fewer than two letters.
pub fn index_of_coincidence(text: &str) -> f64 {
    let (counts, total) = letter_counts(text);
    if total <= 1 {
        return 0.0;
    }
    let pairs: usize = counts.iter().map(|&n| n * n.saturating_sub(1)).sum();
    pairs as f64 / (total * (total - 1)) as f64
}

/// 1 / (1 + χ²) against the reference distribution. Range (0, 1].
pub fn englishness(text: &str, reference: &FrequencyTable) -> f64 {
    1.0 / (1.0 + chi_squared(&frequency(text), reference))
}

/// Top `k` n-grams of the normalised text as (ngram, % of windows),
/// most frequent first. Ties are broken alphabetically.
pub fn common_ngrams(text: &str, n: usize, k: usize) -> Vec<(String, f64)> {
    let normalized = normalize(text);
    let bytes = normalized.as_bytes();
    if n == 0 || bytes.len() < n {
        return Vec::new();
    }

    let mut counts: BTreeMap<&[u8], usize> = BTreeMap::new();
    for window in bytes.windows(n) {
        *counts.entry(window).or_insert(0) += 1;
    }

    let windows = (bytes.len() - n + 1) as f64;
    let mut ranked: Vec<(String, f64)> = counts
        .into_iter()
        .map(|(gram, count)| {
            (
                String::from_utf8_lossy(gram).into_owned(),
                count as f64 / windows * 100.0,
            )
        })
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_percentages() {
        let f = frequency("AABBC");
        assert!((f.letter('A') - 40.0).abs() < 1e-9);
        assert!((f.letter('b') - 40.0).abs() < 1e-9);
        assert!((f.letter('C') - 20.0).abs() < 1e-9);
        assert_eq!(f.letter('Z'), 0.0);
        assert!((f.total() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_text_is_all_zero() {
        let f = frequency("1234 !!");
        assert!(f.is_empty());
        assert_eq!(index_of_coincidence(""), 0.0);
        assert_eq!(index_of_coincidence("a"), 0.0);
    }

    #[test]
    fn ngram_windows() {
        let top = common_ngrams("THETHETHEHE", 2, 3);
        assert_eq!(top[0].0, "HE");
        assert!(common_ngrams("AB", 3, 5).is_empty());
    }
}
