//! Vigenère key-length estimation: Kasiski examination plus the average
//! per-column index of coincidence, blended into one ranking.

use crate::config::KeyLengthParams;
use crate::consts::{WEIGHT_COINCIDENCE, WEIGHT_KASISKI};
use crate::stats::index_of_coincidence;
use crate::text::{normalize, split_by_key_position};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyLengthCandidate {
    pub length: usize,
    pub kasiski: f64,
    pub coincidence: f64,
    pub combined: f64,
}

/// Diagnostic breakdown of the key-length search.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KeyLengthReport {
    /// Normalised factor counts, by length
    pub kasiski: BTreeMap<usize, f64>,
    /// Average column IC, by length
    pub coincidence: BTreeMap<usize, f64>,
    /// Best first
    pub ranked: Vec<KeyLengthCandidate>,
    pub repeated_substrings: usize,
}

impl KeyLengthReport {
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn top(&self, n: usize) -> impl Iterator<Item = usize> + '_ {
        self.ranked.iter().take(n).map(|c| c.length)
    }
}

/// Runs both estimators over `text` and ranks every length either of them
/// has evidence for.
pub fn analyze(text: &str, params: &KeyLengthParams) -> KeyLengthReport {
    let normalized = normalize(text);

    let (repeated_substrings, distances) = repeat_distances(&normalized, params);
    let kasiski = kasiski_scores(&distances, params.min_key_length, params.max_key_length);
    let coincidence =
        coincidence_by_length(&normalized, params.min_key_length, params.max_key_length);
    let ranked = rank_key_lengths(&kasiski, &coincidence);

    debug!(
        "Key length analysis: {} repeats, {} distances, {} candidates",
        repeated_substrings,
        distances.len(),
        ranked.len()
    );

    KeyLengthReport {
        kasiski,
        coincidence,
        ranked,
        repeated_substrings,
    }
}

/// Substrings of length `len` occurring at least twice, with every start
/// position in ascending order.
pub fn find_repeated_substrings(normalized: &str, len: usize) -> BTreeMap<String, Vec<usize>> {
    let bytes = normalized.as_bytes();
    if len == 0 || bytes.len() < len {
        return BTreeMap::new();
    }

    let mut positions: BTreeMap<&[u8], Vec<usize>> = BTreeMap::new();
    for (i, window) in bytes.windows(len).enumerate() {
        positions.entry(window).or_default().push(i);
    }

    positions
        .into_iter()
        .filter(|(_, p)| p.len() > 1)
        .map(|(gram, p)| (String::from_utf8_lossy(gram).into_owned(), p))
        .collect()
}

/// Counts, for each length in `[min, max]`, the distances it divides, then
/// scales by the largest count. Distances shorter than `min` are ignored.
/// Lengths that divide nothing are left out.
pub fn kasiski_scores(distances: &[usize], min: usize, max: usize) -> BTreeMap<usize, f64> {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for &d in distances.iter().filter(|&&d| d >= min) {
        for factor in min..=max.min(d) {
            if factor > 0 && d % factor == 0 {
                *counts.entry(factor).or_insert(0) += 1;
            }
        }
    }

    let peak = counts.values().copied().max().unwrap_or(0);
    if peak == 0 {
        return BTreeMap::new();
    }
    counts
        .into_iter()
        .map(|(len, n)| (len, n as f64 / peak as f64))
        .collect()
}

/// Kasiski scores straight from text, over the configured substring range.
pub fn kasiski_examination(text: &str, params: &KeyLengthParams) -> BTreeMap<usize, f64> {
    let (_, distances) = repeat_distances(&normalize(text), params);
    kasiski_scores(&distances, params.min_key_length, params.max_key_length)
}

/// Distances from the first occurrence of every repeated substring, and how
/// many distinct repeated substrings were seen.
fn repeat_distances(normalized: &str, params: &KeyLengthParams) -> (usize, Vec<usize>) {
    let mut repeats = 0;
    let mut distances = Vec::new();
    for len in params.min_substring..=params.max_substring {
        for positions in find_repeated_substrings(normalized, len).values() {
            repeats += 1;
            let first = positions[0];
            distances.extend(positions[1..].iter().map(|&p| p - first));
        }
    }
    (repeats, distances)
}

/// Mean IC of the columns with at least two letters. A length is skipped
/// when none of its columns qualify.
pub fn coincidence_by_length(normalized: &str, min: usize, max: usize) -> BTreeMap<usize, f64> {
    let mut out = BTreeMap::new();
    for len in min.max(1)..=max {
        let columns = split_by_key_position(normalized, len);
        let usable: Vec<f64> = columns
            .iter()
            .filter(|c| c.len() >= 2)
            .map(|c| index_of_coincidence(c))
            .collect();
        if !usable.is_empty() {
            out.insert(len, usable.iter().sum::<f64>() / usable.len() as f64);
        }
    }
    out
}

/// `0.6·kasiski + 0.4·ic`, best first. Equal scores keep the shorter length first.
pub fn rank_key_lengths(
    kasiski: &BTreeMap<usize, f64>,
    coincidence: &BTreeMap<usize, f64>,
) -> Vec<KeyLengthCandidate> {
    let lengths: BTreeSet<usize> = kasiski.keys().chain(coincidence.keys()).copied().collect();

    let mut ranked: Vec<KeyLengthCandidate> = lengths
        .into_iter()
        .map(|length| {
            let k = kasiski.get(&length).copied().unwrap_or(0.0);
            let ic = coincidence.get(&length).copied().unwrap_or(0.0);
            KeyLengthCandidate {
                length,
                kasiski: k,
                coincidence: ic,
                combined: WEIGHT_KASISKI * k + WEIGHT_COINCIDENCE * ic,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.combined.total_cmp(&a.combined));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_and_positions() {
        let reps = find_repeated_substrings("ABCXXABCYYABC", 3);
        assert_eq!(reps.get("ABC"), Some(&vec![0, 5, 10]));
        assert!(!reps.contains_key("XXA"));
    }

    #[test]
    fn factor_counts_are_normalised() {
        // 6 -> 2,3,6 ; 12 -> 2,3,4,6 ; 1 is ignored
        let scores = kasiski_scores(&[6, 12, 1], 2, 6);
        assert_eq!(scores.get(&2), Some(&1.0));
        assert_eq!(scores.get(&4), Some(&0.5));
        assert_eq!(scores.get(&5), None);
    }

    #[test]
    fn short_text_has_no_candidates() {
        let params = KeyLengthParams::default();
        let report = analyze("AB", &params);
        assert!(report.is_empty());
    }
}
