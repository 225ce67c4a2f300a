use crate::cipher::SubstitutionMapping;
use crate::consts::ALPHABET_LEN;
use crate::language::LanguageProfile;
use crate::scorer::FitnessScorer;
use crate::stats::{common_ngrams, frequency};
use crate::text::letter_index;
use tracing::debug;

/// Pairs cipher letters with reference letters by frequency rank.
///
/// Only letters present in the ciphertext are paired; the rest are filled in
/// alphabetically.
pub fn seed_by_frequency(ciphertext: &str, profile: &LanguageProfile) -> SubstitutionMapping {
    let observed = frequency(ciphertext);
    let plain_ranked = profile.letters.ranked();

    let pairs: Vec<(usize, usize)> = observed
        .ranked()
        .into_iter()
        .take_while(|&(_, pct)| pct > 0.0)
        .zip(plain_ranked)
        .filter_map(|((c, _), (p, _))| Some((letter_index(c)?, letter_index(p)?)))
        .collect();

    SubstitutionMapping::from_partial(&pairs)
}

/// Two distinct cipher letter indices.
#[inline(always)]
pub fn random_pair(rng: &mut fastrand::Rng) -> (usize, usize) {
    let a = rng.usize(0..ALPHABET_LEN);
    let mut b = rng.usize(0..ALPHABET_LEN - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}

/// Greedy rank-matched bigram pass.
///
/// The i-th most common ciphertext bigram is sent to the i-th most common
/// reference bigram. Each remap is kept only if the score does not drop.
pub fn refine_with_bigrams(
    start: SubstitutionMapping,
    ciphertext: &str,
    scorer: &FitnessScorer,
    top: usize,
) -> (SubstitutionMapping, f64) {
    let mut mapping = start;
    let mut score = scorer.score(&mapping.apply(ciphertext));

    let cipher_bigrams = common_ngrams(ciphertext, 2, top);
    let reference: Vec<&str> = scorer.profile().bigrams.top(top).collect();

    for ((cipher, _), plain) in cipher_bigrams.iter().zip(reference) {
        let (Some((c0, c1)), Some((p0, p1))) = (letter_pair(cipher), letter_pair(plain)) else {
            continue;
        };
        // "XX" cannot become "TH" and vice versa
        if (c0 == c1) != (p0 == p1) {
            continue;
        }

        let mut candidate = mapping;
        candidate.assign(c0, p0);
        candidate.assign(c1, p1);
        if candidate == mapping {
            continue;
        }

        let candidate_score = scorer.score(&candidate.apply(ciphertext));
        if candidate_score >= score {
            debug!(
                "Bigram {} -> {} accepted ({:.5} -> {:.5})",
                cipher, plain, score, candidate_score
            );
            mapping = candidate;
            score = candidate_score;
        }
    }

    (mapping, score)
}

fn letter_pair(gram: &str) -> Option<(usize, usize)> {
    let mut chars = gram.chars();
    let a = letter_index(chars.next()?)?;
    let b = letter_index(chars.next()?)?;
    Some((a, b))
}
