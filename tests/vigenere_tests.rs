mod common;

use cipherforge::cipher::{vigenere, Key};
use cipherforge::config::Config;
use cipherforge::keylength;
use cipherforge::solvers::{SolveStatus, VigenereSolver};
use common::{english, ENGLISH_SAMPLE};
use rstest::rstest;

fn solver() -> VigenereSolver {
    VigenereSolver::new(english(), &Config::default())
}

#[test]
fn test_kasiski_ranks_true_length_near_top() {
    let ct = vigenere::encrypt(ENGLISH_SAMPLE, "LEMON");
    let report = solver().detect_key_lengths(&ct);

    let top: Vec<usize> = report.top(3).collect();
    assert!(
        top.iter().any(|&l| l % 5 == 0 || 5 % l == 0),
        "top lengths {:?} miss 5",
        top
    );
    assert!(report.repeated_substrings > 0);
    assert!(report.kasiski.values().all(|&s| (0.0..=1.0).contains(&s)));
    assert!(report.kasiski.values().any(|&s| s == 1.0));
}

#[test]
fn test_kasiski_examination_standalone() {
    let ct = vigenere::encrypt(ENGLISH_SAMPLE, "LEMON");
    let scores = keylength::kasiski_examination(&ct, &Config::default().keys);
    let best = scores
        .iter()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(l, _)| *l);
    assert_eq!(best, Some(5));
}

#[test]
fn test_column_ic_peaks_at_key_length() {
    let ct = vigenere::encrypt(ENGLISH_SAMPLE, "LEMON");
    let normalized = cipherforge::text::normalize(&ct);
    let ic = keylength::coincidence_by_length(&normalized, 2, 7);
    let at_five = ic[&5];
    for len in [2, 3, 4, 6, 7] {
        assert!(at_five > ic[&len], "IC at {} beats IC at 5", len);
    }
}

#[rstest]
#[case("LEMON")]
#[case("KEY")]
#[case("CIPHER")]
fn test_recover_key_with_known_length(#[case] key: &str) {
    let ct = vigenere::encrypt(ENGLISH_SAMPLE, key);
    assert_eq!(solver().recover_key(&ct, key.len()), key);
}

#[test]
fn test_full_solve_recovers_plaintext() {
    let ct = vigenere::encrypt(ENGLISH_SAMPLE, "LEMON");
    let result = solver().solve(&ct);

    assert_eq!(result.status, SolveStatus::Solved);
    assert_eq!(result.plaintext, ENGLISH_SAMPLE);
    match &result.key {
        Key::Keyword(k) => {
            assert_eq!(k.len() % 5, 0, "key {} is not a repeat of LEMON", k);
            assert!(k.starts_with("LEMON"));
        }
        other => panic!("unexpected key {:?}", other),
    }
    assert!(result.confidence > 0.0 && result.confidence <= 100.0);
}

#[test]
fn test_round_trip_preserves_text() {
    let ct = vigenere::encrypt(ENGLISH_SAMPLE, "lemon");
    assert_ne!(ct, ENGLISH_SAMPLE);
    assert_eq!(vigenere::decrypt(&ct, "LEMON"), ENGLISH_SAMPLE);
}

#[test]
fn test_no_candidates_means_no_result() {
    let result = solver().solve("AB");
    assert_eq!(result.status, SolveStatus::InsufficientEvidence);
    assert!(result.is_empty());
    assert_eq!(result.key, Key::None);
}

#[test]
fn test_invalid_input() {
    let result = solver().solve("!!!! 1234");
    assert_eq!(result.status, SolveStatus::InvalidInput);
    assert!(result.is_empty());
}

#[test]
fn test_alternatives_are_ranked() {
    let ct = vigenere::encrypt(ENGLISH_SAMPLE, "LEMON");
    let alternatives = solver().alternatives(&ct, 3);
    assert_eq!(alternatives.len(), 3);
    assert!(alternatives.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(alternatives[0].plaintext, ENGLISH_SAMPLE);
}

#[test]
fn test_inverted_range_is_corrected() {
    let mut config = Config::default();
    config.keys.min_key_length = 8;
    config.keys.max_key_length = 3;
    let config = config.validated();

    let ct = vigenere::encrypt(ENGLISH_SAMPLE, "LEMON");
    let report = VigenereSolver::new(english(), &config).detect_key_lengths(&ct);
    assert!(report.ranked.iter().all(|c| (3..=8).contains(&c.length)));
    assert_eq!(report.top(1).next(), Some(5));
}
