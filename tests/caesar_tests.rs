mod common;

use cipherforge::cipher::{caesar, Key};
use cipherforge::config::Config;
use cipherforge::solvers::{CaesarSolver, SolveStatus};
use common::{english, ENGLISH_SAMPLE, PANGRAM};
use rstest::rstest;

fn solver() -> CaesarSolver {
    CaesarSolver::new(english(), &Config::default())
}

#[rstest]
#[case("KHOOR ZRUOG", 3)]
#[case("URYYB JBEYQ", 13)]
#[case("HELLO WORLD", 0)]
fn test_known_decryptions(#[case] ciphertext: &str, #[case] shift: usize) {
    assert_eq!(caesar::decrypt(ciphertext, shift), "HELLO WORLD");
}

#[rstest]
fn test_recovers_every_shift(#[values(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25)] shift: usize) {
    let ciphertext = caesar::encrypt(ENGLISH_SAMPLE, shift);
    let result = solver().solve(&ciphertext);

    assert_eq!(result.status, SolveStatus::Solved);
    assert_eq!(result.key, Key::Shift(shift as u8));
    assert_eq!(result.plaintext, ENGLISH_SAMPLE);
}

#[test]
fn test_pangram_pipeline() {
    let ciphertext = caesar::encrypt(PANGRAM, 7);
    let result = solver().solve(&ciphertext);

    assert_eq!(result.key, Key::Shift(7));
    assert_eq!(result.plaintext, PANGRAM);
    assert!(
        result.confidence > 50.0,
        "confidence {} should exceed 50",
        result.confidence
    );
    assert!(result.confidence <= 100.0);
}

#[test]
fn test_short_text_degrades_to_shift_zero() {
    let result = solver().solve("KHOOR ZRUOG");

    assert_eq!(result.status, SolveStatus::InsufficientEvidence);
    assert_eq!(result.key, Key::Shift(0));
    assert_eq!(result.score, 0.0);
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.plaintext, "KHOOR ZRUOG");
}

#[test]
fn test_min_text_length_is_configurable() {
    let mut config = Config::default();
    config.scoring.min_text_length = 5;
    let result = CaesarSolver::new(english(), &config).solve(&caesar::encrypt("the cat and the dog", 3));
    assert_eq!(result.status, SolveStatus::Solved);
    assert_eq!(result.key, Key::Shift(3));
}

#[rstest]
#[case("")]
#[case("12345 67890")]
#[case("a1234567")]
fn test_invalid_input_is_empty(#[case] text: &str) {
    let result = solver().solve(text);
    assert_eq!(result.status, SolveStatus::InvalidInput);
    assert!(result.is_empty());
    assert_eq!(result.key, Key::None);
    assert_eq!(result.confidence, 0.0);
}

#[test]
fn test_rank_shifts_covers_all_shifts() {
    let ciphertext = caesar::encrypt(ENGLISH_SAMPLE, 11);
    let ranked = solver().rank_shifts(&ciphertext);

    assert_eq!(ranked.len(), 26);
    assert_eq!(ranked[0].0, 11);
    assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));

    let mut shifts: Vec<usize> = ranked.iter().map(|(s, _)| *s).collect();
    shifts.sort_unstable();
    assert_eq!(shifts, (0..26).collect::<Vec<_>>());
}

#[test]
fn test_ranking_is_stable_for_identical_input() {
    let ciphertext = caesar::encrypt(ENGLISH_SAMPLE, 4);
    let s = solver();
    assert_eq!(s.rank_shifts(&ciphertext), s.rank_shifts(&ciphertext));
}

#[test]
fn test_alternatives_follow_ranking() {
    let ciphertext = caesar::encrypt(ENGLISH_SAMPLE, 19);
    let s = solver();
    let alternatives = s.alternatives(&ciphertext, 3);

    assert_eq!(alternatives.len(), 3);
    assert_eq!(alternatives[0].key, Key::Shift(19));
    assert_eq!(alternatives[0].plaintext, ENGLISH_SAMPLE);
    assert!(alternatives[0].score > alternatives[1].score);
}
