mod common;

use cipherforge::language::LanguageProfile;
use cipherforge::stats::{
    chi_squared, common_ngrams, englishness, frequency, index_of_coincidence,
};
use cipherforge::text::split_by_key_position;
use common::{random_letters, ENGLISH_SAMPLE};

#[test]
fn test_english_ic_in_expected_band() {
    let ic = index_of_coincidence(ENGLISH_SAMPLE);
    assert!(
        (0.060..=0.075).contains(&ic),
        "English IC {} outside [0.060, 0.075]",
        ic
    );
}

#[test]
fn test_random_ic_in_expected_band() {
    let text = random_letters(5000, 42);
    let ic = index_of_coincidence(&text);
    assert!(
        (0.030..=0.045).contains(&ic),
        "Random IC {} outside [0.030, 0.045]",
        ic
    );
}

#[test]
fn test_ic_ignores_case_and_punctuation() {
    let a = index_of_coincidence("Hello, World!");
    let b = index_of_coincidence("HELLOWORLD");
    assert!((a - b).abs() < 1e-12);
}

#[test]
fn test_frequency_sums_to_hundred() {
    let f = frequency(ENGLISH_SAMPLE);
    assert!((f.total() - 100.0).abs() < 1e-6);
    // E is the most common letter of ordinary prose
    assert_eq!(f.ranked()[0].0, 'E');
}

#[test]
fn test_chi_squared_properties() {
    let english = LanguageProfile::english();
    assert!(chi_squared(&english.letters, &english.letters).abs() < 1e-12);

    let prose = chi_squared(&frequency(ENGLISH_SAMPLE), &english.letters);
    let noise = chi_squared(&frequency(&random_letters(2000, 7)), &english.letters);
    assert!(prose < noise, "prose {} should beat noise {}", prose, noise);
}

#[test]
fn test_englishness_range_and_order() {
    let english = LanguageProfile::english();
    let good = englishness(ENGLISH_SAMPLE, &english.letters);
    let bad = englishness(&random_letters(2000, 11), &english.letters);
    assert!(good > 0.0 && good <= 1.0);
    assert!(bad > 0.0 && bad < good);
}

#[test]
fn test_common_ngrams_are_ranked_percentages() {
    let top = common_ngrams(ENGLISH_SAMPLE, 2, 5);
    assert_eq!(top.len(), 5);
    assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
    assert!(top.iter().any(|(g, _)| g == "TH" || g == "HE"));

    let trigrams = common_ngrams(ENGLISH_SAMPLE, 3, 1);
    assert_eq!(trigrams[0].0, "THE");
}

#[test]
fn test_split_by_key_position() {
    assert_eq!(
        split_by_key_position("ABCDEFGH", 3),
        vec!["ADG", "BEH", "CF"]
    );
}
