//! Text normalisation and the small character helpers every solver shares.
//!
//! Only ASCII letters count as alphabetic. Everything else (digits,
//! punctuation, whitespace, non-ASCII letters) is carried through verbatim
//! when a key is applied and ignored when statistics are computed.

use crate::consts::{ALPHABET_LEN, MIN_ALPHA_RATIO};

/// Keeps alphabetic characters only, upper-cased, in original order.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

pub fn alpha_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_alphabetic()).count()
}

/// Non-empty, and at least half of the characters are letters.
pub fn is_valid_input(text: &str) -> bool {
    let total = text.chars().count();
    if total == 0 {
        return false;
    }
    let alpha = alpha_count(text);
    alpha > 0 && alpha as f64 >= total as f64 * MIN_ALPHA_RATIO
}

/// 0-based alphabet index of an ASCII letter, case-insensitive.
#[inline(always)]
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

#[inline(always)]
pub fn index_to_letter(idx: usize) -> char {
    (b'A' + (idx % ALPHABET_LEN) as u8) as char
}

/// Rotates a letter forward by `shift` inside its own case.
#[inline(always)]
pub fn rotate(c: char, shift: usize) -> char {
    if !c.is_ascii_alphabetic() {
        return c;
    }
    let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
    let offset = (c as u8 - base) as usize;
    (base + ((offset + shift) % ALPHABET_LEN) as u8) as char
}

/// Distributes characters round-robin: character `i` lands in column `i % key_len`.
pub fn split_by_key_position(text: &str, key_len: usize) -> Vec<String> {
    if key_len == 0 {
        return Vec::new();
    }
    let mut columns = vec![String::new(); key_len];
    for (i, c) in text.chars().enumerate() {
        columns[i % key_len].push(c);
    }
    columns
}

/// First `n` characters, with an ellipsis when the text was cut.
pub fn preview(text: &str, n: usize) -> String {
    let mut out: String = text.chars().take(n).collect();
    if text.chars().count() > n {
        out.push_str("...");
    }
    out
}
