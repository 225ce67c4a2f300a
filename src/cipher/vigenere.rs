//! Vigenère primitives. The key advances on letters only, so column `i` of the
//! normalised ciphertext is always enciphered with key letter `i mod len`.

use crate::consts::ALPHABET_LEN;
use crate::text::{index_to_letter, letter_index, rotate};

pub fn encrypt(text: &str, key: &str) -> String {
    apply(text, key, false)
}

pub fn decrypt(text: &str, key: &str) -> String {
    apply(text, key, true)
}

pub fn shift_to_char(shift: usize) -> char {
    index_to_letter(shift)
}

pub fn char_to_shift(c: char) -> usize {
    letter_index(c).unwrap_or(0)
}

/// Key shifts, ignoring any non-letter characters in the key.
pub fn key_shifts(key: &str) -> Vec<usize> {
    key.chars().filter_map(letter_index).collect()
}

fn apply(text: &str, key: &str, inverse: bool) -> String {
    let shifts = key_shifts(key);
    if shifts.is_empty() {
        return text.to_string();
    }

    let mut pos = 0;
    text.chars()
        .map(|c| {
            if !c.is_ascii_alphabetic() {
                return c;
            }
            let s = shifts[pos % shifts.len()];
            pos += 1;
            if inverse {
                rotate(c, (ALPHABET_LEN - s) % ALPHABET_LEN)
            } else {
                rotate(c, s)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_lemon_vector() {
        assert_eq!(encrypt("ATTACKATDAWN", "LEMON"), "LXFOPVEFRNHR");
        assert_eq!(decrypt("LXFOPVEFRNHR", "lemon"), "ATTACKATDAWN");
    }

    #[test]
    fn key_skips_punctuation() {
        let ct = encrypt("Attack at dawn!", "LEMON");
        assert_eq!(ct, "Lxfopv ef rnhr!");
        assert_eq!(decrypt(&ct, "LEMON"), "Attack at dawn!");
    }

    #[test]
    fn empty_key_is_identity() {
        assert_eq!(encrypt("abc", ""), "abc");
        assert_eq!(encrypt("abc", "123"), "abc");
    }
}
