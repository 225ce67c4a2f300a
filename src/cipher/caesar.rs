use crate::consts::ALPHABET_LEN;
use crate::text::rotate;

/// Rotates every letter back by `shift`.
pub fn decrypt(text: &str, shift: usize) -> String {
    let back = (ALPHABET_LEN - shift % ALPHABET_LEN) % ALPHABET_LEN;
    text.chars().map(|c| rotate(c, back)).collect()
}

pub fn encrypt(text: &str, shift: usize) -> String {
    text.chars().map(|c| rotate(c, shift % ALPHABET_LEN)).collect()
}
