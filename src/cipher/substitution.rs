use crate::consts::ALPHABET_LEN;
use crate::error::{CfResult, CipherForgeError};
use crate::text::{index_to_letter, letter_index};
use serde::{Serialize, Serializer};
use std::fmt;

/// Cipher letter -> plain letter permutation over A..Z.
///
/// Always a bijection: every mutator keeps exactly one cipher letter per
/// plain letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubstitutionMapping {
    plain_of: [u8; ALPHABET_LEN],
}

impl Default for SubstitutionMapping {
    fn default() -> Self {
        Self::identity()
    }
}

impl SubstitutionMapping {
    pub fn identity() -> Self {
        let mut plain_of = [0u8; ALPHABET_LEN];
        for (i, p) in plain_of.iter_mut().enumerate() {
            *p = i as u8;
        }
        Self { plain_of }
    }

    /// Builds a full permutation from a partial one.
    ///
    /// Pairs that would reuse an already taken plain letter are dropped.
    /// Unmapped cipher letters then take the unused plain letters, both in
    /// alphabetical order.
    pub fn from_partial(pairs: &[(usize, usize)]) -> Self {
        let mut plain_of = [u8::MAX; ALPHABET_LEN];
        let mut used = [false; ALPHABET_LEN];

        for &(cipher, plain) in pairs {
            if cipher >= ALPHABET_LEN || plain >= ALPHABET_LEN {
                continue;
            }
            if plain_of[cipher] == u8::MAX && !used[plain] {
                plain_of[cipher] = plain as u8;
                used[plain] = true;
            }
        }

        let mut free = (0..ALPHABET_LEN).filter(|&p| !used[p]);
        for slot in plain_of.iter_mut() {
            if *slot == u8::MAX {
                // counts of unmapped slots and free letters always match
                *slot = free.next().unwrap_or(0) as u8;
            }
        }
        Self { plain_of }
    }

    /// Parses a 26-letter key: the plain letter for cipher A, B, ... Z.
    pub fn from_key(key: &str) -> CfResult<Self> {
        let letters: Vec<usize> = key.chars().filter_map(letter_index).collect();
        if letters.len() != ALPHABET_LEN {
            return Err(CipherForgeError::Validation(format!(
                "Substitution key must contain 26 letters, got {}",
                letters.len()
            )));
        }
        let mut seen = [false; ALPHABET_LEN];
        let mut plain_of = [0u8; ALPHABET_LEN];
        for (cipher, &plain) in letters.iter().enumerate() {
            if seen[plain] {
                return Err(CipherForgeError::Validation(format!(
                    "Substitution key repeats letter '{}'",
                    index_to_letter(plain)
                )));
            }
            seen[plain] = true;
            plain_of[cipher] = plain as u8;
        }
        Ok(Self { plain_of })
    }

    #[inline(always)]
    pub fn plain_for(&self, cipher: usize) -> usize {
        self.plain_of[cipher] as usize
    }

    pub fn cipher_for(&self, plain: usize) -> usize {
        self.plain_of
            .iter()
            .position(|&p| p as usize == plain)
            .unwrap_or(plain)
    }

    pub fn inverse(&self) -> Self {
        let mut plain_of = [0u8; ALPHABET_LEN];
        for (cipher, &plain) in self.plain_of.iter().enumerate() {
            plain_of[plain as usize] = cipher as u8;
        }
        Self { plain_of }
    }

    /// Exchanges the plain targets of two cipher letters.
    #[inline(always)]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.plain_of.swap(a, b);
    }

    /// Sends `cipher` to `plain`. The cipher letter that held `plain` takes
    /// over the old target of `cipher`.
    pub fn assign(&mut self, cipher: usize, plain: usize) {
        let holder = self.cipher_for(plain);
        self.swap(cipher, holder);
    }

    /// Deciphers `text`, keeping case and non-letters.
    pub fn apply(&self, text: &str) -> String {
        text.chars().map(|c| self.map_char(c)).collect()
    }

    /// Enciphers plaintext through the inverse permutation.
    pub fn encrypt(&self, text: &str) -> String {
        self.inverse().apply(text)
    }

    #[inline(always)]
    fn map_char(&self, c: char) -> char {
        match letter_index(c) {
            Some(i) => {
                let p = index_to_letter(self.plain_of[i] as usize);
                if c.is_ascii_lowercase() {
                    p.to_ascii_lowercase()
                } else {
                    p
                }
            }
            None => c,
        }
    }

    /// Plain letters for cipher A..Z as a 26-character string.
    pub fn key_string(&self) -> String {
        self.plain_of
            .iter()
            .map(|&p| index_to_letter(p as usize))
            .collect()
    }

    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; ALPHABET_LEN];
        for &p in &self.plain_of {
            let p = p as usize;
            if p >= ALPHABET_LEN || seen[p] {
                return false;
            }
            seen[p] = true;
        }
        true
    }
}

impl fmt::Display for SubstitutionMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key_string())
    }
}

impl Serialize for SubstitutionMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key_string())
    }
}
