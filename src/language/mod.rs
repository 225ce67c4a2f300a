pub mod loader;
pub mod tables;

use crate::error::{CfResult, CipherForgeError};
use crate::stats::{chi_squared, frequency, FrequencyTable};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub const DEFAULT_LANGUAGE: &str = "english";

/// Fixed-length n-gram reference table (relative frequencies).
#[derive(Debug, Clone, Default)]
pub struct NGramTable {
    n: usize,
    entries: HashMap<String, f64>,
    ranked: Vec<(String, f64)>,
}

impl NGramTable {
    pub fn new(n: usize, entries: &[(&str, f64)]) -> Self {
        let mut ranked: Vec<(String, f64)> = entries
            .iter()
            .filter(|(gram, _)| gram.len() == n)
            .map(|(gram, f)| (gram.to_ascii_uppercase(), *f))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        let entries = ranked.iter().cloned().collect();
        Self { n, entries, ranked }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Reference frequency, 0 when the n-gram is not in the table.
    #[inline(always)]
    pub fn get(&self, gram: &str) -> f64 {
        self.entries.get(gram).copied().unwrap_or(0.0)
    }

    /// The `k` most frequent entries, most frequent first.
    pub fn top(&self, k: usize) -> impl Iterator<Item = &str> {
        self.ranked.iter().take(k).map(|(g, _)| g.as_str())
    }
}

/// Read-only statistics of one language, shared by every solver call.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub name: String,
    pub letters: FrequencyTable,
    pub expected_ic: f64,
    pub bigrams: NGramTable,
    pub trigrams: NGramTable,
    pub common_words: HashSet<String>,
}

impl LanguageProfile {
    pub fn new(
        name: &str,
        letters: FrequencyTable,
        bigrams: NGramTable,
        trigrams: NGramTable,
        words: &[&str],
    ) -> Self {
        Self {
            name: name.to_lowercase(),
            expected_ic: letters.expected_ic(),
            letters,
            bigrams,
            trigrams,
            common_words: words.iter().map(|w| w.to_ascii_uppercase()).collect(),
        }
    }

    pub fn english() -> Self {
        Self::new(
            "english",
            FrequencyTable::from_percentages(tables::ENGLISH_LETTERS),
            NGramTable::new(2, tables::ENGLISH_BIGRAMS),
            NGramTable::new(3, tables::ENGLISH_TRIGRAMS),
            tables::ENGLISH_WORDS,
        )
    }

    pub fn turkish() -> Self {
        Self::new(
            "turkish",
            FrequencyTable::from_percentages(tables::TURKISH_LETTERS),
            NGramTable::new(2, tables::TURKISH_BIGRAMS),
            NGramTable::new(3, tables::TURKISH_TRIGRAMS),
            tables::TURKISH_WORDS,
        )
    }

    /// Profile with letter statistics only (no n-grams, no words).
    pub fn letters_only(name: &str, letters: FrequencyTable) -> Self {
        Self::new(name, letters, NGramTable::default(), NGramTable::default(), &[])
    }

    pub fn with_letters(&self, letters: FrequencyTable) -> Self {
        Self {
            expected_ic: letters.expected_ic(),
            letters,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageGuess {
    pub language: String,
    pub chi_squared: f64,
    pub confidence: f64,
}

/// Profiles by lower-case name. Built once, then handed out as `Arc`s.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    profiles: BTreeMap<String, Arc<LanguageProfile>>,
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LanguageRegistry {
    pub fn builtin() -> Self {
        let mut registry = Self {
            profiles: BTreeMap::new(),
        };
        registry.insert(LanguageProfile::english());
        registry.insert(LanguageProfile::turkish());
        registry
    }

    pub fn insert(&mut self, profile: LanguageProfile) {
        self.profiles
            .insert(profile.name.clone(), Arc::new(profile));
    }

    pub fn get(&self, name: &str) -> CfResult<Arc<LanguageProfile>> {
        self.profiles
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| CipherForgeError::UnknownLanguage(name.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles.keys().map(|k| k.as_str()).collect()
    }

    /// Replaces the letter table of `name`, or registers a letters-only profile.
    pub fn load_letter_frequencies<R: Read>(&mut self, name: &str, reader: R) -> CfResult<()> {
        let letters = loader::load_letter_frequencies(reader)?;
        let profile = match self.profiles.get(&name.to_lowercase()) {
            Some(existing) => existing.with_letters(letters),
            None => LanguageProfile::letters_only(name, letters),
        };
        info!(
            "Registered letter frequencies for '{}' (reference IC {:.4})",
            profile.name, profile.expected_ic
        );
        self.insert(profile);
        Ok(())
    }

    pub fn load_letter_frequency_file<P: AsRef<Path>>(
        &mut self,
        name: &str,
        path: P,
    ) -> CfResult<()> {
        let file = File::open(path)?;
        self.load_letter_frequencies(name, file)
    }

    /// Language whose letter distribution is closest (lowest χ²) to the text.
    pub fn detect(&self, text: &str) -> Option<LanguageGuess> {
        let observed = frequency(text);
        if observed.is_empty() {
            return None;
        }

        self.profiles
            .values()
            .map(|p| (p, chi_squared(&observed, &p.letters)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(profile, chi)| LanguageGuess {
                language: profile.name.clone(),
                chi_squared: chi,
                confidence: 1.0 / (1.0 + chi / 100.0),
            })
    }
}
