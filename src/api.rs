use crate::cipher::CipherKind;
use crate::config::Config;
use crate::error::{CfResult, CipherForgeError};
use crate::keylength::KeyLengthReport;
use crate::language::{LanguageGuess, LanguageProfile, LanguageRegistry, DEFAULT_LANGUAGE};
use crate::optimizer::{NoProgress, ProgressCallback};
use crate::scorer::{FitnessScorer, ScoreDetails};
use crate::solvers::{Breaker, Candidate, SolverResult, VigenereSolver};
use crate::stats::{self, FrequencyTable};
use crate::text::alpha_count;
use serde::Serialize;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

const REPORT_NGRAMS: usize = 10;

/// The shared state required to run CipherForge services.
pub struct CipherForgeState {
    pub registry: Mutex<LanguageRegistry>,
    pub config: Mutex<Config>,
}

impl Default for CipherForgeState {
    fn default() -> Self {
        Self {
            registry: Mutex::new(LanguageRegistry::builtin()),
            config: Mutex::new(Config::default()),
        }
    }
}

impl CipherForgeState {
    pub fn with_config(config: Config) -> Self {
        Self {
            config: Mutex::new(config.validated()),
            ..Self::default()
        }
    }

    /// Resolves a profile and releases the lock before any work starts.
    pub fn profile(&self, language: Option<&str>) -> CfResult<Arc<LanguageProfile>> {
        let registry = self
            .registry
            .lock()
            .map_err(|e| CipherForgeError::State(e.to_string()))?;
        registry.get(language.unwrap_or(DEFAULT_LANGUAGE))
    }

    pub fn config(&self) -> CfResult<Config> {
        let guard = self
            .config
            .lock()
            .map_err(|e| CipherForgeError::State(e.to_string()))?;
        Ok(guard.clone())
    }

    pub fn set_config(&self, config: Config) -> CfResult<()> {
        let mut guard = self
            .config
            .lock()
            .map_err(|e| CipherForgeError::State(e.to_string()))?;
        *guard = config.validated();
        Ok(())
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyReport {
    pub language: String,
    pub letters: usize,
    pub frequencies: FrequencyTable,
    pub ranked: Vec<(char, f64)>,
    pub index_of_coincidence: f64,
    pub reference_ic: f64,
    pub chi_squared: f64,
    pub englishness: f64,
    pub fitness: ScoreDetails,
    pub detected: Option<LanguageGuess>,
    pub bigrams: Vec<(String, f64)>,
    pub trigrams: Vec<(String, f64)>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BreakReport {
    pub language: String,
    pub result: SolverResult,
    pub alternatives: Vec<Candidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_lengths: Option<KeyLengthReport>,
}

/// Service: Register letter frequencies for a language from a CSV file.
pub fn load_language<P: AsRef<Path>>(
    state: &CipherForgeState,
    name: &str,
    path: P,
) -> CfResult<String> {
    let mut registry = state
        .registry
        .lock()
        .map_err(|e| CipherForgeError::State(e.to_string()))?;
    registry.load_letter_frequency_file(name, path)?;
    Ok(format!("Language '{}' loaded", name.to_lowercase()))
}

/// Service: Letter statistics of a text against a reference language.
pub fn analyze_text(
    state: &CipherForgeState,
    text: &str,
    language: Option<&str>,
) -> CfResult<FrequencyReport> {
    let profile = state.profile(language)?;
    let detected = {
        let registry = state
            .registry
            .lock()
            .map_err(|e| CipherForgeError::State(e.to_string()))?;
        registry.detect(text)
    };

    let frequencies = stats::frequency(text);
    let scorer = FitnessScorer::new(profile.clone());

    Ok(FrequencyReport {
        language: profile.name.clone(),
        letters: alpha_count(text),
        ranked: frequencies.ranked(),
        index_of_coincidence: stats::index_of_coincidence(text),
        reference_ic: profile.expected_ic,
        chi_squared: stats::chi_squared(&frequencies, &profile.letters),
        englishness: stats::englishness(text, &profile.letters),
        fitness: scorer.score_details(text),
        detected,
        bigrams: stats::common_ngrams(text, 2, REPORT_NGRAMS),
        trigrams: stats::common_ngrams(text, 3, REPORT_NGRAMS),
        frequencies,
    })
}

/// Service: Break a ciphertext of a known cipher kind.
pub fn break_text(
    state: &CipherForgeState,
    kind: CipherKind,
    text: &str,
    language: Option<&str>,
) -> CfResult<BreakReport> {
    break_text_with_progress(state, kind, text, language, &NoProgress)
}

pub fn break_text_with_progress<CB: ProgressCallback>(
    state: &CipherForgeState,
    kind: CipherKind,
    text: &str,
    language: Option<&str>,
    callback: &CB,
) -> CfResult<BreakReport> {
    let profile = state.profile(language)?;
    let config = state.config()?;

    info!("Breaking {} cipher ({} letters)", kind, alpha_count(text));

    let breaker = Breaker::new(kind, profile.clone(), &config);
    let result = breaker.solve_with_progress(text, callback);
    let alternatives = breaker.alternatives(text, config.scoring.alternatives);
    let key_lengths = match &breaker {
        Breaker::Vigenere(solver) => Some(solver.detect_key_lengths(text)),
        _ => None,
    };

    info!(
        "{} finished: {} (confidence {:.1})",
        kind, result.status, result.confidence
    );

    Ok(BreakReport {
        language: profile.name.clone(),
        result,
        alternatives,
        key_lengths,
    })
}

/// Service: Key-length diagnostics only.
pub fn key_length_report(
    state: &CipherForgeState,
    text: &str,
    language: Option<&str>,
) -> CfResult<KeyLengthReport> {
    let profile = state.profile(language)?;
    let config = state.config()?;
    Ok(VigenereSolver::new(profile, &config).detect_key_lengths(text))
}
