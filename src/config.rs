use crate::consts::{
    MAX_KASISKI_SUBSTRING, MAX_SUPPORTED_KEY_LENGTH, MIN_SUPPORTED_KEY_LENGTH,
    MIN_SUPPORTED_SUBSTRING,
};
use crate::error::{CfResult, CipherForgeError};
use crate::optimizer::OptimizationMethod;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub keys: KeyLengthParams,
    #[command(flatten)]
    pub scoring: ScoringParams,
}

/// Substitution search budget and strategy.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchParams {
    #[arg(long, value_enum, default_value_t = OptimizationMethod::Hybrid)]
    pub method: OptimizationMethod,
    #[arg(long, default_value_t = 1000)]
    pub climb_iterations: usize,
    #[arg(long, default_value_t = 2000)]
    pub anneal_iterations: usize,
    #[arg(long, default_value_t = 100.0)]
    pub initial_temperature: f64,
    #[arg(long, default_value_t = 0.001)]
    pub temperature_floor: f64,
    #[arg(long, default_value_t = 10)]
    pub bigram_refinements: usize,

    // Unset means entropy seeding
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            method: OptimizationMethod::Hybrid,
            climb_iterations: 1000,
            anneal_iterations: 2000,
            initial_temperature: 100.0,
            temperature_floor: 0.001,
            bigram_refinements: 10,
            seed: None,
        }
    }
}

/// Vigenère key-length search range.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyLengthParams {
    #[arg(long, default_value_t = 2)]
    pub min_key_length: usize,
    #[arg(long, default_value_t = 20)]
    pub max_key_length: usize,
    #[arg(long, default_value_t = 3)]
    pub min_substring: usize,
    #[arg(long, default_value_t = 10)]
    pub max_substring: usize,
    #[arg(long, default_value_t = 5)]
    pub key_candidates: usize,
}

impl Default for KeyLengthParams {
    fn default() -> Self {
        Self {
            min_key_length: 2,
            max_key_length: 20,
            min_substring: 3,
            max_substring: 10,
            key_candidates: 5,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringParams {
    /// Caesar scores are forced to 0 below this many letters
    #[arg(long, default_value_t = 20)]
    pub min_text_length: usize,
    #[arg(long, default_value_t = 5)]
    pub alternatives: usize,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            min_text_length: 20,
            alternatives: 5,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CipherForgeError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Overlays only the flags typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(search.method);
        update_if_present!(search.climb_iterations);
        update_if_present!(search.anneal_iterations);
        update_if_present!(search.initial_temperature);
        update_if_present!(search.temperature_floor);
        update_if_present!(search.bigram_refinements);
        update_if_present!(search.seed);

        update_if_present!(keys.min_key_length);
        update_if_present!(keys.max_key_length);
        update_if_present!(keys.min_substring);
        update_if_present!(keys.max_substring);
        update_if_present!(keys.key_candidates);

        update_if_present!(scoring.min_text_length);
        update_if_present!(scoring.alternatives);
    }

    /// Corrects out-of-range settings instead of rejecting them.
    pub fn validated(mut self) -> Self {
        let defaults = SearchParams::default();
        let s = &mut self.search;

        if s.climb_iterations == 0 {
            warn!("climb_iterations must be at least 1, using 1");
            s.climb_iterations = 1;
        }
        if s.anneal_iterations == 0 {
            warn!("anneal_iterations must be at least 1, using 1");
            s.anneal_iterations = 1;
        }
        if !(s.initial_temperature.is_finite() && s.initial_temperature > 0.0) {
            warn!(
                "initial_temperature {} is not positive, using {}",
                s.initial_temperature, defaults.initial_temperature
            );
            s.initial_temperature = defaults.initial_temperature;
        }
        if !(s.temperature_floor.is_finite() && s.temperature_floor > 0.0) {
            warn!(
                "temperature_floor {} is not positive, using {}",
                s.temperature_floor, defaults.temperature_floor
            );
            s.temperature_floor = defaults.temperature_floor;
        }

        let k = &mut self.keys;
        if k.min_key_length > k.max_key_length {
            warn!(
                "Key length range {}..={} is inverted, swapping",
                k.min_key_length, k.max_key_length
            );
            std::mem::swap(&mut k.min_key_length, &mut k.max_key_length);
        }
        k.min_key_length = clamp_logged(
            "min_key_length",
            k.min_key_length,
            MIN_SUPPORTED_KEY_LENGTH,
            MAX_SUPPORTED_KEY_LENGTH,
        );
        k.max_key_length = clamp_logged(
            "max_key_length",
            k.max_key_length,
            MIN_SUPPORTED_KEY_LENGTH,
            MAX_SUPPORTED_KEY_LENGTH,
        );

        if k.min_substring > k.max_substring {
            warn!(
                "Substring range {}..={} is inverted, swapping",
                k.min_substring, k.max_substring
            );
            std::mem::swap(&mut k.min_substring, &mut k.max_substring);
        }
        k.min_substring = clamp_logged(
            "min_substring",
            k.min_substring,
            MIN_SUPPORTED_SUBSTRING,
            MAX_KASISKI_SUBSTRING,
        );
        k.max_substring = clamp_logged(
            "max_substring",
            k.max_substring,
            MIN_SUPPORTED_SUBSTRING,
            MAX_KASISKI_SUBSTRING,
        );

        if k.key_candidates == 0 {
            warn!("key_candidates must be at least 1, using 1");
            k.key_candidates = 1;
        }

        self
    }
}

fn clamp_logged(name: &str, value: usize, lo: usize, hi: usize) -> usize {
    let clamped = value.clamp(lo, hi);
    if clamped != value {
        warn!("{} {} outside {}..={}, clamped to {}", name, value, lo, hi, clamped);
    }
    clamped
}
