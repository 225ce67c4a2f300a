pub mod caesar;
pub mod substitution;
pub mod vigenere;

pub use self::substitution::SubstitutionMapping;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// The closed set of ciphers this crate attacks.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum CipherKind {
    Caesar,
    Substitution,
    Vigenere,
}

/// Key material recovered by a solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Key {
    None,
    Shift(u8),
    Mapping(SubstitutionMapping),
    Keyword(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::None => write!(f, "-"),
            Key::Shift(s) => write!(f, "{}", s),
            Key::Mapping(m) => write!(f, "{}", m),
            Key::Keyword(k) => write!(f, "{}", k),
        }
    }
}
