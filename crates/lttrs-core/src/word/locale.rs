//! Locales a game can be played in.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Region code that selects the dictionary and baseword pool.
///
/// The string form is the upper-case code (`DE`, `EN`), which is also what
/// gets persisted and what word list files are named after.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Locale {
    #[default]
    #[serde(rename = "DE")]
    #[strum(serialize = "DE")]
    De,
    #[serde(rename = "EN")]
    #[strum(serialize = "EN")]
    En,
}

impl Locale {
    /// All supported locales in declaration order.
    pub fn all() -> Vec<Locale> {
        Locale::iter().collect()
    }

    /// Human readable language name.
    pub fn language_name(&self) -> &'static str {
        match self {
            Locale::De => "Deutsch",
            Locale::En => "English",
        }
    }

    /// Whether `c` (already lower-cased) is a letter of this locale's alphabet.
    pub fn is_letter(&self, c: char) -> bool {
        match self {
            Locale::De => c.is_ascii_lowercase() || matches!(c, 'ä' | 'ö' | 'ü' | 'ß'),
            Locale::En => c.is_ascii_lowercase(),
        }
    }

    /// Whether every character of the lower-cased `word` is a letter of this locale.
    pub fn is_word(&self, word: &str) -> bool {
        !word.is_empty() && word.chars().all(|c| self.is_letter(c))
    }
}
