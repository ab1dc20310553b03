//! The baseword a session is played on.

use super::{BASEWORD_LENGTH, Locale, normalize};
use crate::error::{LttrsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable, validated baseword.
///
/// The stored form is lower case. Two basewords compare equal when their
/// letters match regardless of the casing they were parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BasewordParts", into = "BasewordParts")]
pub struct Baseword {
    word: String,
    locale: Locale,
}

impl Baseword {
    /// Parses and validates a baseword for `locale`.
    ///
    /// The input is trimmed and lower-cased first. It must then be exactly
    /// [`BASEWORD_LENGTH`] characters long and consist only of letters of the
    /// locale's alphabet.
    pub fn parse(raw: &str, locale: Locale) -> Result<Self> {
        let word = normalize(raw);
        let length = word.chars().count();

        if length != BASEWORD_LENGTH {
            return Err(LttrsError::invalid_baseword(
                raw.trim(),
                format!("expected {} letters, got {}", BASEWORD_LENGTH, length),
            ));
        }

        if let Some(bad) = word.chars().find(|c| !locale.is_letter(*c)) {
            return Err(LttrsError::invalid_baseword(
                raw.trim(),
                format!("'{}' is not a letter of locale {}", bad, locale),
            ));
        }

        Ok(Self { word, locale })
    }

    /// The lower-case letters of the baseword.
    pub fn as_str(&self) -> &str {
        &self.word
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Capitalized form used for display, e.g. `Sandsack`.
    pub fn display_form(&self) -> String {
        let mut chars = self.word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Upper-case form handed out when a baseword is shared.
    ///
    /// `ß` is kept as is; upper-casing it to `SS` would change the length.
    pub fn share_code(&self) -> String {
        let mut code = String::with_capacity(self.word.len());
        for c in self.word.chars() {
            if c == 'ß' {
                code.push(c);
            } else {
                code.extend(c.to_uppercase());
            }
        }
        code
    }
}

impl fmt::Display for Baseword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_form())
    }
}

impl AsRef<str> for Baseword {
    fn as_ref(&self) -> &str {
        &self.word
    }
}

/// Serialized shape of a [`Baseword`]; deserialization re-validates it.
#[derive(Serialize, Deserialize)]
struct BasewordParts {
    word: String,
    locale: Locale,
}

impl TryFrom<BasewordParts> for Baseword {
    type Error = LttrsError;

    fn try_from(parts: BasewordParts) -> Result<Self> {
        Baseword::parse(&parts.word, parts.locale)
    }
}

impl From<Baseword> for BasewordParts {
    fn from(baseword: Baseword) -> Self {
        Self {
            word: baseword.word,
            locale: baseword.locale,
        }
    }
}
