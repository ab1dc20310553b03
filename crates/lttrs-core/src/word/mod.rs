//! Word rules: locales, basewords, letter matching and scoring.

mod baseword;
mod locale;
mod matcher;
mod scoring;

pub use baseword::Baseword;
pub use locale::Locale;
pub use matcher::{LetterCounts, is_constructible};
pub use scoring::{FULL_LENGTH_BONUS, score_of, total_score};

/// Minimum length of an accepted answer.
pub const MIN_WORD_LENGTH: usize = 3;

/// Length every baseword has.
pub const BASEWORD_LENGTH: usize = 8;

/// Trims surrounding whitespace and lower-cases `raw`.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
