//! Points awarded per word.

use super::{BASEWORD_LENGTH, MIN_WORD_LENGTH};

/// Extra points for a word that uses the full baseword length.
pub const FULL_LENGTH_BONUS: u32 = 4;

/// Points for a word, derived from its length in characters only.
///
/// A word of the minimum length scores 1 and every further letter adds 1.
/// Words as long as the baseword earn [`FULL_LENGTH_BONUS`] on top. Words
/// below the minimum length score nothing.
pub fn score_of(word: &str) -> u32 {
    let length = word.chars().count();
    if length < MIN_WORD_LENGTH {
        return 0;
    }

    let base = (length - MIN_WORD_LENGTH + 1) as u32;
    if length >= BASEWORD_LENGTH {
        base + FULL_LENGTH_BONUS
    } else {
        base
    }
}

/// Sum of [`score_of`] over `words`.
pub fn total_score<'a>(words: impl IntoIterator<Item = &'a str>) -> u32 {
    words.into_iter().map(score_of).sum()
}
