//! Enumeration of every word hidden in a baseword.

use super::Dictionary;
use crate::word::{Baseword, LetterCounts, MIN_WORD_LENGTH};
use std::collections::BTreeSet;

/// Collects all dictionary words that can be built from `baseword`.
///
/// Lengths from [`MIN_WORD_LENGTH`] up to the baseword's length are scanned.
/// The result is sorted, so the same inputs always produce the same set.
pub fn enumerate_possible_words(baseword: &Baseword, dictionary: &Dictionary) -> BTreeSet<String> {
    let letters = LetterCounts::of(baseword.as_str());
    let max_length = baseword.as_str().chars().count();

    let words: BTreeSet<String> = (MIN_WORD_LENGTH..=max_length)
        .flat_map(|length| dictionary.words_of_length(length))
        .filter(|word| letters.can_spell(word))
        .map(str::to_string)
        .collect();

    tracing::debug!(
        baseword = baseword.as_str(),
        possible_words = words.len(),
        "Enumerated possible words"
    );

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::{Locale, is_constructible};

    fn dictionary() -> Dictionary {
        Dictionary::new(
            Locale::De,
            [
                "an", "and", "sand", "sack", "sacke", "dank", "kassa", "sandsack", "sandsacks",
                "hand", "zack", "das", "ass", "asse",
            ],
        )
    }

    #[test]
    fn test_enumerates_constructible_words_only() {
        let baseword = Baseword::parse("Sandsack", Locale::De).unwrap();
        let words = enumerate_possible_words(&baseword, &dictionary());

        let expected: BTreeSet<String> = [
            "and", "ass", "dank", "das", "kassa", "sack", "sand", "sandsack",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_every_result_satisfies_the_rules() {
        let dictionary = dictionary();
        let baseword = Baseword::parse("Sandsack", Locale::De).unwrap();

        for word in enumerate_possible_words(&baseword, &dictionary) {
            assert!(word.chars().count() >= MIN_WORD_LENGTH, "{word} too short");
            assert!(is_constructible(&word, baseword.as_str()), "{word} not constructible");
            assert!(dictionary.contains(&word), "{word} not in dictionary");
        }
    }

    #[test]
    fn test_empty_dictionary_yields_nothing() {
        let baseword = Baseword::parse("Taubenei", Locale::De).unwrap();
        let empty = Dictionary::new(Locale::De, Vec::<String>::new());
        assert!(enumerate_possible_words(&baseword, &empty).is_empty());
    }
}
