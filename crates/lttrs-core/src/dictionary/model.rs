//! In-memory dictionary for a single locale.

use super::source::WordList;
use crate::error::{LttrsError, Result};
use crate::word::{BASEWORD_LENGTH, Baseword, Locale, normalize};
use std::collections::{BTreeMap, BTreeSet};

/// Read-only word list of one locale, indexed by word length.
///
/// Words are stored lower case. Entries that are not made of the locale's
/// letters are dropped while building.
#[derive(Debug, Clone)]
pub struct Dictionary {
    locale: Locale,
    by_length: BTreeMap<usize, BTreeSet<String>>,
    basewords: Vec<Baseword>,
}

impl Dictionary {
    /// Builds a dictionary from raw words.
    ///
    /// The baseword pool is derived from the words of [`BASEWORD_LENGTH`].
    pub fn new<I, S>(locale: Locale, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_length: BTreeMap<usize, BTreeSet<String>> = BTreeMap::new();
        let mut skipped = 0usize;

        for raw in words {
            let word = normalize(raw.as_ref());
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            if !locale.is_word(&word) {
                skipped += 1;
                continue;
            }
            by_length
                .entry(word.chars().count())
                .or_default()
                .insert(word);
        }

        if skipped > 0 {
            tracing::debug!(%locale, skipped, "Skipped word list entries with foreign characters");
        }

        let basewords = by_length
            .get(&BASEWORD_LENGTH)
            .into_iter()
            .flatten()
            .filter_map(|word| Baseword::parse(word, locale).ok())
            .collect();

        Self {
            locale,
            by_length,
            basewords,
        }
    }

    /// Builds a dictionary from a loaded [`WordList`].
    ///
    /// A curated baseword pool in the list replaces the derived one.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryUnavailable` if no usable word remains.
    pub fn from_word_list(locale: Locale, list: WordList) -> Result<Self> {
        let mut dictionary = Self::new(locale, list.words);
        if dictionary.is_empty() {
            return Err(LttrsError::dictionary_unavailable(
                locale,
                "word list contains no usable words",
            ));
        }

        if let Some(pool) = list.basewords {
            dictionary = dictionary.with_basewords(pool);
        }

        Ok(dictionary)
    }

    /// Replaces the baseword pool. Invalid entries are skipped.
    pub fn with_basewords<I, S>(mut self, pool: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let locale = self.locale;
        let mut seen = BTreeSet::new();
        self.basewords = pool
            .into_iter()
            .filter_map(|raw| match Baseword::parse(raw.as_ref(), locale) {
                Ok(baseword) => Some(baseword),
                Err(e) => {
                    tracing::debug!("Ignoring baseword pool entry: {}", e);
                    None
                }
            })
            .filter(|baseword| seen.insert(baseword.as_str().to_string()))
            .collect();
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Membership test; `word` is normalized first.
    pub fn contains(&self, word: &str) -> bool {
        let word = normalize(word);
        self.by_length
            .get(&word.chars().count())
            .is_some_and(|words| words.contains(&word))
    }

    /// All words with exactly `length` characters, in sorted order.
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &str> {
        self.by_length
            .get(&length)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Basewords random games are drawn from.
    pub fn basewords(&self) -> &[Baseword] {
        &self.basewords
    }

    /// Total number of words.
    pub fn len(&self) -> usize {
        self.by_length.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::new(
            Locale::De,
            ["Sand", "sack", " Sacke ", "", "# comment", "Sandsack", "Hand1", "Taubenei"],
        )
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let dictionary = sample();
        assert!(dictionary.contains("SAND"));
        assert!(dictionary.contains("  sacke"));
        assert!(!dictionary.contains("hand1"));
        assert!(!dictionary.contains("sandsac"));
    }

    #[test]
    fn test_words_of_length() {
        let dictionary = sample();
        let four: Vec<&str> = dictionary.words_of_length(4).collect();
        assert_eq!(four, vec!["sack", "sand"]);
        assert_eq!(dictionary.words_of_length(12).count(), 0);
        assert_eq!(dictionary.len(), 5);
    }

    #[test]
    fn test_baseword_pool_is_derived_from_eight_letter_words() {
        let dictionary = sample();
        let pool: Vec<&str> = dictionary.basewords().iter().map(|b| b.as_str()).collect();
        assert_eq!(pool, vec!["sandsack", "taubenei"]);
    }

    #[test]
    fn test_curated_pool_replaces_derived_one() {
        let dictionary = sample().with_basewords(["Taubenei", "kurz", "TAUBENEI"]);
        let pool: Vec<&str> = dictionary.basewords().iter().map(|b| b.as_str()).collect();
        assert_eq!(pool, vec!["taubenei"]);
    }

    #[test]
    fn test_empty_word_list_is_unavailable() {
        let list = WordList {
            words: vec!["1234".to_string()],
            basewords: None,
        };
        let err = Dictionary::from_word_list(Locale::En, list).unwrap_err();
        assert!(err.is_dictionary_unavailable());
    }
}
