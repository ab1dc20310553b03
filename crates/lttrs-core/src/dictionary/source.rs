//! Word source trait.
//!
//! Defines where raw word lists come from.

use crate::error::Result;
use crate::word::Locale;
use async_trait::async_trait;

/// Raw word material for one locale as read from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Dictionary entries, unnormalized.
    pub words: Vec<String>,
    /// Curated baseword pool, if the source has one.
    pub basewords: Option<Vec<String>>,
}

/// An abstract provider of locale word lists.
///
/// Implementations only read; parsing and indexing happen in
/// [`Dictionary`](super::Dictionary).
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Loads the word list of `locale`.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryUnavailable` if the list cannot be read.
    async fn load(&self, locale: Locale) -> Result<WordList>;

    /// Locales this source has a word list for.
    async fn available_locales(&self) -> Result<Vec<Locale>>;
}
