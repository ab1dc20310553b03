//! Process-wide cache of loaded dictionaries.

use lttrs_core::dictionary::{Dictionary, WordSource};
use lttrs_core::word::Locale;
use lttrs_core::{LttrsError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};

/// Loads each locale's dictionary once and hands out shared references.
///
/// Concurrent requests for the same locale wait on a single load. A failed
/// load leaves the slot empty so the next request tries again.
pub struct DictionaryCache {
    source: Arc<dyn WordSource>,
    dictionaries: RwLock<HashMap<Locale, Arc<OnceCell<Arc<Dictionary>>>>>,
}

impl DictionaryCache {
    pub fn new(source: Arc<dyn WordSource>) -> Self {
        Self {
            source,
            dictionaries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the dictionary of `locale`, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryUnavailable` if the word list can't be read or has
    /// no usable words.
    pub async fn get(&self, locale: Locale) -> Result<Arc<Dictionary>> {
        let cell = self.cell(locale).await;
        let dictionary = cell
            .get_or_try_init(|| async {
                let list = self.source.load(locale).await?;
                let dictionary = tokio::task::spawn_blocking(move || {
                    Dictionary::from_word_list(locale, list)
                })
                .await
                .map_err(|e| LttrsError::dictionary_unavailable(locale, e.to_string()))??;

                tracing::info!(
                    %locale,
                    words = dictionary.len(),
                    basewords = dictionary.basewords().len(),
                    "Dictionary loaded"
                );
                Ok::<_, LttrsError>(Arc::new(dictionary))
            })
            .await?;

        Ok(Arc::clone(dictionary))
    }

    /// Whether `locale` was loaded successfully already.
    #[cfg(test)]
    async fn is_loaded(&self, locale: Locale) -> bool {
        self.dictionaries
            .read()
            .await
            .get(&locale)
            .is_some_and(|cell| cell.initialized())
    }

    /// Locales the underlying source has a word list for.
    pub async fn available_locales(&self) -> Result<Vec<Locale>> {
        self.source.available_locales().await
    }

    async fn cell(&self, locale: Locale) -> Arc<OnceCell<Arc<Dictionary>>> {
        if let Some(cell) = self.dictionaries.read().await.get(&locale) {
            return Arc::clone(cell);
        }

        let mut dictionaries = self.dictionaries.write().await;
        Arc::clone(dictionaries.entry(locale).or_default())
    }
}
