//! Word lists read from plain text files.

use crate::paths::LttrsPaths;
use async_trait::async_trait;
use lttrs_core::dictionary::{WordList, WordSource};
use lttrs_core::word::Locale;
use lttrs_core::{LttrsError, Result};
use std::path::{Path, PathBuf};

/// Loads word lists from a directory of text files, one word per line.
///
/// ```text
/// dictionary_dir/
/// ├── DE.txt              # dictionary
/// ├── DE.basewords.txt    # optional curated baseword pool
/// └── EN.txt
/// ```
#[derive(Debug, Clone)]
pub struct FileWordSource {
    dir: PathBuf,
}

impl FileWordSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a source reading from the default data directory.
    pub fn default_location() -> Result<Self> {
        let dir = LttrsPaths::dictionaries_dir().map_err(|e| LttrsError::config(e.to_string()))?;
        Ok(Self::new(dir))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn word_list_path(&self, locale: Locale) -> PathBuf {
        self.dir.join(format!("{}.txt", locale))
    }

    pub fn baseword_pool_path(&self, locale: Locale) -> PathBuf {
        self.dir.join(format!("{}.basewords.txt", locale))
    }

    async fn read_pool(&self, locale: Locale) -> Option<Vec<String>> {
        let path = self.baseword_pool_path(locale);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Some(lines(&content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "Ignoring unreadable baseword pool");
                None
            }
        }
    }
}

fn lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl WordSource for FileWordSource {
    async fn load(&self, locale: Locale) -> Result<WordList> {
        let path = self.word_list_path(locale);
        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            LttrsError::dictionary_unavailable(locale, format!("cannot read {:?}: {}", path, e))
        })?;

        let words = lines(&content);
        let basewords = self.read_pool(locale).await;
        tracing::info!(
            %locale,
            words = words.len(),
            curated_pool = basewords.is_some(),
            "Loaded word list"
        );

        Ok(WordList { words, basewords })
    }

    async fn available_locales(&self) -> Result<Vec<Locale>> {
        let mut available = Vec::new();
        for locale in Locale::all() {
            if tokio::fs::try_exists(self.word_list_path(locale))
                .await
                .unwrap_or(false)
            {
                available.push(locale);
            }
        }
        Ok(available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_reads_words_and_optional_pool() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("DE.txt"), "Sand\n\n  Sack \nsandsack\n").unwrap();
        std::fs::write(temp_dir.path().join("DE.basewords.txt"), "Sandsack\n").unwrap();
        std::fs::write(temp_dir.path().join("EN.txt"), "tea\n").unwrap();

        let source = FileWordSource::new(temp_dir.path());

        let german = source.load(Locale::De).await.unwrap();
        assert_eq!(german.words, vec!["Sand", "Sack", "sandsack"]);
        assert_eq!(german.basewords, Some(vec!["Sandsack".to_string()]));

        let english = source.load(Locale::En).await.unwrap();
        assert!(english.basewords.is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_dictionary_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileWordSource::new(temp_dir.path());

        let err = source.load(Locale::En).await.unwrap_err();
        assert!(err.is_dictionary_unavailable());
    }

    #[tokio::test]
    async fn test_available_locales() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("EN.txt"), "tea\n").unwrap();

        let source = FileWordSource::new(temp_dir.path());
        assert_eq!(source.available_locales().await.unwrap(), vec![Locale::En]);
    }
}
