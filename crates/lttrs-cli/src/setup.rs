use anyhow::{Context, Result};
use lttrs_application::{DictionaryCache, GameService};
use lttrs_core::LttrsError;
use lttrs_core::word::Locale;
use lttrs_infrastructure::{ConfigService, FileWordSource, TomlSessionRepository};
use std::sync::Arc;

/// Everything a command needs, wired from the settings file.
pub struct App {
    pub config: ConfigService,
    pub service: GameService,
    pub words: FileWordSource,
}

impl App {
    pub fn load() -> Result<Self> {
        let config = ConfigService::default_location()?;
        let settings = config
            .get_config()
            .with_context(|| format!("Failed to load settings from {:?}", config.path()))?;

        let words = match &settings.dictionary_dir {
            Some(dir) => FileWordSource::new(dir),
            None => FileWordSource::default_location()?,
        };
        let repository = match &settings.sessions_dir {
            Some(dir) => TomlSessionRepository::new(dir)?,
            None => TomlSessionRepository::default_location()?,
        };
        tracing::debug!(
            words = ?words.dir(),
            sessions = ?repository.sessions_dir(),
            "Storage resolved"
        );

        let dictionaries = Arc::new(DictionaryCache::new(Arc::new(words.clone())));
        let service = GameService::new(Arc::new(repository), dictionaries, &settings);

        Ok(Self {
            config,
            service,
            words,
        })
    }

    /// Adds a hint where the word list is expected to a missing-dictionary error.
    pub fn explain(&self, err: LttrsError) -> anyhow::Error {
        match &err {
            LttrsError::DictionaryUnavailable { locale, .. } => {
                let hint = self.word_list_hint(*locale);
                anyhow::Error::new(err).context(hint)
            }
            _ => err.into(),
        }
    }

    fn word_list_hint(&self, locale: Locale) -> String {
        format!(
            "No usable {} word list. Put one word per line into {:?}",
            locale.language_name(),
            self.words.word_list_path(locale)
        )
    }
}
