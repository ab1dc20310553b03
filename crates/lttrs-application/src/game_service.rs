//! Game use cases.
//!
//! `GameService` coordinates the dictionary cache, baseword selection and the
//! session repository to run a game from start to highscore.

use crate::baseword_picker::BasewordPicker;
use crate::dictionary_cache::DictionaryCache;
use lttrs_core::config::GameConfig;
use lttrs_core::dictionary::Dictionary;
use lttrs_core::highscore::{HighscoreEntry, rank_sessions};
use lttrs_core::session::{Session, SessionRepository, Submission};
use lttrs_core::word::{Baseword, Locale};
use lttrs_core::{LttrsError, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

/// How a new game picks its baseword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameMode {
    /// A random baseword of the active locale.
    Random,
    /// The most recent unfinished game of the active locale, or a random one.
    ContinueLastSession,
    /// A baseword handed over by another player.
    Shared(String),
}

/// Result of [`GameService::reset_game`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResetOutcome {
    /// The old session was discarded and this one started.
    Restarted(Session),
    /// Words were already found; the caller has to confirm first.
    ConfirmationRequired,
}

/// Use case for playing eightlttrs.
///
/// # Responsibilities
///
/// - Starting games (random, continued, shared)
/// - Validating, scoring and persisting submitted answers
/// - Ending and resetting games
/// - Ranking finished games
///
/// A session handed to `submit` or `end_game` is only replaced after the new
/// state was saved. On any error the caller's session is left as it was.
pub struct GameService {
    repository: Arc<dyn SessionRepository>,
    dictionaries: Arc<DictionaryCache>,
    picker: BasewordPicker,
    locale: RwLock<Locale>,
    default_player_name: String,
}

impl GameService {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        dictionaries: Arc<DictionaryCache>,
        config: &GameConfig,
    ) -> Self {
        Self {
            repository,
            dictionaries,
            picker: BasewordPicker::new(),
            locale: RwLock::new(config.locale),
            default_player_name: config.default_player_name.clone(),
        }
    }

    /// Replaces the baseword picker, e.g. with a seeded one.
    pub fn with_picker(mut self, picker: BasewordPicker) -> Self {
        self.picker = picker;
        self
    }

    // ============================================================================
    // Locale
    // ============================================================================

    /// The locale new games are started in.
    pub async fn locale(&self) -> Locale {
        *self.locale.read().await
    }

    /// Switches the locale for future games.
    ///
    /// The dictionary is loaded first; if that fails the locale stays unchanged.
    pub async fn set_locale(&self, locale: Locale) -> Result<()> {
        self.dictionaries.get(locale).await?;
        let mut current = self.locale.write().await;
        if *current != locale {
            tracing::info!(from = %*current, to = %locale, "Locale switched");
            *current = locale;
        }
        Ok(())
    }

    /// Locales a word list is present for.
    pub async fn available_locales(&self) -> Result<Vec<Locale>> {
        self.dictionaries.available_locales().await
    }

    // ============================================================================
    // Lifecycle
    // ============================================================================

    /// Starts a game.
    ///
    /// # Errors
    ///
    /// - `InvalidBaseword` for a malformed shared baseword; nothing is created
    /// - `DictionaryUnavailable` if the active locale has no usable word list
    pub async fn start_game(&self, mode: GameMode) -> Result<Session> {
        let locale = self.locale().await;

        match mode {
            GameMode::Random => self.start_random(locale).await,
            GameMode::ContinueLastSession => {
                match self.last_unfinished().await? {
                    Some(session) => {
                        tracing::info!(
                            session_id = %session.id(),
                            baseword = session.baseword().as_str(),
                            "Continuing session"
                        );
                        self.picker.remember(session.baseword());
                        Ok(session)
                    }
                    None => self.start_random(locale).await,
                }
            }
            GameMode::Shared(word) => {
                let baseword = Baseword::parse(&word, locale)?;
                self.picker.remember(&baseword);
                self.create_session(baseword).await
            }
        }
    }

    /// Submits an answer to `session`.
    ///
    /// # Errors
    ///
    /// - `AlreadyFinished` if the session was ended
    /// - `Word(_)` if the answer was rejected
    /// - storage errors if the accepted answer could not be saved
    pub async fn submit(&self, raw: &str, session: &mut Session) -> Result<Submission> {
        if session.is_finished() {
            return Err(LttrsError::already_finished(session.id()));
        }

        let dictionary = self.dictionaries.get(session.locale()).await?;
        let mut updated = session.clone();
        let submission = match updated.submit(raw, &dictionary) {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!(session_id = %session.id(), error = %e, "Answer rejected");
                return Err(e);
            }
        };

        self.repository.save(&updated).await?;
        *session = updated;

        tracing::debug!(
            session_id = %session.id(),
            word = %submission.word,
            points = submission.points,
            total = submission.total_score,
            "Answer accepted"
        );
        Ok(submission)
    }

    /// Ends `session` under `player_name`.
    ///
    /// The name is trimmed; a blank name is replaced by the configured default.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyFinished` on a second call.
    pub async fn end_game(&self, player_name: &str, session: &mut Session) -> Result<()> {
        let name = match player_name.trim() {
            "" => self.default_player_name.as_str(),
            trimmed => trimmed,
        };

        let mut finished = session.clone();
        finished.finish(name)?;
        self.repository.save(&finished).await?;
        *session = finished;

        tracing::info!(
            session_id = %session.id(),
            player = name,
            score = session.score(),
            words = session.used_words().len(),
            "Game finished"
        );
        Ok(())
    }

    /// Discards `session` and starts a random game.
    ///
    /// Without confirmation this only happens while no word was found yet, or
    /// once the game is over. Unfinished sessions are deleted; finished ones
    /// stay for the highscores.
    pub async fn reset_game(&self, session: &Session, confirmed: bool) -> Result<ResetOutcome> {
        if !confirmed && !session.is_untouched() && !session.is_finished() {
            return Ok(ResetOutcome::ConfirmationRequired);
        }

        let fresh = self.start_random(self.locale().await).await?;
        if !session.is_finished() {
            self.repository.delete(session.id()).await?;
        }

        tracing::info!(discarded = %session.id(), started = %fresh.id(), "Game reset");
        Ok(ResetOutcome::Restarted(fresh))
    }

    // ============================================================================
    // Queries
    // ============================================================================

    /// Finished games in ranking order, at most `limit` if given.
    pub async fn highscores(&self, limit: Option<usize>) -> Result<Vec<HighscoreEntry>> {
        let mut entries = rank_sessions(self.repository.query_finished().await?);
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        Ok(entries)
    }

    /// The game `ContinueLastSession` would resume, if any.
    pub async fn last_unfinished(&self) -> Result<Option<Session>> {
        let locale = self.locale().await;
        self.repository.load_most_recent_unfinished(locale).await
    }

    /// Loads a stored session by id.
    pub async fn find_session(&self, session_id: &str) -> Result<Session> {
        self.repository
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| LttrsError::not_found("Session", session_id))
    }

    // ============================================================================
    // Helpers
    // ============================================================================

    async fn start_random(&self, locale: Locale) -> Result<Session> {
        let dictionary = self.dictionaries.get(locale).await?;

        // A fresh process knows nothing of earlier games
        if self.picker.previous().is_none_or(|previous| previous.locale() != locale) {
            if let Some(last) = self.repository.load_most_recent(locale).await? {
                self.picker.remember(last.baseword());
            }
        }

        let baseword = self.picker.pick(&dictionary)?;
        self.create_session_with(baseword, dictionary).await
    }

    async fn create_session(&self, baseword: Baseword) -> Result<Session> {
        let dictionary = self.dictionaries.get(baseword.locale()).await?;
        self.create_session_with(baseword, dictionary).await
    }

    async fn create_session_with(
        &self,
        baseword: Baseword,
        dictionary: Arc<Dictionary>,
    ) -> Result<Session> {
        let session = tokio::task::spawn_blocking(move || Session::start(baseword, &dictionary))
            .await
            .map_err(|e| LttrsError::internal(format!("Word enumeration failed: {}", e)))??;

        self.repository.save(&session).await?;
        tracing::info!(
            session_id = %session.id(),
            baseword = session.baseword().as_str(),
            locale = %session.locale(),
            possible_words = session.max_possible_words(),
            "Game started"
        );
        Ok(session)
    }
}
