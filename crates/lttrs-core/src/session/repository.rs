//! Session repository trait.
//!
//! Defines the interface for session persistence operations.

use super::model::Session;
use crate::error::Result;
use crate::highscore::ranking_order;
use crate::word::Locale;
use async_trait::async_trait;

/// An abstract repository for managing session persistence.
///
/// This trait defines the contract for persisting and retrieving sessions,
/// decoupling the game engine from the specific storage mechanism
/// (e.g., TOML files, in-memory maps).
///
/// # Implementation Notes
///
/// Implementations should handle:
/// - Durable writes: once `save` returns `Ok`, the session survives a crash
/// - Skipping unreadable entries in `list_all` instead of failing the listing
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Finds a session by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Session))`: Session found
    /// - `Ok(None)`: Session not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, session_id: &str) -> Result<Option<Session>>;

    /// Saves a session, replacing any stored version with the same ID.
    async fn save(&self, session: &Session) -> Result<()>;

    /// Deletes a session from storage.
    ///
    /// Deleting a session that doesn't exist is not an error.
    async fn delete(&self, session_id: &str) -> Result<()>;

    /// Lists all stored sessions, most recently updated first.
    async fn list_all(&self) -> Result<Vec<Session>>;

    /// Returns the most recently updated unfinished session of `locale`.
    async fn load_most_recent_unfinished(&self, locale: Locale) -> Result<Option<Session>> {
        let sessions = self.list_all().await?;
        Ok(sessions
            .into_iter()
            .filter(|s| !s.is_finished() && s.locale() == locale)
            .max_by_key(|s| s.updated_at()))
    }

    /// Returns the most recently updated session of `locale`, finished or not.
    async fn load_most_recent(&self, locale: Locale) -> Result<Option<Session>> {
        let sessions = self.list_all().await?;
        Ok(sessions
            .into_iter()
            .filter(|s| s.locale() == locale)
            .max_by_key(|s| s.updated_at()))
    }

    /// Returns all finished sessions in highscore order.
    ///
    /// Highest score first; equal scores are ordered by earlier completion.
    async fn query_finished(&self) -> Result<Vec<Session>> {
        let mut finished: Vec<Session> = self
            .list_all()
            .await?
            .into_iter()
            .filter(Session::is_finished)
            .collect();
        finished.sort_by(ranking_order);
        Ok(finished)
    }
}
